//! Scrapes the weekly menu pages one after another and joins their days.
use std::time::Instant;

use reqwest::Client;
use url::Url;

use crate::{
    fetch,
    menu::DayRecord,
    parse::{ParseOptions, WeekMenu, DAYS_PER_WEEK},
};

/// Days of every source in source order. The first failing source aborts the whole run.
pub async fn scrape_menus(
    client: &Client,
    sources: &[Url],
    options: &ParseOptions,
) -> crate::Result<Vec<DayRecord>> {
    let mut days = Vec::with_capacity(sources.len() * DAYS_PER_WEEK);
    for url in sources {
        log::info!("Fetching menu page {url}");
        let start = Instant::now();
        let page = fetch::fetch_menu_page(client, url).await?;
        let week = WeekMenu::from_page(&page, options)?;
        log::info!(
            "Read the week {} to {} from {url} in {:?}",
            week.range().start(),
            week.range().end(),
            start.elapsed()
        );
        days.extend(week.into_days());
    }
    Ok(days)
}

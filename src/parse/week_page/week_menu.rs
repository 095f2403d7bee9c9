use chrono::NaiveDate;
use scraper::Html;

use super::{
    date_range::WeekRange,
    meal_grid::{MenuTable, TableLayout},
};
use crate::{
    menu::{self, DayRecord},
    parse::{Error, TextCleanup},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub layout: TableLayout,
    pub cleanup: TextCleanup,
    /// Today, used for the year of anchors that leave it out.
    pub reference: NaiveDate,
}

impl ParseOptions {
    pub fn new(cleanup: TextCleanup, reference: NaiveDate) -> Self {
        Self {
            layout: TableLayout::default(),
            cleanup,
            reference,
        }
    }
}

/// The seven days published on one menu page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekMenu {
    range: WeekRange,
    days: Vec<DayRecord>,
}

impl WeekMenu {
    pub fn from_page(page: &str, options: &ParseOptions) -> Result<Self, Error> {
        let html = Html::parse_document(page);
        Self::from_html(&html, options)
    }

    pub fn from_html(html: &Html, options: &ParseOptions) -> Result<Self, Error> {
        let table = MenuTable::from_html(html)?;
        let anchor = table.anchor_text(&options.layout)?;
        let range = WeekRange::from_anchor(&anchor, options.reference)?;
        log::debug!(
            "Anchor {anchor:?} gives the week {} to {}",
            range.start(),
            range.end()
        );
        let grid = table.meal_grid(&options.layout, options.cleanup)?;
        let days = menu::assemble(&range, grid);
        Ok(Self { range, days })
    }

    pub const fn range(&self) -> &WeekRange {
        &self.range
    }

    #[cfg(test)]
    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn into_days(self) -> Vec<DayRecord> {
        self.days
    }
}

#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod config;
mod error;
mod fetch;
mod menu;
mod output;
mod parse;
mod scrape_menus;
mod transpose;

use chrono::Utc;
use clap::Parser;
use reqwest::Client;

use crate::{
    config::Config, output::Destination, parse::ParseOptions, scrape_menus::scrape_menus,
};

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

async fn run(config: Config) -> Result<()> {
    let options = ParseOptions::new(config.cleanup, Utc::now().date_naive());
    let client = fetch::make_client();
    export(&client, &config, &options).await
}

/// Scrapes every source, then writes them all. A failed source leaves the destination untouched.
async fn export(client: &Client, config: &Config, options: &ParseOptions) -> Result<()> {
    let days = scrape_menus(client, &config.sources, options).await?;
    let destination = Destination::from(config.output.clone());
    destination.write(&days, config.date_format, config.pretty)?;
    log::info!("Wrote {} days to {destination}", days.len());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let config = Config::parse();
    if let Err(e) = run(config).await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

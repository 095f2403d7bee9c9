use std::time::Instant;

use reqwest::{Client, Error as RequestError};
use url::Url;

/// Menu pages are served as Latin-1 without declaring a charset.
static PAGE_CHARSET: &str = "iso-8859-1";

pub const DEFAULT_SOURCES: [&str; 2] = [
    "http://www.leijonacatering.fi/ruokalista_varuskunta.php",
    "http://www.leijonacatering.fi/ruokalista_varuskunta_seur.php",
];

pub fn make_client() -> Client {
    Client::builder()
        .gzip(true)
        .build()
        .expect("client creation should succeed")
}

/// Fetches a menu page and decodes it to UTF-8. A charset named by the server takes precedence.
pub async fn fetch_menu_page(client: &Client, url: &Url) -> Result<String, RequestError> {
    let start = Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text_with_charset(PAGE_CHARSET).await?;
    log::trace!("Got text of menu page in \t {:?}", start.elapsed());
    Ok(text)
}

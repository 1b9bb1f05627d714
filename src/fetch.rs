// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

/// Blocking client that sends `user_agent` on every request.
pub fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .build()
        .context("building HTTP client")
}

/// GET `url` once and return the raw body. Any transport failure or
/// non-success status is an error; there is no retry.
pub fn fetch_page(client: &Client, url: &Url) -> Result<Vec<u8>> {
    debug!("Fetching {}", url);
    let body = client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Non-success status {}", url))?
        .bytes()
        .with_context(|| format!("Reading body from {}", url))?;
    info!(%url, bytes = body.len(), "fetched page");
    Ok(body.to_vec())
}

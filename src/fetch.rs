// src/fetch.rs
use anyhow::{Context, Result};

use crate::config::FeedConfig;

/// Fetch the model page as text. One GET with a hard timeout, no retries;
/// the body is decoded with the declared charset (UTF-8 lossy otherwise).
pub async fn fetch_page(cfg: &FeedConfig) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(&cfg.user_agent)
        .timeout(cfg.fetch_timeout)
        .build()
        .context("building http client")?;

    let resp = client
        .get(cfg.page_url.clone())
        .send()
        .await
        .with_context(|| format!("fetching {}", cfg.page_url))?
        .error_for_status()
        .context("page returned an error status")?;

    resp.text().await.context("decoding page body")
}

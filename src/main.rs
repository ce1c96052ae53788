//! `feedgen` — Binary Entrypoint
//! Fetches the CENAOS model page, picks the main WRF maps and writes the
//! RSS document. One fetch, one parse pass, one write per invocation; any
//! failure aborts the run with a non-zero exit and a message on stderr.

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use cenaos_feedbot::config::FeedConfig;
use cenaos_feedbot::{classify, extract, feed, fetch};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    cenaos_feedbot::init_tracing();

    let cfg = FeedConfig::from_env()?;

    let html = fetch::fetch_page(&cfg).await?;
    let urls = extract::extract_image_urls(&html, &cfg.page_url);
    let picked = classify::classify(&urls);
    if picked.is_empty() {
        warn!("no relevant images detected (precip/tmax/tmin)");
    }

    let pub_date = Utc::now();
    let entries: Vec<(&str, &str)> = picked
        .entries()
        .map(|(role, url)| (role.title(), url))
        .collect();
    let xml = feed::assemble_feed(&entries, pub_date);
    feed::write_feed(&cfg.output_path, &xml)?;

    info!(path = %cfg.output_path.display(), items = entries.len(), "RSS generated");
    Ok(())
}

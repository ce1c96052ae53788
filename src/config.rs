// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use url::Url;

pub const PAGE_URL: &str = "https://cenaos.copeco.gob.hn/modelosnum.html";
pub const FEED_TITLE: &str = "CENAOS-COPECO | Modelos Numéricos (WRF)";
pub const FEED_DESC: &str =
    "Últimos mapas de precipitación, temperatura máxima y mínima del modelo WRF (CENAOS-COPECO).";
pub const FEED_LANGUAGE: &str = "es";
pub const OUTPUT_FILE: &str = "feed.xml";

const USER_AGENT: &str = "Mozilla/5.0";
const FETCH_TIMEOUT_SECS: u64 = 25;

/// Fixed album the bot sends, most recent forecast horizons first.
pub const ALBUM_IMAGES: &[&str] = &[
    "https://cenaos.copeco.gob.hn/productos/wrf/00/precipitacion/wrf24hrs.png",
    "https://cenaos.copeco.gob.hn/productos/wrf/00/precipitacion/wrf48hrs.png",
    "https://cenaos.copeco.gob.hn/productos/wrf/00/precipitacion/wrf72hrs.png",
];

/// Settings for one `feedgen` run, resolved once at startup.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub page_url: Url,
    pub output_path: PathBuf,
    pub fetch_timeout: Duration,
    pub user_agent: String,
}

impl FeedConfig {
    /// Built-in constants, overridable via `FEED_PAGE_URL` / `FEED_OUTPUT_PATH`.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("FEED_PAGE_URL").unwrap_or_else(|_| PAGE_URL.to_string());
        let page_url =
            Url::parse(&raw).with_context(|| format!("invalid FEED_PAGE_URL: {raw}"))?;
        let output_path = std::env::var("FEED_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(OUTPUT_FILE));

        Ok(Self {
            page_url,
            output_path,
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        })
    }
}

/// Settings for the `modelbot` process, resolved once at startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    /// Channel for the daily post; commands still work without it.
    pub channel_id: Option<String>,
    pub images: Vec<String>,
    pub page_url: String,
    pub post_hour: u32,
    pub post_minute: u32,
    pub tz: Tz,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("TELEGRAM_TOKEN")
            .context("TELEGRAM_TOKEN is not set in the environment")?;
        let channel_id = std::env::var("CHANNEL_ID").ok().filter(|s| !s.is_empty());

        let (post_hour, post_minute) = match std::env::var("POST_TIME") {
            Ok(v) => parse_post_time(&v).with_context(|| format!("invalid POST_TIME: {v}"))?,
            Err(_) => (14, 15),
        };
        let tz: Tz = match std::env::var("POST_TZ") {
            Ok(v) => v
                .parse()
                .map_err(|e| anyhow!("invalid POST_TZ {v}: {e}"))?,
            Err(_) => chrono_tz::America::Tegucigalpa,
        };

        Ok(Self {
            token,
            channel_id,
            images: ALBUM_IMAGES.iter().map(|s| s.to_string()).collect(),
            page_url: PAGE_URL.to_string(),
            post_hour,
            post_minute,
            tz,
        })
    }
}

/// Parse a `HH:MM` wall-clock time.
fn parse_post_time(s: &str) -> Result<(u32, u32)> {
    let (h, m) = s.split_once(':').context("expected HH:MM")?;
    let hour: u32 = h.trim().parse().context("parsing hour")?;
    let minute: u32 = m.trim().parse().context("parsing minute")?;
    anyhow::ensure!(hour < 24 && minute < 60, "hour or minute out of range");
    Ok((hour, minute))
}

//! `modelbot` — Binary Entrypoint
//! Telegram bot around the WRF model maps: `/start`, `/modelos`, and a
//! daily album post to the configured channel at a fixed civil time.

use anyhow::Result;

use cenaos_feedbot::bot;
use cenaos_feedbot::config::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    cenaos_feedbot::init_tracing();

    let cfg = BotConfig::from_env()?;
    bot::run(cfg).await
}

// src/bot/mod.rs
pub mod api;
pub mod scheduler;

use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::BotConfig;
use api::{BotApi, Message};

const SOURCE_TEXT: &str = "Fuente: CENAOS-COPECO";
const SOURCE_BUTTON: &str = "🌐 Ver página CENAOS";

const POLL_SECS: u64 = 50;
const POLL_RETRY_SECS: u64 = 5;

fn greeting(cfg: &BotConfig) -> String {
    format!(
        "👋 Envío las imágenes del WRF (Precipitación 24h, Tmax, Tmin).\n\
         Usa /modelos para recibirlas ahora. Publico al canal a las {:02}:{:02}.",
        cfg.post_hour, cfg.post_minute
    )
}

/// The album action: the fixed image list as one media group, then a
/// source-link follow-up. Shared by `/modelos` and the daily job.
pub async fn send_album(api: &BotApi, chat_id: &str, cfg: &BotConfig) -> Result<()> {
    api.send_media_group(chat_id, &cfg.images).await?;
    api.send_message_with_button(chat_id, SOURCE_TEXT, SOURCE_BUTTON, &cfg.page_url)
        .await
}

/// `/cmd`, `/cmd@BotName` and trailing arguments all resolve to `cmd`.
fn command_of(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let cmd = first.strip_prefix('/')?;
    cmd.split('@').next().filter(|c| !c.is_empty())
}

async fn handle_message(api: &BotApi, cfg: &BotConfig, msg: &Message) {
    let Some(text) = msg.text.as_deref() else {
        return;
    };
    let chat_id = msg.chat.id.to_string();

    let res = match command_of(text) {
        Some("start") => api.send_message(&chat_id, &greeting(cfg)).await,
        Some("modelos") => send_album(api, &chat_id, cfg).await,
        _ => return,
    };

    if let Err(e) = res {
        warn!(chat = %chat_id, "command failed: {e:#}");
    }
}

/// Long-poll loop plus the daily posting task. Transient poll errors are
/// logged and retried after a short sleep; the loop never exits on them.
pub async fn run(cfg: BotConfig) -> Result<()> {
    let api = BotApi::new(&cfg.token);
    scheduler::spawn_daily_post(BotApi::new(&cfg.token), cfg.clone());

    info!("bot started, polling for updates");
    let mut offset = 0i64;
    loop {
        let updates = match api.get_updates(offset, POLL_SECS).await {
            Ok(u) => u,
            Err(e) => {
                warn!("getUpdates failed: {e:#}");
                tokio::time::sleep(Duration::from_secs(POLL_RETRY_SECS)).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            if let Some(msg) = &update.message {
                handle_message(&api, &cfg, msg).await;
            }
        }
    }
}

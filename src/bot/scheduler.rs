// src/bot/scheduler.rs
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use chrono_tz::Tz;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{api::BotApi, send_album};
use crate::config::BotConfig;

/// Next occurrence of `hour:minute` civil time in `tz`, strictly after
/// `after`. A wall time skipped by a DST jump rolls over to the next day.
pub fn next_fire(after: DateTime<Utc>, hour: u32, minute: u32, tz: Tz) -> DateTime<Utc> {
    let mut date = after.with_timezone(&tz).date_naive();

    for _ in 0..3 {
        let candidate = date
            .and_hms_opt(hour, minute, 0)
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
            .map(|dt| dt.with_timezone(&Utc));
        if let Some(at) = candidate {
            if at > after {
                return at;
            }
        }
        date = date + ChronoDuration::days(1);
    }

    // Unreachable for a valid hour/minute.
    after + ChronoDuration::days(1)
}

/// Recurring daily post at the configured civil time. Without a configured
/// channel the tick is skipped; send failures are logged, never fatal.
pub fn spawn_daily_post(api: BotApi, cfg: BotConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let at = next_fire(now, cfg.post_hour, cfg.post_minute, cfg.tz);
            info!(fire_at = %at, tz = %cfg.tz, "daily post scheduled");

            let wait = (at - now).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            match &cfg.channel_id {
                Some(channel) => match send_album(&api, channel, &cfg).await {
                    Ok(()) => info!(channel = %channel, "daily album posted"),
                    Err(e) => warn!("daily post failed: {e:#}"),
                },
                None => debug!("CHANNEL_ID not set, skipping daily post"),
            }
        }
    })
}

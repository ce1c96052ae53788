use std::path::PathBuf;

use cenaos_feedbot::config::{BotConfig, FeedConfig};
use serial_test::serial;

fn clear_env() {
    for key in [
        "FEED_PAGE_URL",
        "FEED_OUTPUT_PATH",
        "TELEGRAM_TOKEN",
        "CHANNEL_ID",
        "POST_TIME",
        "POST_TZ",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn feed_config_uses_builtin_defaults() {
    clear_env();
    let cfg = FeedConfig::from_env().unwrap();
    assert_eq!(
        cfg.page_url.as_str(),
        "https://cenaos.copeco.gob.hn/modelosnum.html"
    );
    assert_eq!(cfg.output_path, PathBuf::from("feed.xml"));
}

#[test]
#[serial]
fn feed_config_honors_env_overrides() {
    clear_env();
    std::env::set_var("FEED_PAGE_URL", "https://example.com/modelos.html");
    std::env::set_var("FEED_OUTPUT_PATH", "/tmp/salida.xml");

    let cfg = FeedConfig::from_env().unwrap();
    assert_eq!(cfg.page_url.as_str(), "https://example.com/modelos.html");
    assert_eq!(cfg.output_path, PathBuf::from("/tmp/salida.xml"));
    clear_env();
}

#[test]
#[serial]
fn feed_config_rejects_an_invalid_page_url() {
    clear_env();
    std::env::set_var("FEED_PAGE_URL", "not a url");
    assert!(FeedConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn bot_config_requires_a_token() {
    clear_env();
    assert!(BotConfig::from_env().is_err());
}

#[test]
#[serial]
fn bot_config_defaults_to_the_tegucigalpa_afternoon_post() {
    clear_env();
    std::env::set_var("TELEGRAM_TOKEN", "123:abc");

    let cfg = BotConfig::from_env().unwrap();
    assert!(cfg.channel_id.is_none());
    assert_eq!((cfg.post_hour, cfg.post_minute), (14, 15));
    assert_eq!(cfg.tz, chrono_tz::America::Tegucigalpa);
    assert_eq!(cfg.images.len(), 3);
    clear_env();
}

#[test]
#[serial]
fn bot_config_reads_schedule_overrides() {
    clear_env();
    std::env::set_var("TELEGRAM_TOKEN", "123:abc");
    std::env::set_var("CHANNEL_ID", "@canal_cenaos");
    std::env::set_var("POST_TIME", "06:30");
    std::env::set_var("POST_TZ", "UTC");

    let cfg = BotConfig::from_env().unwrap();
    assert_eq!(cfg.channel_id.as_deref(), Some("@canal_cenaos"));
    assert_eq!((cfg.post_hour, cfg.post_minute), (6, 30));
    assert_eq!(cfg.tz, chrono_tz::UTC);
    clear_env();
}

#[test]
#[serial]
fn bot_config_rejects_bad_schedule_values() {
    clear_env();
    std::env::set_var("TELEGRAM_TOKEN", "123:abc");

    std::env::set_var("POST_TIME", "24:00");
    assert!(BotConfig::from_env().is_err());
    std::env::remove_var("POST_TIME");

    std::env::set_var("POST_TZ", "America/Nowhere");
    assert!(BotConfig::from_env().is_err());
    clear_env();
}

// src/feed.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rss::extension::{ExtensionBuilder, ExtensionMap};
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::config::{FEED_DESC, FEED_LANGUAGE, FEED_TITLE, PAGE_URL};

pub const MEDIA_NAMESPACE: &str = "http://search.yahoo.com/mrss/";

/// Best-guess content type from the URL's file extension, defaulting to
/// `image/jpeg` when the extension is unknown. Pure, no I/O.
pub fn guess_mime(url: &str) -> &'static str {
    let path = url.split(&['?', '#'][..]).next().unwrap_or(url);
    match path
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

/// RFC 2822 with a literal `GMT` zone, the convention feed readers expect.
fn format_rfc2822_gmt(dt: DateTime<Utc>) -> String {
    dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// One feed item for an assigned role. The item links back to the model
/// page; the image URL doubles as a non-permalink guid. The description
/// embeds the image for readers that ignore `media:content`, and the
/// title/URL are interpolated into that HTML unescaped.
pub fn build_item(title: &str, img_url: &str, pub_date: DateTime<Utc>) -> Item {
    let mime = guess_mime(img_url);
    let description = format!("<p>{title}</p><p><img src=\"{img_url}\" alt=\"{title}\"/></p>");

    let enclosure = EnclosureBuilder::default()
        .url(img_url)
        .mime_type(mime)
        .build();

    let media_content = ExtensionBuilder::default()
        .name("media:content")
        .attrs(BTreeMap::from([
            ("url".to_string(), img_url.to_string()),
            ("type".to_string(), mime.to_string()),
            ("medium".to_string(), "image".to_string()),
        ]))
        .build();
    let mut extensions = ExtensionMap::default();
    extensions.insert(
        "media".to_string(),
        BTreeMap::from([("content".to_string(), vec![media_content])]),
    );

    ItemBuilder::default()
        .title(Some(title.to_string()))
        .link(Some(PAGE_URL.to_string()))
        .guid(Some(
            GuidBuilder::default().value(img_url).permalink(false).build(),
        ))
        .pub_date(Some(format_rfc2822_gmt(pub_date)))
        .description(Some(description))
        .enclosure(Some(enclosure))
        .extensions(extensions)
        .build()
}

/// Assemble the complete document from `(title, image URL)` pairs sharing
/// one publication timestamp. `lastBuildDate` is sampled here, so it is
/// independent of (and never earlier than) the item timestamp. Zero pairs
/// still produce a well-formed channel.
pub fn assemble_feed(entries: &[(&str, &str)], pub_date: DateTime<Utc>) -> String {
    let items: Vec<Item> = entries
        .iter()
        .map(|(title, url)| build_item(title, url, pub_date))
        .collect();

    let channel = ChannelBuilder::default()
        .namespaces(BTreeMap::from([(
            "media".to_string(),
            MEDIA_NAMESPACE.to_string(),
        )]))
        .title(FEED_TITLE)
        .link(PAGE_URL)
        .description(FEED_DESC)
        .language(Some(FEED_LANGUAGE.to_string()))
        .last_build_date(Some(format_rfc2822_gmt(Utc::now())))
        .items(items)
        .build();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
        channel.to_string()
    )
}

/// The document is assembled fully in memory first; the write is the last
/// step of a run and replaces any previous output.
pub fn write_feed(path: &Path, xml: &str) -> Result<()> {
    fs::write(path, xml).with_context(|| format!("writing feed to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_covers_known_extensions_and_falls_back() {
        assert_eq!(guess_mime("https://x/a.png"), "image/png");
        assert_eq!(guess_mime("https://x/a.JPG"), "image/jpeg");
        assert_eq!(guess_mime("https://x/a.jpeg"), "image/jpeg");
        assert_eq!(guess_mime("https://x/a.webp"), "image/webp");
        assert_eq!(guess_mime("https://x/a.bmp"), "image/jpeg");
        assert_eq!(guess_mime("https://x/no-extension"), "image/jpeg");
    }

    #[test]
    fn mime_ignores_query_and_fragment() {
        assert_eq!(guess_mime("https://x/a.png?v=2"), "image/png");
        assert_eq!(guess_mime("https://x/a.webp#top"), "image/webp");
    }

    #[test]
    fn pub_dates_render_in_gmt() {
        let dt = DateTime::parse_from_rfc3339("2025-06-01T14:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_rfc2822_gmt(dt), "Sun, 01 Jun 2025 14:15:00 GMT");
    }
}

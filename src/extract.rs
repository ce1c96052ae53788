// src/extract.rs
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// `src` value of an `<img>` tag: first quoted string, single or double quotes.
/// A lexical scan, deliberately not a full HTML parse.
static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<img[^>]+src\s*=\s*["']([^"']+)["']"#).unwrap());

const KEEP_EXT: &[&str] = &[".png", ".jpg", ".jpeg", ".webp"];

/// Extract image URLs from `html` in document order, resolved against
/// `page_url` and filtered to common raster formats. Duplicates pass
/// through; malformed markup just yields fewer matches. Never fails.
pub fn extract_image_urls(html: &str, page_url: &Url) -> Vec<String> {
    IMG_SRC
        .captures_iter(html)
        .filter_map(|cap| page_url.join(&cap[1]).ok())
        .filter(|u| {
            let path = u.path().to_ascii_lowercase();
            KEEP_EXT.iter().any(|ext| path.ends_with(ext))
        })
        .map(|u| u.into())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Url {
        Url::parse("https://cenaos.copeco.gob.hn/modelosnum.html").unwrap()
    }

    #[test]
    fn relative_srcs_resolve_against_the_page() {
        let html = r#"<img src="productos/wrf/precip24.png">"#;
        assert_eq!(
            extract_image_urls(html, &page()),
            vec!["https://cenaos.copeco.gob.hn/productos/wrf/precip24.png"]
        );
    }

    #[test]
    fn single_quotes_and_mixed_case_tags_match() {
        let html = "<IMG class='map' SRC='maps/tmax.JPG'/>";
        assert_eq!(
            extract_image_urls(html, &page()),
            vec!["https://cenaos.copeco.gob.hn/maps/tmax.JPG"]
        );
    }

    #[test]
    fn non_image_extensions_are_dropped() {
        let html = r#"<img src="logo.svg"><img src="map.webp"><img src="doc.pdf">"#;
        assert_eq!(
            extract_image_urls(html, &page()),
            vec!["https://cenaos.copeco.gob.hn/map.webp"]
        );
    }
}

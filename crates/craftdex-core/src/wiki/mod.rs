//! Wiki page scanning for block render images.
//!
//! Block pages on the wiki carry their canonical render inside an
//! "infobox image area" container. The scan is a two-state automaton over
//! the tag stream from [`html::Tokenizer`]:
//!
//! - `outside`: waiting for a `<div>` whose class marks the image area;
//!   entering it starts nesting depth 0.
//! - `inside(depth)`: nested `<div>` openers increment depth, `</div>`
//!   closers decrement it; depth dropping below zero leaves the area.
//!
//! While inside, the first `<img>` whose alt text matches the block's file
//! name pattern wins; later images are ignored even though the rest of the
//! page is still tokenized.

pub mod html;

use regex::Regex;
use tracing::{debug, trace};

use html::{Token, Tokenizer};

/// Base URL for wiki page fetches
pub const WIKI_URL_BASE: &str = "https://minecraft.fandom.com/wiki";

/// Pixel size requested for block render thumbnails
pub const BLOCK_ICON_SIZE: u32 = 48;

/// Class marker for the infobox image area container
const IMAGE_AREA_CLASS: &str = "infobox-imagearea";

/// An image found in a page's infobox image area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoboxImage {
    /// Source URL as written in the markup (`data-src` preferred over `src`)
    pub url: String,
    /// File extension captured from the alt text (`png` or `gif`)
    pub ext: String,
}

/// Builds the alt-text pattern for a block's render file name.
///
/// Wiki file names are the display name optionally followed by a floor
/// variant, an orientation or data-value qualifier, and edition/version
/// tags, then the image extension. Anchored at the start of the alt text.
fn alt_pattern(block_name: &str) -> Regex {
    let pattern = format!(
        r"^{}( \(floor\))?( \((UD|N|S|\d+)\))?( [JB]E\d+(-[a-z]\d)?)*\.(?P<ext>png|gif)",
        regex::escape(block_name)
    );
    // The pattern is built from a fixed template plus an escaped literal,
    // so compilation cannot fail.
    Regex::new(&pattern).expect("alt pattern is always valid")
}

/// Returns the URL of a page's wiki article for a display name
pub fn page_url(name: &str) -> String {
    format!("{}/{}", WIKI_URL_BASE, name.replace(' ', "_"))
}

/// Rewrites a wiki image URL's trailing size segment to the thumbnail size
pub fn thumbnail_url(image_url: &str, size: u32) -> String {
    match image_url.rsplit_once('/') {
        Some((base, _)) => format!("{}/{}", base, size),
        None => format!("{}/{}", image_url, size),
    }
}

/// Scans page markup for the block's render image inside the infobox image
/// area. Returns `None` when the page has no matching image (non-fatal for
/// the caller).
pub fn find_infobox_image(page: &str, block_name: &str) -> Option<InfoboxImage> {
    let pattern = alt_pattern(block_name);
    let mut area_depth: Option<i32> = None;
    let mut found: Option<InfoboxImage> = None;

    for token in Tokenizer::new(page) {
        match token {
            Token::Start(tag) if tag.is("div") => {
                match area_depth {
                    Some(ref mut depth) => *depth += 1,
                    None => {
                        if tag
                            .attr("class")
                            .is_some_and(|class| class.contains(IMAGE_AREA_CLASS))
                        {
                            trace!("entering infobox image area");
                            area_depth = Some(0);
                        }
                    }
                }
            }
            Token::Start(tag) if tag.is("img") && area_depth.is_some() && found.is_none() => {
                let alt = tag.attr("alt").unwrap_or("");
                if let Some(captures) = pattern.captures(alt) {
                    let url = tag.attr("data-src").or_else(|| tag.attr("src"));
                    if let Some(url) = url {
                        debug!("found render for '{}': {}", block_name, url);
                        found = Some(InfoboxImage {
                            url: url.to_string(),
                            ext: captures["ext"].to_string(),
                        });
                    }
                }
            }
            Token::End(name) if name.eq_ignore_ascii_case("div") => {
                if let Some(depth) = area_depth {
                    if depth == 0 {
                        area_depth = None;
                    } else {
                        area_depth = Some(depth - 1);
                    }
                }
            }
            _ => {}
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(body: &str) -> String {
        format!(
            r#"<html><body><div class="infobox"><div class="infobox-imagearea animated-container">{}</div></div></body></html>"#,
            body
        )
    }

    #[test]
    fn test_finds_plain_image() {
        let html = page(r#"<img alt="Stone.png" src="https://img.example/Stone.png/revision/latest/scale-to-width-down/160">"#);
        let image = find_infobox_image(&html, "Stone").unwrap();
        assert_eq!(image.ext, "png");
        assert!(image.url.ends_with("/160"));
    }

    #[test]
    fn test_prefers_lazy_load_source() {
        let html = page(r#"<img alt="Stone.png" src="data:image/gif;base64,stub" data-src="https://img.example/Stone.png/160">"#);
        let image = find_infobox_image(&html, "Stone").unwrap();
        assert_eq!(image.url, "https://img.example/Stone.png/160");
    }

    #[test]
    fn test_alt_qualifiers() {
        for alt in [
            "Torch (floor).png",
            "Lever (UD).png",
            "Candle (4).png",
            "Grass Block JE7-a1.png",
            "Chest (N) JE2 BE2.gif",
        ] {
            let name = alt.split(" (").next().unwrap().split(" JE").next().unwrap();
            let html = page(&format!(r#"<img alt="{}" src="https://img.example/x/64">"#, alt));
            assert!(
                find_infobox_image(&html, name).is_some(),
                "no match for {:?}",
                alt
            );
        }
    }

    #[test]
    fn test_rejects_other_blocks() {
        let html = page(r#"<img alt="Cobblestone.png" src="https://img.example/c/64">"#);
        assert!(find_infobox_image(&html, "Stone").is_none());
    }

    #[test]
    fn test_ignores_images_outside_area() {
        let html = r#"<div class="gallery"><img alt="Stone.png" src="https://img.example/s/64"></div>"#;
        assert!(find_infobox_image(html, "Stone").is_none());
    }

    #[test]
    fn test_area_exit_by_depth() {
        let html = r#"
            <div class="infobox-imagearea"><div><span></span></div></div>
            <div><img alt="Stone.png" src="https://img.example/late/64"></div>
        "#;
        assert!(find_infobox_image(html, "Stone").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let html = page(concat!(
            r#"<img alt="Stone.png" src="https://img.example/first/64">"#,
            r#"<img alt="Stone.png" src="https://img.example/second/64">"#
        ));
        let image = find_infobox_image(&html, "Stone").unwrap();
        assert_eq!(image.url, "https://img.example/first/64");
    }

    #[test]
    fn test_thumbnail_url_rewrite() {
        assert_eq!(
            thumbnail_url("https://img.example/Stone.png/revision/160", 48),
            "https://img.example/Stone.png/revision/48"
        );
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("Oak Planks"),
            "https://minecraft.fandom.com/wiki/Oak_Planks"
        );
    }
}

//! Centralized output filename convention.
//!
//! Every page document is named `{page}-{framing}-{lang}.html`, with the framing
//! segment omitted when the build has no framing axis:
//!
//! - `biography-en.html` → Biography, English, no framing
//! - `analysis-blue-es.html` → Analysis, Spanish, blue framing
//! - `index-balanced-en.html` → Home, English, balanced framing
//!
//! The root `index.html` is the redirect document and is not a page file.

use crate::axis::{AxisSelector, Framing, Lang, Page};

/// Filename of the root redirect document.
pub const REDIRECT_FILENAME: &str = "index.html";

/// Filename the stylesheet is copied to, and the href every page links.
pub const STYLESHEET_FILENAME: &str = "style.css";

/// Filename of `page` rendered under `axis`.
pub fn page_filename(page: Page, axis: AxisSelector) -> String {
    match axis.framing {
        Some(framing) => format!(
            "{}-{}-{}.html",
            page.slug(),
            framing.key(),
            axis.lang.code()
        ),
        None => format!("{}-{}.html", page.slug(), axis.lang.code()),
    }
}

/// Result of parsing a page filename like `analysis-blue-es.html`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFilename {
    pub page: Page,
    pub axis: AxisSelector,
}

/// Parse a page filename back into its page and axis combination.
///
/// Returns `None` for anything that is not a page file, including the root
/// redirect and the stylesheet.
pub fn parse_page_filename(name: &str) -> Option<ParsedFilename> {
    let stem = name.strip_suffix(".html")?;
    let parts: Vec<&str> = stem.split('-').collect();
    let (slug, framing, lang) = match parts.as_slice() {
        [slug, lang] => (*slug, None, *lang),
        [slug, framing, lang] => (*slug, Some(parse_framing(framing)?), *lang),
        _ => return None,
    };
    Some(ParsedFilename {
        page: Page::from_slug(slug)?,
        axis: AxisSelector::new(parse_lang(lang)?, framing),
    })
}

fn parse_lang(code: &str) -> Option<Lang> {
    Lang::ALL.into_iter().find(|l| l.code() == code)
}

fn parse_framing(key: &str) -> Option<Framing> {
    Framing::ALL.into_iter().find(|f| f.key() == key)
}

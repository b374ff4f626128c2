//! Shared test utilities for the nullius test suite.
//!
//! Provides content fixtures, config builders, and small HTML inspection
//! helpers used across the renderer and build tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = content();
//! let config = config_with_framings(&[Framing::Red, Framing::Blue]);
//! let files = render_site(&config, &content);
//!
//! let page = find_file(&files, "analysis-red-en.html");
//! assert!(hrefs(&page.html).contains(&"analysis-red-es.html".to_string()));
//! ```

use serde::Deserialize;

use crate::axis::{AxisShape, Framing, Lang};
use crate::config::SiteConfig;
use crate::content::{ContentNode, ContentStore, STORE_TOML};
use crate::generate::RenderedFile;

// =========================================================================
// Content fixtures
// =========================================================================

/// The embedded content store. Panics if it fails to load.
pub fn content() -> ContentStore {
    ContentStore::embedded().unwrap()
}

/// The embedded store's TOML source with an edit applied.
pub fn embedded_source_with(edit: impl FnOnce(&str) -> String) -> String {
    edit(STORE_TOML)
}

/// Parse a single content node from a snippet that defines `node`.
///
/// ```rust
/// let node = parse_node(r#"node = { en = "Home", es = "Inicio" }"#);
/// ```
pub fn parse_node(snippet: &str) -> ContentNode {
    #[derive(Deserialize)]
    struct Wrapper {
        node: ContentNode,
    }
    toml::from_str::<Wrapper>(snippet).unwrap().node
}

// =========================================================================
// Config fixtures
// =========================================================================

/// English and Spanish over the given framings.
pub fn shape(framings: &[Framing]) -> AxisShape {
    AxisShape::new(vec![Lang::En, Lang::Es], framings.to_vec())
}

/// Stock config with the framing axis replaced.
pub fn config_with_framings(framings: &[Framing]) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.axes.framings = framings.to_vec();
    config
}

// =========================================================================
// Rendered output
// =========================================================================

/// Find a rendered file by name. Panics with the available names if missing.
pub fn find_file<'a>(files: &'a [RenderedFile], name: &str) -> &'a RenderedFile {
    files.iter().find(|f| f.filename == name).unwrap_or_else(|| {
        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        panic!("file '{name}' not found, have: {names:?}")
    })
}

/// Every `href="..."` value in a document, in order.
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

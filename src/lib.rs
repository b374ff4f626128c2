//! # Nullius
//!
//! A static site generator for the *Nullius in Verba* endorsement analysis.
//! The same five pages are rendered once for every language and, optionally,
//! every ideological framing, producing a directory of plain HTML files.
//!
//! # Architecture: Resolve, Assemble, Write
//!
//! ```text
//! 1. Load      store.toml (compiled in) → ContentStore     site.toml → SiteConfig
//! 2. Render    (framing × language × page) → Resolver → page generator → shell
//! 3. Write     dist/{page}-{framing}-{lang}.html + index.html + style.css
//! ```
//!
//! Rendering is pure: every document is a function of the content store and one
//! axis combination, so tests exercise whole pages without touching the
//! filesystem. Only [`generate::generate`] performs I/O.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`axis`] | Closed language, framing, and page enums; the axis cross-product of a build |
//! | [`content`] | The embedded content store: node shapes, records, load-time validation |
//! | [`resolve`] | Total text resolution of a content node under one axis combination |
//! | [`layout`] | Document shell: head, header with switchers, nav, footer, redirect document |
//! | [`pages`] | One body generator per page, claim matrix cards, dual-framing fragments |
//! | [`generate`] | Build driver: render every combination, prepare and write the output directory |
//! | [`naming`] | `{page}-{framing}-{lang}.html` filename convention and its parser |
//! | [`config`] | Optional `site.toml` loading, layering, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Engine, Configured Axes
//!
//! Unframed, red/blue, and balanced/conservative/progressive sites are the same
//! pipeline run with a different `[axes]` table. The framing enum is closed, so
//! every combination a build can request is known at compile time and the
//! resolver's fallback paths are ordinary match arms.
//!
//! ## Content As Data, Not Globals
//!
//! Site text lives in `src/content/store.toml`, embedded with `include_str!`
//! and deserialized once. Generators receive the [`content::ContentStore`] by
//! reference through a [`layout::PageContext`].
//!
//! ## Missing Text Renders Blank
//!
//! Resolution never fails. A node with no usable translation becomes the empty
//! string, so a content gap cannot abort a build. Structural problems in the
//! store (unknown keys, empty framed views, duplicate claim ids) are still load
//! errors.
//!
//! ## Trusted Markup
//!
//! Content is authored, not user-submitted. Resolved strings are inserted into
//! Maud templates unescaped, and prose bodies go through CommonMark with inline
//! HTML passed through.

pub mod axis;
pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod naming;
pub mod output;
pub mod pages;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;

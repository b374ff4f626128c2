//! Site build driver.
//!
//! Renders every [`Page`] under every axis combination of the configured
//! [`AxisShape`](crate::axis::AxisShape), then writes the documents to the
//! output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Meta-refresh to the default home page
//! ├── style.css                  # Copied stylesheet (if the source exists)
//! ├── index-balanced-en.html     # {page}-{framing}-{lang}.html
//! ├── biography-balanced-en.html
//! ├── ...
//! └── sources-progressive-es.html
//! ```
//!
//! Without a framing axis the framing segment is dropped (`index-en.html`).
//!
//! ## Failure Policy
//!
//! A prior output directory is removed before anything is written. Failing to
//! remove or recreate it aborts the build with [`GenerateError::Prepare`]. A
//! missing stylesheet is skipped silently.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Rendering is split from writing: [`render_site`] is pure and returns the
//! documents, [`generate`] persists them.

use crate::axis::Page;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::layout::{PageContext, redirect_document};
use crate::naming::{REDIRECT_FILENAME, STYLESHEET_FILENAME, page_filename};
use crate::pages::render_page;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot prepare output directory {}: {source}", .path.display())]
    Prepare {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One output document, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub filename: String,
    pub html: String,
}

/// What a build wrote.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub languages: usize,
    /// Zero when the build has no framing axis.
    pub framings: usize,
    pub pages_per_axis: usize,
    /// Page documents in write order. Excludes the redirect.
    pub page_files: Vec<String>,
    pub redirect_file: String,
    pub stylesheet_copied: bool,
}

/// Render every page document plus the root redirect.
///
/// Order is deterministic: framing-major, then language, then pages in
/// navigation order, with the redirect last.
pub fn render_site(config: &SiteConfig, content: &ContentStore) -> Vec<RenderedFile> {
    let shape = config.axis_shape();
    let mut files = Vec::new();

    for axis in shape.selectors() {
        for page in Page::ALL {
            let ctx = PageContext::new(content, &shape, page, axis);
            files.push(RenderedFile {
                filename: page_filename(page, axis),
                html: render_page(&ctx).into_string(),
            });
        }
    }

    let target = page_filename(Page::Home, config.default_axis());
    files.push(RenderedFile {
        filename: REDIRECT_FILENAME.to_string(),
        html: redirect_document(&target).into_string(),
    });

    files
}

/// Build the site into `config.output_dir`, replacing whatever was there.
pub fn generate(config: &SiteConfig, content: &ContentStore) -> Result<BuildReport, GenerateError> {
    let output_dir = PathBuf::from(&config.output_dir);
    prepare_output_dir(&output_dir)?;

    let files = render_site(config, content);
    let mut page_files = Vec::with_capacity(files.len());
    for file in &files {
        fs::write(output_dir.join(&file.filename), &file.html)?;
        if file.filename != REDIRECT_FILENAME {
            page_files.push(file.filename.clone());
        }
    }

    let stylesheet_copied = copy_stylesheet(Path::new(&config.stylesheet), &output_dir)?;

    Ok(BuildReport {
        output_dir,
        languages: config.axes.languages.len(),
        framings: config.axes.framings.len(),
        pages_per_axis: Page::ALL.len(),
        page_files,
        redirect_file: REDIRECT_FILENAME.to_string(),
        stylesheet_copied,
    })
}

/// Remove a prior output directory and create an empty one.
fn prepare_output_dir(dir: &Path) -> Result<(), GenerateError> {
    if dir.is_dir() {
        fs::remove_dir_all(dir).map_err(|source| prepare_error(dir, source))?;
    }
    fs::create_dir_all(dir).map_err(|source| prepare_error(dir, source))
}

fn prepare_error(dir: &Path, source: std::io::Error) -> GenerateError {
    GenerateError::Prepare {
        path: dir.to_path_buf(),
        source,
    }
}

/// Copy the stylesheet if it exists. Returns whether it was copied.
fn copy_stylesheet(src: &Path, output_dir: &Path) -> Result<bool, GenerateError> {
    if !src.is_file() {
        return Ok(false);
    }
    fs::copy(src, output_dir.join(STYLESHEET_FILENAME))?;
    Ok(true)
}

// ============================================================================
// Tests
// ============================================================================

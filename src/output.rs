//! CLI output formatting.
//!
//! Formatting is split from printing: `format_*` functions are pure and return
//! the text, `print_*` wrappers write it to stdout. A successful build prints a
//! single summary line:
//!
//! ```text
//! Built to dist (2 langs × 5 pages = 10 pages, + index.html)
//! Built to dist (2 langs × 2 framings × 5 pages = 20 pages, + index.html, style.css)
//! ```

use crate::generate::BuildReport;

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// One-line summary of a finished build.
pub fn format_build_summary(report: &BuildReport) -> String {
    let mut factors = vec![plural(report.languages, "lang", "langs")];
    if report.framings > 0 {
        factors.push(plural(report.framings, "framing", "framings"));
    }
    factors.push(plural(report.pages_per_axis, "page", "pages"));

    let mut extras = vec![report.redirect_file.clone()];
    if report.stylesheet_copied {
        extras.push(crate::naming::STYLESHEET_FILENAME.to_string());
    }

    format!(
        "Built to {} ({} = {}, + {})",
        report.output_dir.display(),
        factors.join(" × "),
        plural(report.page_files.len(), "page", "pages"),
        extras.join(", ")
    )
}

pub fn print_build_summary(report: &BuildReport) {
    println!("{}", format_build_summary(report));
}

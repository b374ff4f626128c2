//! Site configuration module.
//!
//! Handles loading, validating, and layering `site.toml`. The file is optional:
//! without it the stock defaults apply, which build the two-language site with
//! no framing axis.
//!
//! ## Config File Location
//!
//! Place `site.toml` in the directory the build is run from:
//!
//! ```text
//! project/
//! ├── site.toml          # Optional overrides
//! └── static/
//!     └── style.css      # Copied to the output when present
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "dist"               # Wiped and recreated on every build
//! stylesheet = "static/style.css"   # Copied to <output_dir>/style.css if it exists
//!
//! [axes]
//! languages = ["en", "es"]          # Enabled languages, in toggle order
//! framings = []                     # Enabled framings; empty = no framing axis
//! default_language = "en"           # Language the root index.html redirects to
//! # default_framing = "balanced"    # Framing the redirect targets (default: first framing)
//! ```
//!
//! ## Framings
//!
//! | Key            | Renders                                          |
//! |----------------|--------------------------------------------------|
//! | `balanced`     | conservative and progressive views side by side  |
//! | `conservative` | the conservative view                            |
//! | `progressive`  | the progressive view                             |
//! | `red`          | the red view, else the conservative view         |
//! | `blue`         | the blue view, else the progressive view         |
//!
//! Config files are sparse. Unknown keys are rejected to catch typos early.

use crate::axis::{AxisSelector, AxisShape, Framing, Lang};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::hash::Hash;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the optional config file read from the project root.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Output directory. Removed and recreated by every build.
    pub output_dir: String,
    /// Stylesheet source, copied verbatim when it exists.
    pub stylesheet: String,
    /// Which languages and framings to build.
    pub axes: AxesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
            stylesheet: "static/style.css".to_string(),
            axes: AxesConfig::default(),
        }
    }
}

/// The language × framing cross-product to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxesConfig {
    pub languages: Vec<Lang>,
    /// Empty means the build has no framing axis.
    pub framings: Vec<Framing>,
    pub default_language: Lang,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_framing: Option<Framing>,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            languages: vec![Lang::En, Lang::Es],
            framings: Vec::new(),
            default_language: Lang::En,
            default_framing: None,
        }
    }
}

impl SiteConfig {
    /// Validate the axes and output location.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let axes = &self.axes;
        if axes.languages.is_empty() {
            return Err(ConfigError::Validation(
                "axes.languages must not be empty".into(),
            ));
        }
        if has_duplicates(&axes.languages) {
            return Err(ConfigError::Validation(
                "axes.languages must not repeat a language".into(),
            ));
        }
        if has_duplicates(&axes.framings) {
            return Err(ConfigError::Validation(
                "axes.framings must not repeat a framing".into(),
            ));
        }
        if !axes.languages.contains(&axes.default_language) {
            return Err(ConfigError::Validation(format!(
                "axes.default_language '{}' is not in axes.languages",
                axes.default_language.code()
            )));
        }
        if let Some(framing) = axes.default_framing {
            if axes.framings.is_empty() {
                return Err(ConfigError::Validation(
                    "axes.default_framing requires a non-empty axes.framings".into(),
                ));
            }
            if !axes.framings.contains(&framing) {
                return Err(ConfigError::Validation(format!(
                    "axes.default_framing '{}' is not in axes.framings",
                    framing.key()
                )));
            }
        }
        if !is_contained_subdir(Path::new(self.output_dir.trim())) {
            return Err(ConfigError::Validation(format!(
                "output_dir '{}' would wipe the working directory or a parent of it",
                self.output_dir
            )));
        }
        Ok(())
    }

    /// Enabled languages and framings, in config order.
    pub fn axis_shape(&self) -> AxisShape {
        AxisShape::new(self.axes.languages.clone(), self.axes.framings.clone())
    }

    /// Axis combination the root redirect points at.
    pub fn default_axis(&self) -> AxisSelector {
        let framing = self
            .axes
            .default_framing
            .or_else(|| self.axes.framings.first().copied());
        AxisSelector::new(self.axes.default_language, framing)
    }
}

/// True when removing `path` cannot take the working directory or an ancestor
/// with it: at least one named component and no `..`.
fn is_contained_subdir(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::ParentDir => return false,
            Component::Normal(_) => named = true,
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    named
}

fn has_duplicates<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    !items.iter().all(|item| seen.insert(item))
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key. Any other overlay value, arrays included, replaces
/// the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `site.toml` with every key at its default.
pub fn stock_config_toml() -> &'static str {
    r##"# Nullius Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Output directory. Removed and recreated on every build.
output_dir = "dist"

# Stylesheet copied to <output_dir>/style.css. Skipped if missing.
stylesheet = "static/style.css"

# ---------------------------------------------------------------------------
# Axes
# ---------------------------------------------------------------------------
# Every page is rendered once per (framing, language) combination and named
# {page}-{framing}-{language}.html, or {page}-{language}.html when no
# framings are enabled.
#
# Framings: balanced, conservative, progressive, red, blue
#   balanced shows the conservative and progressive views side by side.
#   red and blue fall back to the conservative and progressive views.
[axes]
languages = ["en", "es"]
framings = []
default_language = "en"

# Framing the root index.html redirects to. Defaults to the first framing.
# default_framing = "balanced"
"##
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(tmp: &TempDir, body: &str) {
        fs::write(tmp.path().join(CONFIG_FILENAME), body).unwrap();
    }

    #[test]
    fn default_config_is_two_languages_unframed() {
        let config = SiteConfig::default();
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.stylesheet, "static/style.css");
        assert_eq!(config.axes.languages, vec![Lang::En, Lang::Es]);
        assert!(config.axes.framings.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let config: SiteConfig = toml::from_str(
            r#"
[axes]
framings = ["red", "blue"]
"#,
        )
        .unwrap();
        assert_eq!(config.axes.framings, vec![Framing::Red, Framing::Blue]);
        // Unspecified values keep their defaults
        assert_eq!(config.axes.languages, vec![Lang::En, Lang::Es]);
        assert_eq!(config.output_dir, "dist");
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("outptu_dir = \"out\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_framing_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[axes]
framings = ["green"]
"#,
        );
        assert!(result.is_err());
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_rejects_empty_languages() {
        let mut config = SiteConfig::default();
        config.axes.languages.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_duplicate_language() {
        let mut config = SiteConfig::default();
        config.axes.languages = vec![Lang::En, Lang::En];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_framing() {
        let mut config = SiteConfig::default();
        config.axes.framings = vec![Framing::Red, Framing::Red];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_disabled_default_language() {
        let mut config = SiteConfig::default();
        config.axes.languages = vec![Lang::Es];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_language"));
    }

    #[test]
    fn validate_rejects_default_framing_without_axis() {
        let mut config = SiteConfig::default();
        config.axes.default_framing = Some(Framing::Balanced);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_disabled_default_framing() {
        let mut config = SiteConfig::default();
        config.axes.framings = vec![Framing::Red, Framing::Blue];
        config.axes.default_framing = Some(Framing::Balanced);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("balanced"));
    }

    #[test]
    fn validate_rejects_dangerous_output_dir() {
        for dir in ["", ".", "/", "  ", "./", "..", "../dist", "dist/..", "./."] {
            let mut config = SiteConfig::default();
            config.output_dir = dir.to_string();
            assert!(config.validate().is_err(), "accepted output_dir {dir:?}");
        }
    }

    #[test]
    fn validate_accepts_nested_output_dir() {
        for dir in ["dist", "./public", "build/site/", "/tmp/site"] {
            let mut config = SiteConfig::default();
            config.output_dir = dir.to_string();
            assert!(config.validate().is_ok(), "rejected output_dir {dir:?}");
        }
    }

    // =========================================================================
    // axis tests
    // =========================================================================

    #[test]
    fn default_axis_without_framings() {
        let config = SiteConfig::default();
        assert_eq!(config.default_axis(), AxisSelector::new(Lang::En, None));
    }

    #[test]
    fn default_axis_uses_first_framing() {
        let mut config = SiteConfig::default();
        config.axes.framings = vec![Framing::Balanced, Framing::Conservative];
        assert_eq!(
            config.default_axis(),
            AxisSelector::new(Lang::En, Some(Framing::Balanced))
        );
    }

    #[test]
    fn default_axis_honors_default_framing() {
        let mut config = SiteConfig::default();
        config.axes.framings = vec![Framing::Red, Framing::Blue];
        config.axes.default_framing = Some(Framing::Blue);
        config.axes.default_language = Lang::Es;
        assert_eq!(
            config.default_axis(),
            AxisSelector::new(Lang::Es, Some(Framing::Blue))
        );
    }

    #[test]
    fn axis_shape_follows_config_order() {
        let mut config = SiteConfig::default();
        config.axes.languages = vec![Lang::Es, Lang::En];
        config.axes.framings = vec![Framing::Blue, Framing::Red];
        let shape = config.axis_shape();
        assert_eq!(shape.languages, vec![Lang::Es, Lang::En]);
        assert_eq!(shape.framings, vec![Framing::Blue, Framing::Red]);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.output_dir, "dist");
        assert!(config.axes.framings.is_empty());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        write_config(
            &tmp,
            r#"
output_dir = "public"

[axes]
framings = ["balanced", "conservative", "progressive"]
"#,
        );
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.output_dir, "public");
        assert_eq!(config.axes.framings.len(), 3);
        // Unspecified values should be defaults
        assert_eq!(config.stylesheet, "static/style.css");
        assert_eq!(config.axes.default_language, Lang::En);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "this is not valid toml [[[");
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_unknown_key_is_error() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[axes]\nlanguage = [\"en\"]\n");
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates() {
        let tmp = TempDir::new().unwrap();
        write_config(&tmp, "[axes]\nlanguages = [\"es\"]\n");
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [4]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["xs"].as_array().map(Vec::len), Some(1));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let _: toml::Value = toml::from_str(stock_config_toml()).unwrap();
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.output_dir, defaults.output_dir);
        assert_eq!(config.stylesheet, defaults.stylesheet);
        assert_eq!(config.axes.languages, defaults.axes.languages);
        assert_eq!(config.axes.framings, defaults.axes.framings);
        assert_eq!(config.axes.default_language, defaults.axes.default_language);
        assert_eq!(config.axes.default_framing, None);
    }

    #[test]
    fn stock_defaults_value_deserializes() {
        let config: SiteConfig = stock_defaults_value().try_into().unwrap();
        assert!(config.validate().is_ok());
    }
}

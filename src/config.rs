//! Site configuration module.
//!
//! Handles loading, validating, and merging `portfolio.toml`. Stock defaults
//! are overridden by whatever the user file sets; everything else keeps its
//! default value.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! store_path = ".portfolio/settings.json"  # Settings store (relative to the project root)
//! assets_dir = "assets"                    # Copied into the output as-is
//!
//! [site]
//! brand = "Harita's journey"   # Shown in the header
//! owner = "Harita Anbuvelan"   # Shown in the footer
//!
//! [theme]
//! paper = "#faf6f0"
//! ink = "#2b2b2b"
//! accent = "#b08968"
//! accent_dark = "#7f5d3b"
//! gold = "#c8a76a"
//!
//! [preview]
//! max_rows = 8                 # Rows shown in CSV previews
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project root.
pub const CONFIG_FILENAME: &str = "portfolio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `portfolio.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Path of the JSON settings store, relative to the project root.
    pub store_path: String,
    /// Directory of static assets (images, CSVs), relative to the project root.
    pub assets_dir: String,
    /// Header and footer text.
    pub site: SiteConfig,
    /// Palette.
    pub theme: ThemeConfig,
    /// CSV preview settings.
    pub preview: PreviewConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            store_path: ".portfolio/settings.json".to_string(),
            assets_dir: "assets".to_string(),
            site: SiteConfig::default(),
            theme: ThemeConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "store_path must not be empty".into(),
            ));
        }
        if self.preview.max_rows == 0 {
            return Err(ConfigError::Validation(
                "preview.max_rows must be at least 1".into(),
            ));
        }
        for (key, value) in self.theme.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "theme.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Header and footer text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub brand: String,
    pub owner: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Harita's journey".to_string(),
            owner: "Harita Anbuvelan".to_string(),
        }
    }
}

/// Colors of the paper theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Page background.
    pub paper: String,
    /// Body text.
    pub ink: String,
    pub accent: String,
    /// Headings, section titles, date badges.
    pub accent_dark: String,
    /// Borders, rules, timeline dots.
    pub gold: String,
}

impl ThemeConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("paper", self.paper.as_str()),
            ("ink", self.ink.as_str()),
            ("accent", self.accent.as_str()),
            ("accent_dark", self.accent_dark.as_str()),
            ("gold", self.gold.as_str()),
        ]
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            paper: "#faf6f0".to_string(),
            ink: "#2b2b2b".to_string(),
            accent: "#b08968".to_string(),
            accent_dark: "#7f5d3b".to_string(),
            gold: "#c8a76a".to_string(),
        }
    }
}

/// CSV preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Maximum data rows shown under the header.
    pub max_rows: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self { max_rows: 8 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PortfolioConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and
/// validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<PortfolioConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PortfolioConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<PortfolioConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_none() {
        log::debug!("no config at {}, using defaults", path.display());
    }
    resolve_config(overlay)
}

/// Load `portfolio.toml` from the project root.
pub fn load_config(root: &Path) -> Result<PortfolioConfig, ConfigError> {
    load_config_file(&root.join(CONFIG_FILENAME))
}

/// Returns a fully-commented stock `portfolio.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Portfolio Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# JSON file holding the editable settings (name, resume lines, ...),
# relative to the project root. Edit it with `notebook-portfolio settings set`.
store_path = ".portfolio/settings.json"

# Static assets (headshot, figures, CSV files) copied into the output.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Header and footer
# ---------------------------------------------------------------------------
[site]
brand = "Harita's journey"
owner = "Harita Anbuvelan"

# ---------------------------------------------------------------------------
# Theme colors
# ---------------------------------------------------------------------------
[theme]
paper = "#faf6f0"        # Page background
ink = "#2b2b2b"          # Body text
accent = "#b08968"
accent_dark = "#7f5d3b"  # Headings, section titles, date badges
gold = "#c8a76a"         # Borders, rules, timeline dots

# ---------------------------------------------------------------------------
# CSV previews on project pages
# ---------------------------------------------------------------------------
[preview]
max_rows = 8
"##
}

/// Generate CSS custom properties from the theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --paper: {paper};
    --ink: {ink};
    --accent: {accent};
    --accent-dark: {accent_dark};
    --gold: {gold};
}}"#,
        paper = theme.paper,
        ink = theme.ink,
        accent = theme.accent,
        accent_dark = theme.accent_dark,
        gold = theme.gold,
    )
}

//! Configuration for journal-core
//!
//! Cover palette, placeholder labels and display settings. Every section
//! falls back to its defaults, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! palette = ["#6c5ce7", "#00cec9"]
//!
//! [labels]
//! untitled_section = "Untitled Section"
//! section_label = "Section {n}"
//!
//! [display]
//! date_format = "%b %e, %Y"
//! utc_offset_minutes = 540
//! ```

use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default cover colors, cycled by book count.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#6c5ce7", // Purple
    "#00cec9", // Teal
    "#fdcb6e", // Mustard
    "#ff7675", // Salmon
    "#0984e3", // Blue
];

/// Placeholder in `section_label` replaced by the section's ordinal.
pub const ORDINAL_PLACEHOLDER: &str = "{n}";

/// System-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Cover colors assigned to books created without one
    pub palette: Vec<String>,
    /// User-facing placeholder and label text
    pub labels: Labels,
    /// Date display settings
    pub display: DisplayConfig,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            labels: Labels::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Placeholder and label text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Title given to a kept section whose title is empty
    pub untitled_section: String,
    /// Title given to a kept chapter whose title is empty
    pub untitled_chapter: String,
    /// Ordinal label for sections, `{n}` is the 1-based position
    pub section_label: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            untitled_section: "Untitled Section".to_string(),
            untitled_chapter: "Untitled Chapter".to_string(),
            section_label: "Section {n}".to_string(),
        }
    }
}

impl Labels {
    /// Label for the section at a 1-based position. Zero is treated as 1.
    pub fn section_label(&self, order: usize) -> String {
        self.section_label
            .replace(ORDINAL_PLACEHOLDER, &order.max(1).to_string())
    }
}

/// Date display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime` pattern for "added" and "updated" dates
    pub date_format: String,
    /// Offset applied before formatting, in minutes east of UTC
    pub utc_offset_minutes: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            utc_offset_minutes: 0,
        }
    }
}

impl JournalConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> std::result::Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> std::result::Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load the file at `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// `<config dir>/book-journal/config.toml` for the current user
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("book-journal").join("config.toml"))
    }

    /// Cover color for the book at `index` in creation order.
    pub fn cover_color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()];
        }
        &self.palette[index % self.palette.len()]
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        if let Some(bad) = self.palette.iter().find(|c| !is_css_color(c)) {
            return Err(ConfigError::InvalidColor(bad.clone()));
        }

        if !self.labels.section_label.contains(ORDINAL_PLACEHOLDER) {
            return Err(ConfigError::InvalidPattern(format!(
                "section_label must contain {ORDINAL_PLACEHOLDER}"
            )));
        }

        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidPattern(format!(
                "date_format {:?} is not a valid strftime pattern",
                self.display.date_format
            )));
        }

        // chrono only accepts offsets strictly inside one day
        if self.display.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ConfigError::OutOfRange(
                "utc_offset_minutes must be within one day".to_string(),
            ));
        }

        Ok(())
    }
}

/// Accepts hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional
/// notation such as `rgb(...)`, and named colors.
fn is_css_color(color: &str) -> bool {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if let Some(open) = color.find('(') {
        return open > 0 && color.ends_with(')') && color[..open].chars().all(|c| c.is_ascii_alphabetic());
    }
    !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic())
}

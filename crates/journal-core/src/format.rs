//! Date display for "added" and "updated" stamps.

use std::fmt::{Debug, Write};

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::config::DisplayConfig;

/// Renders an instant for display.
pub trait DateFormatter: Send + Sync + Debug {
    fn format(&self, at: &DateTime<Utc>) -> String;
}

/// `strftime` formatting at a fixed UTC offset.
#[derive(Debug, Clone)]
pub struct ChronoDateFormatter {
    pattern: String,
    offset: FixedOffset,
}

impl ChronoDateFormatter {
    pub fn new(pattern: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            pattern: pattern.into(),
            offset,
        }
    }

    /// Build from display settings. An out-of-range offset falls back to UTC.
    pub fn from_config(display: &DisplayConfig) -> Self {
        let offset = display
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Self::new(display.date_format.clone(), offset)
    }
}

impl Default for ChronoDateFormatter {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, at: &DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.offset);
        let mut out = String::new();
        // An unusable pattern surfaces as a fmt error rather than a panic
        if write!(out, "{}", local.format(&self.pattern)).is_err() {
            return local.to_rfc3339();
        }
        out
    }
}

//! User settings for uNivUSaver
//!
//! Controls how amounts, dates and command results are presented. Settings
//! are read from an optional JSON file; any missing field falls back to its
//! default.

use std::fmt::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::SaverError;

/// Line printed above and below every command result
pub const DEFAULT_SEPARATOR: &str = "-------------------------------------";

/// User settings for uNivUSaver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for `d/`, `f/` and `t/` arguments and listings (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Separator line around command results
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Prefix written before every output line
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_prefix() -> String {
    "\t".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            separator: default_separator(),
            prefix: default_prefix(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or use the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, SaverError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            SaverError::Io(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            SaverError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that would make every date argument unusable
    pub fn validate(&self) -> Result<(), SaverError> {
        if self.date_format.trim().is_empty() {
            return Err(SaverError::Config("date_format cannot be empty".into()));
        }

        // chrono panics when displaying with a malformed format string
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SaverError::Config(format!(
                "date_format is not a valid strftime format: {}",
                self.date_format
            )));
        }

        // formats needing data a NaiveDateTime lacks (e.g. %z) fail at display time
        let sample = NaiveDate::MIN.and_time(NaiveTime::MIN);
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.timestamp_format())).is_err() {
            return Err(SaverError::Config(format!(
                "date_format cannot be used to display dates: {}",
                self.date_format
            )));
        }

        Ok(())
    }

    /// Format for listing timestamps: the date format followed by `HH:MM`
    pub fn timestamp_format(&self) -> String {
        format!("{} %H:%M", self.date_format)
    }
}

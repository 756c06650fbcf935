//! Input parsing for the command loop
//!
//! A line has the shape `KEYWORD [MAIN] [key/ value]...`. The keyword picks
//! the command; the rest is split into a main argument and values for the
//! keys that command declares. A key only counts at the start of a
//! whitespace-separated token, so `a/10` and `a/ 10` are equivalent.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::Settings;
use crate::error::{SaverError, SaverResult};
use crate::models::Money;

/// Split a line into its keyword and the remaining argument text
///
/// Returns `None` for blank lines.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => Some((keyword, rest.trim())),
        None => Some((line, "")),
    }
}

/// Arguments extracted from the text after a command keyword
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    main: String,
    values: HashMap<&'static str, String>,
}

impl Arguments {
    /// Text before the first recognised key
    pub fn main(&self) -> &str {
        &self.main
    }

    /// Value of `key`, if present and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of `key`, or a validation error naming what is missing
    pub fn require(&self, key: &str, what: &str) -> SaverResult<&str> {
        self.get(key).ok_or_else(|| {
            SaverError::Validation(format!("{} is required ({}{}).", what, key, what.to_uppercase()))
        })
    }

    /// The main argument, or a validation error naming what is missing
    pub fn require_main(&self, what: &str) -> SaverResult<&str> {
        if self.main.is_empty() {
            return Err(SaverError::Validation(format!("{} is required.", what)));
        }
        Ok(&self.main)
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.values.values().all(String::is_empty)
    }
}

/// Extract the main argument and the values of `keys` from `text`
///
/// When a key appears more than once, its last value wins.
pub fn extract_arguments(text: &str, keys: &[&'static str]) -> Arguments {
    let mut marks: Vec<(usize, &'static str)> = Vec::new();
    let mut previous_is_space = true;

    for (offset, ch) in text.char_indices() {
        if previous_is_space && !ch.is_whitespace() {
            if let Some(key) = keys.iter().find(|key| text[offset..].starts_with(**key)) {
                marks.push((offset, *key));
            }
        }
        previous_is_space = ch.is_whitespace();
    }

    let main_end = marks.first().map_or(text.len(), |(offset, _)| *offset);
    let mut arguments = Arguments {
        main: text[..main_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (offset, key)) in marks.iter().enumerate() {
        let start = offset + key.len();
        let end = marks.get(i + 1).map_or(text.len(), |(next, _)| *next);
        arguments
            .values
            .insert(*key, text[start..end].trim().to_string());
    }

    arguments
}

/// Parse a 1-based list position
pub fn parse_position(value: &str) -> SaverResult<usize> {
    let value = value.trim();
    value.parse::<usize>().map_err(|_| {
        SaverError::Validation(format!(
            "Index must be a positive whole number, got '{}'.",
            value
        ))
    })
}

/// Parse a positive amount
pub fn parse_amount(value: &str) -> SaverResult<Money> {
    let amount = Money::parse(value).map_err(|e| SaverError::Validation(e.to_string()))?;
    if !amount.is_positive() {
        return Err(SaverError::Validation(format!(
            "Amount must be greater than zero, got {}.",
            value.trim()
        )));
    }
    if amount > Money::MAX {
        return Err(SaverError::Validation(format!(
            "Amount cannot exceed {}, got {}.",
            Money::MAX,
            value.trim()
        )));
    }
    Ok(amount)
}

/// Parse a date in the configured format
pub fn parse_date(value: &str, settings: &Settings) -> SaverResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), &settings.date_format).map_err(|_| {
        SaverError::Validation(format!(
            "Invalid date '{}', expected format {}.",
            value.trim(),
            settings.date_format
        ))
    })
}

/// Parse a date with an optional `HH:MM` time; a bare date means midnight
pub fn parse_timestamp(value: &str, settings: &Settings) -> SaverResult<NaiveDateTime> {
    let value = value.trim();
    let with_time = settings.timestamp_format();

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, &with_time) {
        return Ok(timestamp);
    }

    NaiveDate::parse_from_str(value, &settings.date_format)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| {
            SaverError::Validation(format!(
                "Invalid date '{}', expected {} or {}.",
                value, settings.date_format, with_time
            ))
        })
}

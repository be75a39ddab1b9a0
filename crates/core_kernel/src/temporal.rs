//! Local date-time handling
//!
//! Policy terms are zone-less local date-times. The registry evaluates them
//! against "now" in a configured jurisdiction timezone, and exchanges them
//! over the wire as ISO-8601 local date-time strings without an offset.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use std::str::FromStr;

/// Output format for local date-times (fraction only when non-zero)
pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const LOCAL_DATE_TIME_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Timezone wrapper for the registry's jurisdiction
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    /// Returns the IANA name of the timezone
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Current wall-clock date-time in this timezone
    pub fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.0).naive_local()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::America::Sao_Paulo)
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid local date-time: {0}")]
    InvalidDateTime(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Parses an ISO-8601 local date-time, seconds and fraction optional
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, TemporalError> {
    NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_DATE_TIME_MINUTES_FORMAT))
        .map_err(|_| TemporalError::InvalidDateTime(value.to_string()))
}

/// Formats a local date-time the way the API emits it
pub fn format_local_datetime(value: &NaiveDateTime) -> String {
    value.format(LOCAL_DATE_TIME_FORMAT).to_string()
}

/// Whole days elapsed from `from` to `to`, truncated toward zero
///
/// Negative when `to` is before `from`.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_days()
}

/// Serde helpers for local date-time fields
pub mod local_datetime {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_local_datetime(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_local_datetime(raw.trim()).map_err(serde::de::Error::custom)
    }

    /// Reads an optional date-time; `null` and blank strings become `None`
    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_local_datetime(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

//! Calendar-only dates (`YYYY-MM-DD`) as exchanged with storage and clients.
//!
//! Formatting goes through `Date`'s `Display`, which already renders
//! `YYYY-MM-DD`. Parsing is strict: no time-of-day or offset is accepted.

use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

pub const CALENDAR_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[derive(Debug, Error)]
pub enum CalendarDateError {
    /// `[year]` alone would accept a sign, and signed years do not sort as text.
    #[error("expected a YYYY-MM-DD date, got '{0}'")]
    NotCalendarDate(String),
    #[error(transparent)]
    Parse(#[from] time::error::Parse),
}

pub fn parse_calendar_date(value: &str) -> Result<Date, CalendarDateError> {
    if !value.as_bytes().first().is_some_and(u8::is_ascii_digit) {
        return Err(CalendarDateError::NotCalendarDate(value.to_string()));
    }

    Ok(Date::parse(value, CALENDAR_DATE_FORMAT)?)
}

// Lets `Date` fields use `#[serde(with = "calendar_date")]`.
pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(date)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
    let value = String::deserialize(deserializer)?;
    parse_calendar_date(&value).map_err(serde::de::Error::custom)
}

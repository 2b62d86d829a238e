use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, PartialEq, Error)]
#[error("recurring day must be in 0..=6 (Monday..Sunday), got {0}")]
pub struct RecurringDayError(pub i64);

/// Day of the week a plan recurs on, Monday = 0 through Sunday = 6.
///
/// Out of range values are rejected at construction so a persisted or
/// deserialized day is always valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RecurringDay(u8);

impl RecurringDay {
    pub fn new(day: u8) -> Result<Self, RecurringDayError> {
        if day > 6 {
            Err(RecurringDayError(day as i64))
        } else {
            Ok(Self(day))
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.weekday().num_days_from_monday() as u8)
    }

    /// Full English day name, case-insensitive ("Friday", "friday")
    pub fn from_day_name(name: &str) -> Option<Self> {
        DAY_NAMES
            .iter()
            .position(|day| day.eq_ignore_ascii_case(name.trim()))
            .map(|i| Self(i as u8))
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.0 as usize]
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// The earliest date on or after `from` that falls on this day
    pub fn first_on_or_after(&self, from: NaiveDate) -> NaiveDate {
        let offset = (7 + self.0 - from.weekday().num_days_from_monday() as u8) % 7;
        from + Days::new(offset as u64)
    }
}

impl fmt::Display for RecurringDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.day_name())
    }
}

impl TryFrom<u8> for RecurringDay {
    type Error = RecurringDayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for RecurringDay {
    type Error = RecurringDayError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| RecurringDayError(value))
            .and_then(Self::new)
    }
}

impl From<RecurringDay> for u8 {
    fn from(value: RecurringDay) -> Self {
        value.0
    }
}

impl ToSql for RecurringDay {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned((self.0 as i64).into()))
    }
}

impl FromSql for RecurringDay {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        RecurringDay::try_from(value.as_i64()?).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl From<RecurringDay> for sea_query::Value {
    fn from(value: RecurringDay) -> Self {
        (value.0 as i64).into()
    }
}

impl From<&RecurringDay> for sea_query::Value {
    fn from(value: &RecurringDay) -> Self {
        (*value).into()
    }
}

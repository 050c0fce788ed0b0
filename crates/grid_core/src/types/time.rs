//! Calendar types carried by market-data tables.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate, used as a table's reference date
//! - `DayCountConvention`, `BusinessDayConvention`: schedule conventions recorded in
//!   [`ScheduleMetaData`](crate::market_data::tables::ScheduleMetaData)
//!
//! Tables never perform date arithmetic themselves; offsets are already
//! expressed in grid units when they reach a table.
//!
//! # Examples
//!
//! ```
//! use grid_core::types::time::{Date, DayCountConvention};
//!
//! let reference = Date::from_ymd(2024, 1, 2).unwrap();
//! assert_eq!(reference.to_string(), "2024-01-02");
//!
//! let dcc: DayCountConvention = "act/360".parse().unwrap();
//! assert_eq!(dcc, DayCountConvention::Actual360);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use grid_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// assert!(Date::from_ymd(2024, 2, 30).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention of the fixed leg of the underlying swap schedule.
///
/// Only the label is carried; year fractions are computed by the schedule
/// generator that consumes the metadata.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed.
    #[default]
    Actual365,
    /// Actual/360.
    Actual360,
    /// Actual/Actual (ISDA).
    ActualActualIsda,
    /// 30/360 US bond basis.
    Thirty360,
    /// 30E/360 Eurobond basis.
    Thirty360E,
}

impl DayCountConvention {
    /// Returns the market label of the convention.
    ///
    /// ```
    /// use grid_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Thirty360E.name(), "30E/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365 => "ACT/365",
            DayCountConvention::Actual360 => "ACT/360",
            DayCountConvention::ActualActualIsda => "ACT/ACT ISDA",
            DayCountConvention::Thirty360 => "30/360",
            DayCountConvention::Thirty360E => "30E/360",
        }
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Case-insensitive; separators (`/`, space, `_`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '_'], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::Actual365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::Actual360),
            "ACTACTISDA" | "ACTACT" | "ACTUALACTUAL" => Ok(DayCountConvention::ActualActualIsda),
            "30360" | "THIRTY360" => Ok(DayCountConvention::Thirty360),
            "30E360" | "THIRTYE360" => Ok(DayCountConvention::Thirty360E),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Business day adjustment applied by the schedule generator.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// Move to the next business day.
    Following,
    /// Next business day unless that crosses a month boundary.
    #[default]
    ModifiedFollowing,
    /// Move to the previous business day.
    Preceding,
    /// Previous business day unless that crosses a month boundary.
    ModifiedPreceding,
    /// Keep the date as is.
    Unadjusted,
}

impl BusinessDayConvention {
    /// Returns the short market code.
    ///
    /// ```
    /// use grid_core::types::time::BusinessDayConvention;
    ///
    /// assert_eq!(BusinessDayConvention::ModifiedFollowing.code(), "MF");
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Unadjusted => "U",
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" | "none" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(format!("Unknown business day convention: {}", s)),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{BusinessDayConvention, DayCountConvention};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }

    impl Serialize for BusinessDayConvention {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for BusinessDayConvention {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

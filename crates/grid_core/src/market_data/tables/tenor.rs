//! Tenor coordinates and schedule metadata.

use crate::types::{BusinessDayConvention, DayCountConvention};
use std::fmt;

/// Integer coordinate of a table cell.
///
/// Both offsets are in the table's [`TableConvention`](super::TableConvention)
/// units. `termination` is measured from the maturity, not from the
/// reference date. Ordering is by maturity, then termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenorPoint {
    /// Offset of the maturity from the reference date
    pub maturity: i32,
    /// Offset of the termination from the maturity
    pub termination: i32,
}

impl TenorPoint {
    /// Create a tenor point.
    #[inline]
    pub const fn new(maturity: i32, termination: i32) -> Self {
        Self {
            maturity,
            termination,
        }
    }
}

impl fmt::Display for TenorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.maturity, self.termination)
    }
}

impl From<(i32, i32)> for TenorPoint {
    fn from((maturity, termination): (i32, i32)) -> Self {
        Self::new(maturity, termination)
    }
}

/// Schedule description of the instruments quoted in a table.
///
/// Tables carry it unchanged so that consumers can rebuild the underlying
/// swap schedules; nothing in this crate interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleMetaData {
    /// Period length of the fixed leg in months
    pub fixed_period_months: u32,
    /// Period length of the floating leg in months
    pub float_period_months: u32,
    /// Day count of the fixed leg
    pub day_count: DayCountConvention,
    /// Business day adjustment of payment dates
    pub business_day: BusinessDayConvention,
}

impl Default for ScheduleMetaData {
    fn default() -> Self {
        Self {
            fixed_period_months: 12,
            float_period_months: 6,
            day_count: DayCountConvention::Thirty360E,
            business_day: BusinessDayConvention::ModifiedFollowing,
        }
    }
}

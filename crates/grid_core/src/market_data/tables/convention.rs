//! Table conventions: the unit of a table's integer tenor offsets.

use crate::market_data::error::ConstructionError;
use std::fmt;
use std::str::FromStr;

/// Unit in which a table's maturity and termination offsets are expressed.
///
/// Each convention maps to the number of grid units per year, used to turn
/// continuous year fractions into integer offsets.
///
/// # Examples
///
/// ```
/// use grid_core::market_data::tables::TableConvention;
///
/// assert_eq!(TableConvention::Months.scale(), 12);
/// assert_eq!(TableConvention::Months.to_grid_units(1.04), 12);
/// assert_eq!("weeks".parse::<TableConvention>().unwrap(), TableConvention::Weeks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(usize)]
pub enum TableConvention {
    /// One unit per year.
    Years = 0,
    /// Twelve units per year.
    Months = 1,
    /// Fifty-two units per year.
    Weeks = 2,
    /// 365 units per year.
    Days = 3,
}

/// Grid units per year, indexed by the convention discriminant.
const SCALE_FACTORS: [i32; 4] = [1, 12, 52, 365];

impl TableConvention {
    /// All conventions in declaration order.
    pub const ALL: [TableConvention; 4] = [
        TableConvention::Years,
        TableConvention::Months,
        TableConvention::Weeks,
        TableConvention::Days,
    ];

    /// Number of grid units per year.
    #[inline]
    pub fn scale(self) -> i32 {
        SCALE_FACTORS[self as usize]
    }

    /// Convert a year fraction to the nearest integer number of grid units.
    ///
    /// Rounds half away from zero. Values beyond the `i32` range saturate and
    /// NaN maps to 0; the conversion itself never fails.
    #[inline]
    pub fn to_grid_units(self, years: f64) -> i32 {
        (years * f64::from(self.scale())).round() as i32
    }

    /// Upper-case label as used in table files.
    pub fn name(self) -> &'static str {
        match self {
            TableConvention::Years => "YEARS",
            TableConvention::Months => "MONTHS",
            TableConvention::Weeks => "WEEKS",
            TableConvention::Days => "DAYS",
        }
    }
}

impl fmt::Display for TableConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TableConvention {
    type Err = ConstructionError;

    /// Case-insensitive; single-letter codes `Y`, `M`, `W`, `D` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YEARS" | "YEAR" | "Y" => Ok(TableConvention::Years),
            "MONTHS" | "MONTH" | "M" => Ok(TableConvention::Months),
            "WEEKS" | "WEEK" | "W" => Ok(TableConvention::Weeks),
            "DAYS" | "DAY" | "D" => Ok(TableConvention::Days),
            _ => Err(ConstructionError::UnknownConvention(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::TableConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for TableConvention {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for TableConvention {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            TableConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

//! Calendar month used for seasonal pricing.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ConfigurationError;

/// Calendar month of travel.
///
/// Serialized as its lowercase three-letter code (`"jan"` .. `"dec"`), which
/// is also how the cost database lists peak and off seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    /// January.
    #[default]
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

impl Month {
    const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Returns the month for a zero-based index (January = 0).
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        if index < 12 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the zero-based month index (January = 0).
    #[must_use]
    pub const fn index(&self) -> u32 {
        *self as u32
    }

    /// Returns the lowercase three-letter month code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
        }
    }

    /// Returns the English month name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Jan => "January",
            Self::Feb => "February",
            Self::Mar => "March",
            Self::Apr => "April",
            Self::May => "May",
            Self::Jun => "June",
            Self::Jul => "July",
            Self::Aug => "August",
            Self::Sep => "September",
            Self::Oct => "October",
            Self::Nov => "November",
            Self::Dec => "December",
        }
    }

    /// Returns the current month in local time.
    #[must_use]
    pub fn current() -> Self {
        let month0 = chrono::Local::now().month0();
        Self::from_index(month0).unwrap_or_default()
    }

    /// Returns all months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u32> for Month {
    type Error = ConfigurationError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(ConfigurationError::OutOfRange {
            field: "month",
            value: index,
            min: 0,
            max: 11,
        })
    }
}

impl FromStr for Month {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| lower == m.code() || lower == m.name().to_lowercase())
            .ok_or_else(|| {
                ConfigurationError::unknown(
                    "month",
                    s,
                    "jan, feb, mar, apr, may, jun, jul, aug, sep, oct, nov, dec",
                )
            })
    }
}

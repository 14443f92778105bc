use crate::utils::error::UtilError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// A value that may be absent.
pub type Optional<T> = Option<T>;

/// Boxed callable taking dynamic arguments.
pub type AnyFunction<R = ()> = Box<dyn Fn(&[serde_json::Value]) -> R + Send + Sync>;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Granularities used for shifting, diffing and truncating dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DateUnit {
    pub const ALL: [DateUnit; 8] = [
        DateUnit::Millisecond,
        DateUnit::Second,
        DateUnit::Minute,
        DateUnit::Hour,
        DateUnit::Day,
        DateUnit::Week,
        DateUnit::Month,
        DateUnit::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateUnit::Millisecond => "millisecond",
            DateUnit::Second => "second",
            DateUnit::Minute => "minute",
            DateUnit::Hour => "hour",
            DateUnit::Day => "day",
            DateUnit::Week => "week",
            DateUnit::Month => "month",
            DateUnit::Year => "year",
        }
    }

    /// Fixed length in milliseconds, `None` for calendar units.
    pub fn fixed_millis(&self) -> Option<i64> {
        match self {
            DateUnit::Millisecond => Some(1),
            DateUnit::Second => Some(MILLISECOND_IN_SECOND),
            DateUnit::Minute => Some(MILLISECOND_IN_MINUTE),
            DateUnit::Hour => Some(MILLISECOND_IN_HOUR),
            DateUnit::Day => Some(MILLISECOND_IN_DAY),
            DateUnit::Week => Some(MILLISECOND_IN_WEEK),
            DateUnit::Month | DateUnit::Year => None,
        }
    }
}

pub const MILLISECOND_IN_SECOND: i64 = 1000;
pub const MILLISECOND_IN_MINUTE: i64 = MILLISECOND_IN_SECOND * 60;
pub const MILLISECOND_IN_HOUR: i64 = MILLISECOND_IN_MINUTE * 60;
pub const MILLISECOND_IN_DAY: i64 = MILLISECOND_IN_HOUR * 24;
pub const MILLISECOND_IN_WEEK: i64 = MILLISECOND_IN_DAY * 7;

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateUnit {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| {
                tracing::debug!("Rejecting unknown date unit: {}", s);
                UtilError::UnsupportedUnit {
                    unit: s.to_string(),
                }
            })
    }
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identity token. Two symbols are equal only if one is a copy of the other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(str::to_string),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStyle {
    #[default]
    Decimal,
    Percent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormatOptions {
    pub style: NumberStyle,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberFormatOptions {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

impl NumberFormatOptions {
    pub fn percent() -> Self {
        Self {
            style: NumberStyle::Percent,
            maximum_fraction_digits: 0,
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, minimum: usize, maximum: usize) -> Self {
        self.minimum_fraction_digits = minimum;
        self.maximum_fraction_digits = maximum.max(minimum);
        self
    }

    pub fn without_grouping(mut self) -> Self {
        self.use_grouping = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[default]
    Short,
    Medium,
    Long,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeStyle {
    Short,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    pub date_style: DateStyle,
    pub time_style: Option<TimeStyle>,
}

impl DateFormatOptions {
    pub fn new(date_style: DateStyle) -> Self {
        Self {
            date_style,
            time_style: None,
        }
    }

    pub fn with_time(mut self, time_style: TimeStyle) -> Self {
        self.time_style = Some(time_style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_unit_round_trips_through_names() {
        for unit in DateUnit::ALL {
            assert_eq!(unit.to_string().parse::<DateUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_unknown_unit_fails_fast() {
        let err = "fortnight".parse::<DateUnit>().unwrap_err();
        assert!(matches!(err, UtilError::UnsupportedUnit { ref unit } if unit == "fortnight"));
        assert!("Day".parse::<DateUnit>().is_err());
    }

    #[test]
    fn test_date_unit_serde_names() {
        let json = serde_json::to_string(&DateUnit::Week).unwrap();
        assert_eq!(json, "\"week\"");
        let unit: DateUnit = serde_json::from_str("\"month\"").unwrap();
        assert_eq!(unit, DateUnit::Month);
    }

    #[test]
    fn test_fixed_millis() {
        assert_eq!(DateUnit::Hour.fixed_millis(), Some(3_600_000));
        assert_eq!(DateUnit::Week.fixed_millis(), Some(604_800_000));
        assert_eq!(DateUnit::Month.fixed_millis(), None);
    }

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new(Some("token"));
        let b = Symbol::new(Some("token"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.to_string(), "Symbol(token)");
    }

    #[test]
    fn test_number_options_keep_max_above_min() {
        let options = NumberFormatOptions::default().with_fraction_digits(4, 2);
        assert_eq!(options.minimum_fraction_digits, 4);
        assert_eq!(options.maximum_fraction_digits, 4);
    }
}

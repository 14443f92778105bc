use crate::domain::model::{DateFormatOptions, NumberFormatOptions};
use chrono::{DateTime, TimeZone};

/// Locale-aware number rendering.
pub trait NumberFormatter: Send + Sync {
    fn format_number(&self, value: f64, options: &NumberFormatOptions) -> String;
}

/// Locale-aware date rendering. Dates render in their own zone.
pub trait DateFormatter: Send + Sync {
    fn format_date<Tz>(&self, date: &DateTime<Tz>, options: &DateFormatOptions) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display;
}

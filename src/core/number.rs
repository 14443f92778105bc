use crate::adapters::LocaleFormatter;
use crate::config::LocaleConfig;
use crate::domain::model::NumberFormatOptions;
use crate::domain::ports::NumberFormatter;
use crate::utils::decimal::to_fixed;
use crate::utils::error::{Result, UtilError};

/// `min(max(value, min), max)`. When `min > max` the result is `max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Rounds to `precision` decimal places; ties go toward positive infinity.
pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    round_half_up(value * factor) / factor
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |total, current| total + current)
}

pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        tracing::debug!("Rejecting mean of an empty slice");
        return Err(UtilError::invalid_argument(
            "Cannot compute mean of an empty array",
        ));
    }
    Ok(sum(values) / values.len() as f64)
}

/// `0.1234` with 2 digits becomes `"12.34%"`. Ties round away from zero.
pub fn to_percentage(value: f64, digits: usize) -> String {
    format!("{}%", to_fixed(value * 100.0, digits))
}

/// Formats with the conventions of `locale`, or `en-US` when none is given.
pub fn format_number(
    value: f64,
    locale: Option<&LocaleConfig>,
    options: &NumberFormatOptions,
) -> String {
    match locale {
        Some(locale) => LocaleFormatter::new(locale).format_number(value, options),
        None => LocaleFormatter::default().format_number(value, options),
    }
}

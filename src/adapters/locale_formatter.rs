use crate::config::LocaleConfig;
use crate::domain::model::{DateFormatOptions, DateStyle, NumberFormatOptions, NumberStyle, TimeStyle};
use crate::domain::ports::{DateFormatter, NumberFormatter};
use crate::utils::decimal::to_fixed;
use chrono::{DateTime, Datelike, TimeZone};
use std::fmt::Write;

/// Formats numbers and dates with the conventions of one `LocaleConfig`.
#[derive(Debug, Clone, Copy)]
pub struct LocaleFormatter<'a> {
    locale: &'a LocaleConfig,
}

impl<'a> LocaleFormatter<'a> {
    pub fn new(locale: &'a LocaleConfig) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleConfig {
        self.locale
    }

    fn group_digits(&self, digits: &str) -> String {
        let size = self.locale.grouping_size.max(1);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / size);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % size == 0 {
                grouped.push_str(&self.locale.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }

    /// Bakes the locale's month and weekday names into a strftime pattern.
    fn localize_pattern(&self, pattern: &str, month0: usize, weekday0: usize) -> String {
        let locale = self.locale;
        let mut out = String::with_capacity(pattern.len() + 16);
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }

            let mut directive = String::from("%");
            while let Some(&flag) = chars.peek() {
                if matches!(flag, '-' | '_' | '0' | '#') {
                    directive.push(flag);
                    chars.next();
                } else {
                    break;
                }
            }

            let name = match chars.peek().copied() {
                Some('B') => locale.month_names.get(month0),
                Some('b') | Some('h') => locale.month_abbreviations.get(month0),
                Some('A') => locale.weekday_names.get(weekday0),
                Some('a') => locale.weekday_abbreviations.get(weekday0),
                _ => None,
            };

            match (name, chars.next()) {
                (Some(name), Some(_)) => out.push_str(&name.replace('%', "%%")),
                (_, Some(other)) => {
                    out.push_str(&directive);
                    out.push(other);
                }
                (_, None) => out.push_str(&directive),
            }
        }

        out
    }
}

impl Default for LocaleFormatter<'static> {
    fn default() -> Self {
        static DEFAULT: std::sync::OnceLock<LocaleConfig> = std::sync::OnceLock::new();
        Self::new(DEFAULT.get_or_init(LocaleConfig::default))
    }
}

impl NumberFormatter for LocaleFormatter<'_> {
    fn format_number(&self, value: f64, options: &NumberFormatOptions) -> String {
        let locale = self.locale;
        let scaled = match options.style {
            NumberStyle::Decimal => value,
            NumberStyle::Percent => value * 100.0,
        };

        if scaled.is_nan() {
            return "NaN".to_string();
        }

        let sign = if scaled < 0.0 { locale.minus_sign.as_str() } else { "" };
        let suffix = match options.style {
            NumberStyle::Decimal => "",
            NumberStyle::Percent => locale.percent_suffix.as_str(),
        };

        if scaled.is_infinite() {
            return format!("{}∞{}", sign, suffix);
        }

        let max_digits = options.maximum_fraction_digits.max(options.minimum_fraction_digits);
        let fixed = to_fixed(scaled.abs(), max_digits);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > options.minimum_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let integer = if options.use_grouping {
            self.group_digits(integer)
        } else {
            integer.to_string()
        };

        let mut rendered = format!("{}{}", sign, integer);
        if !fraction.is_empty() {
            rendered.push_str(&locale.decimal_separator);
            rendered.push_str(&fraction);
        }
        rendered.push_str(suffix);
        rendered
    }
}

impl DateFormatter for LocaleFormatter<'_> {
    fn format_date<Tz>(&self, date: &DateTime<Tz>, options: &DateFormatOptions) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let patterns = &self.locale.date;
        let date_pattern = match options.date_style {
            DateStyle::Short => &patterns.short,
            DateStyle::Medium => &patterns.medium,
            DateStyle::Long => &patterns.long,
            DateStyle::Full => &patterns.full,
        };

        let mut pattern = date_pattern.clone();
        if let Some(time_style) = options.time_style {
            pattern.push_str(&patterns.date_time_separator.replace('%', "%%"));
            pattern.push_str(match time_style {
                TimeStyle::Short => &patterns.time_short,
                TimeStyle::Medium => &patterns.time_medium,
            });
        }

        let month0 = date.month0() as usize;
        let weekday0 = date.weekday().num_days_from_sunday() as usize;
        let localized = self.localize_pattern(&pattern, month0, weekday0);

        let mut rendered = String::new();
        if write!(rendered, "{}", date.format(&localized)).is_err() {
            tracing::debug!(
                "Pattern {:?} of locale {} could not be rendered, using RFC 3339",
                localized,
                self.locale.id
            );
            return date.to_rfc3339();
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleRegistry;
    use chrono::Utc;

    fn sample_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap()
    }

    #[test]
    fn test_default_number_format() {
        let formatter = LocaleFormatter::default();
        let options = NumberFormatOptions::default();
        assert_eq!(formatter.format_number(1234567.891, &options), "1,234,567.891");
        assert_eq!(formatter.format_number(0.5, &options), "0.5");
        assert_eq!(formatter.format_number(-42.0, &options), "-42");
        assert_eq!(formatter.format_number(999.0, &options), "999");
        assert_eq!(formatter.format_number(f64::NAN, &options), "NaN");
        assert_eq!(formatter.format_number(f64::NEG_INFINITY, &options), "-∞");
    }

    #[test]
    fn test_fraction_digit_bounds() {
        let formatter = LocaleFormatter::default();
        let options = NumberFormatOptions::default().with_fraction_digits(2, 2);
        assert_eq!(formatter.format_number(3.0, &options), "3.00");
        assert_eq!(formatter.format_number(1234.5, &options), "1,234.50");

        let options = NumberFormatOptions::default().without_grouping();
        assert_eq!(formatter.format_number(1234.0, &options), "1234");
    }

    #[test]
    fn test_percent_style() {
        let formatter = LocaleFormatter::default();
        assert_eq!(
            formatter.format_number(0.256, &NumberFormatOptions::percent()),
            "26%"
        );
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        let formatter = LocaleFormatter::default();
        let whole = NumberFormatOptions::default().with_fraction_digits(0, 0);
        assert_eq!(formatter.format_number(2.5, &whole), "3");
        assert_eq!(formatter.format_number(-2.5, &whole), "-3");
        assert_eq!(formatter.format_number(0.125, &NumberFormatOptions::percent()), "13%");
        assert_eq!(formatter.format_number(1.0005, &NumberFormatOptions::default()), "1");
    }

    #[test]
    fn test_german_number_format() {
        let registry = LocaleRegistry::builtin().unwrap();
        let formatter = LocaleFormatter::new(registry.resolve("de-DE"));
        let options = NumberFormatOptions::default();
        assert_eq!(formatter.format_number(1234567.5, &options), "1.234.567,5");
        assert_eq!(
            formatter.format_number(0.5, &NumberFormatOptions::percent()),
            "50\u{a0}%"
        );
    }

    #[test]
    fn test_default_date_styles() {
        let formatter = LocaleFormatter::default();
        let date = sample_date();
        assert_eq!(formatter.format_date(&date, &DateFormatOptions::default()), "3/5/2024");
        assert_eq!(
            formatter.format_date(&date, &DateFormatOptions::new(DateStyle::Medium)),
            "Mar 5, 2024"
        );
        assert_eq!(
            formatter.format_date(&date, &DateFormatOptions::new(DateStyle::Full)),
            "Tuesday, March 5, 2024"
        );
        assert_eq!(
            formatter.format_date(
                &date,
                &DateFormatOptions::new(DateStyle::Short).with_time(TimeStyle::Short)
            ),
            "3/5/2024, 2:07 PM"
        );
    }

    #[test]
    fn test_localized_names() {
        let registry = LocaleRegistry::builtin().unwrap();
        let date = sample_date();

        let german = LocaleFormatter::new(registry.resolve("de-DE"));
        assert_eq!(
            german.format_date(&date, &DateFormatOptions::new(DateStyle::Full)),
            "Dienstag, 5. März 2024"
        );
        assert_eq!(german.format_date(&date, &DateFormatOptions::default()), "05.03.24");

        let french = LocaleFormatter::new(registry.resolve("fr-FR"));
        assert_eq!(
            french.format_date(
                &date,
                &DateFormatOptions::new(DateStyle::Long).with_time(TimeStyle::Medium)
            ),
            "5 mars 2024 14:07:09"
        );
    }

    #[test]
    fn test_percent_in_names_is_escaped() {
        let mut locale = LocaleConfig::default();
        locale.month_names[2] = "100%March".to_string();
        let formatter = LocaleFormatter::new(&locale);
        assert_eq!(
            formatter.format_date(&sample_date(), &DateFormatOptions::new(DateStyle::Long)),
            "100%March 5, 2024"
        );
    }
}

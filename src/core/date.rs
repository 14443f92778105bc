//! Date arithmetic over `chrono::DateTime`.
//!
//! Every operation works in the zone of the value it receives: calendar
//! units (day, week, month, year) move the wall-clock date in that zone,
//! while millisecond through hour shifts add exact durations.

use crate::adapters::LocaleFormatter;
use crate::config::LocaleConfig;
use crate::domain::model::{DateFormatOptions, DateUnit};
use crate::domain::ports::DateFormatter;
use crate::utils::error::{Result, UtilError};
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};

pub fn now() -> DateTime<Local> {
    Local::now()
}

fn out_of_range(value: i64, unit: DateUnit) -> UtilError {
    tracing::debug!("Shift by {} {} left the supported date range", value, unit);
    UtilError::invalid_argument(format!(
        "shifting by {} {} leaves the supported date range",
        value, unit
    ))
}

/// Maps a wall-clock time back to an instant. Times inside a DST gap move
/// forward one hour; repeated times take the earlier instant.
fn from_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest().or_else(|| {
        let shifted = local.checked_add_signed(TimeDelta::try_hours(1)?)?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

fn shift_duration<Tz: TimeZone>(date: &DateTime<Tz>, delta: Option<TimeDelta>) -> Option<DateTime<Tz>> {
    date.clone().checked_add_signed(delta?)
}

fn shift_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let local = date
        .naive_local()
        .checked_add_signed(TimeDelta::try_days(days)?)?;
    from_local(&date.timezone(), local)
}

/// Moves the calendar month, letting a day past the end of the target month
/// spill into the next one (Jan 31 + 1 month is Mar 3 in a common year).
fn shift_months<Tz: TimeZone>(date: &DateTime<Tz>, months: i64) -> Option<DateTime<Tz>> {
    let local = date.naive_local();
    let total = i64::from(local.year()) * 12 + i64::from(local.month0()) + months;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;

    let day = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_signed(TimeDelta::try_days(i64::from(local.day0()))?)?;
    from_local(&date.timezone(), day.and_time(local.time()))
}

fn shift_date<Tz: TimeZone>(date: &DateTime<Tz>, value: i64, unit: DateUnit) -> Option<DateTime<Tz>> {
    match unit {
        DateUnit::Millisecond => shift_duration(date, TimeDelta::try_milliseconds(value)),
        DateUnit::Second => shift_duration(date, TimeDelta::try_seconds(value)),
        DateUnit::Minute => shift_duration(date, TimeDelta::try_minutes(value)),
        DateUnit::Hour => shift_duration(date, TimeDelta::try_hours(value)),
        DateUnit::Day => shift_days(date, value),
        DateUnit::Week => shift_days(date, value.checked_mul(7)?),
        DateUnit::Month => shift_months(date, value),
        DateUnit::Year => shift_months(date, value.checked_mul(12)?),
    }
}

fn checked_shift<Tz: TimeZone>(date: &DateTime<Tz>, value: i64, unit: DateUnit) -> Result<DateTime<Tz>> {
    shift_date(date, value, unit).ok_or_else(|| out_of_range(value, unit))
}

/// Returns `date` shifted by `value` units.
pub fn modify_date<Tz: TimeZone>(value: i64, unit: DateUnit, date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    checked_shift(date, value, unit)
}

/// `modify_date` relative to the current local time.
pub fn modify_now(value: i64, unit: DateUnit) -> Result<DateTime<Local>> {
    modify_date(value, unit, &now())
}

fn diff_in_months<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Result<f64> {
    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();
    if start_ms == end_ms {
        return Ok(0.0);
    }

    let sign: i64 = if end_ms > start_ms { 1 } else { -1 };
    let start_local = start.naive_local();
    let end_local = end.with_timezone(&start.timezone()).naive_local();

    let mut months = i64::from(end_local.year() - start_local.year()) * 12
        + (i64::from(end_local.month()) - i64::from(start_local.month()));

    let anchor_ms = checked_shift(start, months, DateUnit::Month)?.timestamp_millis();
    if (sign > 0 && end_ms < anchor_ms) || (sign < 0 && end_ms > anchor_ms) {
        months -= sign;
    }

    let anchor = checked_shift(start, months, DateUnit::Month)?;
    let next = checked_shift(&anchor, sign, DateUnit::Month)?;
    let interval = next.timestamp_millis() - anchor.timestamp_millis();

    if interval == 0 {
        return Ok(months as f64);
    }

    let elapsed = (end_ms - anchor.timestamp_millis()) as f64 / interval as f64;
    Ok(months as f64 + elapsed * sign as f64)
}

/// Difference `end - start` expressed in `unit`. Month and year results
/// carry the elapsed fraction of the month in progress.
pub fn date_diff<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, unit: DateUnit) -> Result<f64> {
    let diff_ms = (end.timestamp_millis() - start.timestamp_millis()) as f64;

    match unit {
        DateUnit::Millisecond
        | DateUnit::Second
        | DateUnit::Minute
        | DateUnit::Hour
        | DateUnit::Day
        | DateUnit::Week => {
            let size = unit.fixed_millis().unwrap_or(1);
            Ok(diff_ms / size as f64)
        }
        DateUnit::Month => diff_in_months(start, end),
        DateUnit::Year => Ok(diff_in_months(start, end)? / 12.0),
    }
}

fn truncate_local(local: NaiveDateTime, unit: DateUnit) -> Option<NaiveDateTime> {
    let date = local.date();
    match unit {
        DateUnit::Millisecond => Some(local),
        DateUnit::Second => local.with_nanosecond(0),
        DateUnit::Minute => date.and_hms_opt(local.hour(), local.minute(), 0),
        DateUnit::Hour => date.and_hms_opt(local.hour(), 0, 0),
        DateUnit::Day => Some(date.and_time(NaiveTime::MIN)),
        DateUnit::Week => {
            let back = i64::from(date.weekday().num_days_from_sunday());
            date.checked_sub_signed(TimeDelta::try_days(back)?)
                .map(|sunday| sunday.and_time(NaiveTime::MIN))
        }
        DateUnit::Month => date.with_day(1).map(|d| d.and_time(NaiveTime::MIN)),
        DateUnit::Year => date.with_ordinal(1).map(|d| d.and_time(NaiveTime::MIN)),
    }
}

/// First instant of the `unit` containing `date`. Weeks start on Sunday.
pub fn start_of<Tz: TimeZone>(date: &DateTime<Tz>, unit: DateUnit) -> DateTime<Tz> {
    if unit == DateUnit::Millisecond {
        return date.clone();
    }

    match truncate_local(date.naive_local(), unit).and_then(|local| from_local(&date.timezone(), local)) {
        Some(start) => start,
        None => {
            tracing::debug!(
                "Start of {} for {} lies outside the supported range, keeping the input",
                unit,
                date.naive_local()
            );
            date.clone()
        }
    }
}

/// Last millisecond of the `unit` containing `date`.
pub fn end_of<Tz: TimeZone>(date: &DateTime<Tz>, unit: DateUnit) -> Result<DateTime<Tz>> {
    if unit == DateUnit::Millisecond {
        return Ok(date.clone());
    }

    let next_start = checked_shift(&start_of(date, unit), 1, unit)?;
    checked_shift(&next_start, -1, DateUnit::Millisecond)
}

/// True when both dates fall in the same `unit`.
pub fn is_same<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>, unit: DateUnit) -> bool {
    start_of(a, unit) == start_of(b, unit)
}

pub fn format_date<Tz>(
    date: &DateTime<Tz>,
    locale: Option<&LocaleConfig>,
    options: &DateFormatOptions,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match locale {
        Some(locale) => LocaleFormatter::new(locale).format_date(date, options),
        None => LocaleFormatter::default().format_date(date, options),
    }
}

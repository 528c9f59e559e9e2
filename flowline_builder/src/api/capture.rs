use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::model::{Range, Shape, Value};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];
// The largest day count a time span may carry.
const MAX_DAYS: i64 = 10_675_199;
const MAX_FRACTION_DIGITS: usize = 7;

/// Coerce a raw Cli value into the given shape.
///
/// Returns `None` when the value cannot be applied to the shape (ex: `"abc"` as an `Integer`).
/// Collections and ranges always apply: unparseable elements are dropped, and an unparseable range is `0-0`.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::{coerce, Range, Shape, Value};
///
/// assert_eq!(coerce(Shape::Integer, " 42 "), Some(Value::Integer(42)));
/// assert_eq!(coerce(Shape::Integer, "forty two"), None);
/// assert_eq!(coerce(Shape::IntegerList, "1,x,3"), Some(Value::IntegerList(vec![1, 3])));
/// assert_eq!(coerce(Shape::IntegerRange, "1-100"), Some(Value::IntegerRange(Range::new(1, 100))));
/// ```
pub fn coerce(shape: Shape, raw: &str) -> Option<Value> {
    let value = match shape {
        Shape::Integer => scalar(raw).map(Value::Integer),
        Shape::Long => scalar(raw).map(Value::Long),
        Shape::Double => scalar(raw).map(Value::Double),
        Shape::Float => scalar(raw).map(Value::Float),
        Shape::Decimal => scalar(raw).map(Value::Decimal),
        Shape::Boolean => Some(Value::Boolean(boolean(raw))),
        Shape::String => Some(Value::String(unquote(raw))),
        Shape::IntegerList => Some(Value::IntegerList(comma_list(raw))),
        Shape::LongList => Some(Value::LongList(comma_list(raw))),
        Shape::DoubleList => Some(Value::DoubleList(comma_list(raw))),
        Shape::FloatList => Some(Value::FloatList(comma_list(raw))),
        Shape::DecimalList => Some(Value::DecimalList(comma_list(raw))),
        Shape::StringList => Some(Value::StringList(string_list(raw))),
        Shape::Date => date(raw).map(Value::Date),
        Shape::DateTime => date_time(raw).map(Value::DateTime),
        Shape::TimeSpan => time_span(raw).map(Value::TimeSpan),
        Shape::IntegerRange => Some(Value::IntegerRange(range(raw))),
        Shape::DoubleRange => Some(Value::DoubleRange(range(raw))),
        Shape::FloatRange => Some(Value::FloatRange(range(raw))),
        Shape::DecimalRange => Some(Value::DecimalRange(range(raw))),
    };

    #[cfg(feature = "tracing_debug")]
    {
        if value.is_none() {
            debug!("Cannot coerce '{raw}' to {shape}.");
        }
    }

    value
}

// Numeric parse shared by the scalar shapes.
// i32, i64, f64, f32 and Decimal all accept a leading sign and use '.' as the decimal separator.
fn scalar<T: FromStr>(raw: &str) -> Option<T> {
    T::from_str(raw.trim()).ok()
}

fn boolean(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("true")
}

fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

fn comma_list<T: FromStr>(raw: &str) -> Vec<T> {
    raw.split(',').filter_map(scalar).collect()
}

fn string_list(raw: &str) -> Vec<String> {
    if raw.contains('"') {
        quoted_words(raw)
    } else {
        raw.split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect()
    }
}

// Space delimited words, where a double quoted run is kept as one word.
fn quoted_words(raw: &str) -> Vec<String> {
    let mut words = Vec::default();
    let mut current = String::default();
    let mut in_quote = false;

    for c in raw.chars() {
        match c {
            '"' => {
                in_quote = !in_quote;
            }
            ' ' if !in_quote => {}
            _ => {
                current.push(c);
                continue;
            }
        }

        if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn range<T: FromStr + Default + Copy>(raw: &str) -> Range<T> {
    let ends: Vec<T> = raw.split('-').filter_map(scalar).collect();

    match ends.as_slice() {
        [start, end, ..] => Range::new(*start, *end),
        _ => Range::default(),
    }
}

fn date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

fn date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(value) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(value.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| date(trimmed).map(|d| d.and_time(NaiveTime::MIN)))
}

// Accepts `[-]d`, `[-][d.]hh:mm[:ss[.fffffff]]`, and `[-]d:hh:mm:ss[.fffffff]`.
fn time_span(raw: &str) -> Option<Duration> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = unsigned.split(':').collect();
    let (days, hours, minutes, seconds) = match parts.as_slice() {
        [days] => (digits(days)?, 0, 0, None),
        [head, minutes] => {
            let (days, hours) = days_hours(head)?;
            (days, hours, digits(minutes)?, None)
        }
        [head, minutes, seconds] => {
            let (days, hours) = days_hours(head)?;
            (days, hours, digits(minutes)?, Some(*seconds))
        }
        [days, hours, minutes, seconds] => (
            digits(days)?,
            digits(hours)?,
            digits(minutes)?,
            Some(*seconds),
        ),
        _ => return None,
    };

    let (seconds, nanoseconds) = match seconds {
        Some(seconds) => seconds_fraction(seconds)?,
        None => (0, 0),
    };

    if days > MAX_DAYS || hours >= 24 || minutes >= 60 || seconds >= 60 {
        return None;
    }

    let total = Duration::days(days)
        + Duration::hours(hours)
        + Duration::minutes(minutes)
        + Duration::seconds(seconds)
        + Duration::nanoseconds(nanoseconds);

    Some(if negative { -total } else { total })
}

fn days_hours(head: &str) -> Option<(i64, i64)> {
    match head.split_once('.') {
        Some((days, hours)) => Some((digits(days)?, digits(hours)?)),
        None => Some((0, digits(head)?)),
    }
}

fn seconds_fraction(value: &str) -> Option<(i64, i64)> {
    match value.split_once('.') {
        Some((seconds, fraction)) => {
            if fraction.is_empty() || fraction.len() > MAX_FRACTION_DIGITS {
                return None;
            }

            // Right pad to nanosecond precision (9 digits).
            let nanoseconds = digits(&format!("{fraction:0<9}"))?;
            Some((digits(seconds)?, nanoseconds))
        }
        None => Some((digits(value)?, 0)),
    }
}

fn digits(value: &str) -> Option<i64> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        None
    } else {
        value.parse().ok()
    }
}

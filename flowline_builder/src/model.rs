use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// A two ended numeric range, written on the Cli as `START-END`.
///
/// When the value cannot be parsed into two ends, the range is left at its zero value (`0-0`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range<T> {
    /// The first end of the range.
    pub start: T,
    /// The second end of the range.
    pub end: T,
}

impl<T> Range<T> {
    /// Create a range from its two ends.
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

/// The semantic type a field accepts.
///
/// This is a closed set: every field type that may be bound maps to precisely one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `i32`.
    Integer,
    /// `i64`.
    Long,
    /// `f64`.
    Double,
    /// `f32`.
    Float,
    /// [`Decimal`].
    Decimal,
    /// `bool`, where presence of the flag means `true`.
    Boolean,
    /// `String`.
    String,
    /// `Vec<i32>`, comma delimited.
    IntegerList,
    /// `Vec<i64>`, comma delimited.
    LongList,
    /// `Vec<f64>`, comma delimited.
    DoubleList,
    /// `Vec<f32>`, comma delimited.
    FloatList,
    /// `Vec<Decimal>`, comma delimited.
    DecimalList,
    /// `Vec<String>`, space delimited with quoted runs.
    StringList,
    /// [`NaiveDate`].
    Date,
    /// [`NaiveDateTime`].
    DateTime,
    /// [`Duration`].
    TimeSpan,
    /// `Range<i32>`.
    IntegerRange,
    /// `Range<f64>`.
    DoubleRange,
    /// `Range<f32>`.
    FloatRange,
    /// `Range<Decimal>`.
    DecimalRange,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A value coerced from the Cli, tagged by its [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// See [`Shape::Integer`].
    Integer(i32),
    /// See [`Shape::Long`].
    Long(i64),
    /// See [`Shape::Double`].
    Double(f64),
    /// See [`Shape::Float`].
    Float(f32),
    /// See [`Shape::Decimal`].
    Decimal(Decimal),
    /// See [`Shape::Boolean`].
    Boolean(bool),
    /// See [`Shape::String`].
    String(String),
    /// See [`Shape::IntegerList`].
    IntegerList(Vec<i32>),
    /// See [`Shape::LongList`].
    LongList(Vec<i64>),
    /// See [`Shape::DoubleList`].
    DoubleList(Vec<f64>),
    /// See [`Shape::FloatList`].
    FloatList(Vec<f32>),
    /// See [`Shape::DecimalList`].
    DecimalList(Vec<Decimal>),
    /// See [`Shape::StringList`].
    StringList(Vec<String>),
    /// See [`Shape::Date`].
    Date(NaiveDate),
    /// See [`Shape::DateTime`].
    DateTime(NaiveDateTime),
    /// See [`Shape::TimeSpan`].
    TimeSpan(Duration),
    /// See [`Shape::IntegerRange`].
    IntegerRange(Range<i32>),
    /// See [`Shape::DoubleRange`].
    DoubleRange(Range<f64>),
    /// See [`Shape::FloatRange`].
    FloatRange(Range<f32>),
    /// See [`Shape::DecimalRange`].
    DecimalRange(Range<Decimal>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_default() {
        assert_eq!(Range::<i32>::default(), Range::new(0, 0));
        assert_eq!(Range::<f64>::default(), Range::new(0.0, 0.0));
        assert_eq!(Range::<Decimal>::default(), Range::new(Decimal::ZERO, Decimal::ZERO));
    }
}

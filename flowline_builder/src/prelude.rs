//! Traits which, typically, may be imported without concern: `use flowline::prelude::*`.
use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::api::Fields;
use crate::model::{Range, Shape, Value};

/// Behaviour for a type that parameters may be bound onto.
///
/// The implementation names each bindable field alongside an accessor to it.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::prelude::*;
/// use flowline::Fields;
///
/// #[derive(Default)]
/// struct Copy {
///     from: String,
///     overwrite: bool,
/// }
///
/// impl Bindable for Copy {
///     fn fields() -> Fields<Self> {
///         Fields::new()
///             .field("from", |c: &mut Copy| &mut c.from)
///             .field("overwrite", |c: &mut Copy| &mut c.overwrite)
///     }
/// }
/// ```
pub trait Bindable: Default + 'static {
    /// The accessor table for this type.
    fn fields() -> Fields<Self>;
}

/// Behaviour for a field type that a Cli value may be coerced into.
///
/// Implemented for each supported [`Shape`]; other field types cannot be bound.
pub trait Coercible: Sized {
    /// The shape values are coerced into for this type.
    const SHAPE: Shape;

    /// Unwrap a coerced value, when it carries this type.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! coercible {
    ($type:ty, $variant:ident) => {
        impl Coercible for $type {
            const SHAPE: Shape = Shape::$variant;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

coercible!(i32, Integer);
coercible!(i64, Long);
coercible!(f64, Double);
coercible!(f32, Float);
coercible!(Decimal, Decimal);
coercible!(bool, Boolean);
coercible!(String, String);
coercible!(Vec<i32>, IntegerList);
coercible!(Vec<i64>, LongList);
coercible!(Vec<f64>, DoubleList);
coercible!(Vec<f32>, FloatList);
coercible!(Vec<Decimal>, DecimalList);
coercible!(Vec<String>, StringList);
coercible!(NaiveDate, Date);
coercible!(NaiveDateTime, DateTime);
coercible!(Duration, TimeSpan);
coercible!(Range<i32>, IntegerRange);
coercible!(Range<f64>, DoubleRange);
coercible!(Range<f32>, FloatRange);
coercible!(Range<Decimal>, DecimalRange);

mod capture;
mod core;
mod field;
mod parameter;

pub use self::core::{Application, CommandLine};
pub(crate) use self::core::Commands;
pub use capture::coerce;
pub use field::{Field, Fields};
pub use parameter::Parameter;

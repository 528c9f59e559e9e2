mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{BindError, Binder, ConfigError};
pub use interface::{ConsoleInterface, UserInterface};
pub use middleware::{Outcome, Program};
pub(crate) use printer::Printer;

#[cfg(any(test, feature = "unit_test"))]
pub use interface::util;

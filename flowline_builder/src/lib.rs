//! Builder module for `flowline`.
//! See [documentation root](https://docs.rs/flowline/latest/flowline/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod tokens;

pub use api::*;
pub use model::*;
pub use parser::{BindError, Binder, ConfigError, ConsoleInterface, Outcome, Program, UserInterface};
pub use tokens::tokenize;

#[cfg(feature = "unit_test")]
pub use parser::util::{channel_interface, ReceiverInterface, SenderInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

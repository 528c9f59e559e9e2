//! `flowline` is a command line parser that binds named flags onto typed structs.
//!
//! Rather than describing a grammar, a `flowline` program declares a list of [`Parameter`]s per command.
//! Each parameter is matched by name against the flags on the Cli, and its value is converted into the type of the field it binds onto.
//! `flowline` prioritizes the following concerns:
//! * *Type directed binding*:
//! The user should not call any `&str -> T` conversion functions directly.
//! The type of each field decides how its value is read (see [`Shape`]).
//! * *Forgiving input*:
//! Flags and command names are matched case-insensitively, under any of their names.
//! A value which cannot be read leaves its field untouched, rather than failing the whole command line.
//! * *Command paradigm*:
//! A single Cli may host several commands, each with its own parameters and handler.
//! Alternatively, a single option set may be bound directly (see [`Program::run_options`]).
//! * *Basic UX*:
//! Version and help output is generated from the declarations.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/console_app.rs")]
//! ```
//!
//! ```console
//! $ console_app
//! console_app version 1.0.0
//!
//! A small demonstration of commands.
//!
//! usage: console_app [<command>] [<parameters>]
//!
//! The following commands are available:
//!   greet Greet someone, a few times.
//!   sum   Add up a comma separated list.
//!
//! $ console_app greet --name=World -t=2
//! Hello, World!
//! Hello, World!
//!
//! $ console_app greet -h
//! greet - Greet someone, a few times.
//!
//! The following parameters are available:
//!   -n, --name  Who to greet.
//!   -t, --times How many greetings (default 1).
//!   --shout     Greet loudly.
//!
//! $ console_app sum 1,2,3
//! Sum: 6
//!
//! $ console_app greet --times=3
//! Not all required parameters are defined: --name.
//!
//! The following parameters are available:
//! <truncated>
//! ```
//!
//! # Flags
//! Flags are written as `--name=value` or `-name=value`.
//! A flag without a value (ex: `--verbose`) sets its boolean field.
//! Values containing spaces are double quoted: `--title="A long title"`.
//!
//! Each parameter may be named three ways, all of which are accepted on the Cli:
//! * its full name (`--full`), via [`Parameter::new`] or [`Parameter::full`],
//! * its short name (`-s`), via [`Parameter::with_short`] or [`Parameter::short`],
//! * the name of the field it binds onto, via [`Parameter::with_field`] or [`Parameter::field`].
//!
//! The field a parameter binds onto is found by the first of these names which is present (field, then full, then short).
//!
//! At most one parameter per command may be [`Parameter::positional`].
//! Its value is the first bare word after the command, and it must be supplied.
//! Other parameters are only enforced when [`Parameter::required`].
//!
//! # Fields
//! The target of a command implements [`prelude::Bindable`], naming each field alongside an accessor to it.
//! Only field types which implement [`prelude::Coercible`] may be named; the supported types are:
//! * scalars: `i32`, `i64`, `f64`, `f32`, `rust_decimal::Decimal`, `bool`, `String`,
//! * lists: `Vec<i32>`, `Vec<i64>`, `Vec<f64>`, `Vec<f32>`, `Vec<Decimal>` (comma separated), and `Vec<String>` (space separated),
//! * time: `chrono::NaiveDate`, `chrono::NaiveDateTime`, `chrono::Duration`,
//! * ranges: [`Range`] over `i32`, `f64`, `f32`, or `Decimal` (written `START-END`).
//!
//! ```no_run
#![doc = include_str!("../demos/options.rs")]
//! ```
//!
//! # Testing
//! With the `unit_test` feature, `channel_interface` provides a [`UserInterface`] pair for exercising a Cli program in tests:
//! the command line is supplied up front, and everything printed is collected once the program is done.
pub use flowline_builder::*;

use crate::api::{Application, Commands};
use crate::constant::*;
use crate::parser::base::{BindError, Binder};
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::prelude::Bindable;
use crate::tokens::{is_version, tokenize, CommandTokens};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The result of running a [`Program`].
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The version was requested (`-v` or `--version`) and printed.
    Version,
    /// Help was requested (`-h` or `--help`) and printed.
    Help,
    /// The command line was empty; the application help was printed.
    EmptyInput,
    /// The command is not registered; the application help was printed.
    UnknownCommand(String),
    /// The command ran to completion.
    Completed(String),
    /// The command line could not be bound onto the command; its handler was not invoked.
    Rejected {
        /// The (lower-cased) command name.
        command: String,
        /// The reason the command line was rejected.
        error: BindError,
    },
}

impl Outcome {
    /// The process exit code for this outcome: `1` for an unknown or rejected command, otherwise `0`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Version | Outcome::Help | Outcome::EmptyInput | Outcome::Completed(_) => 0,
            Outcome::UnknownCommand(_) | Outcome::Rejected { .. } => 1,
        }
    }
}

/// The configured command line program.
/// Built via [`CommandLine::build`](crate::CommandLine::build).
pub struct Program<'a> {
    application: Application,
    commands: Commands<'a>,
    options: Binder,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for Program<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program{..}").finish()
    }
}

impl<'a> Program<'a> {
    pub(crate) fn new(
        application: Application,
        commands: Commands<'a>,
        options: Binder,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            application,
            commands,
            options,
            printer,
            user_interface,
        }
    }

    fn print_application(&self) {
        let commands: Vec<(&str, &str)> = self
            .commands
            .iter()
            .map(|(name, command)| (name.as_str(), command.description()))
            .collect();
        self.printer
            .print_application(&self.application, &commands, self.user_interface.as_ref());
    }

    /// Run the command line against the registered commands.
    ///
    /// 1. A command line of precisely `-v` or `--version` prints the version.
    /// 2. An empty command line prints the application help.
    /// 3. `-h` or `--help` anywhere prints the help: for the command, when the first token names one, otherwise for the application.
    /// 4. An unknown command prints the application help.
    /// 5. Otherwise, the command's parameters are bound and its handler is invoked.
    /// If binding fails, the failure is printed alongside the command's parameter help.
    pub fn run_command(self) -> Outcome {
        let raw = self.user_interface.command_line();

        if is_version(&raw) {
            self.printer
                .print_version(&self.application, self.user_interface.as_ref());
            return Outcome::Version;
        }

        let tokens = tokenize(&raw);

        if tokens.is_empty() {
            self.print_application();
            return Outcome::EmptyInput;
        }

        let command_tokens = CommandTokens::parse(&tokens);
        let name = tokens[0].to_lowercase();
        let index = self.commands.iter().position(|(n, _)| n == &name);

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Command '{name}' resolved to index {index:?}.");
        }

        if command_tokens.help {
            match index {
                Some(i) if command_tokens.command.is_some() => {
                    let (name, command) = &self.commands[i];
                    self.printer.print_command(
                        name,
                        command.description(),
                        command.parameters(),
                        self.user_interface.as_ref(),
                    );
                }
                _ => self.print_application(),
            }

            return Outcome::Help;
        }

        let index = match index {
            Some(index) if command_tokens.command.is_some() => index,
            _ => {
                self.print_application();
                return Outcome::UnknownCommand(name);
            }
        };

        let Program {
            mut commands,
            printer,
            user_interface,
            ..
        } = self;
        let (name, command) = &mut commands[index];
        let positional = command_tokens.positional.first().map(|p| p.as_str());

        match command.invoke(&command_tokens.flags, positional, user_interface.as_ref()) {
            Ok(()) => Outcome::Completed(name.clone()),
            Err(error) => {
                user_interface.print(BLANK_LINE.to_string());
                printer.print_parameters(command.parameters(), user_interface.as_ref());
                Outcome::Rejected {
                    command: name.clone(),
                    error,
                }
            }
        }
    }

    /// Run the command line against the free-standing option set, binding it onto a `T`.
    ///
    /// Version and help requests are handled as in [`Program::run_command`], returning `None`.
    /// The first bare token (if any) supplies the default parameter.
    /// If binding fails, the failure is printed alongside the option help, and `None` is returned.
    ///
    /// ### Example
    /// ```
    /// # use flowline_builder as flowline;
    /// use flowline::prelude::*;
    /// use flowline::{CommandLine, Fields, Parameter, UserInterface};
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {
    ///     retries: i32,
    ///     hosts: Vec<String>,
    /// }
    ///
    /// impl Bindable for Options {
    ///     fn fields() -> Fields<Self> {
    ///         Fields::new()
    ///             .field("retries", |o: &mut Options| &mut o.retries)
    ///             .field("hosts", |o: &mut Options| &mut o.hosts)
    ///     }
    /// }
    ///
    /// struct Fixed(&'static str);
    ///
    /// impl UserInterface for Fixed {
    ///     fn command_line(&self) -> String {
    ///         self.0.to_string()
    ///     }
    ///
    ///     fn print(&self, message: String) {
    ///         println!("{message}");
    ///     }
    /// }
    ///
    /// let options: Options = CommandLine::new()
    ///     .option(Parameter::new("retries").short("r"))
    ///     .option(Parameter::new("hosts"))
    ///     .build_with_interface(Box::new(Fixed(r#"-r=3 --hosts="alpha beta""#)))
    ///     .unwrap()
    ///     .run_options()
    ///     .unwrap();
    ///
    /// assert_eq!(options.retries, 3);
    /// assert_eq!(options.hosts, vec!["alpha", "beta"]);
    /// ```
    pub fn run_options<T: Bindable>(self) -> Option<T> {
        let raw = self.user_interface.command_line();

        if is_version(&raw) {
            self.printer
                .print_version(&self.application, self.user_interface.as_ref());
            return None;
        }

        let command_tokens = CommandTokens::parse(&tokenize(&raw));

        if command_tokens.help {
            self.printer
                .print_parameters(self.options.parameters(), self.user_interface.as_ref());
            return None;
        }

        match self.options.bind(
            &T::fields(),
            &command_tokens.flags,
            command_tokens.first_bare(),
            T::default(),
            self.user_interface.as_ref(),
        ) {
            Ok(target) => Some(target),
            Err(_) => {
                self.user_interface.print(BLANK_LINE.to_string());
                self.printer
                    .print_parameters(self.options.parameters(), self.user_interface.as_ref());
                None
            }
        }
    }

    /// Run the command line against the registered commands (see [`Program::run_command`]).
    /// If the outcome is unsuccessful, exits with its error code (via [`std::process::exit`]).
    pub fn run(self) {
        let exit_code = self.run_command().exit_code();

        if exit_code != 0 {
            std::process::exit(exit_code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CommandLine, Fields, Parameter};
    use crate::model::Range;
    use crate::parser::util::{channel_interface, InMemoryInterface};
    use crate::test::assert_contains;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Test {
        parameter1: String,
        parameter2: String,
    }

    impl Bindable for Test {
        fn fields() -> Fields<Self> {
            Fields::new()
                .field("Parameter1", |t: &mut Test| &mut t.parameter1)
                .field("Parameter2", |t: &mut Test| &mut t.parameter2)
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Everything {
        integer: i32,
        long: i64,
        double: f64,
        float: f32,
        decimal: Decimal,
        boolean: bool,
        string: String,
        integers: Vec<i32>,
        longs: Vec<i64>,
        doubles: Vec<f64>,
        floats: Vec<f32>,
        decimals: Vec<Decimal>,
        strings: Vec<String>,
        date: NaiveDate,
        date_time: NaiveDateTime,
        time_span: Duration,
        integer_range: Range<i32>,
        double_range: Range<f64>,
        float_range: Range<f32>,
        decimal_range: Range<Decimal>,
    }

    impl Bindable for Everything {
        fn fields() -> Fields<Self> {
            Fields::new()
                .field("integer", |e: &mut Everything| &mut e.integer)
                .field("long", |e: &mut Everything| &mut e.long)
                .field("double", |e: &mut Everything| &mut e.double)
                .field("float", |e: &mut Everything| &mut e.float)
                .field("decimal", |e: &mut Everything| &mut e.decimal)
                .field("boolean", |e: &mut Everything| &mut e.boolean)
                .field("string", |e: &mut Everything| &mut e.string)
                .field("integers", |e: &mut Everything| &mut e.integers)
                .field("longs", |e: &mut Everything| &mut e.longs)
                .field("doubles", |e: &mut Everything| &mut e.doubles)
                .field("floats", |e: &mut Everything| &mut e.floats)
                .field("decimals", |e: &mut Everything| &mut e.decimals)
                .field("strings", |e: &mut Everything| &mut e.strings)
                .field("date", |e: &mut Everything| &mut e.date)
                .field("date_time", |e: &mut Everything| &mut e.date_time)
                .field("time_span", |e: &mut Everything| &mut e.time_span)
                .field("integer_range", |e: &mut Everything| &mut e.integer_range)
                .field("double_range", |e: &mut Everything| &mut e.double_range)
                .field("float_range", |e: &mut Everything| &mut e.float_range)
                .field("decimal_range", |e: &mut Everything| &mut e.decimal_range)
        }
    }

    fn application() -> Application {
        Application::new("TestApplication", "1.0.0")
            .description("Test description")
            .executable("testapp")
    }

    fn parameters() -> Vec<Parameter> {
        vec![
            Parameter::new("Parameter1").help("Description").required(),
            Parameter::new("Parameter2").short("p"),
        ]
    }

    #[rstest]
    #[case(Outcome::Version, 0)]
    #[case(Outcome::Help, 0)]
    #[case(Outcome::EmptyInput, 0)]
    #[case(Outcome::Completed("a".to_string()), 0)]
    #[case(Outcome::UnknownCommand("a".to_string()), 1)]
    #[case(Outcome::Rejected { command: "a".to_string(), error: BindError::MissingPositional { name: "b".to_string() } }, 1)]
    fn exit_code(#[case] outcome: Outcome, #[case] expected: i32) {
        assert_eq!(outcome.exit_code(), expected);
    }

    #[test]
    fn run_command() {
        // Setup
        let received = RefCell::new(Vec::default());
        let (sender, receiver) = channel_interface(
            r#"test --parameter1="Test string in quote" --parameter2="Second string in quote""#,
        );
        let program = CommandLine::new()
            .application(application())
            .command("test", "description", parameters(), |t: Test| {
                received.borrow_mut().push(t)
            })
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("test".to_string()));
        assert_eq!(
            received.into_inner(),
            vec![Test {
                parameter1: "Test string in quote".to_string(),
                parameter2: "Second string in quote".to_string(),
            }]
        );
        assert_eq!(receiver.consume(), (None, None));
    }

    #[rstest]
    #[case("TEST --PARAMETER1=a -p=b")]
    #[case("test -p=b --parameter1=a")]
    #[case("Test --Parameter1=a --Parameter2=b")]
    fn run_command_case_insensitive(#[case] command_line: &str) {
        // Setup
        let mut received = None;
        let program = CommandLine::new()
            .application(application())
            .command("Test", "description", parameters(), |t: Test| {
                received.replace(t);
            })
            .build_with_interface(Box::new(InMemoryInterface::new(command_line)))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("test".to_string()));
        assert_eq!(
            received,
            Some(Test {
                parameter1: "a".to_string(),
                parameter2: "b".to_string(),
            })
        );
    }

    #[test]
    fn run_command_all_shapes() {
        // Setup
        let mut received = None;
        let command_line = vec![
            "everything",
            "--integer=1",
            "--long=10000000000",
            "--double=1.5",
            "--float=2.5",
            "--decimal=3.25",
            "--boolean",
            "--string=\"text\"",
            "--integers=1,2,3",
            "--longs=4,5",
            "--doubles=0.5,x",
            "--floats=1.5",
            "--decimals=1.1,2.2",
            "--strings=\"a b\"",
            "--date=2025-02-04",
            "--date_time=2025-02-04T12:35:20",
            "--time_span=18:10:20",
            "--integer_range=1-100",
            "--double_range=178.56-895.450",
            "--float_range=0.5-1",
            "--decimal_range=1-2",
        ]
        .join(" ");
        let names = [
            "integer", "long", "double", "float", "decimal", "boolean", "string", "integers",
            "longs", "doubles", "floats", "decimals", "strings", "date", "date_time",
            "time_span", "integer_range", "double_range", "float_range", "decimal_range",
        ];
        let program = CommandLine::new()
            .command(
                "everything",
                "",
                names.iter().map(|n| Parameter::new(*n)).collect(),
                |e: Everything| {
                    received.replace(e);
                },
            )
            .build_with_interface(Box::new(InMemoryInterface::new(command_line)))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("everything".to_string()));
        let date = NaiveDate::from_ymd_opt(2025, 2, 4).unwrap();
        assert_eq!(
            received.unwrap(),
            Everything {
                integer: 1,
                long: 10_000_000_000,
                double: 1.5,
                float: 2.5,
                decimal: Decimal::new(325, 2),
                boolean: true,
                string: "text".to_string(),
                integers: vec![1, 2, 3],
                longs: vec![4, 5],
                doubles: vec![0.5],
                floats: vec![1.5],
                decimals: vec![Decimal::new(11, 1), Decimal::new(22, 1)],
                strings: vec!["a".to_string(), "b".to_string()],
                date,
                date_time: date.and_hms_opt(12, 35, 20).unwrap(),
                time_span: Duration::hours(18) + Duration::minutes(10) + Duration::seconds(20),
                integer_range: Range::new(1, 100),
                double_range: Range::new(178.56, 895.45),
                float_range: Range::new(0.5, 1.0),
                decimal_range: Range::new(Decimal::new(1, 0), Decimal::new(2, 0)),
            }
        );
    }

    #[test]
    fn run_command_positional() {
        // Setup
        let mut received = None;
        let program = CommandLine::new()
            .command(
                "show",
                "",
                vec![Parameter::new("Parameter1").positional(), Parameter::new("Parameter2")],
                |t: Test| {
                    received.replace(t);
                },
            )
            .build_with_interface(Box::new(InMemoryInterface::new(
                "show --parameter2=x first.txt second.txt",
            )))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("show".to_string()));
        assert_eq!(
            received,
            Some(Test {
                parameter1: "first.txt".to_string(),
                parameter2: "x".to_string(),
            })
        );
    }

    #[test]
    fn run_command_positional_missing() {
        // Setup
        let mut invoked = false;
        let (sender, receiver) = channel_interface("show --parameter2=x");
        let program = CommandLine::new()
            .command(
                "show",
                "",
                vec![
                    Parameter::new("Parameter1").positional().help("The file."),
                    Parameter::new("Parameter2"),
                ],
                |_: Test| invoked = true,
            )
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_matches!(outcome, Outcome::Rejected { command, error: BindError::MissingPositional { name } } => {
            assert_eq!(command, "show");
            assert_eq!(name, "--Parameter1");
        });
        assert!(!invoked);
        let (message, error) = receiver.consume();
        assert_eq!(
            message.unwrap(),
            " \nThe following parameters are available:\n  <Parameter1> The file.\n  --Parameter2"
        );
        assert_eq!(
            error.unwrap(),
            "Not all required parameters are defined: --Parameter1."
        );
    }

    #[test]
    fn run_command_required_missing() {
        // Setup
        let mut invoked = false;
        let (sender, receiver) = channel_interface("test --parameter2=b");
        let program = CommandLine::new()
            .application(application())
            .command(
                "test",
                "description",
                vec![Parameter::new("Parameter1").help("Description").required()],
                |_: Test| invoked = true,
            )
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome.exit_code(), 1);
        assert_matches!(outcome, Outcome::Rejected { error: BindError::MissingRequired { .. }, .. });
        assert!(!invoked);
        let (message, error) = receiver.consume();
        assert_eq!(
            message.unwrap(),
            " \nThe following parameters are available:\n  --Parameter1 Description"
        );
        assert_eq!(
            error.unwrap(),
            "Not all required parameters are defined: --Parameter1."
        );
    }

    #[rstest]
    #[case("-v")]
    #[case("--version")]
    fn run_command_version(#[case] command_line: &str) {
        // Setup
        let (sender, receiver) = channel_interface(command_line);
        let program = CommandLine::new()
            .application(application())
            .command("test", "description", parameters(), |_: Test| {})
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Version);
        assert_eq!(receiver.consume(), (Some("1.0.0".to_string()), None));
    }

    fn application_help() -> String {
        vec![
            "TestApplication version 1.0.0",
            " ",
            "Test description",
            " ",
            "usage: testapp [<command>] [<parameters>]",
            " ",
            "The following commands are available:",
            "  test description",
        ]
        .join("\n")
    }

    #[rstest]
    #[case("", Outcome::EmptyInput)]
    #[case("   ", Outcome::EmptyInput)]
    #[case("-h", Outcome::Help)]
    #[case("--help", Outcome::Help)]
    #[case("other -h", Outcome::Help)]
    #[case("--parameter1=1 --help", Outcome::Help)]
    #[case("other", Outcome::UnknownCommand("other".to_string()))]
    #[case("OTHER --p=1", Outcome::UnknownCommand("other".to_string()))]
    #[case("--parameter1=1", Outcome::UnknownCommand("--parameter1=1".to_string()))]
    fn run_command_application_help(#[case] command_line: &str, #[case] expected: Outcome) {
        // Setup
        let mut invoked = false;
        let (sender, receiver) = channel_interface(command_line);
        let program = CommandLine::new()
            .application(application())
            .command("test", "description", parameters(), |_: Test| invoked = true)
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, expected);
        assert!(!invoked);
        assert_eq!(receiver.consume(), (Some(application_help()), None));
    }

    #[rstest]
    #[case("test -h")]
    #[case("TEST --help --parameter1=1")]
    fn run_command_command_help(#[case] command_line: &str) {
        // Setup
        let mut invoked = false;
        let (sender, receiver) = channel_interface(command_line);
        let program = CommandLine::new()
            .application(application())
            .command("test", "description", parameters(), |_: Test| invoked = true)
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Help);
        assert!(!invoked);
        let (message, error) = receiver.consume();
        assert_eq!(
            message.unwrap(),
            vec![
                "test - description",
                " ",
                "The following parameters are available:",
                "  --Parameter1     Description",
                "  -p, --Parameter2",
            ]
            .join("\n")
        );
        assert_eq!(error, None);
    }

    #[test]
    fn run_command_replaced() {
        // Setup
        let first = RefCell::new(0);
        let second = RefCell::new(0);
        let program = CommandLine::new()
            .command("test", "", vec![], |_: Test| *first.borrow_mut() += 1)
            .command("TEST", "", vec![], |_: Test| *second.borrow_mut() += 1)
            .build_with_interface(Box::new(InMemoryInterface::new("test")))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("test".to_string()));
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn run_command_unbound_declaration() {
        // Setup
        let mut received = None;
        let (sender, receiver) = channel_interface("test --parameter1=a --unknown=1 --ghost=2");
        let program = CommandLine::new()
            .command(
                "test",
                "",
                vec![Parameter::new("Parameter1"), Parameter::new("ghost")],
                |t: Test| {
                    received.replace(t);
                },
            )
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let outcome = program.run_command();

        // Verify
        assert_eq!(outcome, Outcome::Completed("test".to_string()));
        assert_eq!(received.unwrap().parameter1, "a");
        let (message, error) = receiver.consume();
        assert_contains!(message.unwrap(), "Parameter --ghost does not bind onto any field");
        assert_eq!(error, None);
    }

    #[rstest]
    #[case("--parameter1=1 --parameter2=100000")]
    #[case("test --parameter1=1 --parameter2=100000")]
    #[case("-p=100000 --PARAMETER1=1")]
    fn run_options(#[case] command_line: &str) {
        // Setup
        let program = CommandLine::new()
            .application(application())
            .option(Parameter::new("Parameter1").required())
            .option(Parameter::new("Parameter2").short("p"))
            .build_with_interface(Box::new(InMemoryInterface::new(command_line)))
            .unwrap();

        // Execute
        let options: Option<Test> = program.run_options();

        // Verify
        assert_eq!(
            options,
            Some(Test {
                parameter1: "1".to_string(),
                parameter2: "100000".to_string(),
            })
        );
    }

    #[rstest]
    #[case("input.txt --parameter2=x", "input.txt")]
    #[case("--parameter2=x input.txt other.txt", "input.txt")]
    fn run_options_positional(#[case] command_line: &str, #[case] expected: &str) {
        // Setup
        let program = CommandLine::new()
            .option(Parameter::new("Parameter1").positional())
            .option(Parameter::new("Parameter2"))
            .build_with_interface(Box::new(InMemoryInterface::new(command_line)))
            .unwrap();

        // Execute
        let options: Option<Test> = program.run_options();

        // Verify
        let options = options.unwrap();
        assert_eq!(options.parameter1, expected);
        assert_eq!(options.parameter2, "x");
    }

    #[test]
    fn run_options_rejected() {
        // Setup
        let (sender, receiver) = channel_interface("--parameter2=x");
        let program = CommandLine::new()
            .option(Parameter::new("Parameter1").help("Description").required())
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let options: Option<Test> = program.run_options();

        // Verify
        assert_eq!(options, None);
        let (message, error) = receiver.consume();
        assert_eq!(
            message.unwrap(),
            " \nThe following parameters are available:\n  --Parameter1 Description"
        );
        assert_eq!(
            error.unwrap(),
            "Not all required parameters are defined: --Parameter1."
        );
    }

    #[rstest]
    #[case("-v", "1.0.0")]
    #[case("--help", "The following parameters are available:\n  --Parameter1 Description")]
    #[case("--parameter1=1 -h", "The following parameters are available:\n  --Parameter1 Description")]
    fn run_options_version_help(#[case] command_line: &str, #[case] expected: &str) {
        // Setup
        let (sender, receiver) = channel_interface(command_line);
        let program = CommandLine::new()
            .application(application())
            .option(Parameter::new("Parameter1").help("Description"))
            .build_with_interface(Box::new(sender))
            .unwrap();

        // Execute
        let options: Option<Test> = program.run_options();

        // Verify
        assert_eq!(options, None);
        assert_eq!(receiver.consume(), (Some(expected.to_string()), None));
    }

    #[test]
    fn run_options_empty() {
        let program = CommandLine::new()
            .option(Parameter::new("Parameter1"))
            .build_with_interface(Box::new(InMemoryInterface::new("")))
            .unwrap();

        let options: Option<Test> = program.run_options();

        assert_eq!(options, Some(Test::default()));
    }
}

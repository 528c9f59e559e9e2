use std::collections::HashMap;

use crate::api::Parameter;
use crate::parser::{BindError, Binder, ConfigError, ConsoleInterface, Printer, Program, UserInterface};
use crate::prelude::Bindable;

/// The application metadata shown by the version and help output.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::Application;
///
/// let application = Application::new("copier", "1.0.0")
///     .description("Copies files, carefully.")
///     .copyright("(c) The copier authors")
///     .executable("copier");
///
/// assert_eq!(application.name(), "copier");
/// assert_eq!(application.version(), "1.0.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    name: String,
    version: String,
    description: String,
    copyright: String,
    executable: String,
}

impl Application {
    /// Create the application metadata.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Document the description for this application.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Document the copyright line for this application.
    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Document the executable name, as used in the `usage:` line.
    pub fn executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    /// The application name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The application version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The application description (empty when undocumented).
    pub fn description_text(&self) -> &str {
        &self.description
    }

    /// The copyright line (empty when undocumented).
    pub fn copyright_text(&self) -> &str {
        &self.copyright
    }

    /// The executable name (empty when undocumented).
    pub fn executable_name(&self) -> &str {
        &self.executable
    }
}

/// A registered command, with its binding target `T` erased.
pub(crate) trait Invocable<'a> {
    fn description(&self) -> &str;

    fn parameters(&self) -> &[Parameter];

    /// Bind the values onto a fresh target, and hand it to the command's handler.
    fn invoke(
        &mut self,
        values: &HashMap<String, String>,
        positional: Option<&str>,
        user_interface: &dyn UserInterface,
    ) -> Result<(), BindError>;
}

struct Command<'a, T> {
    description: String,
    binder: Binder,
    handler: Box<dyn FnMut(T) + 'a>,
}

impl<'a, T: Bindable> Invocable<'a> for Command<'a, T> {
    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> &[Parameter] {
        self.binder.parameters()
    }

    fn invoke(
        &mut self,
        values: &HashMap<String, String>,
        positional: Option<&str>,
        user_interface: &dyn UserInterface,
    ) -> Result<(), BindError> {
        let target = self
            .binder
            .bind(&T::fields(), values, positional, T::default(), user_interface)?;
        (self.handler)(target);
        Ok(())
    }
}

// We need a (dyn .. [ignoring T] ..) here in order to put all the commands of varying targets T under one collection.
pub(crate) type Commands<'a> = Vec<(String, Box<dyn Invocable<'a> + 'a>)>;

/// The command line builder.
///
/// Declares the application, its commands (each with a parameter list and handler), and the free-standing option set.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::prelude::*;
/// use flowline::{Application, CommandLine, Fields, Outcome, Parameter, UserInterface};
///
/// #[derive(Debug, Default)]
/// struct Copy {
///     from: String,
///     to: String,
///     overwrite: bool,
/// }
///
/// impl Bindable for Copy {
///     fn fields() -> Fields<Self> {
///         Fields::new()
///             .field("from", |c: &mut Copy| &mut c.from)
///             .field("to", |c: &mut Copy| &mut c.to)
///             .field("overwrite", |c: &mut Copy| &mut c.overwrite)
///     }
/// }
///
/// // Usually `ConsoleInterface`; a fixed command line for this example.
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
/// let mut copied = Vec::default();
/// let program = CommandLine::new()
///     .application(Application::new("copier", "1.0.0"))
///     .command(
///         "copy",
///         "Copy a file.",
///         vec![
///             Parameter::new("from").short("f").required(),
///             Parameter::new("to").positional(),
///             Parameter::new("overwrite").short("o"),
///         ],
///         |copy: Copy| copied.push(copy),
///     )
///     .build_with_interface(Box::new(Fixed("copy -f=a.txt b.txt --overwrite")))
///     .unwrap();
///
/// assert_eq!(program.run_command(), Outcome::Completed("copy".to_string()));
/// assert_eq!(copied.len(), 1);
/// assert_eq!(copied[0].from, "a.txt");
/// assert_eq!(copied[0].to, "b.txt");
/// assert!(copied[0].overwrite);
/// ```
pub struct CommandLine<'a> {
    application: Application,
    commands: Commands<'a>,
    options: Vec<Parameter>,
    deferred_error: Option<ConfigError>,
}

impl<'a> Default for CommandLine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandLine<'a> {
    /// Create a command line builder.
    pub fn new() -> Self {
        Self {
            application: Application::default(),
            commands: Vec::default(),
            options: Vec::default(),
            deferred_error: None,
        }
    }

    /// Document the application.
    /// If repeated, only the final application will apply.
    pub fn application(mut self, application: Application) -> Self {
        self.application = application;
        self
    }

    /// Add a command, binding its parameters onto `T` and handing the result to the `handler`.
    ///
    /// Command names are matched case-insensitively.
    /// If repeated for the same name, only the final command applies (in the position of the first).
    /// A mistake in the parameter list is reported when the program is built.
    pub fn command<T: Bindable>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<Parameter>,
        handler: impl FnMut(T) + 'a,
    ) -> Self {
        let name = name.into().trim().to_lowercase();

        if name.is_empty() || name.starts_with('-') || name.contains(' ') {
            self.deferred_error.replace(ConfigError(format!(
                "invalid command name '{name}': must be a single word, not beginning with '-'."
            )));
            return self;
        }

        let binder = match Binder::new(parameters) {
            Ok(binder) => binder,
            Err(error) => {
                self.deferred_error.replace(ConfigError(format!(
                    "command '{name}' is misconfigured: {}",
                    error.0
                )));
                return self;
            }
        };

        let command: Box<dyn Invocable<'a> + 'a> = Box::new(Command {
            description: description.into(),
            binder,
            handler: Box::new(handler),
        });

        match self.commands.iter().position(|(existing, _)| existing == &name) {
            Some(index) => self.commands[index].1 = command,
            None => self.commands.push((name, command)),
        }

        self
    }

    /// Add a parameter to the free-standing option set (see [`Program::run_options`]).
    pub fn option(mut self, parameter: Parameter) -> Self {
        self.options.push(parameter);
        self
    }

    /// Build the program with the provided [`UserInterface`].
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<Program<'a>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let options = Binder::new(self.options)?;
        Ok(Program::new(
            self.application,
            self.commands,
            options,
            Printer::terminal(),
            user_interface,
        ))
    }

    /// Build the program over the console, as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_program(self) -> Result<Program<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the program over the console.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> Program<'a> {
        match self.build_program() {
            Ok(program) => program,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

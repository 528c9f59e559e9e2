use terminal_size::{terminal_size, Width};

use crate::api::{Application, Parameter};
use crate::constant::*;
use crate::parser::interface::{ColumnRenderer, UserInterface};

const INDENT: usize = 2;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_version(
        &self,
        application: &Application,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(application.version().to_string());
    }

    /// Print the application banner followed by the available commands, as `(name, description)`.
    pub(crate) fn print_application(
        &self,
        application: &Application,
        commands: &[(&str, &str)],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print(format!(
            "{name} version {version}",
            name = application.name(),
            version = application.version()
        ));

        if !application.copyright_text().is_empty() {
            user_interface.print(application.copyright_text().to_string());
        }

        user_interface.print(BLANK_LINE.to_string());

        if !application.description_text().is_empty() {
            user_interface.print(application.description_text().to_string());
            user_interface.print(BLANK_LINE.to_string());
        }

        if !application.executable_name().is_empty() {
            user_interface.print(format!(
                "usage: {executable} [<command>] [<parameters>]",
                executable = application.executable_name()
            ));
            user_interface.print(BLANK_LINE.to_string());
        }

        if !commands.is_empty() {
            user_interface.print(COMMANDS_HEADER.to_string());
            self.print_rows(commands.iter().copied(), user_interface);
        }
    }

    /// Print the help for a single command: its name and description, followed by its parameters.
    pub(crate) fn print_command(
        &self,
        name: &str,
        description: &str,
        parameters: &[Parameter],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        if description.is_empty() {
            user_interface.print(name.to_string());
        } else {
            user_interface.print(format!("{name} - {description}"));
        }

        if !parameters.is_empty() {
            user_interface.print(BLANK_LINE.to_string());
            self.print_parameters(parameters, user_interface);
        }
    }

    pub(crate) fn print_parameters(
        &self,
        parameters: &[Parameter],
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let lefts: Vec<String> = parameters.iter().map(left_column).collect();

        user_interface.print(PARAMETERS_HEADER.to_string());
        self.print_rows(
            lefts
                .iter()
                .zip(parameters.iter())
                .map(|(left, parameter)| (left.as_str(), parameter.help_message().unwrap_or(""))),
            user_interface,
        );
    }

    fn print_rows<'r>(
        &self,
        rows: impl Iterator<Item = (&'r str, &'r str)> + Clone,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        // The left column is padded to its longest entry, plus one.
        let left_width = rows
            .clone()
            .map(|(left, _)| left.chars().count())
            .max()
            .unwrap_or(0)
            + 1;
        let renderer = ColumnRenderer::guided(INDENT, left_width, self.terminal_width);

        for (left, middle) in rows {
            for line in renderer.render(left, middle) {
                user_interface.print(line);
            }
        }
    }
}

fn left_column(parameter: &Parameter) -> String {
    if parameter.is_positional() {
        let name = parameter
            .full_name()
            .or(parameter.field_name())
            .or(parameter.short_name())
            .unwrap_or_default();
        return format!("<{name}>");
    }

    match (parameter.short_name(), parameter.full_name()) {
        (Some(short), Some(full)) => format!("-{short}, --{full}"),
        (None, Some(full)) => format!("--{full}"),
        (Some(short), None) => format!("-{short}"),
        (None, None) => format!("--{}", parameter.field_name().unwrap_or_default()),
    }
}

use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The line oriented text sink and raw command line source used by the parser.
///
/// The parser never writes to the console directly; all output goes through this interface.
pub trait UserInterface {
    /// The raw command line, with the executable already stripped.
    fn command_line(&self) -> String;

    /// Write a line of output.
    fn print(&self, message: String);

    /// Write a line of error output.
    /// Defaults to [`UserInterface::print`].
    fn print_error(&self, message: String) {
        self.print(message);
    }
}

/// The [`UserInterface`] over the process arguments and standard out/err.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn command_line(&self) -> String {
        join_arguments(env::args().skip(1))
    }

    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

// Re-assemble the (already shell split) arguments into one command line.
// Arguments containing spaces are re-quoted, so they survive tokenization as one token.
fn join_arguments(arguments: impl Iterator<Item = String>) -> String {
    arguments
        .map(|argument| {
            if !argument.contains(' ') {
                argument
            } else if let Some((name, value)) = argument
                .split_once('=')
                .filter(|(name, _)| name.starts_with('-') && !name.contains(' '))
            {
                format!("{name}=\"{value}\"")
            } else {
                format!("\"{argument}\"")
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders an indented two column layout: a left column padded to a fixed width, and a (possibly wrapped) middle column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    left: usize,
    middle: Option<usize>,
}

impl ColumnRenderer {
    /// Produce a renderer that fits the middle column into the total width, when one is known.
    pub(crate) fn guided(indent: usize, left: usize, total_width: Option<usize>) -> Self {
        let middle = total_width.map(|total_width| {
            let non_middle = indent + left;
            let target_total_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;

            if non_middle + MINIMUM_MIDDLE_WIDTH <= target_total_width {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Columns {non_middle} fit within the target total {target_total_width}.");
                }

                target_total_width - non_middle
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Columns {non_middle} do not fit within the target total {target_total_width}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.");
                }

                MINIMUM_MIDDLE_WIDTH
            }
        });

        Self::new(indent, left, middle)
    }

    pub(crate) fn new(indent: usize, left: usize, middle: Option<usize>) -> Self {
        Self {
            indent,
            left,
            middle,
        }
    }

    pub(crate) fn render(&self, left: &str, middle: &str) -> Vec<String> {
        let indent = self.indent;
        let left_column_width = self.left;
        let middle_parts = match self.middle {
            Some(width) => chunk(middle, width),
            None => vec![middle.trim().to_string()],
        };
        let mut out = Vec::default();

        for (i, part) in middle_parts.iter().enumerate() {
            let line = if i == 0 {
                format!("{:indent$}{:left_column_width$}{}", "", left, part)
            } else {
                format!("{:indent$}{:left_column_width$}{}", "", "", part)
            };
            out.push(line.trim_end().to_string());
        }

        if out.is_empty() {
            out.push(format!("{:indent$}{}", "", left).trim_end().to_string());
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// In memory and channel based [`UserInterface`]s.
///
/// *The channel interface is available using the 'unit_test' crate feature only.*
/// [`UserInterface`] doubles for testing Cli programs.
#[cfg(any(test, feature = "unit_test"))]
pub mod util {
    use super::UserInterface;
    use std::sync::mpsc;

    #[cfg(test)]
    pub(crate) use in_memory::InMemoryInterface;


    /// Create a connected pair of interfaces.
    ///
    /// The sender is handed to the program under test; the receiver collects everything the program printed once the sender is dropped.
    pub fn channel_interface(command_line: impl Into<String>) -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let sender = SenderInterface {
            command_line: command_line.into(),
            message_tx,
            error_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
        };
        (sender, receiver)
    }

    /// The sending half of [`channel_interface`].
    pub struct SenderInterface {
        command_line: String,
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            // The receiver may already be gone; nothing is left to notify.
            let _ = self.message_tx.send(None);
            let _ = self.error_tx.send(None);
        }
    }

    impl UserInterface for SenderInterface {
        fn command_line(&self) -> String {
            self.command_line.clone()
        }

        fn print(&self, message: String) {
            let _ = self.message_tx.send(Some(message));
        }

        fn print_error(&self, message: String) {
            let _ = self.error_tx.send(Some(message));
        }
    }

    /// The receiving half of [`channel_interface`].
    pub struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        /// Collect the printed output and error output, each joined by newlines.
        ///
        /// Blocks until the sender is dropped.
        pub fn consume(self) -> (Option<String>, Option<String>) {
            let ReceiverInterface {
                message_rx,
                error_rx,
            } = self;

            (drain(message_rx), drain(error_rx))
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        // A disconnected channel ends the drain, just like the explicit `None`.
        while let Ok(Some(message)) = receiver.recv() {
            values.push(message);
        }

        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}

use std::collections::HashMap;

use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
struct Lexeme {
    text: String,
    quoted: bool,
}

/// Split a raw command line into its tokens.
///
/// Tokens are delimited by unquoted spaces and by the start of each flag (`-` or `--`).
/// Double quotes group their contents into a single token and are not emitted.
/// A flag written as `--name="some value"` produces the single token `--name=some value`.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::tokenize;
///
/// assert_eq!(
///     tokenize(r#"copy --from="my file.txt" -a=1--bee=2"#),
///     vec!["copy", "--from=my file.txt", "-a=1", "--bee=2"],
/// );
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::default();
    // Whether the last token emitted is a flag awaiting its (quoted) value.
    let mut open_flag = false;

    for Lexeme { text, quoted } in lex(raw) {
        if quoted && open_flag {
            if let Some(last) = tokens.last_mut() {
                last.push_str(&text);
            }

            open_flag = false;
            continue;
        }

        open_flag = !quoted && text.starts_with('-') && text.ends_with('=');
        tokens.push(text);
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Tokenized '{raw}' into {tokens:?}.");
    }

    tokens
}

fn lex(raw: &str) -> Vec<Lexeme> {
    let characters: Vec<char> = raw.trim().chars().collect();
    let mut lexemes = Vec::default();
    let mut current = String::default();
    let mut in_quote = false;

    for (i, c) in characters.iter().enumerate() {
        match c {
            '"' => {
                flush(&mut lexemes, &mut current, in_quote);
                in_quote = !in_quote;
            }
            ' ' if !in_quote => flush(&mut lexemes, &mut current, false),
            '-' if !in_quote => {
                let flag_start = i == 0 || characters[i - 1] == ' ';
                let flag_joined = characters.get(i + 1) == Some(&'-')
                    && current.starts_with('-')
                    && current.chars().count() >= 3;

                if flag_start || flag_joined {
                    flush(&mut lexemes, &mut current, false);
                }

                current.push('-');
            }
            _ => current.push(*c),
        }
    }

    flush(&mut lexemes, &mut current, in_quote);
    lexemes
}

fn flush(lexemes: &mut Vec<Lexeme>, current: &mut String, quoted: bool) {
    let text = current.trim();

    if !text.is_empty() {
        lexemes.push(Lexeme {
            text: text.to_string(),
            quoted,
        });
    }

    current.clear();
}

/// Decompose a flag token into its name and (possibly empty) value.
///
/// Returns `None` when the token is not a flag, or when the flag has no name.
pub(crate) fn split_flag(token: &str) -> Option<(&str, &str)> {
    let stripped = if let Some(rest) = token.strip_prefix("--") {
        rest
    } else {
        token.strip_prefix('-')?
    };

    let (name, value) = match stripped.split_once('=') {
        Some((name, value)) => (name, value),
        None => (stripped, ""),
    };

    if name.is_empty() {
        None
    } else {
        Some((name, value))
    }
}

pub(crate) fn is_version(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed == format!("-{VERSION_SHORT}") || trimmed == format!("--{VERSION_NAME}")
}

fn is_help(token: &str) -> bool {
    token == format!("-{HELP_SHORT}") || token == format!("--{HELP_NAME}")
}

/// The tokens of a command line, classified.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CommandTokens {
    /// The first token, when it is not a flag.
    pub(crate) command: Option<String>,
    /// Every other token that is not a flag.
    pub(crate) positional: Vec<String>,
    /// Flags, keyed by their lower-cased name.
    pub(crate) flags: HashMap<String, String>,
    pub(crate) help: bool,
}

impl CommandTokens {
    pub(crate) fn parse(tokens: &[String]) -> Self {
        let mut out = CommandTokens::default();

        for (i, token) in tokens.iter().enumerate() {
            if is_help(token) {
                out.help = true;
            } else if token.starts_with('-') {
                match split_flag(token) {
                    Some((name, value)) => {
                        // Repeated flags keep the last value.
                        out.flags.insert(name.to_lowercase(), value.to_string());
                    }
                    None => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Dropping nameless flag '{token}'.");
                        }
                    }
                }
            } else if i == 0 {
                out.command.replace(token.clone());
            } else {
                out.positional.push(token.clone());
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Classified tokens: {out:?}.");
        }

        out
    }

    /// The first bare token, whether it sits in the command slot or not.
    pub(crate) fn first_bare(&self) -> Option<&str> {
        self.command
            .as_deref()
            .or_else(|| self.positional.first().map(|p| p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("test", vec!["test"])]
    #[case("  test  ", vec!["test"])]
    #[case("test --parameter1=1", vec!["test", "--parameter1=1"])]
    #[case("test   -p=1    -q", vec!["test", "-p=1", "-q"])]
    #[case("-a=1--bee=2", vec!["-a=1", "--bee=2"])]
    #[case("-ab--c", vec!["-ab", "--c"])]
    #[case("-a--c", vec!["-a--c"])]
    #[case("range --r=1-100", vec!["range", "--r=1-100"])]
    #[case("test file.txt --flag", vec!["test", "file.txt", "--flag"])]
    #[case(r#"copy "my file.txt""#, vec!["copy", "my file.txt"])]
    #[case(r#"a"b"c"#, vec!["a", "b", "c"])]
    #[case(r#"x "" y"#, vec!["x", "y"])]
    #[case(r#"x "  padded  ""#, vec!["x", "padded"])]
    fn tokenize_cases(#[case] raw: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(raw), strings(&expected));
    }

    #[test]
    fn tokenize_quoted_flag_values() {
        // Setup
        let raw = r#"test --parameter1="Test string in quote" --parameter2="Second string in quote""#;

        // Execute
        let tokens = tokenize(raw);

        // Verify
        assert_eq!(
            tokens,
            strings(&[
                "test",
                "--parameter1=Test string in quote",
                "--parameter2=Second string in quote",
            ])
        );
    }

    #[test]
    fn tokenize_quoted_after_complete_flag() {
        // The flag already carries a value, so the quoted run stands alone.
        assert_eq!(
            tokenize(r#"--a=1 "b c""#),
            strings(&["--a=1", "b c"])
        );
        // Only the first quoted run attaches to the open flag.
        assert_eq!(
            tokenize(r#"--a="b" "c""#),
            strings(&["--a=b", "c"])
        );
    }

    #[test]
    fn tokenize_quote_keeps_dashes() {
        assert_eq!(
            tokenize(r#"--list="-x --y""#),
            strings(&["--list=-x --y"])
        );
    }

    #[test]
    fn tokenize_unterminated_quote() {
        assert_eq!(tokenize(r#"a "b c"#), strings(&["a", "b c"]));
    }

    #[rstest]
    #[case("--name=value", Some(("name", "value")))]
    #[case("-n=value", Some(("n", "value")))]
    #[case("--name", Some(("name", "")))]
    #[case("-n", Some(("n", "")))]
    #[case("--name=", Some(("name", "")))]
    #[case("--name=a=b", Some(("name", "a=b")))]
    #[case("---name", Some(("-name", "")))]
    #[case("-", None)]
    #[case("--", None)]
    #[case("--=value", None)]
    #[case("name", None)]
    fn split_flag_cases(#[case] token: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_flag(token), expected);
    }

    #[rstest]
    #[case("-v", true)]
    #[case("--version", true)]
    #[case("  --version ", true)]
    #[case("-V", false)]
    #[case("test -v", false)]
    #[case("--version test", false)]
    #[case("", false)]
    fn version(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(is_version(raw), expected);
    }

    #[test]
    fn parse_command() {
        // Setup
        let tokens = tokenize("Test file.txt --Parameter1=1 -p=2 other --flag");

        // Execute
        let ct = CommandTokens::parse(&tokens);

        // Verify
        assert_eq!(ct.command, Some("Test".to_string()));
        assert_eq!(ct.positional, strings(&["file.txt", "other"]));
        assert_eq!(
            ct.flags,
            HashMap::from([
                ("parameter1".to_string(), "1".to_string()),
                ("p".to_string(), "2".to_string()),
                ("flag".to_string(), "".to_string()),
            ])
        );
        assert!(!ct.help);
        assert_eq!(ct.first_bare(), Some("Test"));
    }

    #[test]
    fn parse_without_command() {
        // Setup
        let tokens = tokenize("--parameter1=1 file.txt");

        // Execute
        let ct = CommandTokens::parse(&tokens);

        // Verify
        assert_eq!(ct.command, None);
        assert_eq!(ct.positional, strings(&["file.txt"]));
        assert_eq!(ct.first_bare(), Some("file.txt"));
    }

    #[test]
    fn parse_empty() {
        let ct = CommandTokens::parse(&[]);
        assert_eq!(ct, CommandTokens::default());
        assert_eq!(ct.first_bare(), None);
    }

    #[test]
    fn parse_repeated_flag() {
        let ct = CommandTokens::parse(&tokenize("--a=1 --A=2"));
        assert_eq!(
            ct.flags,
            HashMap::from([("a".to_string(), "2".to_string())])
        );
    }

    #[rstest]
    #[case("-h")]
    #[case("--help")]
    #[case("test -h")]
    #[case("test --p=1 --help")]
    fn parse_help(#[case] raw: &str) {
        let ct = CommandTokens::parse(&tokenize(raw));
        assert!(ct.help);
        assert!(!ct.flags.contains_key("h"));
        assert!(!ct.flags.contains_key("help"));
    }

    #[rstest]
    #[case("-H", "h")]
    #[case("test --HELP", "help")]
    #[case("--Help", "help")]
    fn parse_help_exact(#[case] raw: &str, #[case] flag: &str) {
        let ct = CommandTokens::parse(&tokenize(raw));
        assert!(!ct.help);
        assert_eq!(ct.flags.get(flag), Some(&String::default()));
    }
}

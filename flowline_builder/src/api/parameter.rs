/// A declared Cli parameter.
///
/// Each parameter is identified by up to three names: its full name (`--full`), its short name (`-s`), and the name of the field it binds onto.
/// Flags are matched against all three, case-insensitively.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use flowline::Parameter;
///
/// let parameter = Parameter::new("source")
///     .short("s")
///     .field("from")
///     .help("The file to copy from.")
///     .required();
///
/// assert_eq!(parameter.identifiers(), vec!["from", "source", "s"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Parameter {
    full_name: Option<String>,
    short_name: Option<String>,
    field_name: Option<String>,
    help: Option<String>,
    required: bool,
    positional: bool,
}

impl Parameter {
    /// Create a parameter with a full name (`--full_name`).
    pub fn new(full_name: impl Into<String>) -> Self {
        Self::default().full(full_name)
    }

    /// Create a parameter with only a short name (`-s`).
    pub fn with_short(short_name: impl Into<String>) -> Self {
        Self::default().short(short_name)
    }

    /// Create a parameter identified only by the field it binds onto.
    pub fn with_field(field_name: impl Into<String>) -> Self {
        Self::default().field(field_name)
    }

    /// Document the full name of this parameter.
    /// If repeated, only the final name applies.
    pub fn full(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = non_empty(full_name);
        self
    }

    /// Document the short name of this parameter.
    /// If repeated, only the final name applies.
    pub fn short(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = non_empty(short_name);
        self
    }

    /// Bind this parameter onto the named field, rather than the field matching its full or short name.
    /// If repeated, only the final name applies.
    pub fn field(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = non_empty(field_name);
        self
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final help message applies.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// Mark this parameter as required: binding fails when it is not supplied.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark this parameter as the default (positional) parameter.
    ///
    /// Its value is taken from the first bare token of the command line, rather than a flag.
    /// Binding fails when no such token is present.
    pub fn positional(mut self) -> Self {
        self.positional = true;
        self
    }

    /// The full name, if any.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// The short name, if any.
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    /// The bound field name, if any.
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// The help message, if any.
    pub fn help_message(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether this parameter is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether this parameter is the default (positional) parameter.
    pub fn is_positional(&self) -> bool {
        self.positional
    }

    /// The identifiers of this parameter, in priority order: field name, full name, short name.
    pub fn identifiers(&self) -> Vec<&str> {
        [self.field_name(), self.full_name(), self.short_name()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// The name used to refer to this parameter in messages.
    pub fn display_name(&self) -> String {
        match (self.full_name(), self.short_name(), self.field_name()) {
            (Some(full), _, _) => format!("--{full}"),
            (None, Some(short), _) => format!("-{short}"),
            (None, None, Some(field)) => format!("--{field}"),
            (None, None, None) => String::default(),
        }
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();

    if value.trim().is_empty() {
        None
    } else {
        Some(value.trim().to_string())
    }
}

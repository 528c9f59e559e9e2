use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::api::{Fields, Parameter};
use crate::matcher::{ResolutionError, ResolutionTable};
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::{debug, warn};

/// A mistake in the command line configuration, found while building.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<ResolutionError> for ConfigError {
    fn from(error: ResolutionError) -> Self {
        ConfigError(error.to_string())
    }
}

/// A failure to bind the command line onto its target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// At least one required parameter was not supplied (or could not be applied).
    #[error("Not all required parameters are defined: {}.", names.join(", "))]
    MissingRequired {
        /// The display names of every unsatisfied required parameter.
        names: Vec<String>,
    },

    /// The default (positional) parameter was not supplied.
    #[error("Not all required parameters are defined: {name}.")]
    MissingPositional {
        /// The display name of the default parameter.
        name: String,
    },
}

/// Binds command line values onto a target, according to a list of parameter declarations.
///
/// The binder is immutable once built, and may be reused across (or shared between) parses.
///
/// ### Example
/// ```
/// # use flowline_builder as flowline;
/// use std::collections::HashMap;
/// use flowline::prelude::*;
/// use flowline::{Binder, ConsoleInterface, Fields, Parameter};
///
/// #[derive(Debug, Default)]
/// struct Resize {
///     file: String,
///     width: i32,
/// }
///
/// impl Bindable for Resize {
///     fn fields() -> Fields<Self> {
///         Fields::new()
///             .field("file", |r: &mut Resize| &mut r.file)
///             .field("width", |r: &mut Resize| &mut r.width)
///     }
/// }
///
/// let binder = Binder::new(vec![
///     Parameter::new("file").positional(),
///     Parameter::new("width").short("w").required(),
/// ])
/// .unwrap();
/// let values = HashMap::from([("w".to_string(), "640".to_string())]);
///
/// let resize = binder
///     .bind(&Resize::fields(), &values, Some("cat.png"), Resize::default(), &ConsoleInterface::default())
///     .unwrap();
///
/// assert_eq!(resize.file, "cat.png");
/// assert_eq!(resize.width, 640);
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    table: ResolutionTable,
}

impl Binder {
    /// Build a binder, validating the parameter declarations.
    ///
    /// Fails when a declaration has no name, an identifier is repeated across declarations, more than one declaration is positional, or a declaration uses the reserved `h`/`help` names.
    pub fn new(parameters: Vec<Parameter>) -> Result<Self, ConfigError> {
        Ok(Self {
            table: ResolutionTable::new(&parameters)?,
        })
    }

    /// The declarations of this binder, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        self.table.parameters()
    }

    /// Bind the flag `values` (keyed by lower-cased identifier) and `positional` value onto the `target`.
    ///
    /// Values that cannot be coerced into their field are skipped, leaving the field untouched.
    /// Fails when the default parameter has no positional value, or when a required parameter is not satisfied.
    /// Each failure is also written to the `user_interface`.
    pub fn bind<T>(
        &self,
        fields: &Fields<T>,
        values: &HashMap<String, String>,
        positional: Option<&str>,
        mut target: T,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<T, BindError> {
        let mut satisfied: HashSet<usize> = HashSet::default();

        if let Some((index, parameter)) = self.table.positional() {
            match positional.filter(|p| !p.trim().is_empty()) {
                Some(value) => {
                    if self.assign(fields, parameter, value, &mut target, user_interface) {
                        satisfied.insert(index);
                    }
                }
                None => {
                    let error = BindError::MissingPositional {
                        name: parameter.display_name(),
                    };
                    user_interface.print_error(error.to_string());
                    return Err(error);
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            for identifier in values.keys() {
                if self.table.resolve(identifier).is_none() {
                    debug!("Ignoring unknown parameter '{identifier}'.");
                }
            }
        }

        for (index, parameter) in self.parameters().iter().enumerate() {
            // Aliases are tried in priority order, until one of their values applies.
            let present = parameter
                .identifiers()
                .into_iter()
                .filter_map(|identifier| values.get(&identifier.to_lowercase()));

            for value in present {
                if self.assign(fields, parameter, value, &mut target, user_interface) {
                    satisfied.insert(index);
                    break;
                }

                if fields.resolve(parameter).is_none() {
                    break;
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Satisfied parameters: {satisfied:?}.");
        }

        let missing: Vec<String> = self
            .parameters()
            .iter()
            .enumerate()
            .filter(|(index, parameter)| {
                parameter.is_required() && !parameter.is_positional() && !satisfied.contains(index)
            })
            .map(|(_, parameter)| parameter.display_name())
            .collect();

        if missing.is_empty() {
            Ok(target)
        } else {
            let error = BindError::MissingRequired { names: missing };
            user_interface.print_error(error.to_string());
            Err(error)
        }
    }

    fn assign<T>(
        &self,
        fields: &Fields<T>,
        parameter: &Parameter,
        value: &str,
        target: &mut T,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> bool {
        match fields.resolve(parameter) {
            Some(field) => {
                let assigned = field.assign(target, value);

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Parameter {} into field '{}' ({}): '{value}' assigned={assigned}.",
                        parameter.display_name(),
                        field.name(),
                        field.shape(),
                    );
                }

                assigned
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    warn!(
                        "Parameter {} has no field on {}.",
                        parameter.display_name(),
                        std::any::type_name::<T>(),
                    );
                }

                user_interface.print(format!(
                    "Parameter {} does not bind onto any field of {}.",
                    parameter.display_name(),
                    std::any::type_name::<T>(),
                ));
                false
            }
        }
    }
}

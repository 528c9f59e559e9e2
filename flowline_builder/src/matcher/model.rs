use std::collections::HashMap;
use thiserror::Error;

use crate::api::Parameter;
use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ResolutionError {
    #[error("parameter #{0} has no full, short, or field name.")]
    Anonymous(usize),

    #[error("cannot duplicate the parameter '{0}'.")]
    DuplicateIdentifier(String),

    #[error("cannot declare both '{0}' and '{1}' as the default parameter.")]
    MultiplePositional(String, String),

    #[error("parameter '{0}' is reserved for help.")]
    Reserved(String),
}

/// The lookup from every (lower-cased) parameter identifier to its declaration.
#[derive(Debug, Clone)]
pub(crate) struct ResolutionTable {
    parameters: Vec<Parameter>,
    identifiers: HashMap<String, usize>,
    positional: Option<usize>,
}

impl ResolutionTable {
    pub(crate) fn new(parameters: &[Parameter]) -> Result<Self, ResolutionError> {
        let mut identifiers: HashMap<String, usize> = HashMap::default();
        let mut positional: Option<usize> = None;

        for (index, parameter) in parameters.iter().enumerate() {
            let names = parameter.identifiers();

            if names.is_empty() {
                return Err(ResolutionError::Anonymous(index));
            }

            for name in names {
                let identifier = name.to_lowercase();

                if identifier == HELP_NAME || identifier == HELP_SHORT {
                    return Err(ResolutionError::Reserved(name.to_string()));
                }

                match identifiers.get(&identifier) {
                    // Aliases of one declaration may repeat.
                    Some(existing) if *existing == index => {}
                    Some(_) => {
                        return Err(ResolutionError::DuplicateIdentifier(name.to_string()));
                    }
                    None => {
                        identifiers.insert(identifier, index);
                    }
                }
            }

            if parameter.is_positional() {
                if let Some(existing) = positional.replace(index) {
                    return Err(ResolutionError::MultiplePositional(
                        parameters[existing].display_name(),
                        parameter.display_name(),
                    ));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Resolution table: {identifiers:?}, positional: {positional:?}.");
        }

        Ok(Self {
            parameters: parameters.to_vec(),
            identifiers,
            positional,
        })
    }

    pub(crate) fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Find the declaration registered under an identifier, ignoring case.
    pub(crate) fn resolve(&self, identifier: &str) -> Option<(usize, &Parameter)> {
        self.identifiers
            .get(&identifier.to_lowercase())
            .map(|index| (*index, &self.parameters[*index]))
    }

    pub(crate) fn positional(&self) -> Option<(usize, &Parameter)> {
        self.positional
            .map(|index| (index, &self.parameters[index]))
    }
}

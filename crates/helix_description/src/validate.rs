//! Advisory validation of canonical descriptions.
//!
//! The adapter is intentionally permissive: an enumerated default that
//! resolved to neither key nor label is stored as given. Validation is how
//! a consumer finds out; it never runs implicitly.

use crate::error::{DescriptionError, DescriptionResult};
use crate::parameter::{Parameter, ParameterKind};
use crate::tool::ToolDescription;
use std::collections::HashSet;

/// Validate the invariants of a canonical description
///
/// Checks, for every `Enum` parameter: non-empty option set, unique option
/// keys, and a default (when present) that resolves to an option key. Also
/// checks that numeric bounds are decimal literals.
///
/// # Errors
///
/// Returns the first violated invariant.
pub fn validate_description(description: &ToolDescription) -> DescriptionResult<()> {
    for parameter in description.parameters() {
        validate_parameter(parameter)?;
    }
    Ok(())
}

fn validate_parameter(parameter: &Parameter) -> DescriptionResult<()> {
    if parameter.kind == ParameterKind::Enum {
        if parameter.options.is_empty() {
            return Err(DescriptionError::EmptyOptions {
                parameter: parameter.name.id.clone(),
            });
        }

        let mut seen = HashSet::new();
        for option in &parameter.options {
            if !seen.insert(option.id.as_str()) {
                return Err(DescriptionError::DuplicateOption {
                    parameter: parameter.name.id.clone(),
                    key: option.id.clone(),
                });
            }
        }

        if let Some(default) = &parameter.default {
            if !parameter.default_resolves() {
                return Err(DescriptionError::UnknownDefault {
                    parameter: parameter.name.id.clone(),
                    default: default.clone(),
                });
            }
        }
    }

    for bound in [&parameter.min, &parameter.max].into_iter().flatten() {
        if bound.parse::<f64>().is_err() {
            return Err(DescriptionError::InvalidBound {
                parameter: parameter.name.id.clone(),
                bound: bound.clone(),
            });
        }
    }

    Ok(())
}

//! Error types for the canonical description model.

use std::fmt;

/// Description result type
pub type DescriptionResult<T> = Result<T, DescriptionError>;

/// Description error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    /// An enumerated parameter carries no options
    EmptyOptions {
        /// Parameter name
        parameter: String,
    },

    /// An enumerated parameter declares the same option key twice
    DuplicateOption {
        /// Parameter name
        parameter: String,
        /// Offending option key
        key: String,
    },

    /// An enumerated parameter's default is not one of its option keys
    UnknownDefault {
        /// Parameter name
        parameter: String,
        /// The unresolvable default value
        default: String,
    },

    /// A numeric bound is not a decimal literal
    InvalidBound {
        /// Parameter name
        parameter: String,
        /// The offending bound value
        bound: String,
    },
}

impl fmt::Display for DescriptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOptions { parameter } => {
                write!(f, "Enum parameter {} has no options", parameter)
            }
            Self::DuplicateOption { parameter, key } => {
                write!(f, "Duplicate option key {} in parameter {}", key, parameter)
            }
            Self::UnknownDefault { parameter, default } => {
                write!(
                    f,
                    "Default {} of parameter {} is not an option key",
                    default, parameter
                )
            }
            Self::InvalidBound { parameter, bound } => {
                write!(f, "Bound {} of parameter {} is not decimal", bound, parameter)
            }
        }
    }
}

impl std::error::Error for DescriptionError {}

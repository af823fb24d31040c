//! Canonical tool parameters with typed value domains.

use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a canonical parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKind {
    /// Whole number
    Integer,
    /// Decimal number
    Decimal,
    /// Free-form text
    String,
    /// One choice out of an enumerated option set
    Enum,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "INTEGER"),
            Self::Decimal => write!(f, "DECIMAL"),
            Self::String => write!(f, "STRING"),
            Self::Enum => write!(f, "ENUM"),
        }
    }
}

/// A canonical tool parameter
///
/// Bounds are kept as decimal strings; they are rendered and compared by
/// the UI layer, never arithmetically evaluated here. For `Enum` parameters
/// the option sequence order is the external record's native order and
/// callers must not assume it is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name and label
    pub name: Name,
    /// Semantic type
    pub kind: ParameterKind,
    /// Enumerated option set as (key, label) pairs, empty for non-Enum kinds
    pub options: Vec<Name>,
    /// Lower bound as a decimal string
    pub min: Option<String>,
    /// Upper bound as a decimal string
    pub max: Option<String>,
    /// Default value; for Enum kinds this should resolve to an option key
    pub default: Option<String>,
    /// Free-text help
    pub help: Option<String>,
    /// True if the source marked the parameter advanced or additional
    pub optional: bool,
}

impl Parameter {
    /// Create a parameter with the given name and kind
    #[must_use]
    pub fn new(name: Name, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            options: Vec::new(),
            min: None,
            max: None,
            default: None,
            help: None,
            optional: false,
        }
    }

    /// Set the enumerated option sequence
    #[must_use]
    pub fn with_options(mut self, options: Vec<Name>) -> Self {
        self.options = options;
        self
    }

    /// Set the lower bound
    #[must_use]
    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound
    #[must_use]
    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the default value
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the help text
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Mark the parameter optional
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Look up an option by key
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&Name> {
        self.options.iter().find(|o| o.id == key)
    }

    /// True if the default value resolves to one of the option keys
    #[must_use]
    pub fn default_resolves(&self) -> bool {
        match &self.default {
            Some(default) => self.options.iter().any(|o| &o.id == default),
            None => false,
        }
    }
}

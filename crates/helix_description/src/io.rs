//! Canonical tool inputs and outputs.

use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic data-type tag carried by inputs and binding triples
///
/// There is deliberately no finer file-type distinction at this layer;
/// shape compatibility against concrete data items is decided by the
/// data-item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKind {
    /// Any data file
    Generic,
    /// Auxiliary sample-annotation metadata, attached from ancestry rather
    /// than selected by the user
    Phenodata,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "GENERIC"),
            Self::Phenodata => write!(f, "PHENODATA"),
        }
    }
}

/// A canonical tool input
///
/// Only required external input records become canonical inputs; optional
/// file inputs are not representable and are dropped by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    /// Input name and label
    pub name: Name,
    /// Generic data-type tag
    pub kind: InputKind,
    /// Always true for adapter-produced inputs
    pub required: bool,
}

impl Input {
    /// Create a required generic input
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            name,
            kind: InputKind::Generic,
            required: true,
        }
    }

    /// Set the data-type tag
    #[must_use]
    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A canonical tool output
///
/// Outputs carry no type beyond "file". The name follows the external
/// record's output-filename convention. Note the polarity flip relative to
/// inputs: a required external output becomes a non-optional output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Output name
    pub name: Name,
    /// True unless the source record was marked required
    pub optional: bool,
}

impl Output {
    /// Create an output
    #[must_use]
    pub fn new(name: Name, optional: bool) -> Self {
        Self { name, optional }
    }
}

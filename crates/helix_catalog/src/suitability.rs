//! Suitability classification of a tool for a set of data items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification of evaluating a tool against a data selection
///
/// `Suitable`, `NotEnoughInputs`, and `TooManyInputs` are produced by the
/// input binder. `Impossible` and `AlreadyDone` are produced by calling
/// code (for example when a data item already carries this tool's output
/// marker) and only pass through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suitability {
    /// The tool can run on the selection
    Suitable,
    /// The tool can never apply to the selection
    Impossible,
    /// The tool already produced this data
    AlreadyDone,
    /// Some selected items could not be bound
    TooManyInputs,
    /// A required formal input found no compatible item
    NotEnoughInputs,
}

impl Suitability {
    /// True if the tool cannot run on the selection
    #[must_use]
    pub fn is_impossible(self) -> bool {
        matches!(
            self,
            Self::Impossible | Self::NotEnoughInputs | Self::TooManyInputs
        )
    }

    /// True if the tool can run on the selection
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Suitable
    }
}

impl fmt::Display for Suitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Suitable => write!(f, "Suitable"),
            Self::Impossible => write!(f, "Impossible"),
            Self::AlreadyDone => write!(f, "Already done"),
            Self::TooManyInputs => write!(f, "Too many inputs"),
            Self::NotEnoughInputs => write!(f, "Not enough inputs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_impossible() {
        assert!(Suitability::Impossible.is_impossible());
        assert!(Suitability::NotEnoughInputs.is_impossible());
        assert!(Suitability::TooManyInputs.is_impossible());
        assert!(!Suitability::Suitable.is_impossible());
        assert!(!Suitability::AlreadyDone.is_impossible());
    }

    #[test]
    fn test_is_ok() {
        assert!(Suitability::Suitable.is_ok());
        assert!(!Suitability::AlreadyDone.is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Suitability::Suitable), "Suitable");
        assert_eq!(format!("{}", Suitability::TooManyInputs), "Too many inputs");
        assert_eq!(
            format!("{}", Suitability::NotEnoughInputs),
            "Not enough inputs"
        );
    }
}

//! Machine id / display label pairs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A machine-readable identifier with an optional human-readable label.
///
/// Used both for naming description entities and for enumerated option
/// pairs, where `id` is the option key and `label` the shown text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    /// Machine-readable identifier
    pub id: String,
    /// Human-readable label, if one was supplied
    pub label: Option<String>,
}

impl Name {
    /// Create a name with no label
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Create a name with a label
    #[must_use]
    pub fn with_label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: Some(label.into()),
        }
    }

    /// The text to show a user: the label when present, the id otherwise
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_new() {
        let name = Name::new("sequence");
        assert_eq!(name.id, "sequence");
        assert!(name.label.is_none());
        assert_eq!(name.display_text(), "sequence");
    }

    #[test]
    fn test_name_with_label() {
        let name = Name::with_label("Y", "Yes");
        assert_eq!(name.id, "Y");
        assert_eq!(name.display_text(), "Yes");
        assert_eq!(format!("{}", name), "Yes");
    }

    #[test]
    fn test_name_serde_roundtrip() {
        let name = Name::with_label("gap", "Gap penalty");
        let json = serde_json::to_string(&name).unwrap();
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }
}

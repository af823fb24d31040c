//! Formal input slots of a catalog entry.

use helix_description::InputKind;
use serde::{Deserialize, Serialize};

/// Reserved slot-name prefix marking auxiliary-metadata slots
///
/// Slots whose name starts with this prefix are not matched against the
/// user's selection; the binder fills them from the ancestry of the items
/// bound to the primary slots.
pub const METADATA_PREFIX: &str = "phenodata";

/// A named formal input position of a tool
///
/// Multi slots absorb an unbounded number of items, each rendered with a
/// zero-padded ordinal between name and postfix. Slots are immutable;
/// ordinal counters are state of a single binding attempt and live in the
/// binder, so concurrent binds on one entry never share state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSlot {
    /// Slot name, or the name prefix for multi slots
    pub name: String,
    /// Name postfix appended after the ordinal of a multi slot
    pub postfix: Option<String>,
    /// Declared data-type tag
    pub kind: InputKind,
    /// True if the slot can bind more than one item
    pub multi: bool,
}

impl InputSlot {
    /// Create a single-item slot
    #[must_use]
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            postfix: None,
            kind,
            multi: false,
        }
    }

    /// Create a multi slot from a name prefix and postfix
    #[must_use]
    pub fn new_multi(
        prefix: impl Into<String>,
        postfix: impl Into<String>,
        kind: InputKind,
    ) -> Self {
        Self {
            name: prefix.into(),
            postfix: Some(postfix.into()),
            kind,
            multi: true,
        }
    }

    /// The bound name for the given one-based ordinal
    ///
    /// Single slots ignore the ordinal. Multi slots show the ordinal with
    /// at least three digits.
    #[must_use]
    pub fn resolved_name(&self, ordinal: usize) -> String {
        if self.multi {
            format!(
                "{}{:03}{}",
                self.name,
                ordinal,
                self.postfix.as_deref().unwrap_or("")
            )
        } else {
            self.name.clone()
        }
    }

    /// True if this slot is filled from ancestry metadata instead of the
    /// user's selection
    #[must_use]
    pub fn is_metadata(&self) -> bool {
        self.name.starts_with(METADATA_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slot_name() {
        let slot = InputSlot::new("sequence", InputKind::Generic);
        assert_eq!(slot.resolved_name(1), "sequence");
        assert_eq!(slot.resolved_name(7), "sequence");
        assert!(!slot.multi);
    }

    #[test]
    fn test_multi_slot_ordinal_padding() {
        let slot = InputSlot::new_multi("input", ".tsv", InputKind::Generic);
        assert_eq!(slot.resolved_name(1), "input001.tsv");
        assert_eq!(slot.resolved_name(12), "input012.tsv");
        assert_eq!(slot.resolved_name(1234), "input1234.tsv");
    }

    #[test]
    fn test_multi_slot_empty_postfix() {
        let slot = InputSlot::new_multi("input", "", InputKind::Generic);
        assert_eq!(slot.resolved_name(2), "input002");
    }

    #[test]
    fn test_metadata_prefix_detection() {
        assert!(InputSlot::new("phenodata", InputKind::Phenodata).is_metadata());
        assert!(InputSlot::new("phenodata2", InputKind::Phenodata).is_metadata());
        assert!(!InputSlot::new("sequence", InputKind::Generic).is_metadata());
    }
}

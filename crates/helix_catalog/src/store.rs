//! Oracles supplied by the external data-item store.
//!
//! The binder never embeds type-compatibility or lineage logic; it only
//! calls these traits. The workbench's data manager implements them over
//! its own bean/handle types.

use crate::slot::InputSlot;

/// Read-only handle to a concrete data item
///
/// The binder never mutates items; it reads the name for diagnostics and
/// hands clones of the handle back in binding triples.
pub trait DataItem: Clone {
    /// Display name of the item
    fn name(&self) -> &str;
}

/// Compatibility and ancestry oracle over data items
pub trait DataStore<I: DataItem> {
    /// True if the item's current data shape is compatible with the slot's
    /// declared data-type
    fn is_compatible(&self, slot: &InputSlot, item: &I) -> bool;

    /// The nearest metadata item linked from the item's lineage, if any
    fn inherited_metadata(&self, item: &I) -> Option<I>;
}

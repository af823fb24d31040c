//! HELIX.BENCH Tool Catalog
//!
//! Runtime tool definitions built from canonical descriptions, the greedy
//! order-based input binder, and the catalog registry callers look tools
//! up in. Type compatibility and ancestry lookups are supplied by the
//! data-item store through the `store` traits; this crate never inspects
//! data content itself.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bind;
pub mod catalog;
pub mod entry;
pub mod slot;
pub mod store;
pub mod suitability;

// Re-exports
pub use bind::{bind_inputs, BindError, InputBinding};
pub use catalog::{CatalogError, ToolCatalog};
pub use entry::{CatalogEntry, IDENTIFIER_SEPARATOR};
pub use slot::{InputSlot, METADATA_PREFIX};
pub use store::{DataItem, DataStore};
pub use suitability::Suitability;

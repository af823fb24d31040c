//! HELIX.BENCH ACD Adapter
//!
//! Converts parsed ACD-dialect tool definitions into the canonical
//! description model. Consumes already-parsed attribute records; the raw
//! ACD lexer lives outside this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod record;

// Re-exports
pub use convert::{convert_record, convert_tool, parameter_kind, AcdEntity, Conversion};
pub use record::{AcdAttributes, AcdRecord, AcdTool, AcdValue, FunctionalGroup};

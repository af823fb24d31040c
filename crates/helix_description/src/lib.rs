//! HELIX.BENCH Canonical Description Model
//!
//! This crate contains the canonical, tool-dialect-independent description
//! of an analysis tool: ordered parameters, inputs, and outputs with typed
//! value domains. Pure types and logic with no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod name;
pub mod parameter;
pub mod tool;
pub mod validate;

// Re-exports
pub use error::{DescriptionError, DescriptionResult};
pub use io::{Input, InputKind, Output};
pub use name::Name;
pub use parameter::{Parameter, ParameterKind};
pub use tool::ToolDescription;
pub use validate::validate_description;

//! The canonical description of one tool.

use crate::io::{Input, Output};
use crate::name::Name;
use crate::parameter::Parameter;
use serde::{Deserialize, Serialize};

/// Canonical description of an analysis tool
///
/// Ordered parameters, inputs, and outputs in source declaration order.
/// Built once per tool definition by the description adapter and treated
/// as immutable afterwards; the `add_*` methods exist for the adapter's
/// single construction pass only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescription {
    /// Tool name and label
    pub name: Name,
    /// Category the tool is filed under
    pub category: String,
    /// Written description of the tool's purpose
    pub description: String,
    parameters: Vec<Parameter>,
    inputs: Vec<Input>,
    outputs: Vec<Output>,
}

impl ToolDescription {
    /// Create an empty description
    #[must_use]
    pub fn new(name: Name, category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name,
            category: category.into(),
            description: description.into(),
            parameters: Vec::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Append a parameter, preserving declaration order
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Append an input, preserving declaration order
    pub fn add_input(&mut self, input: Input) {
        self.inputs.push(input);
    }

    /// Append an output, preserving declaration order
    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    /// Parameters in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Inputs in declaration order
    #[must_use]
    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    /// Outputs in declaration order
    #[must_use]
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }
}

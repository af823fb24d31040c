//! Runtime tool definitions built from canonical descriptions.

use crate::bind::{self, BindError, InputBinding};
use crate::slot::InputSlot;
use crate::store::{DataItem, DataStore};
use crate::suitability::Suitability;
use helix_description::{InputKind, Parameter, ToolDescription};
use std::sync::Mutex;

/// Separator between category and tool name in catalog identifiers
pub const IDENTIFIER_SEPARATOR: &str = "/";

/// A named, categorized runtime tool definition
///
/// The executable blueprint built from a canonical description: ordered
/// parameter defaults and ordered formal input slots. The slots drive the
/// input binder; the parameters are cloned by callers when an actual run
/// is configured.
#[derive(Debug)]
pub struct CatalogEntry {
    name: String,
    category: String,
    description: String,
    parameters: Vec<Parameter>,
    slots: Vec<InputSlot>,
    output_count: usize,
    // Last outcome classification, kept for UI feedback only.
    last_suitability: Mutex<Option<Suitability>>,
}

impl CatalogEntry {
    /// Create an entry with no parameters or slots
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            parameters: Vec::new(),
            slots: Vec::new(),
            output_count: 0,
            last_suitability: Mutex::new(None),
        }
    }

    /// Build an entry from a canonical description
    ///
    /// Inputs become single slots in declaration order. Multiplicity is a
    /// naming convention detected outside this core, so multi slots are
    /// added by the caller through [`CatalogEntry::add_multi_input`].
    #[must_use]
    pub fn from_description(description: &ToolDescription) -> Self {
        let mut entry = Self::new(
            description.name.id.clone(),
            description.category.clone(),
            description.description.clone(),
        );
        for parameter in description.parameters() {
            entry.add_parameter(parameter.clone());
        }
        for input in description.inputs() {
            entry.add_input(&input.name.id, input.kind);
        }
        entry.output_count = description.outputs().len();
        entry
    }

    /// Append a parameter definition
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Append a single formal input slot
    pub fn add_input(&mut self, name: &str, kind: InputKind) {
        self.slots.push(InputSlot::new(name, kind));
    }

    /// Append a multi formal input slot
    pub fn add_multi_input(&mut self, prefix: &str, postfix: &str, kind: InputKind) {
        self.slots.push(InputSlot::new_multi(prefix, postfix, kind));
    }

    /// Tool name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category name
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Written description of the tool's purpose
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Catalog lookup key: "category/name"
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{}{}{}", self.category, IDENTIFIER_SEPARATOR, self.name)
    }

    /// Display name: "category / name"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} / {}", self.category, self.name)
    }

    /// Parameter definitions in declaration order
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Formal input slots in declaration order
    #[must_use]
    pub fn slots(&self) -> &[InputSlot] {
        &self.slots
    }

    /// Number of declared outputs
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Bind concrete items to this entry's formal inputs
    ///
    /// Delegates to [`bind::bind_inputs`] and retains the outcome
    /// classification for [`CatalogEntry::last_suitability`].
    ///
    /// # Errors
    ///
    /// See [`bind::bind_inputs`].
    pub fn bind_inputs<I, S>(
        &self,
        items: impl IntoIterator<Item = I>,
        store: &S,
    ) -> Result<Vec<InputBinding<I>>, BindError>
    where
        I: DataItem,
        S: DataStore<I>,
    {
        let result = bind::bind_inputs(&self.slots, items, store);
        let suitability = match &result {
            Ok(_) => Suitability::Suitable,
            Err(err) => err.suitability(),
        };
        self.set_suitability(suitability);
        result
    }

    /// Evaluate the suitability of this tool for the given items
    pub fn evaluate_suitability<I, S>(
        &self,
        items: impl IntoIterator<Item = I>,
        store: &S,
    ) -> Suitability
    where
        I: DataItem,
        S: DataStore<I>,
    {
        match self.bind_inputs(items, store) {
            Ok(_) => Suitability::Suitable,
            Err(err) => err.suitability(),
        }
    }

    /// The outcome classification of the last binding attempt, if any
    #[must_use]
    pub fn last_suitability(&self) -> Option<Suitability> {
        *self.last_suitability.lock().unwrap()
    }

    /// Record an externally decided classification
    ///
    /// Used by callers for the outcomes the binder never produces itself,
    /// such as `AlreadyDone` and `Impossible`.
    pub fn set_suitability(&self, suitability: Suitability) {
        *self.last_suitability.lock().unwrap() = Some(suitability);
    }
}

//! Parsed ACD parameter records.
//!
//! These types are the boundary contract with the external ACD parser:
//! one `AcdTool` per tool definition, one `AcdRecord` per parameter
//! definition, attributes already evaluated where possible.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An evaluated ACD attribute value with provenance
///
/// `literal` is false when the value was a computed reference (for example
/// `$(sequence.length)`) the parser could not resolve to a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcdValue {
    /// Attribute value as text
    pub value: String,
    /// True if the value was a literal or fully evaluated
    pub literal: bool,
}

impl AcdValue {
    /// Create a literal value
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            literal: true,
        }
    }

    /// Create a computed, unevaluated value
    #[must_use]
    pub fn computed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            literal: false,
        }
    }
}

/// The recognized ACD attributes of a record
///
/// A typed replacement for the original dialect's free-form attribute bag:
/// only these five attributes are meaningful to the adapter, and default,
/// minimum, and maximum are only trusted when their provenance is literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcdAttributes {
    /// Default value
    pub default: Option<AcdValue>,
    /// Lower bound
    pub minimum: Option<AcdValue>,
    /// Upper bound
    pub maximum: Option<AcdValue>,
    /// Long help text
    pub help: Option<AcdValue>,
    /// Short one-line information text
    pub information: Option<AcdValue>,
}

impl AcdAttributes {
    /// Create an empty attribute set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default attribute
    #[must_use]
    pub fn with_default(mut self, value: AcdValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Set the minimum attribute
    #[must_use]
    pub fn with_minimum(mut self, value: AcdValue) -> Self {
        self.minimum = Some(value);
        self
    }

    /// Set the maximum attribute
    #[must_use]
    pub fn with_maximum(mut self, value: AcdValue) -> Self {
        self.maximum = Some(value);
        self
    }

    /// Set the help attribute
    #[must_use]
    pub fn with_help(mut self, value: AcdValue) -> Self {
        self.help = Some(value);
        self
    }

    /// Set the information attribute
    #[must_use]
    pub fn with_information(mut self, value: AcdValue) -> Self {
        self.information = Some(value);
        self
    }

    /// The default value, only when literal and non-empty
    #[must_use]
    pub fn literal_default(&self) -> Option<&str> {
        self.default
            .as_ref()
            .filter(|v| v.literal && !v.value.is_empty())
            .map(|v| v.value.as_str())
    }

    /// The minimum bound, only when literal
    #[must_use]
    pub fn literal_minimum(&self) -> Option<&str> {
        self.minimum
            .as_ref()
            .filter(|v| v.literal)
            .map(|v| v.value.as_str())
    }

    /// The maximum bound, only when literal
    #[must_use]
    pub fn literal_maximum(&self) -> Option<&str> {
        self.maximum
            .as_ref()
            .filter(|v| v.literal)
            .map(|v| v.value.as_str())
    }

    /// Help text: the help attribute, falling back to information when help
    /// is absent or empty, with embedded newlines removed
    #[must_use]
    pub fn help_text(&self) -> Option<String> {
        let raw = match &self.help {
            Some(help) if !help.value.is_empty() => Some(help.value.as_str()),
            _ => self.information.as_ref().map(|v| v.value.as_str()),
        };
        raw.map(|text| text.replace('\n', ""))
    }

    /// The information text, as given
    #[must_use]
    pub fn information_text(&self) -> Option<&str> {
        self.information.as_ref().map(|v| v.value.as_str())
    }
}

/// Functional classification of an ACD type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalGroup {
    /// Plain value parameters (numbers, strings, booleans)
    Simple,
    /// Input data files
    Input,
    /// Enumerated choice parameters
    List,
    /// Output data files
    Output,
    /// Graphics output
    Graphics,
}

impl FunctionalGroup {
    /// Classify a lower-cased ACD type tag into its functional group
    ///
    /// Fixed lookup over the dialect's tag families; unknown tags yield
    /// `None` and the record is skipped downstream.
    #[must_use]
    pub fn classify(tag: &str) -> Option<Self> {
        match tag {
            "array" | "boolean" | "float" | "integer" | "range" | "string" | "toggle" => {
                Some(Self::Simple)
            }
            "list" | "selection" => Some(Self::List),
            "codon" | "cpdb" | "datafile" | "directory" | "dirlist" | "discretestates"
            | "distances" | "features" | "filelist" | "frequencies" | "infile" | "matrix"
            | "matrixf" | "obo" | "pattern" | "properties" | "regexp" | "resource" | "scop"
            | "sequence" | "seqall" | "seqset" | "seqsetall" | "taxon" | "text" | "url"
            | "variation" => Some(Self::Input),
            "align" | "featout" | "outcodon" | "outcpdb" | "outdata" | "outdir"
            | "outdiscrete" | "outdistance" | "outfile" | "outfreq" | "outmatrix"
            | "outmatrixf" | "outobo" | "outproperties" | "outrefseq" | "outresource"
            | "outscop" | "outtaxon" | "outtext" | "outurl" | "outvariation" | "report"
            | "seqout" | "seqoutall" | "seqoutset" => Some(Self::Output),
            "graph" | "xygraph" => Some(Self::Graphics),
            _ => None,
        }
    }
}

/// One parsed ACD parameter record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcdRecord {
    /// Lower-case type tag (for example "integer", "seqall", "outfile")
    pub tag: String,
    /// Parameter name
    pub name: String,
    /// Recognized attributes
    pub attributes: AcdAttributes,
    /// Enumerated options as key to label, in the record's native order
    pub options: IndexMap<String, String>,
    /// Record is required
    pub required: bool,
    /// Record is in the advanced section
    pub advanced: bool,
    /// Record is in the additional section
    pub additional: bool,
    /// Output filename derived by the parser's naming convention
    pub output_filename: Option<String>,
}

impl AcdRecord {
    /// Create a record with the given tag and name
    #[must_use]
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            name: name.into(),
            attributes: AcdAttributes::new(),
            options: IndexMap::new(),
            required: false,
            advanced: false,
            additional: false,
            output_filename: None,
        }
    }

    /// Set the attribute set
    #[must_use]
    pub fn with_attributes(mut self, attributes: AcdAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add an enumerated option
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(key.into(), label.into());
        self
    }

    /// Mark the record required
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Mark the record advanced
    #[must_use]
    pub fn with_advanced(mut self, advanced: bool) -> Self {
        self.advanced = advanced;
        self
    }

    /// Mark the record additional
    #[must_use]
    pub fn with_additional(mut self, additional: bool) -> Self {
        self.additional = additional;
        self
    }

    /// Set the derived output filename
    #[must_use]
    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = Some(filename.into());
        self
    }

    /// Functional group of this record's tag
    #[must_use]
    pub fn group(&self) -> Option<FunctionalGroup> {
        FunctionalGroup::classify(&self.tag)
    }
}

/// One parsed ACD tool definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcdTool {
    /// Tool name
    pub name: String,
    /// First group the tool is filed under
    pub category: String,
    /// Written description
    pub description: String,
    /// Parameter records in declaration order
    pub records: Vec<AcdRecord>,
}

impl AcdTool {
    /// Create a tool definition with no records
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
            records: Vec::new(),
        }
    }

    /// Append a record, preserving declaration order
    #[must_use]
    pub fn with_record(mut self, record: AcdRecord) -> Self {
        self.records.push(record);
        self
    }
}

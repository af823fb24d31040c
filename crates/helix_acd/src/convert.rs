//! Conversion of ACD records to canonical description entities.
//!
//! Each record becomes at most one canonical entity. Parameter is tried
//! first, then Input, then Output; records matching none are skipped and
//! counted, never a hard error.

use crate::record::{AcdRecord, AcdTool, FunctionalGroup};
use helix_description::{Input, Name, Output, Parameter, ParameterKind, ToolDescription};

/// Canonical entity produced from one ACD record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcdEntity {
    /// A value parameter
    Parameter(Parameter),
    /// An input file
    Input(Input),
    /// An output file
    Output(Output),
}

/// Result of converting one tool definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The canonical description
    pub description: ToolDescription,
    /// Names of records that matched no canonical shape
    pub skipped: Vec<String>,
}

impl Conversion {
    /// Number of records that produced no canonical entity
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Map an ACD type tag to a canonical parameter kind
///
/// Fixed map; tags outside it produce no Parameter and fall through to
/// Input/Output construction.
#[must_use]
pub fn parameter_kind(tag: &str) -> Option<ParameterKind> {
    match tag {
        "array" | "string" | "range" => Some(ParameterKind::String),
        "float" => Some(ParameterKind::Decimal),
        "integer" => Some(ParameterKind::Integer),
        "boolean" | "toggle" | "list" | "selection" => Some(ParameterKind::Enum),
        _ => None,
    }
}

/// Convert a full ACD tool definition into a canonical description
///
/// Single pass in declaration order. Unsupported records are collected in
/// `skipped` for diagnostics.
#[must_use]
pub fn convert_tool(tool: &AcdTool) -> Conversion {
    let mut description =
        ToolDescription::new(Name::new(&tool.name), &tool.category, &tool.description);
    let mut skipped = Vec::new();

    for record in &tool.records {
        match convert_record(record) {
            Some(AcdEntity::Parameter(parameter)) => description.add_parameter(parameter),
            Some(AcdEntity::Input(input)) => description.add_input(input),
            Some(AcdEntity::Output(output)) => description.add_output(output),
            None => {
                tracing::debug!(record = %record.name, tag = %record.tag, "skipping record");
                skipped.push(record.name.clone());
            }
        }
    }

    Conversion {
        description,
        skipped,
    }
}

/// Convert one ACD record into at most one canonical entity
///
/// Tries Parameter, then Input, then Output; the first non-empty result
/// wins, so a record never becomes more than one kind of entity.
#[must_use]
pub fn convert_record(record: &AcdRecord) -> Option<AcdEntity> {
    if let Some(parameter) = convert_parameter(record) {
        return Some(AcdEntity::Parameter(parameter));
    }
    if let Some(input) = convert_input(record) {
        return Some(AcdEntity::Input(input));
    }
    convert_output(record).map(AcdEntity::Output)
}

fn parameter_name(record: &AcdRecord) -> Name {
    match record.attributes.information_text() {
        Some(information) => Name::with_label(&record.name, information),
        None => Name::new(&record.name),
    }
}

fn convert_parameter(record: &AcdRecord) -> Option<Parameter> {
    let kind = parameter_kind(&record.tag)?;
    let group = record.group();

    // Attributes with computed references are dropped at this boundary.
    let default = record.attributes.literal_default().map(str::to_string);
    let min = record.attributes.literal_minimum();
    let max = record.attributes.literal_maximum();
    let help = record.attributes.help_text();

    let mut parameter = if record.tag == "boolean" || record.tag == "toggle" {
        // A two-valued choice always needs a resolvable default.
        let default = default.unwrap_or_else(|| "N".to_string());
        Parameter::new(parameter_name(record), kind)
            .with_options(vec![
                Name::with_label("Y", "Yes"),
                Name::with_label("N", "No"),
            ])
            .with_default(default)
    } else if group == Some(FunctionalGroup::Simple) {
        let mut parameter = Parameter::new(parameter_name(record), kind);
        if let Some(min) = min {
            parameter = parameter.with_min(min);
        }
        if let Some(max) = max {
            parameter = parameter.with_max(max);
        }
        if let Some(default) = default {
            parameter = parameter.with_default(default);
        }
        parameter
    } else if group == Some(FunctionalGroup::List) {
        let options: Vec<Name> = record
            .options
            .iter()
            .map(|(key, label)| Name::with_label(key, label))
            .collect();

        // The dialect sometimes gives the default by label instead of key.
        let default = default.map(|default| {
            if record.options.contains_key(&default) {
                default
            } else {
                record
                    .options
                    .iter()
                    .find(|(_, label)| **label == default)
                    .map_or(default, |(key, _)| key.clone())
            }
        });

        let mut parameter = Parameter::new(parameter_name(record), kind).with_options(options);
        if let Some(min) = min {
            parameter = parameter.with_min(min);
        }
        if let Some(max) = max {
            parameter = parameter.with_max(max);
        }
        if let Some(default) = default {
            parameter = parameter.with_default(default);
        }
        parameter
    } else {
        return None;
    };

    if let Some(help) = help {
        parameter = parameter.with_help(help);
    }
    Some(parameter.with_optional(record.additional || record.advanced))
}

fn convert_input(record: &AcdRecord) -> Option<Input> {
    // Optional file inputs are not representable in the canonical model,
    // so non-required and advanced input records are dropped.
    if record.group() == Some(FunctionalGroup::Input) && record.required {
        Some(Input::new(Name::new(&record.name)))
    } else {
        None
    }
}

fn convert_output(record: &AcdRecord) -> Option<Output> {
    let group = record.group();
    if (group == Some(FunctionalGroup::Output) || group == Some(FunctionalGroup::Graphics))
        && !record.advanced
    {
        let filename = record.output_filename.as_ref()?;
        Some(Output::new(Name::new(filename), !record.required))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AcdAttributes, AcdValue};
    use proptest::prelude::*;

    fn boolean_record(name: &str) -> AcdRecord {
        AcdRecord::new("boolean", name)
    }

    #[test]
    fn test_boolean_gets_yes_no_options_and_default() {
        let Some(AcdEntity::Parameter(param)) = convert_record(&boolean_record("brief")) else {
            panic!("expected parameter");
        };
        assert_eq!(param.kind, ParameterKind::Enum);
        let keys: Vec<&str> = param.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(keys, vec!["Y", "N"]);
        assert_eq!(param.default.as_deref(), Some("N"));
        assert!(param.min.is_none());
        assert!(param.max.is_none());
    }

    #[test]
    fn test_boolean_keeps_supplied_default() {
        let record = boolean_record("brief")
            .with_attributes(AcdAttributes::new().with_default(AcdValue::literal("Y")));
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert_eq!(param.default.as_deref(), Some("Y"));
    }

    #[test]
    fn test_toggle_is_boolean_like() {
        let Some(AcdEntity::Parameter(param)) =
            convert_record(&AcdRecord::new("toggle", "plot"))
        else {
            panic!("expected parameter");
        };
        assert_eq!(param.options.len(), 2);
        assert_eq!(param.default.as_deref(), Some("N"));
    }

    #[test]
    fn test_simple_parameter_bounds_and_default() {
        let record = AcdRecord::new("float", "gapopen").with_attributes(
            AcdAttributes::new()
                .with_default(AcdValue::literal("10.0"))
                .with_minimum(AcdValue::literal("0.0"))
                .with_maximum(AcdValue::literal("100.0"))
                .with_help(AcdValue::literal("Gap opening penalty")),
        );
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert_eq!(param.kind, ParameterKind::Decimal);
        assert_eq!(param.min.as_deref(), Some("0.0"));
        assert_eq!(param.max.as_deref(), Some("100.0"));
        assert_eq!(param.default.as_deref(), Some("10.0"));
        assert_eq!(param.help.as_deref(), Some("Gap opening penalty"));
    }

    #[test]
    fn test_computed_attributes_are_ignored() {
        let record = AcdRecord::new("integer", "window").with_attributes(
            AcdAttributes::new()
                .with_default(AcdValue::computed("$(sequence.length)"))
                .with_minimum(AcdValue::computed("$(wordsize)"))
                .with_maximum(AcdValue::literal("30")),
        );
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert!(param.default.is_none());
        assert!(param.min.is_none());
        assert_eq!(param.max.as_deref(), Some("30"));
    }

    #[test]
    fn test_list_default_resolved_by_label() {
        let record = AcdRecord::new("list", "scoring")
            .with_option("m", "Match")
            .with_option("s", "Similarity")
            .with_attributes(AcdAttributes::new().with_default(AcdValue::literal("Similarity")));
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert_eq!(param.default.as_deref(), Some("s"));
    }

    #[test]
    fn test_list_default_key_kept_as_is() {
        let record = AcdRecord::new("selection", "scoring")
            .with_option("m", "Match")
            .with_attributes(AcdAttributes::new().with_default(AcdValue::literal("m")));
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert_eq!(param.default.as_deref(), Some("m"));
    }

    #[test]
    fn test_list_unresolvable_default_left_as_given() {
        let record = AcdRecord::new("list", "scoring")
            .with_option("m", "Match")
            .with_attributes(AcdAttributes::new().with_default(AcdValue::literal("Nonsense")));
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        // Permissive at this layer; validate_description reports it.
        assert_eq!(param.default.as_deref(), Some("Nonsense"));
    }

    #[test]
    fn test_list_preserves_native_option_order() {
        let record = AcdRecord::new("list", "scoring")
            .with_option("z", "Zeta")
            .with_option("a", "Alpha");
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        let keys: Vec<&str> = param.options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_advanced_or_additional_marks_optional() {
        let record = AcdRecord::new("integer", "window").with_advanced(true);
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert!(param.optional);

        let record = AcdRecord::new("integer", "window").with_additional(true);
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert!(param.optional);
    }

    #[test]
    fn test_parameter_label_comes_from_information() {
        let record = AcdRecord::new("integer", "window").with_attributes(
            AcdAttributes::new().with_information(AcdValue::literal("Window size")),
        );
        let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
            panic!("expected parameter");
        };
        assert_eq!(param.name.display_text(), "Window size");
    }

    #[test]
    fn test_required_input_produced() {
        let record = AcdRecord::new("seqall", "sequence").with_required(true);
        let Some(AcdEntity::Input(input)) = convert_record(&record) else {
            panic!("expected input");
        };
        assert_eq!(input.name.id, "sequence");
        assert!(input.required);
    }

    #[test]
    fn test_optional_input_dropped() {
        let record = AcdRecord::new("seqall", "sequence").with_required(false);
        assert!(convert_record(&record).is_none());
    }

    #[test]
    fn test_output_polarity_flip() {
        let record = AcdRecord::new("outfile", "outfile")
            .with_required(true)
            .with_output_filename("outfile.txt");
        let Some(AcdEntity::Output(output)) = convert_record(&record) else {
            panic!("expected output");
        };
        assert_eq!(output.name.id, "outfile.txt");
        assert!(!output.optional);

        let record = AcdRecord::new("outfile", "extra")
            .with_required(false)
            .with_output_filename("extra.txt");
        let Some(AcdEntity::Output(output)) = convert_record(&record) else {
            panic!("expected output");
        };
        assert!(output.optional);
    }

    #[test]
    fn test_graphics_record_becomes_output() {
        let record = AcdRecord::new("xygraph", "graph").with_output_filename("graph.png");
        assert!(matches!(
            convert_record(&record),
            Some(AcdEntity::Output(_))
        ));
    }

    #[test]
    fn test_advanced_output_dropped() {
        let record = AcdRecord::new("outfile", "dump")
            .with_advanced(true)
            .with_output_filename("dump.txt");
        assert!(convert_record(&record).is_none());
    }

    #[test]
    fn test_unknown_tag_skipped() {
        assert!(convert_record(&AcdRecord::new("no_such_tag", "mystery")).is_none());
    }

    proptest::proptest! {
        // Whatever default attribute a boolean-like record carries, the
        // produced parameter has exactly the Y/N options and some default.
        #[test]
        fn prop_boolean_always_two_options_with_default(
            default in proptest::option::of(".*"),
            literal: bool,
            toggle: bool,
        ) {
            let tag = if toggle { "toggle" } else { "boolean" };
            let mut record = AcdRecord::new(tag, "flag");
            if let Some(default) = default {
                let value = if literal {
                    AcdValue::literal(default)
                } else {
                    AcdValue::computed(default)
                };
                record = record.with_attributes(AcdAttributes::new().with_default(value));
            }

            let Some(AcdEntity::Parameter(param)) = convert_record(&record) else {
                panic!("expected parameter");
            };
            let keys: Vec<&str> = param.options.iter().map(|o| o.id.as_str()).collect();
            prop_assert_eq!(keys, vec!["Y", "N"]);
            prop_assert!(param.default.is_some());
        }
    }

    #[test]
    fn test_convert_tool_preserves_order_and_counts_skips() {
        let tool = AcdTool::new("water", "Alignment", "Smith-Waterman local alignment")
            .with_record(AcdRecord::new("seqall", "asequence").with_required(true))
            .with_record(AcdRecord::new("seqall", "bsequence").with_required(true))
            .with_record(AcdRecord::new("float", "gapopen"))
            .with_record(AcdRecord::new("boolean", "brief"))
            .with_record(AcdRecord::new("no_such_tag", "mystery"))
            .with_record(AcdRecord::new("outfile", "outfile").with_output_filename("outfile.txt"));

        let conversion = convert_tool(&tool);
        let description = &conversion.description;

        assert_eq!(description.name.id, "water");
        assert_eq!(description.category, "Alignment");

        let params: Vec<&str> = description
            .parameters()
            .iter()
            .map(|p| p.name.id.as_str())
            .collect();
        assert_eq!(params, vec!["gapopen", "brief"]);

        let inputs: Vec<&str> = description
            .inputs()
            .iter()
            .map(|i| i.name.id.as_str())
            .collect();
        assert_eq!(inputs, vec!["asequence", "bsequence"]);

        assert_eq!(description.outputs().len(), 1);
        assert_eq!(conversion.skipped_count(), 1);
        assert_eq!(conversion.skipped, vec!["mystery"]);
    }
}

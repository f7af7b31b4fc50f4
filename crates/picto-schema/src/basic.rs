//! # Basic Structural Strategy
//!
//! Hand-rolled fallback used when the schema engine is unavailable or its
//! schema document cannot be loaded. Checks literal presence of the
//! required top-level fields and the shape of the `concepts` array,
//! including the conditional requiredness of `id`: explicit concepts must
//! carry one, implicit concepts need not.
//!
//! Violations are reported per-index with the concept's role so an author
//! can locate the offending entry without counting brackets.

use serde_json::Value;

use picto_core::REQUIRED_METADATA_FIELDS;

use crate::MetadataSchema;

/// Fields every concept entry must declare regardless of implicitness.
const REQUIRED_CONCEPT_FIELDS: [&str; 2] = ["role", "label"];

/// The hand-rolled structural strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSchema;

impl MetadataSchema for BasicSchema {
    fn validate(&self, value: &Value) -> Vec<String> {
        let mut violations = Vec::new();

        let Some(metadata) = value.as_object() else {
            violations.push("metadata must be a JSON object".to_string());
            return violations;
        };

        for field in REQUIRED_METADATA_FIELDS {
            if !metadata.contains_key(field) {
                violations.push(format!("Missing required metadata field: {field}"));
            }
        }

        if let Some(concepts) = metadata.get("concepts") {
            check_concepts(concepts, &mut violations);
        }

        violations
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}

fn check_concepts(concepts: &Value, violations: &mut Vec<String>) {
    let entries = match concepts.as_array() {
        Some(entries) => entries,
        None => {
            violations.push("metadata.concepts must be an array".to_string());
            return;
        }
    };

    if entries.is_empty() {
        violations.push("metadata.concepts array is empty".to_string());
        return;
    }

    for (i, entry) in entries.iter().enumerate() {
        let Some(concept) = entry.as_object() else {
            violations.push(format!("metadata.concepts[{i}] must be an object"));
            continue;
        };

        for field in REQUIRED_CONCEPT_FIELDS {
            if !concept.contains_key(field) {
                violations.push(format!(
                    "Missing required field '{field}' in metadata.concepts[{i}]"
                ));
            }
        }

        // id is required only for non-implicit concepts.
        let implicit = concept
            .get("implicit")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !implicit && !concept.contains_key("id") {
            let role = concept
                .get("role")
                .and_then(Value::as_str)
                .unwrap_or("unknown");
            violations.push(format!(
                "Missing required field 'id' in metadata.concepts[{i}] (role: {role}). \
                 Explicit concepts must have an 'id' field."
            ));
        }
    }
}

//! # Embedded Accessibility Metadata
//!
//! A pictogram carries a `<metadata>` element whose text content is a JSON
//! object describing the graphic's semantic content: an utterance, its
//! Natural Semantic Metalanguage decomposition, and the list of concepts
//! that map onto visual groups.
//!
//! ## Guarded Extraction
//!
//! The payload is hand-authored JSON, so nothing about its shape can be
//! assumed. [`MetadataBlock::decode`] fails only on undecodable input;
//! everything after that is lenient. Concepts are extracted field by field
//! with guarded access, and shape problems are left for the schema
//! strategies and the correspondence checker to report with per-index
//! context.

use serde::Serialize;
use serde_json::Value;

use crate::error::MetadataError;

/// Conventional `id` attribute of the `<metadata>` element.
pub const METADATA_ELEMENT_ID: &str = "mf-accessibility";

/// Top-level fields every metadata block must declare.
pub const REQUIRED_METADATA_FIELDS: [&str; 5] =
    ["version", "utterance", "nsm", "concepts", "provenance"];

/// One semantic unit declared in the metadata.
///
/// `role` and `label` are required by the schema; `id` is required unless
/// the concept is implicit. All fields are optional here because
/// extraction never rejects: requiredness is enforced by the validation
/// stages, which need the partially-filled record to name the violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concept {
    /// Semantic role of the concept (e.g. `"theme"`, `"agent"`).
    pub role: Option<String>,
    /// Human-readable label.
    pub label: Option<String>,
    /// Identifier linking the concept to a visual group. Empty strings
    /// are normalized to `None`; an empty id identifies nothing.
    pub id: Option<String>,
    /// Whether the concept has no visual counterpart. Defaults to false.
    pub implicit: bool,
}

impl Concept {
    /// Extract a concept from one entry of the `concepts` array.
    ///
    /// Returns `None` for non-object entries; the schema strategies report
    /// those per-index, and there is nothing in them to cross-check.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let string_field = |name: &str| {
            entry
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let id = string_field("id").filter(|id| !id.is_empty());
        let implicit = entry
            .get("implicit")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Some(Self {
            role: string_field("role"),
            label: string_field("label"),
            id,
            implicit,
        })
    }

    /// The concept's role, or `"unknown"` when absent. Used to name the
    /// concept in diagnostics when it has no id.
    pub fn role_or_unknown(&self) -> &str {
        self.role.as_deref().unwrap_or("unknown")
    }
}

/// The decoded metadata payload.
///
/// Keeps both the raw JSON value (schema strategies validate the full
/// shape) and the leniently-extracted concepts (the correspondence checker
/// works on these).
#[derive(Debug, Clone)]
pub struct MetadataBlock {
    /// The decoded JSON document as-is.
    pub value: Value,
    /// Concepts extracted from `value["concepts"]` with guarded access.
    pub concepts: Vec<Concept>,
}

impl MetadataBlock {
    /// Decode the text content of a `<metadata>` element.
    ///
    /// # Errors
    ///
    /// - [`MetadataError::Empty`] if the text is empty or whitespace.
    /// - [`MetadataError::Json`] if it does not parse as JSON.
    pub fn decode(text: &str) -> Result<Self, MetadataError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(MetadataError::Empty);
        }

        let value: Value = serde_json::from_str(trimmed)?;
        let concepts = extract_concepts(&value);
        Ok(Self { value, concepts })
    }
}

/// Pull concepts out of the decoded value, tolerating any shape.
fn extract_concepts(value: &Value) -> Vec<Concept> {
    value
        .get("concepts")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Concept::from_value).collect())
        .unwrap_or_default()
}

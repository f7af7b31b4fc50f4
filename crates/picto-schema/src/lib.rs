//! # picto-schema — Metadata Schema Validation Strategies
//!
//! Validates a decoded metadata block against the conformance profile.
//! Two interchangeable strategies stand behind one trait:
//!
//! - **Engine** ([`engine::EngineSchema`]): delegates to the `jsonschema`
//!   crate, evaluating the profile's JSON Schema document (Draft 2020-12).
//!   Compiled in behind the default-on `engine` feature.
//! - **Basic** ([`basic::BasicSchema`]): hand-rolled structural checks for
//!   the required top-level fields and the conditional requiredness of
//!   concept ids.
//!
//! ## Strategy Selection
//!
//! [`select_strategy`] performs capability detection once, at construction:
//! the engine is chosen when it is compiled in *and* the schema document
//! loads and compiles. Every degradation path falls back to the basic
//! strategy and surfaces a warning for the caller to record; selection
//! never fails a run on its own.
//!
//! Either strategy's findings are errors: schema non-conformance is a
//! contract violation, not advice.

use std::path::Path;

use serde_json::Value;

pub mod basic;
#[cfg(feature = "engine")]
pub mod engine;

pub use basic::BasicSchema;
#[cfg(feature = "engine")]
pub use engine::{EngineSchema, SchemaLoadError};

/// A metadata validation strategy.
///
/// One operation: validate a decoded value, return one message per
/// violation. An empty vector means the metadata conforms.
pub trait MetadataSchema {
    /// Validate `value`, returning one message per violation.
    fn validate(&self, value: &Value) -> Vec<String>;

    /// Short strategy name for trace output.
    fn name(&self) -> &'static str;
}

/// Select a validation strategy for the schema document at `schema_path`.
///
/// Returns the chosen strategy plus any warnings produced while selecting
/// it (schema file missing, unreadable, or failing to compile). The caller
/// records the warnings in its report; selection itself never errors.
#[cfg(feature = "engine")]
pub fn select_strategy(schema_path: &Path) -> (Box<dyn MetadataSchema>, Vec<String>) {
    match EngineSchema::from_file(schema_path) {
        Ok(schema) => (Box::new(schema), Vec::new()),
        Err(SchemaLoadError::NotFound { path }) => (
            Box::new(BasicSchema),
            vec![format!("Schema file not found: {path}")],
        ),
        // Read, parse, and compile failures all degrade the same way.
        Err(e) => (
            Box::new(BasicSchema),
            vec![format!("Could not load schema: {e}")],
        ),
    }
}

/// Select a validation strategy when the schema engine is compiled out.
///
/// Always the basic strategy, with a warning that metadata validation is
/// limited.
#[cfg(not(feature = "engine"))]
pub fn select_strategy(_schema_path: &Path) -> (Box<dyn MetadataSchema>, Vec<String>) {
    (
        Box::new(BasicSchema),
        vec!["Skipping JSON Schema validation (schema engine not compiled in)".to_string()],
    )
}

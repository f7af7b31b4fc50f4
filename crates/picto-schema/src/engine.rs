//! # Engine-Backed Strategy
//!
//! Delegates metadata validation to the `jsonschema` crate, evaluating the
//! conformance profile's schema document under Draft 2020-12. Violations
//! are collected with `iter_errors` so every problem surfaces in one run,
//! each prefixed with the instance path that triggered it.

use std::fmt;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use crate::MetadataSchema;

/// Error loading or compiling the schema document.
///
/// Every variant degrades the run to the basic strategy with a warning;
/// none of them fails a validation run.
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// No file exists at the configured schema path.
    #[error("schema file not found: {path}")]
    NotFound {
        /// The path that was probed.
        path: String,
    },

    /// The schema file exists but could not be read.
    #[error("cannot read schema {path}: {source}")]
    Read {
        /// Path to the unreadable schema.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema parsed but did not compile to a validator.
    #[error("schema failed to compile: {0}")]
    Build(String),
}

/// The `jsonschema`-backed strategy.
pub struct EngineSchema {
    validator: Validator,
}

impl EngineSchema {
    /// Load and compile the schema document at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaLoadError`] if the file is missing, unreadable,
    /// not JSON, or not a compilable schema.
    pub fn from_file(path: &Path) -> Result<Self, SchemaLoadError> {
        if !path.exists() {
            return Err(SchemaLoadError::NotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| SchemaLoadError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let schema: Value = serde_json::from_str(&content)?;
        Self::from_schema(&schema)
    }

    /// Compile an already-parsed schema value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaLoadError::Build`] if the value is not a valid
    /// schema under Draft 2020-12.
    pub fn from_schema(schema: &Value) -> Result<Self, SchemaLoadError> {
        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft202012);

        let validator = options
            .build(schema)
            .map_err(|e| SchemaLoadError::Build(e.to_string()))?;

        Ok(Self { validator })
    }
}

impl MetadataSchema for EngineSchema {
    fn validate(&self, value: &Value) -> Vec<String> {
        self.validator
            .iter_errors(value)
            .map(|error| {
                let instance_path = error.instance_path.to_string();
                if instance_path.is_empty() {
                    format!("Metadata schema validation error: {error}")
                } else {
                    format!("Metadata schema validation error at {instance_path}: {error}")
                }
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "engine"
    }
}

impl fmt::Debug for EngineSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineSchema").finish_non_exhaustive()
    }
}

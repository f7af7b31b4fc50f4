//! # Validation Report
//!
//! The accumulator every pipeline stage writes into. Errors affect
//! validity; warnings are advisory and never do.
//!
//! ## Ordering Invariant
//!
//! Errors and warnings are append-only and preserve the order in which
//! checks ran. Validating the same document twice must yield identical
//! sequences, so nothing here deduplicates, sorts, or merges messages.

use serde::Serialize;

/// Result of validating one pictogram document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Validation errors. A non-empty list makes the document invalid.
    pub errors: Vec<String>,
    /// Validation warnings (advisory, non-fatal).
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record an error.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Record a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Append another report's findings onto this one, preserving order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

//! # Validation Pipeline
//!
//! The orchestrator. Each stage returns a value the pipeline inspects to
//! decide what still makes sense to run; there is no unwinding control
//! flow, and no failure escapes [`PictogramValidator::validate_source`]:
//! every failure mode becomes an entry in the returned report.
//!
//! Stage order:
//!
//! 1. Parse. A fatal parse failure yields a report with exactly that error.
//! 2. Structural rules — always run once a document exists.
//! 3. Metadata extraction. Fatal failure records one error and skips 4–5;
//!    the structural findings stay.
//! 4. Schema validation via the strategy chosen at construction.
//! 5. Concept-to-group correspondence.

use std::path::Path;

use picto_core::{MetadataBlock, ValidationReport, METADATA_ELEMENT_ID};
use picto_schema::{select_strategy, MetadataSchema};

use crate::correspondence;
use crate::document::{DocumentError, Pictogram};
use crate::rules;

/// Validates pictogram documents against the conformance profile.
///
/// Construction performs capability detection once: the metadata schema
/// strategy is selected up front and reused for every document this
/// validator sees. Warnings produced by a degraded selection are replayed
/// into each report at the point schema validation runs, so they appear
/// only when metadata validation actually happened.
pub struct PictogramValidator {
    schema: Box<dyn MetadataSchema>,
    strategy_warnings: Vec<String>,
}

impl PictogramValidator {
    /// Create a validator using the schema document at `schema_path`.
    ///
    /// Never fails: an unusable schema degrades to the basic strategy with
    /// a warning.
    pub fn new(schema_path: &Path) -> Self {
        let (schema, strategy_warnings) = select_strategy(schema_path);
        tracing::debug!(strategy = schema.name(), "selected metadata schema strategy");
        Self {
            schema,
            strategy_warnings,
        }
    }

    /// Create a validator with an explicit strategy.
    pub fn with_strategy(schema: Box<dyn MetadataSchema>) -> Self {
        Self {
            schema,
            strategy_warnings: Vec::new(),
        }
    }

    /// Validate the file at `path`.
    ///
    /// An unreadable file yields a report with a single error; it never
    /// panics or returns early without a report.
    pub fn validate_file(&self, path: &Path) -> ValidationReport {
        match std::fs::read_to_string(path) {
            Ok(source) => self.validate_source(&source),
            Err(e) => {
                let mut report = ValidationReport::new();
                report.add_error(format!("cannot read {}: {e}", path.display()));
                report
            }
        }
    }

    /// Validate pictogram source text.
    pub fn validate_source(&self, source: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        let doc = match roxmltree::Document::parse(source).map_err(DocumentError::from) {
            Ok(doc) => doc,
            Err(e) => {
                report.add_error(e.to_string());
                return report;
            }
        };
        let picto = match Pictogram::new(&doc) {
            Ok(picto) => picto,
            Err(e) => {
                report.add_error(e.to_string());
                return report;
            }
        };

        rules::check_root_attributes(&picto, &mut report);
        rules::check_title_and_desc(&picto, &mut report);
        rules::check_embedded_stylesheet(&picto, &mut report);
        rules::check_semantic_groups(&picto, &mut report);
        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "structural rule checks complete"
        );

        let Some(metadata) = self.extract_metadata(&picto, &mut report) else {
            tracing::debug!("metadata unavailable; skipping schema and correspondence checks");
            return report;
        };

        for warning in &self.strategy_warnings {
            report.add_warning(warning.clone());
        }
        for violation in self.schema.validate(&metadata.value) {
            report.add_error(violation);
        }
        correspondence::check_concept_correspondence(&picto, &metadata, &mut report);

        tracing::debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            valid = report.is_valid(),
            "validation complete"
        );
        report
    }

    /// Locate and decode the metadata block, recording findings.
    ///
    /// Returns `None` on the fatal paths (element absent, text empty,
    /// undecodable JSON) after recording exactly one error.
    fn extract_metadata(
        &self,
        picto: &Pictogram<'_>,
        report: &mut ValidationReport,
    ) -> Option<MetadataBlock> {
        let Some(element) = picto.metadata() else {
            report.add_error("Missing required <metadata> element");
            return None;
        };

        let id = element.attribute("id");
        if id != Some(METADATA_ELEMENT_ID) {
            report.add_warning(format!(
                "<metadata> id should be '{METADATA_ELEMENT_ID}', found: {}",
                id.unwrap_or("(none)")
            ));
        }

        match MetadataBlock::decode(element.text().unwrap_or("")) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                report.add_error(e.to_string());
                None
            }
        }
    }
}

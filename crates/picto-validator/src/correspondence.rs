//! # Concept-to-Group Correspondence
//!
//! The system's central contract: every non-implicit concept declared in
//! the metadata must name a `<g>` element that exists in the document.
//! The markup tree and the metadata are authored independently, and this
//! check is what keeps them from drifting apart.
//!
//! Runs only when the metadata decoded; a fatal extraction failure already
//! carries its own error and leaves nothing to cross-check.

use picto_core::{MetadataBlock, ValidationReport};

use crate::document::Pictogram;

/// Cross-validate metadata concepts against the document's group ids.
pub fn check_concept_correspondence(
    picto: &Pictogram<'_>,
    metadata: &MetadataBlock,
    report: &mut ValidationReport,
) {
    let group_ids = picto.group_ids();

    for concept in &metadata.concepts {
        if concept.implicit {
            // No visual counterpart expected; a stray id is surplus
            // information, not breakage.
            if let Some(id) = &concept.id {
                report.add_warning(format!(
                    "Concept '{id}' is marked as implicit but has an 'id' field. \
                     Implicit concepts typically don't have corresponding <g> elements."
                ));
            }
            continue;
        }

        match &concept.id {
            None => report.add_error(format!(
                "Concept with role '{}' is not marked as implicit but has no 'id' field",
                concept.role_or_unknown()
            )),
            Some(id) if !group_ids.contains(id.as_str()) => report.add_error(format!(
                "Metadata concept '{id}' has no corresponding <g> element in the SVG"
            )),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_check(svg: &str, metadata_json: &str) -> ValidationReport {
        let doc = roxmltree::Document::parse(svg).unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        let metadata = MetadataBlock::decode(metadata_json).unwrap();
        let mut report = ValidationReport::new();
        check_concept_correspondence(&picto, &metadata, &mut report);
        report
    }

    #[test]
    fn matching_concept_passes() {
        let report = run_check(
            r#"<svg><g id="bed"/></svg>"#,
            r#"{"concepts": [{"role": "theme", "label": "bed", "id": "bed"}]}"#,
        );
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn unmatched_concept_id_is_an_error() {
        let report = run_check(
            r#"<svg><g id="table"/></svg>"#,
            r#"{"concepts": [{"role": "theme", "label": "bed", "id": "bed"}]}"#,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'bed'"));
        assert!(report.errors[0].contains("no corresponding"));
    }

    #[test]
    fn explicit_concept_without_id_names_its_role() {
        let report = run_check(
            r#"<svg><g id="bed"/></svg>"#,
            r#"{"concepts": [{"role": "agent", "label": "person"}]}"#,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("role 'agent'"));
    }

    #[test]
    fn implicit_concept_needs_no_group() {
        let report = run_check(
            "<svg/>",
            r#"{"concepts": [{"role": "predicate", "label": "sleeping", "implicit": true}]}"#,
        );
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn implicit_concept_with_stray_id_is_a_warning() {
        let report = run_check(
            "<svg/>",
            r#"{"concepts": [{"role": "predicate", "label": "sleeping", "implicit": true, "id": "sleeping"}]}"#,
        );
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'sleeping'"));
        assert!(report.warnings[0].contains("implicit"));
    }

    #[test]
    fn each_concept_is_checked_independently() {
        let report = run_check(
            r#"<svg><g id="bed"/></svg>"#,
            r#"{"concepts": [
                {"role": "theme", "label": "bed", "id": "bed"},
                {"role": "agent", "label": "person", "id": "person"},
                {"role": "setting", "label": "room"}
            ]}"#,
        );
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("'person'"));
        assert!(report.errors[1].contains("role 'setting'"));
    }

    #[test]
    fn duplicate_group_ids_still_satisfy_membership() {
        // Set membership only; uniqueness is not this check's business.
        let report = run_check(
            r#"<svg><g id="bed"/><g id="bed"/></svg>"#,
            r#"{"concepts": [{"role": "theme", "label": "bed", "id": "bed"}]}"#,
        );
        assert!(report.is_valid());
    }
}

//! # Structural Rule Engine
//!
//! Profile-specific checks that do not depend on the metadata payload, so
//! they run to completion even when metadata later proves invalid. Four
//! rule families, each a function appending findings to the shared report:
//!
//! - root attributes (`role="img"`, `aria-labelledby`)
//! - `<title>` / `<desc>` presence and text
//! - embedded stylesheet conventions (advisory only)
//! - semantic group attribute completeness

use roxmltree::Node;

use picto_core::ValidationReport;

use crate::document::{element_text, Pictogram};

/// Required value of the root `role` attribute.
const EXPECTED_ROOT_ROLE: &str = "img";

/// Style classes a conformant embedded stylesheet defines.
const REQUIRED_STYLE_CLASSES: [&str; 2] = [".f", ".k"];

/// Accessibility media queries a conformant embedded stylesheet carries.
const ACCESSIBILITY_MEDIA_QUERIES: [&str; 2] = [
    "@media (prefers-contrast: high)",
    "@media (forced-colors: active)",
];

/// Check required attributes on the root `svg` element.
pub fn check_root_attributes(picto: &Pictogram<'_>, report: &mut ValidationReport) {
    let root = picto.root();

    match root.attribute("role") {
        None => report.add_error("Missing required attribute on <svg>: role"),
        Some(value) if value != EXPECTED_ROOT_ROLE => report.add_error(format!(
            "Incorrect value for <svg> attribute 'role': expected '{EXPECTED_ROOT_ROLE}', \
             found '{value}'"
        )),
        Some(_) => {}
    }

    match root.attribute("aria-labelledby") {
        None => report.add_error("Missing required attribute on <svg>: aria-labelledby"),
        Some(value) if value.trim().is_empty() => {
            report.add_error("<svg> attribute 'aria-labelledby' is empty");
        }
        Some(_) => {}
    }

    if !picto.declares_svg_namespace() {
        report.add_warning("SVG namespace not explicitly declared");
    }
}

/// Check for the required `<title>` and `<desc>` elements.
pub fn check_title_and_desc(picto: &Pictogram<'_>, report: &mut ValidationReport) {
    check_labelled_element(picto.title(), "title", report);
    check_labelled_element(picto.desc(), "desc", report);
}

fn check_labelled_element<'a>(
    element: Option<Node<'a, 'a>>,
    name: &str,
    report: &mut ValidationReport,
) {
    let Some(element) = element else {
        report.add_error(format!("Missing required <{name}> element"));
        return;
    };

    if element_text(element).is_none() {
        report.add_error(format!("<{name}> element is empty"));
    }
    if element.attribute("id").is_none() {
        report.add_warning(format!("<{name}> should have an 'id' attribute"));
    }
}

/// Check the embedded stylesheet conventions.
///
/// Every finding here is a warning: the stylesheet is a best practice, not
/// a contract requirement.
pub fn check_embedded_stylesheet(picto: &Pictogram<'_>, report: &mut ValidationReport) {
    let Some(defs) = picto.defs() else {
        report.add_warning("No <defs> element found; embedded stylesheet recommended");
        return;
    };

    let style = defs
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "style");
    let Some(style) = style else {
        report.add_warning("No <style> element in <defs>; embedded stylesheet recommended");
        return;
    };

    let style_text = style.text().unwrap_or("");

    for class in REQUIRED_STYLE_CLASSES {
        if !style_text.contains(class) {
            report.add_warning(format!("Embedded stylesheet should define class '{class}'"));
        }
    }

    for query in ACCESSIBILITY_MEDIA_QUERIES {
        if !style_text.contains(query) {
            report.add_warning(format!("Embedded stylesheet should include '{query}'"));
        }
    }
}

/// Check that semantic groups carry the accessibility attributes the
/// profile requires.
///
/// A group is semantic when it carries `data-concept`; it then must also
/// carry `role="group"`, `tabindex="0"`, and a non-empty `aria-label`.
/// Findings name the group's `id`, or a synthesized placeholder when the
/// group has none.
pub fn check_semantic_groups(picto: &Pictogram<'_>, report: &mut ValidationReport) {
    let groups = picto.groups();
    if groups.is_empty() {
        report.add_warning("No <g> elements found; semantic grouping recommended");
        return;
    }

    for (i, group) in groups.iter().enumerate() {
        let group_id = group
            .attribute("id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("(unnamed group {i})"));

        if group.attribute("data-concept").is_none() {
            // Structurally grouped but not semantically tagged.
            if group.attribute("role") == Some("group") {
                report.add_warning(format!(
                    "Group '{group_id}' has role='group' but no data-concept attribute"
                ));
            }
            continue;
        }

        check_group_attribute(group, &group_id, "role", Some("group"), report);
        check_group_attribute(group, &group_id, "tabindex", Some("0"), report);
        check_group_attribute(group, &group_id, "aria-label", None, report);
    }
}

fn check_group_attribute(
    group: &Node<'_, '_>,
    group_id: &str,
    attr: &str,
    expected: Option<&str>,
    report: &mut ValidationReport,
) {
    match (group.attribute(attr), expected) {
        (None, _) => report.add_error(format!(
            "Semantic group '{group_id}' missing required attribute: {attr}"
        )),
        (Some(actual), Some(expected)) if actual != expected => report.add_error(format!(
            "Semantic group '{group_id}' attribute '{attr}': expected '{expected}', \
             found '{actual}'"
        )),
        (Some(actual), None) if actual.trim().is_empty() => {
            report.add_error(format!(
                "Semantic group '{group_id}' attribute '{attr}' is empty"
            ));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_rule(svg: &str, rule: fn(&Pictogram<'_>, &mut ValidationReport)) -> ValidationReport {
        let doc = roxmltree::Document::parse(svg).unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        let mut report = ValidationReport::new();
        rule(&picto, &mut report);
        report
    }

    #[test]
    fn conformant_root_passes() {
        let report = run_rule(
            r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" aria-labelledby="t d"/>"#,
            check_root_attributes,
        );
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_root_attributes_are_errors() {
        let report = run_rule(
            r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#,
            check_root_attributes,
        );
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("role"));
        assert!(report.errors[1].contains("aria-labelledby"));
    }

    #[test]
    fn wrong_root_role_is_an_error() {
        let report = run_rule(
            r#"<svg xmlns="http://www.w3.org/2000/svg" role="presentation" aria-labelledby="t"/>"#,
            check_root_attributes,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("expected 'img'"));
        assert!(report.errors[0].contains("'presentation'"));
    }

    #[test]
    fn undeclared_namespace_is_a_warning() {
        let report = run_rule(r#"<svg role="img" aria-labelledby="t"/>"#, check_root_attributes);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec!["SVG namespace not explicitly declared".to_string()]
        );
    }

    #[test]
    fn missing_title_and_desc_are_errors() {
        let report = run_rule("<svg/>", check_title_and_desc);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("<title>"));
        assert!(report.errors[1].contains("<desc>"));
    }

    #[test]
    fn empty_title_is_an_error_and_missing_id_a_warning() {
        let report = run_rule(
            "<svg><title></title><desc id=\"d\">ok</desc></svg>",
            check_title_and_desc,
        );
        assert_eq!(report.errors, vec!["<title> element is empty".to_string()]);
        assert_eq!(
            report.warnings,
            vec!["<title> should have an 'id' attribute".to_string()]
        );
    }

    #[test]
    fn stylesheet_checks_are_warnings_only() {
        let report = run_rule("<svg/>", check_embedded_stylesheet);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("<defs>"));

        let report = run_rule("<svg><defs/></svg>", check_embedded_stylesheet);
        assert!(report.is_valid());
        assert!(report.warnings[0].contains("<style>"));
    }

    #[test]
    fn partial_stylesheet_warns_per_missing_convention() {
        let report = run_rule(
            "<svg><defs><style>.f { fill: black; }</style></defs></svg>",
            check_embedded_stylesheet,
        );
        // Missing: .k, both media queries.
        assert_eq!(report.warnings.len(), 3);
        assert!(report.warnings[0].contains("'.k'"));
        assert!(report.warnings[1].contains("prefers-contrast"));
        assert!(report.warnings[2].contains("forced-colors"));
    }

    #[test]
    fn complete_stylesheet_passes_clean() {
        let report = run_rule(
            "<svg><defs><style>
                .f { fill: currentColor; }
                .k { fill: none; }
                @media (prefers-contrast: high) { .k { stroke-width: 3; } }
                @media (forced-colors: active) { .f { fill: CanvasText; } }
             </style></defs></svg>",
            check_embedded_stylesheet,
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn absent_groups_is_a_warning() {
        let report = run_rule("<svg/>", check_semantic_groups);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec!["No <g> elements found; semantic grouping recommended".to_string()]
        );
    }

    #[test]
    fn semantic_group_missing_attributes_is_errors_naming_the_group() {
        let report = run_rule(
            r#"<svg><g id="bed" data-concept="bed"/></svg>"#,
            check_semantic_groups,
        );
        assert_eq!(report.errors.len(), 3);
        for error in &report.errors {
            assert!(error.contains("'bed'"), "error should name the group: {error}");
        }
    }

    #[test]
    fn semantic_group_with_wrong_values_is_errors() {
        let report = run_rule(
            r#"<svg><g id="bed" data-concept="bed" role="presentation" tabindex="-1" aria-label="bed"/></svg>"#,
            check_semantic_groups,
        );
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("expected 'group'"));
        assert!(report.errors[1].contains("expected '0'"));
    }

    #[test]
    fn empty_aria_label_is_an_error() {
        let report = run_rule(
            r#"<svg><g id="bed" data-concept="bed" role="group" tabindex="0" aria-label=" "/></svg>"#,
            check_semantic_groups,
        );
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("aria-label"));
    }

    #[test]
    fn unnamed_group_gets_a_placeholder() {
        let report = run_rule(r#"<svg><g data-concept="bed"/></svg>"#, check_semantic_groups);
        assert!(report.errors[0].contains("(unnamed group 0)"));
    }

    #[test]
    fn grouped_but_untagged_is_a_warning() {
        let report = run_rule(r#"<svg><g id="frame" role="group"/></svg>"#, check_semantic_groups);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'frame'"));
        assert!(report.warnings[0].contains("no data-concept"));
    }

    #[test]
    fn conformant_group_passes_clean() {
        let report = run_rule(
            r#"<svg><g id="bed" data-concept="bed" role="group" tabindex="0" aria-label="bed"/></svg>"#,
            check_semantic_groups,
        );
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }
}

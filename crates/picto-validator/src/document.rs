//! # Pictogram Document Model
//!
//! A borrowed view over a parsed XML tree that knows where a pictogram
//! keeps its parts: the `svg` root, `<title>`, `<desc>`, `<defs>`,
//! `<metadata>`, and the `<g>` grouping elements.
//!
//! Elements are matched by local name, so documents using the default SVG
//! namespace, an explicit prefix, or no namespace at all are all
//! navigable. Whether the SVG namespace is actually declared is a separate
//! question answered by [`Pictogram::declares_svg_namespace`]; the rule
//! engine downgrades its absence to a warning.

use std::collections::BTreeSet;

use roxmltree::{Document, Node};
use thiserror::Error;

/// The SVG namespace URI a conformant document declares.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Fatal failure producing a document.
///
/// No partial document is usable: every variant aborts the remaining
/// pipeline, which records exactly one error for it.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The input is not well-formed XML.
    #[error("XML parsing error: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The root element is not `svg`.
    #[error("root element must be <svg>, found: <{0}>")]
    UnexpectedRoot(String),
}

/// A parsed pictogram document.
///
/// Created once per validation run, immutable thereafter; borrows the
/// [`roxmltree::Document`] for the run's duration.
#[derive(Debug)]
pub struct Pictogram<'a> {
    root: Node<'a, 'a>,
}

impl<'a> Pictogram<'a> {
    /// Wrap a parsed document, verifying the root element is `svg`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::UnexpectedRoot`] for any other root.
    pub fn new(doc: &'a Document<'a>) -> Result<Self, DocumentError> {
        let root = doc.root_element();
        if root.tag_name().name() != "svg" {
            return Err(DocumentError::UnexpectedRoot(
                root.tag_name().name().to_string(),
            ));
        }
        Ok(Self { root })
    }

    /// The `svg` root element.
    pub fn root(&self) -> Node<'a, 'a> {
        self.root
    }

    /// Whether the root resolves to the SVG namespace.
    pub fn declares_svg_namespace(&self) -> bool {
        self.root.tag_name().namespace() == Some(SVG_NAMESPACE)
    }

    /// The document's `<title>` element, if any.
    pub fn title(&self) -> Option<Node<'a, 'a>> {
        self.child_element("title")
    }

    /// The document's `<desc>` element, if any.
    pub fn desc(&self) -> Option<Node<'a, 'a>> {
        self.child_element("desc")
    }

    /// The document's `<defs>` container, if any.
    pub fn defs(&self) -> Option<Node<'a, 'a>> {
        self.child_element("defs")
    }

    /// The document's `<metadata>` element, if any.
    pub fn metadata(&self) -> Option<Node<'a, 'a>> {
        self.child_element("metadata")
    }

    /// All `<g>` elements in document order, at any depth.
    pub fn groups(&self) -> Vec<Node<'a, 'a>> {
        self.root
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "g")
            .collect()
    }

    /// The set of non-empty `id` attributes across all groups.
    ///
    /// Collected once per run; the correspondence check tests concept ids
    /// for membership here.
    pub fn group_ids(&self) -> BTreeSet<&'a str> {
        self.groups()
            .iter()
            .filter_map(|g| g.attribute("id"))
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn child_element(&self, name: &str) -> Option<Node<'a, 'a>> {
        self.root
            .children()
            .find(|n| n.is_element() && n.tag_name().name() == name)
    }
}

/// Trimmed text content of an element; `None` when absent or blank.
pub fn element_text<'a>(node: Node<'a, 'a>) -> Option<&'a str> {
    node.text().map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_namespaced_root() {
        let doc = Document::parse(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#).unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        assert!(picto.declares_svg_namespace());
    }

    #[test]
    fn recognizes_bare_root_without_namespace() {
        let doc = Document::parse("<svg/>").unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        assert!(!picto.declares_svg_namespace());
    }

    #[test]
    fn recognizes_prefixed_root() {
        let doc =
            Document::parse(r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"/>"#).unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        assert!(picto.declares_svg_namespace());
    }

    #[test]
    fn rejects_non_svg_root() {
        let doc = Document::parse("<html/>").unwrap();
        let err = Pictogram::new(&doc).unwrap_err();
        assert!(matches!(err, DocumentError::UnexpectedRoot(name) if name == "html"));
    }

    #[test]
    fn locates_direct_children() {
        let doc = Document::parse(
            r#"<svg>
                 <title id="t">Bed</title>
                 <desc id="d">A bed</desc>
                 <metadata id="mf-accessibility">{}</metadata>
                 <defs><style>.f{}</style></defs>
               </svg>"#,
        )
        .unwrap();
        let picto = Pictogram::new(&doc).unwrap();

        assert_eq!(element_text(picto.title().unwrap()), Some("Bed"));
        assert_eq!(element_text(picto.desc().unwrap()), Some("A bed"));
        assert!(picto.metadata().is_some());
        assert!(picto.defs().is_some());
    }

    #[test]
    fn groups_are_collected_at_any_depth_in_document_order() {
        let doc = Document::parse(
            r#"<svg>
                 <g id="outer"><g id="inner"/></g>
                 <g/>
                 <g id="last"/>
               </svg>"#,
        )
        .unwrap();
        let picto = Pictogram::new(&doc).unwrap();

        let groups = picto.groups();
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[0].attribute("id"), Some("outer"));
        assert_eq!(groups[1].attribute("id"), Some("inner"));
        assert_eq!(groups[2].attribute("id"), None);

        let ids = picto.group_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("inner"));
        assert!(ids.contains("last"));
    }

    #[test]
    fn blank_text_reads_as_none() {
        let doc = Document::parse("<svg><title>   </title></svg>").unwrap();
        let picto = Pictogram::new(&doc).unwrap();
        assert_eq!(element_text(picto.title().unwrap()), None);
    }
}

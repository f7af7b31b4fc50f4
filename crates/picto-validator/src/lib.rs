//! # picto-validator — The Pictogram Conformance Engine
//!
//! Validates accessibility-oriented pictogram documents: SVG graphics
//! carrying an embedded JSON metadata block that declares the semantic
//! concepts the graphic depicts.
//!
//! The engine parses the document, applies the profile's structural and
//! accessibility rules, extracts and schema-validates the metadata, and
//! cross-verifies that every declared concept corresponds to a visual
//! group. All findings land in one [`ValidationReport`] per run.
//!
//! ## Module Map
//!
//! - [`document`] — the parsed pictogram view (roxmltree-backed).
//! - [`rules`] — structural rule engine; metadata-independent checks.
//! - [`correspondence`] — concept-to-group cross-validation.
//! - [`pipeline`] — the orchestrator tying the stages together.
//!
//! ## Crate Policy
//!
//! - One document per run; no shared mutable state across runs.
//! - No panics and no escaping errors from the validation entry points:
//!   every failure mode is converted into a report entry.

pub mod correspondence;
pub mod document;
pub mod pipeline;
pub mod rules;

pub use document::{DocumentError, Pictogram, SVG_NAMESPACE};
pub use picto_core::ValidationReport;
pub use pipeline::PictogramValidator;

//! # picto-core — Foundational Types for the Pictogram Conformance Stack
//!
//! This crate is the leaf of the workspace DAG. It defines the types shared
//! by every other crate: the validation report that findings accumulate
//! into, and the embedded metadata model decoded from a pictogram's
//! `<metadata>` payload.
//!
//! ## Key Design Principles
//!
//! 1. **One report per run.** A [`ValidationReport`] is constructed at the
//!    start of a validation run, accumulates errors and warnings in the
//!    order they are found, and is returned by value. Findings are never
//!    deduplicated or reordered.
//!
//! 2. **Guarded decoding.** The metadata payload is arbitrary JSON authored
//!    by hand. [`MetadataBlock::decode`] converts it into typed records with
//!    every field access guarded, so a shape mismatch becomes a recorded
//!    finding downstream rather than a panic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `picto-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod metadata;
pub mod report;

pub use error::MetadataError;
pub use metadata::{Concept, MetadataBlock, METADATA_ELEMENT_ID, REQUIRED_METADATA_FIELDS};
pub use report::ValidationReport;

//! # picto-cli — Pictogram Conformance CLI
//!
//! Command-line front end for the validation engine. Argument parsing is
//! separated from the handlers; handlers delegate to `picto-validator`
//! and own only presentation and exit-code selection.
//!
//! ## Exit Codes
//!
//! - `0` — validation ran and found no errors
//! - `1` — validation ran and found one or more errors
//! - `2` — unusable input (file not found)

pub mod validate;

//! Domain models for requirements validation.
//!
//! This module contains the document wrapper handed to the validator and the
//! result type the validator produces.

/// Requirements document wrapper and parsing.
pub mod document;
pub use document::{Document, ParseError};

mod result;
pub use result::ValidationResult;

//! Validation and consistency checking for requirements documents.
//!
//! Documents arrive as loosely-typed JSON produced by an upstream extraction
//! step. [`validate`] runs a fixed battery of checks over one document and
//! reports findings as errors and warnings, never mutating the input and
//! never failing on malformed shapes.

pub mod domain;
pub use domain::{Document, ParseError, ValidationResult};

/// The validation pipeline and its individual checks.
pub mod validation;
pub use validation::validate;

mod issues;
pub use issues::open_issues;

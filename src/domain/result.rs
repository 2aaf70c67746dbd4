use serde::Serialize;

/// The aggregated outcome of one validation pass.
///
/// Errors indicate the document must not proceed to estimation; warnings are
/// advisory and never affect [`ValidationResult::is_valid`]. Both sequences
/// preserve check-execution order so repeated validation of the same document
/// is byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// `true` iff no errors were found.
    pub is_valid: bool,
    /// Blocking findings, in check-execution order.
    pub errors: Vec<String>,
    /// Advisory findings, in check-execution order.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

//! The fixed, ordered battery of document checks.
//!
//! Each check is independent and converts any expected malformation it
//! encounters into a finding. The execution order does not affect which
//! findings fire, but it is fixed so repeated validation of the same document
//! produces identical output.

mod consistency;
mod functional;
mod nonfunctional;
mod scan;

use serde_json::Value;
use tracing::debug;

use crate::ValidationResult;

/// Run every check against one document and aggregate the findings.
///
/// The document is read tolerantly: shape deviations from the nominal schema
/// become errors or warnings, never panics. The only exceptions are host
/// faults (an in-memory value that cannot be serialized), which are outside
/// the tolerances of the contract and propagate as panics.
#[must_use]
pub fn validate(document: &Value) -> ValidationResult {
    let mut findings = Findings::default();

    scan::placeholders(document, &mut findings);
    scan::forbidden_tech(document, &mut findings);
    functional::check(document, &mut findings);
    nonfunctional::check(document, &mut findings);
    consistency::check(document, &mut findings);

    debug!(
        errors = findings.errors.len(),
        warnings = findings.warnings.len(),
        "validation pass complete"
    );

    findings.into_result()
}

/// Accumulator shared by the individual checks.
#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn into_result(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

/// Looks up a string field, treating the empty string the same as absence.
fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Length of an array field, with absence or a non-array counting as zero.
fn array_len(value: &Value, key: &str) -> usize {
    value.get(key).and_then(Value::as_array).map_or(0, Vec::len)
}

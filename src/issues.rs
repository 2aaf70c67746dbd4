//! Conversion of validation results into displayable open-issue strings.

use crate::ValidationResult;

/// Flattens a [`ValidationResult`] into a single list of display strings.
///
/// Errors come first, then warnings, each group in its original order. Every
/// error is prefixed with `확인 필요 (오류): ` and every warning with
/// `확인 권장: `. Pure function; the input is not modified.
#[must_use]
pub fn open_issues(result: &ValidationResult) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|error| format!("확인 필요 (오류): {error}"))
        .chain(
            result
                .warnings
                .iter()
                .map(|warning| format!("확인 권장: {warning}")),
        )
        .collect()
}

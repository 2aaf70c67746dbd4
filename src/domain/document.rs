use serde_json::Value;

use crate::{ValidationResult, validation};

/// An in-memory requirements document.
///
/// The document is an untyped JSON tree: categories containing sub-categories
/// containing requirement items, plus non-functional requirements and project
/// metadata. The upstream extraction step guarantees nothing about the shape,
/// so the wrapper deliberately does not deserialize into typed structs — the
/// validator reads the tree tolerantly and reports shape deviations as
/// findings rather than rejecting the document outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Value);

impl Document {
    /// Wrap an already-decoded JSON value.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON. A *well-formed* JSON
    /// value of an unexpected shape is not an error here; shape problems are
    /// reported by [`Document::validate`] as findings.
    pub fn from_json(text: &str) -> Result<Self, ParseError> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// The underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Run the full validation pipeline over this document.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validation::validate(&self.0)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Error returned when document text cannot be decoded as JSON.
#[derive(Debug, thiserror::Error)]
#[error("document is not valid JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Document;

    #[test]
    fn from_json_accepts_any_shape() {
        let document = Document::from_json(r#"{"unexpected": [1, 2, 3]}"#).unwrap();
        assert_eq!(document.as_value()["unexpected"], json!([1, 2, 3]));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        assert!(Document::from_json("{not json").is_err());
    }

    #[test]
    fn validate_delegates_to_pipeline() {
        let document = Document::from_value(json!({}));
        let result = document.validate();
        assert!(!result.is_valid);
    }
}

//! Error types for form configuration, validation and rendering.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::ModelError;

/// Errors raised while configuring or driving a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field type name that no registered constructor matches.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// A validation rule token that the rule compiler does not know.
    #[error("unknown validation rule: {0}")]
    UnknownRule(String),

    /// A rule carried a parameter that could not be parsed.
    #[error("invalid parameter for rule `{rule}`: {detail}")]
    BadRuleParameter { rule: String, detail: String },

    /// A `regex:` rule carried an invalid pattern.
    #[error("invalid pattern in regex rule: {0}")]
    BadPattern(#[from] regex::Error),

    /// The bound model rejected a write or failed to persist.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Output could not be produced.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors raised while producing HTML output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A field was requested by name but is not part of the form.
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// Output was requested before the form was built.
    #[error("form output requested before build")]
    NotBuilt,
}

/// Validation messages collected per field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether any field carries a message.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields carrying messages.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_accumulate_per_field() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());

        errors.add("email", "The Email field is required.");
        errors.add("email", "The Email field must be a valid email address.");
        errors.add("name", "The Name field is required.");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email").map(Vec::len), Some(2));
        assert!(errors.get("missing").is_none());
    }
}

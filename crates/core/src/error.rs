//! Validation error model.

use serde::Serialize;
use thiserror::Error;

/// A single failed constraint on a named field.
///
/// Keep this focused on deterministic input failures: the field that was
/// checked, the constraint that rejected it, and a human-readable message.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Dotted path of the offending field (e.g. `image.url`).
    pub field: String,
    /// Stable constraint identifier (e.g. `min_length`, `gt`).
    pub constraint: &'static str,
    /// Human-readable explanation.
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        constraint: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint,
            message: message.into(),
        }
    }
}

/// Every constraint violation found while validating one value.
///
/// Checks accumulate rather than short-circuit, so a response can report
/// all offending fields at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one field check.
    pub fn check(&mut self, outcome: Result<(), FieldError>) {
        if let Err(err) = outcome {
            self.0.push(err);
        }
    }

    pub fn push(&mut self, err: FieldError) {
        self.0.push(err);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapse into a `Result`, erring when any check failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Re-root every field under `prefix` (for errors raised inside a
    /// nested record, e.g. `item.description`).
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        for err in &mut self.0 {
            err.field = format!("{prefix}.{}", err.field);
        }
        self
    }
}

impl core::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_collapse_to_ok() {
        let errors = ValidationErrors::new();
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn check_accumulates_failures() {
        let mut errors = ValidationErrors::new();
        errors.check(Ok(()));
        errors.check(Err(FieldError::new("price", "gt", "must be greater than 0")));
        errors.check(Err(FieldError::new("description", "max_length", "too long")));

        let errors = errors.into_result().unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.0[0].field, "price");
        assert_eq!(errors.0[1].constraint, "max_length");
    }

    #[test]
    fn with_prefix_reroots_field_paths() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("description", "max_length", "too long"));
        let errors = errors.with_prefix("item");
        assert_eq!(errors.0[0].field, "item.description");
    }

    #[test]
    fn display_lists_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("price", "gt", "must be greater than 0"));
        errors.push(FieldError::new("q", "min_length", "too short"));

        let rendered = errors.to_string();
        assert!(rendered.contains("price: must be greater than 0"));
        assert!(rendered.contains("q: too short"));
    }
}

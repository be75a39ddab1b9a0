//! Field-level validation errors
//!
//! Validators report violations as `FieldError`s collected in a `FieldErrors`
//! list. The list keeps insertion order: structural rules in field order
//! first, then cross-entity rules.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// A single violation on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Public (wire) name of the field, dotted for nested fields
    pub field: String,
    /// Machine-readable violation code
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Ordered collection of field violations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation on `field`
    pub fn reject(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0.push(FieldError::new(field, code, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Returns true if any violation is recorded on `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Returns true if any violation carries `code`
    pub fn has_code(&self, code: &str) -> bool {
        self.0.iter().any(|e| e.code == code)
    }

    /// Messages in order, mostly for assertions and logs
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// Converts derived `validator` output into ordered field errors
    ///
    /// `fields` maps each Rust field name to its public name and fixes the
    /// output order, since `ValidationErrors` is keyed by a hash map.
    pub fn from_validation(errors: &ValidationErrors, fields: &[(&str, &str)]) -> Self {
        let mut out = Self::new();
        for &(name, public) in fields {
            out.extend_from_validation(errors, name, public);
        }
        out
    }

    /// Appends the derived violations of one field under its public name
    pub fn extend_from_validation(&mut self, errors: &ValidationErrors, name: &str, public: &str) {
        let by_field = errors.field_errors();
        let Some(list) = by_field.get(name) else {
            return;
        };
        for error in list.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            self.reject(public, error.code.to_string(), message);
        }
    }

    /// Runs the derived rules of `value` and orders the result by `fields`
    pub fn validate_fields<T: Validate>(value: &T, fields: &[(&str, &str)]) -> Self {
        match value.validate() {
            Ok(()) => Self::new(),
            Err(errors) => Self::from_validation(&errors, fields),
        }
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl Extend<FieldError> for FieldErrors {
    fn extend<I: IntoIterator<Item = FieldError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

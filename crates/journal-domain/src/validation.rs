//! Required-field checks for the input boundary
//!
//! The store accepts whatever it is given; forms and other callers run
//! these checks first and refuse to submit while an error is reported.

use serde::{Deserialize, Serialize};

use super::NewBook;

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            severity: ValidationSeverity::Warning,
        }
    }
}

/// Validate a book before it is added
pub fn validate_new_book(input: &NewBook) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if input.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Title is required"));
    }

    if input.author.trim().is_empty() {
        errors.push(ValidationError::error("author", "Author is required"));
    }

    if input.genre_id.trim().is_empty() {
        errors.push(ValidationError::error("genre_id", "Genre is required"));
    }

    if input.description.trim().is_empty() {
        errors.push(ValidationError::warning(
            "description",
            "A short description is recommended",
        ));
    }

    errors
}

/// Validate a genre name before the genre is added
pub fn validate_genre_name(name: &str) -> Vec<ValidationError> {
    if name.trim().is_empty() {
        vec![ValidationError::error("name", "Genre name is required")]
    } else {
        Vec::new()
    }
}

/// Check if validation errors contain any blocking errors
pub fn has_errors(errors: &[ValidationError]) -> bool {
    errors
        .iter()
        .any(|e| e.severity == ValidationSeverity::Error)
}

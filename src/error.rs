//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during grid projection and
//! time entry validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The name of the offending field (e.g., "project_id").
    pub field: String,
    /// A description of what is wrong with the field.
    pub message: String,
}

/// A recoverable user-input failure listing every violated field.
///
/// Callers surface all violations at once instead of failing on the
/// first one, so a form can highlight every bad field in a single pass.
///
/// # Example
///
/// ```
/// use roster_engine::error::ValidationError;
///
/// let mut error = ValidationError::new();
/// error.push("project_id", "is required");
/// error.push("task_id", "is required");
///
/// assert_eq!(error.fields(), vec!["project_id", "task_id"]);
/// assert_eq!(
///     error.to_string(),
///     "Validation failed: project_id is required; task_id is required"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Validation failed: {}", describe(.violations))]
pub struct ValidationError {
    /// The violations, in the order they were detected.
    pub violations: Vec<FieldViolation>,
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Creates an empty validation error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation error with a single violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.push(field, message);
        error
    }

    /// Records a violation. A field is listed at most once; the first
    /// message recorded for it wins.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if self.contains(&field) {
            return;
        }
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    /// Returns true if no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns true if the given field has a violation.
    pub fn contains(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Returns the violated field names in detection order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }

    /// Returns `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationError> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// The main error type for the Roster Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// User input failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Upstream data contained an unparseable date or time.
    #[error("Malformed {field} '{value}' in record '{record_id}': {message}")]
    MalformedInput {
        /// The ID of the record carrying the bad value.
        record_id: String,
        /// The field that could not be parsed.
        field: String,
        /// The raw value as received.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A data source could not be read or decoded.
    #[error("Data source '{origin}' unavailable: {message}")]
    SourceUnavailable {
        /// Where the data was expected to come from.
        origin: String,
        /// A description of the failure.
        message: String,
    },

    /// An edit referenced a record that is not in the collection.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of record (e.g., "shift").
        entity: String,
        /// The ID that was looked up.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Shared error types for the coin-flip services
//!
//! - Error codes follow the pattern <CATEGORY>_<DETAIL>
//! - Categories map to HTTP status codes
//! - `ServiceError` is what the web server serialises into error bodies and
//!   what the CLI logs before exiting
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::FlipError;

/// Error categories that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Validation errors (400 Bad Request)
    /// Caller provided unusable input
    Validation,

    /// Internal service errors (500 Internal Server Error)
    Internal,
}

impl ErrorCategory {
    /// Map error category to HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCategory::Validation => 400,
            ErrorCategory::Internal => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Internal => "Internal",
        }
    }
}

/// Standard error codes used across all services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode(pub &'static str);

impl ErrorCode {
    // Validation errors
    pub const VALIDATION_EMPTY_TRIAL_SET: ErrorCode = ErrorCode("VALIDATION_EMPTY_TRIAL_SET");
    pub const VALIDATION_INVALID_MODE: ErrorCode = ErrorCode("VALIDATION_INVALID_MODE");

    // Internal errors
    pub const INTERNAL_UNEXPECTED: ErrorCode = ErrorCode("INTERNAL_UNEXPECTED");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Standardized error structure used across all services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Error category (determines status code and log level)
    pub category: ErrorCategory,

    /// Structured error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ServiceError {
    pub fn new(category: ErrorCategory, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            category,
            code: code.as_str().to_string(),
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn empty_trial_set() -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_EMPTY_TRIAL_SET,
            FlipError::EmptyTrialSet.to_string(),
        )
    }

    pub fn invalid_mode(mode: impl fmt::Display) -> Self {
        Self::new(
            ErrorCategory::Validation,
            ErrorCode::VALIDATION_INVALID_MODE,
            format!("Unknown mode: {}", mode),
        )
        .with_context("expected one of: hello, analyze, compare")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Internal, ErrorCode::INTERNAL_UNEXPECTED, message)
    }
}

impl From<FlipError> for ServiceError {
    fn from(error: FlipError) -> Self {
        match error {
            FlipError::EmptyTrialSet => ServiceError::empty_trial_set(),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(context) = &self.context {
            write!(f, "[{}] {}: {}", self.code, self.message, context)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ServiceError {}

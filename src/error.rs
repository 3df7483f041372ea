//! Error handling for the Stage View application
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for Stage View operations
#[derive(Error, Debug)]
pub enum StageViewError {
    /// Errors related to stage catalog loading/validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<StageViewError>,
    },
}

impl StageViewError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        StageViewError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for Stage View operations
pub type Result<T> = std::result::Result<T, StageViewError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

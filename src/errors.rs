//! # Application Error Types
//!
//! This module defines common error types used throughout the recipe importer.
//! It provides structured error handling for the various application components.

use std::fmt;

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration validation errors
    Config(String),
    /// Corpus file loading/parsing errors
    Corpus(String),
    /// Part-of-speech tagging errors
    Tagging(String),
    /// Database operation errors
    Database(String),
    /// File system errors
    FileSystem(String),
    /// Internal application errors
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Corpus(msg) => write!(f, "[CORPUS] {}", msg),
            AppError::Tagging(msg) => write!(f, "[TAGGING] {}", msg),
            AppError::Database(msg) => write!(f, "[DATABASE] {}", msg),
            AppError::FileSystem(msg) => write!(f, "[FILESYSTEM] {}", msg),
            AppError::Internal(msg) => write!(f, "[INTERNAL] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<crate::tagging::TaggingError> for AppError {
    fn from(err: crate::tagging::TaggingError) -> Self {
        AppError::Tagging(err.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

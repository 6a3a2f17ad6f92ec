//! Error types shared across the crate.
//!
//! [`DocdexError`] covers the full failure taxonomy: unsupported languages,
//! cache read/decode failures, remote fetch failures, and argument-count
//! violations at the command boundary. Cache corruption is deliberately
//! terminal for a call; it is never healed by falling back to a re-fetch.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for docdex operations.
#[derive(Error, Debug)]
pub enum DocdexError {
    // Language registry errors
    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    // Cache errors
    #[error("failed to read cached index '{path}': {source}")]
    CacheRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode cached index '{path}': {source}")]
    CacheDecode {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Remote fetch errors
    #[error("request to {url} failed: {source}")]
    RemoteFetch { url: String, source: reqwest::Error },

    #[error("request to {url} returned status {status}")]
    RemoteStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode index from {url}: {source}")]
    RemoteDecode {
        url: String,
        source: serde_json::Error,
    },

    #[error("response from {url} is not valid UTF-8")]
    InvalidUtf8 { url: String },

    // Local file errors
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    // Command boundary errors
    #[error("{operation} expects {expected} argument(s), got {got}")]
    InvalidArguments {
        operation: String,
        expected: &'static str,
        got: usize,
    },

    #[error("unknown operation: {operation}")]
    UnknownOperation { operation: String },

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results using DocdexError
pub type Result<T> = std::result::Result<T, DocdexError>;

impl DocdexError {
    /// Create an unsupported language error
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    /// Create an argument-count violation for a boundary operation
    pub fn invalid_arguments(
        operation: impl Into<String>,
        expected: &'static str,
        got: usize,
    ) -> Self {
        Self::InvalidArguments {
            operation: operation.into(),
            expected,
            got,
        }
    }

    /// Create an unknown operation error
    pub fn unknown_operation(operation: impl Into<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
        }
    }
}

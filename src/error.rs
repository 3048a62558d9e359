//! Unified error types for chatmood.
//!
//! This module provides a single [`ChatmoodError`] enum that covers every
//! failure the pipeline can surface. Recoverable problems such as an
//! unparseable date or time never reach this type: they become `None` on the
//! affected [`MessageRecord`](crate::MessageRecord) instead.
//!
//! # Error Handling Philosophy
//!
//! - **Parsing** errors are tied to a line number so a bad line can be found
//! - **Classifier** errors abort only the sentiment stage; parsed records stay valid
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatmood operations.
///
/// # Example
///
/// ```rust
/// use chatmood::error::Result;
/// use chatmood::Transcript;
///
/// fn my_function() -> Result<Transcript> {
///     Ok(Transcript::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatmoodError>;

/// The error type for all chatmood operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatmoodError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line looked like a timestamp line but its date/time prefix could
    /// not be split into a date and a time.
    #[error("Malformed timestamp{}: '{line}'", line_position(.line_number))]
    MalformedTimestamp {
        /// 1-based line number in the source file, when the line came from one
        line_number: Option<usize>,
        /// The offending line, whitespace-trimmed
        line: String,
    },

    /// A configured pattern failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as written in the configuration
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The requested format or input shape is not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The sentiment classifier failed or returned something unusable.
    #[error("Sentiment classifier '{classifier}' failed: {message}")]
    Classifier {
        /// Name of the classifier that failed
        classifier: String,
        /// Description of the failure
        message: String,
    },

    /// The classifier returned a different number of results than inputs.
    #[error("Sentiment classifier returned {actual} results for {expected} messages")]
    ClassifierMismatch {
        /// Number of messages submitted
        expected: usize,
        /// Number of results received
        actual: usize,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(any(feature = "json-output", feature = "hf-inference"))]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport error talking to a remote classifier.
    #[cfg(feature = "hf-inference")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatmoodError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatmoodError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

fn line_position(line_number: &Option<usize>) -> String {
    line_number
        .map(|n| format!(" on line {n}"))
        .unwrap_or_default()
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatmoodError {
    /// Creates a malformed timestamp error.
    pub fn malformed_timestamp(line_number: Option<usize>, line: impl Into<String>) -> Self {
        ChatmoodError::MalformedTimestamp {
            line_number,
            line: line.into(),
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatmoodError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatmoodError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a classifier failure error.
    pub fn classifier(classifier: impl Into<String>, message: impl Into<String>) -> Self {
        ChatmoodError::Classifier {
            classifier: classifier.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatmoodError::Io(_))
    }

    /// Returns `true` if this is a malformed timestamp error.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatmoodError::MalformedTimestamp { .. })
    }

    /// Returns `true` if the error came from the sentiment stage.
    pub fn is_classifier(&self) -> bool {
        match self {
            ChatmoodError::Classifier { .. } | ChatmoodError::ClassifierMismatch { .. } => true,
            #[cfg(feature = "hf-inference")]
            ChatmoodError::Http(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatmoodError::InvalidFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Error types for sieve operations.
//!
//! This module defines the main error type [`SieveError`] which represents
//! every failure that can halt a pipeline step: a profile page without the
//! publication table, a CSV file that does not match the publication schema,
//! and the underlying I/O and CSV failures.
//!
//! Row-level extraction faults are deliberately absent here. They are
//! reported through [`RowOutcome`](crate::table::RowOutcome) and never stop
//! an extraction.
//!
//! # Example
//!
//! ```rust
//! use sieve_core::{Document, SieveError, TableSelectors, extract_publications};
//!
//! let doc = Document::parse("<html><body><p>No table here</p></body></html>").unwrap();
//! match extract_publications(&doc, &TableSelectors::default()) {
//!     Err(SieveError::StructureError { selector }) => assert_eq!(selector, "table#gsc_a_t"),
//!     _ => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sieve operations.
#[derive(Error, Debug)]
pub enum SieveError {
    /// The publication table could not be located in the document.
    ///
    /// Extraction cannot proceed without it, so this is always fatal.
    #[error("No publication table matching '{selector}' found in the document")]
    StructureError { selector: String },

    /// The tabular file does not follow the publication schema.
    ///
    /// Returned when a required column is missing or a citation value is
    /// not a non-negative integer.
    #[error("Invalid publication table schema: {0}")]
    SchemaError(String),

    /// Invalid CSS selector in the table configuration.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The survey keyword set could not be compiled into a matcher.
    #[error("Invalid survey keyword set: {0}")]
    KeywordError(String),

    /// File not found.
    ///
    /// Returned when attempting to read a file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading or writing a CSV file failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing the exclusion report failed.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SieveError.
pub type Result<T> = std::result::Result<T, SieveError>;

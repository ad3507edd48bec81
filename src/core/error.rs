//! Error types for fix-variants
//!
//! Row-level parse errors and run-level merge errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a single `variants.txt` row
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VariantParseError {
    /// Blank line where a variant row was expected
    #[error("Empty line")]
    EmptyLine,

    /// Row has fewer comma-separated cells than the mature peptide column needs
    #[error("Too few fields: expected at least {expected}, found {found}")]
    TooFewFields { expected: usize, found: usize },

    /// Protein cell has no space-delimited amino-acid change token
    #[error("No amino-acid change token in protein cell '{0}'")]
    MissingAaChange(String),

    /// Mature peptide cell is not of the form `<name>:<change>`
    #[error("Mature peptide cell '{0}' has no ':' separator")]
    MissingMatPeptideColon(String),

    /// Mature peptide change is not of the form `<nuc>;<aa>`
    #[error("Mature peptide cell '{0}' has no ';' separator")]
    MissingMatPeptideSemicolon(String),
}

/// Errors that can occur while merging the two input tables
#[derive(Debug, Error)]
pub enum MergeError {
    /// One of the input tables does not exist
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// A variant row could not be parsed
    #[error("Invalid variant row at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: VariantParseError,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for row parsing
pub type ParseResult<T> = std::result::Result<T, VariantParseError>;

/// Result type alias for merge operations
pub type Result<T> = std::result::Result<T, MergeError>;

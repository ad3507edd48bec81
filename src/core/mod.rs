//! Core merge functionality
//!
//! This module contains the error types, input stream helpers,
//! and the lockstep merger over the two input tables.

mod error;
pub mod io;
mod merger;

pub use error::{MergeError, ParseResult, Result, VariantParseError};
pub use io::{detect_compression, open_input, CompressionFormat, LineIterator, DEFAULT_BUFFER_SIZE};
pub use merger::{
    merge_readers, merge_variants, MergeConfig, MergeStats,
    FIXED_FILE, VARIANTS_FILE, VISUALIZATION_FILE,
};

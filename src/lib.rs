//! fix-variants - normalize VarScan variant tables
//!
//! Merges a raw `variants.txt` table with its line-aligned
//! `visualization.csv` into `fixed_variants.txt`, an 11-column table with
//! the protein, amino-acid change and mature peptide annotation pulled out
//! of their compound cells.
//!
//! # Example
//!
//! ```ignore
//! use fix_variants::{merge_variants, MergeConfig};
//!
//! // Reads ./variants.txt and ./visualization.csv, writes ./fixed_variants.txt
//! let stats = merge_variants(&MergeConfig::default())?;
//! println!("{} rows", stats.written);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    merge_readers, merge_variants, MergeConfig, MergeError, MergeStats, VariantParseError,
};
pub use formats::{FixedVariantRecord, MatPeptide, VariantRecordView, FIXED_HEADER};

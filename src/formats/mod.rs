//! Table format adapters
//!
//! Adapters for the raw variant table and the fixed output table.

pub mod fixed;
pub mod variants;

pub use fixed::{write_header, write_record, FixedVariantRecord, FIXED_HEADER};
pub use variants::{parse_mat_peptide, MatPeptide, VariantRecordView};

//! Fixed variant table adapter
//!
//! The normalized 11-column output row and its writer.

use super::variants::VariantRecordView;
use crate::core::ParseResult;
use std::fmt;
use std::io::{self, Write};

/// Header line of the fixed table
///
/// The mature peptide columns are named AA-then-nucleotide while rows carry
/// nucleotide-then-AA.
pub const FIXED_HEADER: &str = "Sample,Position,Protein,AAChange,NucleotideChange,AlleleFreq,Depth,Type,MatPeptide,MatPeptideAAChange,MatPeptideNucChange";

/// One row of the fixed table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedVariantRecord {
    pub sample: String,
    pub position: String,
    pub protein: String,
    pub aa_change: String,
    pub nuc_change: String,
    pub allele_freq: String,
    pub depth: String,
    pub variant_type: String,
    pub mat_peptide: String,
    pub mat_peptide_nuc_change: String,
    pub mat_peptide_aa_change: String,
}

impl FixedVariantRecord {
    /// Build a fixed row from a parsed raw variant row
    pub fn from_view(view: &VariantRecordView<'_>) -> ParseResult<Self> {
        let aa_change = view.aa_change()?;
        let mat_peptide = view.mat_peptide()?;

        Ok(Self {
            sample: view.sample().to_string(),
            position: view.position().to_string(),
            protein: view.protein().to_string(),
            aa_change: aa_change.to_string(),
            nuc_change: view.nuc_change().to_string(),
            allele_freq: view.allele_freq().to_string(),
            depth: view.depth().to_string(),
            variant_type: view.variant_type().to_string(),
            mat_peptide: mat_peptide.name.to_string(),
            mat_peptide_nuc_change: mat_peptide.nuc_change.to_string(),
            mat_peptide_aa_change: mat_peptide.aa_change.to_string(),
        })
    }

    /// Parse a raw `variants.txt` row straight into a fixed row
    pub fn from_line(line: &str) -> ParseResult<Self> {
        Self::from_view(&VariantRecordView::parse(line)?)
    }

    /// Comma-joined row, without a line terminator
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FixedVariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{}",
            self.sample,
            self.position,
            self.protein,
            self.aa_change,
            self.nuc_change,
            self.allele_freq,
            self.depth,
            self.variant_type,
            self.mat_peptide,
            self.mat_peptide_nuc_change,
            self.mat_peptide_aa_change,
        )
    }
}

/// Write the fixed header line
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", FIXED_HEADER)
}

/// Write one fixed row followed by a newline
pub fn write_record<W: Write>(writer: &mut W, record: &FixedVariantRecord) -> io::Result<()> {
    writeln!(writer, "{}", record)
}

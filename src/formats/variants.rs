//! Raw variant table adapter
//!
//! Zero-copy view over one comma-separated row of a VarScan-style
//! `variants.txt` table, with accessors for the cells the fixed format uses.

use crate::core::{ParseResult, VariantParseError};
use memchr::memchr;

/// Minimum number of cells in a row (the mature peptide cell is index 12)
pub const MIN_FIELDS: usize = 13;

/// Placeholder marking a variant outside any mature peptide
pub const NO_MAT_PEPTIDE: &str = "-";

const SAMPLE: usize = 0;
const PROTEIN: usize = 1;
const POSITION: usize = 2;
const DEPTH: usize = 3;
const NUC_CHANGE: usize = 6;
const VARIANT_TYPE: usize = 8;
const MAT_PEPTIDE: usize = 12;

/// Zero-copy variant row view
/// Cells are kept as byte ranges into the original line
#[derive(Debug)]
pub struct VariantRecordView<'a> {
    line: &'a str,
    field_bounds: Vec<(usize, usize)>,
}

impl<'a> VariantRecordView<'a> {
    /// Split a row (without its line terminator) into cells
    pub fn parse(line: &'a str) -> ParseResult<Self> {
        if line.is_empty() {
            return Err(VariantParseError::EmptyLine);
        }

        let bytes = line.as_bytes();
        let mut field_bounds = Vec::with_capacity(16);
        let mut start = 0;
        while let Some(comma) = memchr(b',', &bytes[start..]) {
            field_bounds.push((start, start + comma));
            start += comma + 1;
        }
        field_bounds.push((start, bytes.len()));

        if field_bounds.len() < MIN_FIELDS {
            return Err(VariantParseError::TooFewFields {
                expected: MIN_FIELDS,
                found: field_bounds.len(),
            });
        }

        Ok(Self { line, field_bounds })
    }

    /// Get the number of cells
    pub fn field_count(&self) -> usize {
        self.field_bounds.len()
    }

    /// Get a cell by position
    pub fn field(&self, index: usize) -> Option<&'a str> {
        self.field_bounds
            .get(index)
            .map(|&(start, end)| &self.line[start..end])
    }

    // parse() guarantees MIN_FIELDS cells, so fixed positions below index 13 exist
    fn cell(&self, index: usize) -> &'a str {
        let (start, end) = self.field_bounds[index];
        &self.line[start..end]
    }

    pub fn sample(&self) -> &'a str {
        self.cell(SAMPLE)
    }

    pub fn position(&self) -> &'a str {
        self.cell(POSITION)
    }

    pub fn depth(&self) -> &'a str {
        self.cell(DEPTH)
    }

    pub fn nuc_change(&self) -> &'a str {
        self.cell(NUC_CHANGE)
    }

    pub fn variant_type(&self) -> &'a str {
        self.cell(VARIANT_TYPE)
    }

    /// Allele frequency, always the final cell of the row
    pub fn allele_freq(&self) -> &'a str {
        self.cell(self.field_bounds.len() - 1)
    }

    /// Raw compound protein cell, `"<protein>#... <AAChange> ..."`
    pub fn protein_cell(&self) -> &'a str {
        self.cell(PROTEIN)
    }

    /// Protein name: everything before the first `#`
    pub fn protein(&self) -> &'a str {
        let cell = self.protein_cell();
        match memchr(b'#', cell.as_bytes()) {
            Some(idx) => &cell[..idx],
            None => cell,
        }
    }

    /// Amino-acid change: second single-space-delimited token of the protein cell
    pub fn aa_change(&self) -> ParseResult<&'a str> {
        let cell = self.protein_cell();
        cell.split(' ')
            .nth(1)
            .ok_or_else(|| VariantParseError::MissingAaChange(cell.to_string()))
    }

    /// Raw mature peptide cell
    pub fn mat_peptide_cell(&self) -> &'a str {
        self.cell(MAT_PEPTIDE)
    }

    /// Parsed mature peptide annotation
    pub fn mat_peptide(&self) -> ParseResult<MatPeptide<'a>> {
        parse_mat_peptide(self.mat_peptide_cell())
    }
}

/// Mature peptide annotation; all fields empty when the row has none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatPeptide<'a> {
    pub name: &'a str,
    pub nuc_change: &'a str,
    pub aa_change: &'a str,
}

impl MatPeptide<'_> {
    /// True when all three fields are empty
    ///
    /// Holds for the `-` placeholder and for a bare `":;"` cell alike.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.nuc_change.is_empty() && self.aa_change.is_empty()
    }
}

/// Parse a `"<name>:<nucchange>;<aachange>"` cell, or the `-` placeholder
pub fn parse_mat_peptide(cell: &str) -> ParseResult<MatPeptide<'_>> {
    if cell.trim_end() == NO_MAT_PEPTIDE {
        return Ok(MatPeptide::default());
    }

    let mut parts = cell.split(':');
    let name = parts.next().unwrap_or_default().trim_end();
    let change = parts
        .next()
        .ok_or_else(|| VariantParseError::MissingMatPeptideColon(cell.to_string()))?
        .trim_end();

    let mut changes = change.split(';');
    let nuc_change = changes.next().unwrap_or_default().trim();
    let aa_change = changes
        .next()
        .ok_or_else(|| VariantParseError::MissingMatPeptideSemicolon(cell.to_string()))?
        .trim();

    Ok(MatPeptide {
        name,
        nuc_change,
        aa_change,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str =
        "S1,Spike#x y_change,100,500,extra,extra,C>T,extra,SNP,extra,extra,extra,ORF1a:45A>T;K15N";

    #[test]
    fn test_parse_row() {
        let view = VariantRecordView::parse(ROW).unwrap();
        assert_eq!(view.field_count(), 13);
        assert_eq!(view.sample(), "S1");
        assert_eq!(view.position(), "100");
        assert_eq!(view.depth(), "500");
        assert_eq!(view.nuc_change(), "C>T");
        assert_eq!(view.variant_type(), "SNP");
        assert_eq!(view.allele_freq(), "ORF1a:45A>T;K15N");
        assert_eq!(view.field(13), None);
    }

    #[test]
    fn test_allele_freq_is_last_cell() {
        let line = format!("{},0.87", ROW);
        let view = VariantRecordView::parse(&line).unwrap();
        assert_eq!(view.field_count(), 14);
        assert_eq!(view.allele_freq(), "0.87");
    }

    #[test]
    fn test_protein_and_aa_change() {
        let line = ROW.replace("Spike#x y_change", "Spike#something ProteinChangeXYZ rest");
        let view = VariantRecordView::parse(&line).unwrap();
        assert_eq!(view.protein(), "Spike");
        assert_eq!(view.aa_change().unwrap(), "ProteinChangeXYZ");
    }

    #[test]
    fn test_protein_without_hash() {
        let line = ROW.replace("Spike#x y_change", "ORF8 L84S");
        let view = VariantRecordView::parse(&line).unwrap();
        assert_eq!(view.protein(), "ORF8 L84S");
        assert_eq!(view.aa_change().unwrap(), "L84S");
    }

    #[test]
    fn test_missing_aa_change() {
        let line = ROW.replace("Spike#x y_change", "Spike#x");
        let view = VariantRecordView::parse(&line).unwrap();
        assert_eq!(
            view.aa_change(),
            Err(VariantParseError::MissingAaChange("Spike#x".to_string()))
        );
    }

    #[test]
    fn test_too_few_fields() {
        let err = VariantRecordView::parse("S1,Spike#x y,100,500").unwrap_err();
        assert_eq!(err, VariantParseError::TooFewFields { expected: 13, found: 4 });
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(VariantRecordView::parse("").unwrap_err(), VariantParseError::EmptyLine);
    }

    #[test]
    fn test_mat_peptide_placeholder() {
        let mp = parse_mat_peptide("-").unwrap();
        assert!(mp.is_empty());
        assert_eq!(parse_mat_peptide("-  ").unwrap(), MatPeptide::default());
    }

    #[test]
    fn test_mat_peptide_empty_parts_are_empty() {
        let mp = parse_mat_peptide(":;").unwrap();
        assert!(mp.is_empty());
        assert!(!parse_mat_peptide("nsp1:;").unwrap().is_empty());
    }

    #[test]
    fn test_mat_peptide_full() {
        let mp = parse_mat_peptide("ORF1a:123A>G;M45L").unwrap();
        assert_eq!(mp.name, "ORF1a");
        assert_eq!(mp.nuc_change, "123A>G");
        assert_eq!(mp.aa_change, "M45L");
    }

    #[test]
    fn test_mat_peptide_whitespace() {
        let mp = parse_mat_peptide("nsp3 : 12C>T ; P4L  ").unwrap();
        assert_eq!(mp.name, "nsp3");
        assert_eq!(mp.nuc_change, "12C>T");
        assert_eq!(mp.aa_change, "P4L");
    }

    #[test]
    fn test_mat_peptide_missing_colon() {
        assert_eq!(
            parse_mat_peptide("ORF1a"),
            Err(VariantParseError::MissingMatPeptideColon("ORF1a".to_string()))
        );
    }

    #[test]
    fn test_mat_peptide_missing_semicolon() {
        assert_eq!(
            parse_mat_peptide("ORF1a:123A>G"),
            Err(VariantParseError::MissingMatPeptideSemicolon("ORF1a:123A>G".to_string()))
        );
    }
}

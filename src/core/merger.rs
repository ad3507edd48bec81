//! Variant record merger
//!
//! Walks `variants.txt` and `visualization.csv` in lockstep and writes one
//! fixed row per line pair. The visualization table only bounds the number of
//! rows: when either table ends, the merge ends.

use super::error::{MergeError, Result};
use super::io::{open_input, LineIterator, DEFAULT_BUFFER_SIZE};
use crate::formats::fixed::{write_header, write_record, FixedVariantRecord};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Raw variant table name
pub const VARIANTS_FILE: &str = "variants.txt";

/// Visualization table name
pub const VISUALIZATION_FILE: &str = "visualization.csv";

/// Fixed output table name
pub const FIXED_FILE: &str = "fixed_variants.txt";

/// Locations of the three tables plus merge behaviour switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub variants: PathBuf,
    pub visualization: PathBuf,
    pub output: PathBuf,
    /// Count and report lines left over when the tables differ in length
    pub warn_mismatch: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            variants: PathBuf::from(VARIANTS_FILE),
            visualization: PathBuf::from(VISUALIZATION_FILE),
            output: PathBuf::from(FIXED_FILE),
            warn_mismatch: false,
        }
    }
}

impl MergeConfig {
    /// Use the fixed table names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            variants: dir.join(VARIANTS_FILE),
            visualization: dir.join(VISUALIZATION_FILE),
            output: dir.join(FIXED_FILE),
            warn_mismatch: false,
        }
    }
}

/// Merge statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Line pairs read
    pub total: usize,
    /// Fixed rows written
    pub written: usize,
    /// Variant lines with no visualization partner (only counted with `warn_mismatch`)
    pub unpaired_variants: usize,
    /// Visualization lines with no variant partner (only counted with `warn_mismatch`)
    pub unpaired_visualization: usize,
}

fn open_table(path: &Path) -> Result<Box<dyn BufRead>> {
    debug!("Opening input table: {:?}", path);
    open_input(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => MergeError::InputNotFound(path.to_path_buf()),
        _ => MergeError::Io(e),
    })
}

/// Merge the tables named by `config` into the fixed output table
///
/// Both inputs are opened before the output is created, so a missing input
/// leaves any existing output untouched. A malformed row aborts the merge and
/// leaves the rows written so far on disk.
pub fn merge_variants(config: &MergeConfig) -> Result<MergeStats> {
    let variants = open_table(&config.variants)?;
    let visualization = open_table(&config.visualization)?;

    debug!("Creating output table: {:?}", config.output);
    let output = File::create(&config.output)?;
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, output);

    let stats = merge_streams(variants, visualization, &mut writer, config.warn_mismatch)?;
    writer.flush()?;

    info!(
        "Wrote {} fixed rows to {:?}",
        stats.written, config.output
    );
    Ok(stats)
}

/// Merge two line streams into `out`, writing the header first
pub fn merge_readers<V, Z, W>(variants: V, visualization: Z, out: W) -> Result<MergeStats>
where
    V: BufRead,
    Z: BufRead,
    W: Write,
{
    merge_streams(variants, visualization, out, false)
}

fn merge_streams<V, Z, W>(
    variants: V,
    visualization: Z,
    mut out: W,
    warn_mismatch: bool,
) -> Result<MergeStats>
where
    V: BufRead,
    Z: BufRead,
    W: Write,
{
    let mut variant_lines = LineIterator::new(variants);
    let mut vis_lines = LineIterator::new(visualization);
    let mut stats = MergeStats::default();

    write_header(&mut out)?;

    let mut variants_left = false;
    let mut visualization_left = false;
    loop {
        let line = match variant_lines.next_line() {
            Some(line) => line?,
            None => {
                visualization_left = true;
                break;
            }
        };
        if !vis_lines.skip_line()? {
            variants_left = true;
            break;
        }

        stats.total += 1;
        let record = FixedVariantRecord::from_line(line).map_err(|source| MergeError::Parse {
            line: stats.total,
            source,
        })?;
        write_record(&mut out, &record)?;
        stats.written += 1;
    }

    if warn_mismatch {
        if variants_left {
            // The line that found no partner was already consumed
            stats.unpaired_variants = 1;
            while variant_lines.skip_line()? {
                stats.unpaired_variants += 1;
            }
        }
        if visualization_left {
            while vis_lines.skip_line()? {
                stats.unpaired_visualization += 1;
            }
        }
    }

    if stats.unpaired_variants > 0 {
        warn!(
            "{} variant rows have no visualization row and were dropped",
            stats.unpaired_variants
        );
    }
    if stats.unpaired_visualization > 0 {
        warn!(
            "{} visualization rows have no variant row",
            stats.unpaired_visualization
        );
    }

    Ok(stats)
}

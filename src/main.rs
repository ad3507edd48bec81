//! fix-variants CLI entry point
//!
//! Run with no arguments in a directory holding `variants.txt` and
//! `visualization.csv` to produce `fixed_variants.txt`.

use anyhow::Context;
use clap::Parser;
use fix_variants::core::{merge_variants, MergeConfig};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fix-variants")]
#[command(about = "Merge VarScan variant tables into the fixed 11-column format")]
#[command(version)]
#[command(author = "fix-variants Contributors")]
struct Cli {
    /// Directory holding variants.txt, visualization.csv and fixed_variants.txt
    #[arg(short = 'd', long, default_value = ".")]
    dir: PathBuf,
    /// Raw variant table (overrides <DIR>/variants.txt)
    #[arg(long)]
    variants: Option<PathBuf>,
    /// Visualization table (overrides <DIR>/visualization.csv)
    #[arg(long)]
    visualization: Option<PathBuf>,
    /// Output table (overrides <DIR>/fixed_variants.txt)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Report rows left over when the two tables differ in length
    #[arg(long)]
    warn_mismatch: bool,
    /// Do not print the statistics block
    #[arg(short = 'q', long)]
    quiet: bool,
}

impl Cli {
    fn merge_config(&self) -> MergeConfig {
        let mut config = MergeConfig::in_dir(&self.dir);
        if let Some(path) = &self.variants {
            config.variants = path.clone();
        }
        if let Some(path) = &self.visualization {
            config.visualization = path.clone();
        }
        if let Some(path) = &self.output {
            config.output = path.clone();
        }
        config.warn_mismatch = self.warn_mismatch;
        config
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let config = cli.merge_config();
    log::debug!("Merge configuration: {:?}", config);

    let stats = merge_variants(&config).with_context(|| {
        format!(
            "Failed to merge {:?} and {:?} into {:?}",
            config.variants, config.visualization, config.output
        )
    })?;

    if !cli.quiet {
        eprintln!("=== Merge Statistics ===");
        eprintln!("Line pairs:      {}", stats.total);
        eprintln!("Rows written:    {}", stats.written);
        if config.warn_mismatch {
            eprintln!("Unpaired (variants):      {}", stats.unpaired_variants);
            eprintln!("Unpaired (visualization): {}", stats.unpaired_visualization);
        }
        eprintln!("Time elapsed:    {:.2}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}

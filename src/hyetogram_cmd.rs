//! Hyetogram command: depth table -> minute-by-minute Huff hyetograms.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use taborga_io::{read_depth_table, write_hyetogram_table};
use taborga_table::{OutputTable, distribute};

use crate::cli::HyetogramArgs;
use crate::config::TaborgaConfig;
use crate::convert;

/// Run the hyetogram pipeline.
pub fn run(args: HyetogramArgs) -> Result<()> {
    let _cmd = info_span!("hyetogram").entered();
    let config = TaborgaConfig::load(&args.config)?;

    let input = convert::require_path(args.input, config.io.depth_table.as_ref(), "depth table")?;
    let output = convert::require_path(args.output, config.io.hyetogram.as_ref(), "hyetogram")?;
    execute(&config, &input, &output)?;
    Ok(())
}

/// Reads a depth table, disaggregates every scenario, and writes the
/// hyetogram table.
pub fn execute(config: &TaborgaConfig, input: &Path, output: &Path) -> Result<OutputTable> {
    info!(path = %input.display(), "reading depth table");
    let depth_table = read_depth_table(input)
        .with_context(|| format!("failed to read depth table: {}", input.display()))?;

    let table = distribute(&depth_table)
        .with_context(|| format!("failed to build hyetograms from {}", input.display()))?;
    summarize(&table);

    let writer_cfg = convert::build_writer_config(&config.hyetogram);
    write_hyetogram_table(output, &table, &writer_cfg)
        .with_context(|| format!("failed to write hyetograms: {}", output.display()))?;
    info!(path = %output.display(), "hyetograms written");
    Ok(table)
}

fn summarize(table: &OutputTable) {
    info!(
        n_scenarios = table.columns().len(),
        n_minutes = table.n_rows(),
        "hyetograms built"
    );
    for column in table.columns() {
        info!(
            scenario = %column.label(),
            total_mm = column.total(),
            peak_mm_per_min = column.peak(),
            "scenario"
        );
    }
}

//! Depths command: isozone depth-duration table for one zone.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use taborga_idf::{DepthTable, compute_depth_table, duration_label};
use taborga_io::{WriterConfig, read_coefficients, read_depths, write_depth_table};
use taborga_table::{DURATION_HEADER, LabelledTable, return_period_label};

use crate::cli::DepthsArgs;
use crate::config::TaborgaConfig;
use crate::convert;

/// Run the depth-table pipeline and print the table.
pub fn run(args: DepthsArgs) -> Result<()> {
    let _cmd = info_span!("depths").entered();
    let config = TaborgaConfig::load(&args.config)?;
    let zone = convert::resolve_zone(&args.zone, &config.io)?;

    let table = build(&config, &zone, args.input)?;
    print!("{}", render_table(&table, &zone).context("failed to render depth table")?);

    let output = args
        .output
        .or_else(|| config.io.depth_table.clone())
        .unwrap_or_else(|| convert::default_depth_table_path(&zone));
    write(&table, &output)
}

/// Reads the coefficient and depth files and builds the zone's table.
pub fn build(config: &TaborgaConfig, zone: &str, depths: Option<PathBuf>) -> Result<DepthTable> {
    let coef_path =
        convert::require_path(None, config.io.coefficients.as_ref(), "[io].coefficients")?;
    let depth_path = convert::require_path(depths, config.io.depths.as_ref(), "[io].depths")?;
    let durations = convert::build_durations(&config.depths)?;

    info!(path = %coef_path.display(), "reading coefficients");
    let coefficients = read_coefficients(&coef_path)
        .with_context(|| format!("failed to read coefficients: {}", coef_path.display()))?;

    info!(path = %depth_path.display(), "reading 24 h depths");
    let depths = read_depths(&depth_path, Some(zone))
        .with_context(|| format!("failed to read depths: {}", depth_path.display()))?;

    let table = compute_depth_table(zone, &coefficients, &depths, &durations)
        .with_context(|| format!("failed to build depth table for zone {zone}"))?;
    info!(
        n_durations = table.durations().len(),
        n_return_periods = table.return_periods().len(),
        "depth table built"
    );
    Ok(table)
}

/// Writes the depth table as CSV.
pub fn write(table: &DepthTable, path: &Path) -> Result<()> {
    write_depth_table(path, &LabelledTable::from(table), &WriterConfig::default())
        .with_context(|| format!("failed to write depth table: {}", path.display()))?;
    info!(path = %path.display(), "depth table written");
    Ok(())
}

/// Renders the table for the terminal, depths to two decimals.
fn render_table(table: &DepthTable, zone: &str) -> Result<String, std::fmt::Error> {
    let rule = "=".repeat(100);
    let mut out = String::new();
    writeln!(out, "{rule}")?;
    writeln!(out, "DEPTH TABLE (mm) - zone {}", zone.trim().to_uppercase())?;
    writeln!(out, "{rule}")?;

    write!(out, "{DURATION_HEADER:<10}")?;
    for &tr in table.return_periods() {
        write!(out, "{:>12}", return_period_label(tr))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(100))?;

    for (&hours, row) in table.durations().iter().zip(table.rows()) {
        write!(out, "{:<10}", duration_label(hours))?;
        for cell in row {
            write!(out, "{:>12.2}", cell.depth_mm)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{rule}")?;
    Ok(out)
}

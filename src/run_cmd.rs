//! Run command: depth table followed by its hyetograms.

use anyhow::Result;
use tracing::info_span;

use crate::cli::RunArgs;
use crate::config::TaborgaConfig;
use crate::{convert, depths_cmd, hyetogram_cmd};

/// Build and write the zone's depth table, then read it back and write
/// the hyetogram table.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    let config = TaborgaConfig::load(&args.config)?;
    let zone = convert::resolve_zone(&args.zone, &config.io)?;

    let table = depths_cmd::build(&config, &zone, None)?;
    let depth_path = config
        .io
        .depth_table
        .clone()
        .unwrap_or_else(|| convert::default_depth_table_path(&zone));
    depths_cmd::write(&table, &depth_path)?;

    let output = convert::require_path(args.output, config.io.hyetogram.as_ref(), "hyetogram")?;
    hyetogram_cmd::execute(&config, &depth_path, &output)?;
    Ok(())
}

//! Pure conversion functions: TOML config structs -> crate API types.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::info;

use taborga_io::{GeoJsonZones, WriterConfig, ZoneResolver};

use crate::cli::ZoneArgs;
use crate::config::*;

/// Converts configured durations (minutes) into hours.
///
/// Durations must be positive and strictly ascending, and those of an hour
/// or more must be whole hours.
pub fn build_durations(depths: &DepthsToml) -> Result<Vec<f64>> {
    let minutes = &depths.durations_min;
    if minutes.is_empty() {
        bail!("[depths].durations_min must not be empty");
    }
    if minutes.contains(&0) {
        bail!("[depths].durations_min must be positive, got {minutes:?}");
    }
    if minutes.windows(2).any(|w| w[0] >= w[1]) {
        bail!("[depths].durations_min must be strictly ascending, got {minutes:?}");
    }
    // Rows of an hour or more are labelled in whole hours.
    if let Some(m) = minutes.iter().find(|&&m| m >= 60 && m % 60 != 0) {
        bail!("[depths].durations_min: {m} min is not a whole number of hours");
    }
    Ok(minutes.iter().map(|&m| f64::from(m) / 60.0).collect())
}

/// Builds a [`WriterConfig`] from the TOML hyetogram configuration.
pub fn build_writer_config(hyetogram: &HyetogramToml) -> WriterConfig {
    WriterConfig::default().with_decimals(hyetogram.decimals)
}

/// Picks the zone: an explicit `--zone`, or the polygon containing
/// `--lat`/`--lon`.
pub fn resolve_zone(args: &ZoneArgs, io: &IoConfig) -> Result<String> {
    if let Some(zone) = &args.zone {
        return Ok(zone.clone());
    }
    let (Some(lat), Some(lon)) = (args.lat, args.lon) else {
        bail!("no zone: use --zone, or --lat and --lon with [io].zones set");
    };
    let path = io
        .zones
        .as_ref()
        .context("no zone polygons: set [io].zones in config to look up --lat/--lon")?;
    let zones = GeoJsonZones::from_path(path, &io.zone_property)
        .with_context(|| format!("failed to read zones: {}", path.display()))?;
    let zone = zones.require(lat, lon)?;
    info!(lat, lon, zone = %zone, "zone identified");
    Ok(zone)
}

/// An override from the command line, else the configured path.
pub fn require_path(
    cli: Option<PathBuf>,
    configured: Option<&PathBuf>,
    what: &str,
) -> Result<PathBuf> {
    cli.or_else(|| configured.cloned())
        .with_context(|| format!("no {what} path: set it in config or on the command line"))
}

/// Default depth-table output for a zone when none is configured.
pub fn default_depth_table_path(zone: &str) -> PathBuf {
    PathBuf::from(format!("depth_table_{}.csv", zone.trim().to_uppercase()))
}

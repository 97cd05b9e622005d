use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Taborga design-storm generator.
#[derive(Parser)]
#[command(
    name = "taborga",
    version,
    about = "Isozone depth tables and Huff design hyetograms"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the depth-duration table for one zone.
    Depths(DepthsArgs),
    /// Disaggregate a depth table into minute-by-minute hyetograms.
    Hyetogram(HyetogramArgs),
    /// Build the depth table, then its hyetograms.
    Run(RunArgs),
}

/// How the zone is chosen: by name, or by a coordinate inside it.
#[derive(clap::Args)]
pub struct ZoneArgs {
    /// Zone identifier (case-insensitive).
    #[arg(short, long, conflicts_with_all = ["lat", "lon"])]
    pub zone: Option<String>,

    /// Latitude (WGS84 degrees) looked up in the `[io].zones` GeoJSON.
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude (WGS84 degrees) looked up in the `[io].zones` GeoJSON.
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

/// Arguments for the `depths` subcommand.
#[derive(clap::Args)]
pub struct DepthsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "taborga.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Override the 24-hour depth CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the depth-table output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `hyetogram` subcommand.
#[derive(clap::Args)]
pub struct HyetogramArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "taborga.toml")]
    pub config: PathBuf,

    /// Override the depth-table input path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override the hyetogram output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "taborga.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Override the hyetogram output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

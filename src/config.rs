use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use taborga_idf::STANDARD_DURATIONS_MIN;

/// Top-level Taborga configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TaborgaConfig {
    /// File locations.
    #[serde(default)]
    pub io: IoConfig,

    /// Depth-table settings.
    #[serde(default)]
    pub depths: DepthsToml,

    /// Hyetogram output settings.
    #[serde(default)]
    pub hyetogram: HyetogramToml,
}

impl TaborgaConfig {
    /// Reads `path`, or returns the defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub coefficients: Option<PathBuf>,
    pub depths: Option<PathBuf>,
    pub zones: Option<PathBuf>,
    #[serde(default = "default_zone_property")]
    pub zone_property: String,
    pub depth_table: Option<PathBuf>,
    pub hyetogram: Option<PathBuf>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            coefficients: None,
            depths: None,
            zones: None,
            zone_property: default_zone_property(),
            depth_table: None,
            hyetogram: None,
        }
    }
}

fn default_zone_property() -> String {
    "ZONA".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepthsToml {
    #[serde(default = "default_durations_min")]
    pub durations_min: Vec<u32>,
}

impl Default for DepthsToml {
    fn default() -> Self {
        Self {
            durations_min: default_durations_min(),
        }
    }
}

fn default_durations_min() -> Vec<u32> {
    STANDARD_DURATIONS_MIN.to_vec()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HyetogramToml {
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for HyetogramToml {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}

fn default_decimals() -> usize {
    4
}

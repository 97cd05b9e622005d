//! Coefficient and 24-hour depth files.

use std::path::Path;

use taborga_idf::{CoefficientSet, IdfError, ReturnPeriodDepth, ZoneCoefficients, normalize_zone};
use tracing::{debug, info};

use crate::error::IoError;
use crate::reader::CsvFile;

const ZONE: &[&str] = &["zone", "isozona"];
const RETURN_PERIOD: &[&str] = &["return_period", "tempo_retorno"];
const DEPTH_24H: &[&str] = &["depth_24h_mm", "precipitacao"];
const COEF_1H_24H: &[&str] = &["coef_1h_24h"];
const COEF_6MIN_24H: &[&str] = &["coef_6min_24h"];

/// Reads the per-zone coefficient file.
///
/// Required columns: zone (`zone` / `isozona`), `coef_1h_24h`,
/// `coef_6min_24h`. An optional return-period column (`return_period` /
/// `tempo_retorno`) restricts a row to that return period; rows with a
/// blank return period apply to every return period of the zone.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] for a missing required column,
/// [`IoError::InvalidValue`] for an unparseable number and
/// [`IoError::Idf`] for a coefficient outside (0, 100].
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_coefficients(path: &Path) -> Result<CoefficientSet, IoError> {
    let file = CsvFile::open(path)?;
    let zone_col = file.require_column(ZONE)?;
    let c1h_col = file.require_column(COEF_1H_24H)?;
    let c6_col = file.require_column(COEF_6MIN_24H)?;
    let tr_col = file.find_column(RETURN_PERIOD);

    let mut records = Vec::with_capacity(file.records().len());
    for (line, record) in file.records() {
        let zone = CsvFile::text(record, zone_col);
        let c1h = file.number(*line, record, c1h_col)?;
        let c6 = file.number(*line, record, c6_col)?;
        let mut coefficients = ZoneCoefficients::new(zone, c1h, c6)?;

        if let Some(col) = tr_col.filter(|&c| !CsvFile::text(record, c).is_empty()) {
            coefficients = coefficients.with_return_period(file.integer(*line, record, col)?);
        }
        records.push(coefficients);
    }

    let set = CoefficientSet::new(records);
    info!(n_records = set.len(), n_zones = set.zones().len(), "loaded coefficients");
    Ok(set)
}

/// Reads the 24-hour depth file.
///
/// Required columns: return period (`return_period` / `tempo_retorno`) and
/// depth (`depth_24h_mm` / `precipitacao`). If the file also has a zone
/// column and `zone` is given, only that zone's rows are kept.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`], [`IoError::InvalidValue`], or
/// [`IoError::Idf`] for a non-positive depth or a zone with no rows.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_depths(path: &Path, zone: Option<&str>) -> Result<Vec<ReturnPeriodDepth>, IoError> {
    let file = CsvFile::open(path)?;
    let tr_col = file.require_column(RETURN_PERIOD)?;
    let depth_col = file.require_column(DEPTH_24H)?;
    let zone_filter = match (file.find_column(ZONE), zone) {
        (Some(col), Some(zone)) => Some((col, normalize_zone(zone))),
        _ => None,
    };

    let mut depths = Vec::new();
    let mut seen_zones: Vec<String> = Vec::new();
    for (line, record) in file.records() {
        if let Some((col, wanted)) = &zone_filter {
            let row_zone = normalize_zone(CsvFile::text(record, *col));
            if row_zone != *wanted {
                if !seen_zones.contains(&row_zone) {
                    seen_zones.push(row_zone);
                }
                continue;
            }
        }
        let tr = file.integer(*line, record, tr_col)?;
        let depth = file.number(*line, record, depth_col)?;
        depths.push(ReturnPeriodDepth::new(tr, depth)?);
    }

    if let Some((_, wanted)) = zone_filter {
        if depths.is_empty() {
            return Err(IdfError::ZoneNotFound {
                zone: wanted,
                available: seen_zones,
            }
            .into());
        }
    }

    debug!(n_depths = depths.len(), path = %file.path().display(), "loaded depths");
    Ok(depths)
}

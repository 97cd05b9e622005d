//! Point-in-polygon zone lookup.

use std::path::Path;

use geo::{Contains, MultiPolygon, Point};
use geojson::GeoJson;
use taborga_idf::normalize_zone;
use tracing::{debug, warn};

use crate::error::IoError;

/// Maps a geographic coordinate to a zone identifier.
pub trait ZoneResolver {
    /// Returns the zone containing `(lat, lon)`, if any.
    fn resolve(&self, lat: f64, lon: f64) -> Option<String>;

    /// Like [`resolve`](Self::resolve) but fails with
    /// [`IoError::ZoneNotResolved`].
    fn require(&self, lat: f64, lon: f64) -> Result<String, IoError> {
        self.resolve(lat, lon)
            .ok_or(IoError::ZoneNotResolved { lat, lon })
    }
}

/// Zone polygons read from a WGS84 GeoJSON feature collection.
///
/// Coordinates are taken as longitude/latitude degrees; nothing is
/// reprojected.
#[derive(Debug, Clone)]
pub struct GeoJsonZones {
    zones: Vec<(String, MultiPolygon<f64>)>,
}

impl GeoJsonZones {
    /// Reads zones from a GeoJSON file, naming each by `property`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the file is missing, or any
    /// error from [`from_geojson_str`](Self::from_geojson_str).
    pub fn from_path(path: &Path, property: &str) -> Result<Self, IoError> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_geojson_str(&text, property)
    }

    /// Parses a feature collection. Features without the property or
    /// without a polygonal geometry are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::GeoJson`] if the text is not a feature collection
    /// or contains no usable zone.
    pub fn from_geojson_str(text: &str, property: &str) -> Result<Self, IoError> {
        let GeoJson::FeatureCollection(collection) = text.parse::<GeoJson>()? else {
            return Err(IoError::GeoJson {
                reason: "expected a FeatureCollection".to_string(),
            });
        };

        let mut zones = Vec::with_capacity(collection.features.len());
        for (i, feature) in collection.features.into_iter().enumerate() {
            let Some(name) = feature.property(property).map(|v| match v.as_str() {
                Some(s) => normalize_zone(s),
                None => normalize_zone(&v.to_string()),
            }) else {
                warn!(feature = i, property, "feature has no zone property");
                continue;
            };
            let Some(geometry) = feature.geometry else {
                warn!(feature = i, zone = %name, "feature has no geometry");
                continue;
            };
            let shape: geo::Geometry<f64> = geometry.try_into()?;
            let polygons = match shape {
                geo::Geometry::Polygon(p) => MultiPolygon(vec![p]),
                geo::Geometry::MultiPolygon(mp) => mp,
                _ => {
                    warn!(feature = i, zone = %name, "skipping non-polygonal geometry");
                    continue;
                }
            };
            zones.push((name, polygons));
        }

        if zones.is_empty() {
            return Err(IoError::GeoJson {
                reason: format!("no polygon feature carries property '{property}'"),
            });
        }
        debug!(n_zones = zones.len(), "loaded zone polygons");
        Ok(Self { zones })
    }

    /// Number of zone polygons.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zones were loaded.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl ZoneResolver for GeoJsonZones {
    fn resolve(&self, lat: f64, lon: f64) -> Option<String> {
        let point = Point::new(lon, lat);
        self.zones
            .iter()
            .find(|(_, polygons)| polygons.contains(&point))
            .map(|(name, _)| name.clone())
    }
}

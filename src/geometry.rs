//! Area-of-interest helpers
//!
//! Two ways a job gets its geometry: a GeoJSON file supplied by the user
//! (the first feature's geometry is used verbatim), or the well-known-text
//! footprint of the referenced image or mosaic converted to GeoJSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use geojson::{FeatureCollection, GeoJson, Geometry};
use wkt::TryFromWkt;

/// Convert a well-known-text footprint into a GeoJSON geometry.
pub fn from_wkt(footprint: &str) -> Result<Geometry> {
    let geometry: geo_types::Geometry<f64> = geo_types::Geometry::try_from_wkt_str(footprint)
        .map_err(|err| anyhow!("invalid WKT footprint: {err}"))?;
    Ok(Geometry::new(geojson::Value::from(&geometry)))
}

/// Read the first feature's geometry from a GeoJSON file.
pub fn from_feature_file(path: &Path) -> Result<Geometry> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let geojson: GeoJson = raw
        .parse()
        .with_context(|| format!("{} is not valid GeoJSON", path.display()))?;
    let collection = FeatureCollection::try_from(geojson)
        .with_context(|| format!("{} is not a feature collection", path.display()))?;

    let feature = collection
        .features
        .into_iter()
        .next()
        .with_context(|| format!("{} contains no features", path.display()))?;
    feature
        .geometry
        .with_context(|| format!("the first feature of {} has no geometry", path.display()))
}

//! GeoJSON place loader.
//!
//! Reads a `FeatureCollection` and keeps its `Point` features as map
//! annotations.  Properties used:
//!
//! | Property     | `Place` field   |
//! |--------------|-----------------|
//! | `title`      | `title`         |
//! | `location`   | `location_name` |
//! | `discipline` | `discipline`    |
//!
//! All three are optional.  A feature is skipped (and logged) if its
//! geometry is not a `Point`, its `properties` is not an object, or its
//! coordinates are invalid.  GeoJSON stores positions as `[lon, lat]`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use ro_core::GeoPoint;

use crate::SourceResult;

/// A titled point annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub title:         Option<String>,
    pub location_name: Option<String>,
    pub discipline:    Option<String>,
    pub location:      GeoPoint,
}

impl Place {
    /// Callout subtitle: the location name.
    pub fn subtitle(&self) -> Option<&str> {
        self.location_name.as_deref()
    }
}

// ── Raw document ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<Value>,
}

#[derive(Deserialize)]
struct RawFeature {
    geometry:   Option<RawGeometry>,
    properties: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Point { coordinates: Vec<f64> },
    #[serde(other)]
    Other,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load places from a GeoJSON file.
pub fn load_places_geojson(path: &Path) -> SourceResult<Vec<Place>> {
    let file = std::fs::File::open(path)?;
    load_places_reader(std::io::BufReader::new(file))
}

/// Like [`load_places_geojson`] but accepts any `Read` source.
///
/// # Errors
///
/// [`SourceError::Json`](crate::SourceError::Json) if the document is not a
/// JSON object with a `features` array.
pub fn load_places_reader<R: Read>(reader: R) -> SourceResult<Vec<Place>> {
    let collection: RawCollection = serde_json::from_reader(reader)?;
    let total = collection.features.len();

    let places: Vec<Place> = collection
        .features
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match place_from_feature(value) {
            Ok(place) => Some(place),
            Err(reason) => {
                log::warn!("skipping GeoJSON feature {i}: {reason}");
                None
            }
        })
        .collect();

    log::debug!("loaded {} of {total} GeoJSON features as places", places.len());
    Ok(places)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn place_from_feature(value: Value) -> Result<Place, String> {
    let feature: RawFeature = serde_json::from_value(value).map_err(|e| e.to_string())?;

    let coordinates = match feature.geometry {
        Some(RawGeometry::Point { coordinates }) => coordinates,
        Some(RawGeometry::Other) => return Err("geometry is not a Point".into()),
        None => return Err("feature has no geometry".into()),
    };
    let properties = feature
        .properties
        .ok_or_else(|| "feature has no properties object".to_string())?;

    let [lon, lat, ..] = coordinates.as_slice() else {
        return Err(format!("Point has {} coordinates, expected 2", coordinates.len()));
    };
    let location = GeoPoint::try_new(*lat, *lon).map_err(|e| e.to_string())?;

    let text = |key: &str| properties.get(key).and_then(Value::as_str).map(str::to_owned);
    Ok(Place {
        title:         text("title"),
        location_name: text("location"),
        discipline:    text("discipline"),
        location,
    })
}

//! `ro-source` — where boundary coordinates and map annotations come from.
//!
//! The planner never embeds coordinates; applications inject a
//! [`CoordinateSource`] instead.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`source`]  | `CoordinateSource` trait, `CoordinateTable`, `CsvPointSource`|
//! | [`csv`]     | `load_points_csv`, `load_points_reader`                      |
//! | [`geojson`] | `Place`, `load_places_geojson`, `load_places_reader`         |
//! | [`error`]   | `SourceError`, `SourceResult<T>`                             |
//!
//! # Malformed input
//!
//! Every loader skips entries it cannot turn into a valid
//! [`GeoPoint`](ro_core::GeoPoint) and logs them at `warn` level.  Only
//! I/O failures and unparseable documents are returned as errors.

pub mod csv;
pub mod error;
pub mod geojson;
pub mod source;

#[cfg(test)]
mod tests;

pub use crate::csv::{load_points_csv, load_points_reader};
pub use error::{SourceError, SourceResult};
pub use geojson::{Place, load_places_geojson, load_places_reader};
pub use source::{CoordinateSource, CoordinateTable, CsvPointSource, load_boundary};

use ro_core::GeoPoint;

/// Parse a textual lat/lon pair, returning a reason on failure.
pub(crate) fn parse_pair(lat: &str, lon: &str) -> Result<GeoPoint, String> {
    let lat_v: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("latitude {lat:?} is not a number"))?;
    let lon_v: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("longitude {lon:?} is not a number"))?;
    GeoPoint::try_new(lat_v, lon_v).map_err(|e| e.to_string())
}

//! CSV point loader.
//!
//! # CSV format
//!
//! One row per point, in path order.  The header row is required and must
//! name a `lat` (or `latitude`) and a `lon` (or `longitude`) column; fields
//! and header names are trimmed.
//!
//! ```csv
//! lat,lon
//! 52.46523208572938,13.4293270111084
//! 52.46531705969792,13.4324149042368
//! ```
//!
//! Rows with a missing field, a non-numeric value, or an out-of-range
//! coordinate are skipped and logged.  Read failures and a header without
//! both coordinate columns abort the load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ro_core::GeoPoint;

use crate::{SourceError, SourceResult, parse_pair};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointRecord {
    #[serde(alias = "latitude")]
    lat: String,
    #[serde(alias = "longitude")]
    lon: String,
}

const LAT_COLUMNS: [&str; 2] = ["lat", "latitude"];
const LON_COLUMNS: [&str; 2] = ["lon", "longitude"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered list of points from a CSV file.
pub fn load_points_csv(path: &Path) -> SourceResult<Vec<GeoPoint>> {
    let file = std::fs::File::open(path)?;
    load_points_reader(file)
}

/// Like [`load_points_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data bundled with
/// `include_str!`.
pub fn load_points_reader<R: Read>(reader: R) -> SourceResult<Vec<GeoPoint>> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    let has_column = |names: &[&str]| headers.iter().any(|h| names.contains(&h));
    if !has_column(&LAT_COLUMNS) {
        return Err(SourceError::MissingColumn("lat"));
    }
    if !has_column(&LON_COLUMNS) {
        return Err(SourceError::MissingColumn("lon"));
    }

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in csv_reader.deserialize::<PointRecord>().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("skipping CSV row {}: {e}", row + 1);
                skipped += 1;
                continue;
            }
        };
        match parse_pair(&record.lat, &record.lon) {
            Ok(p) => points.push(p),
            Err(reason) => {
                log::warn!("skipping CSV row {}: {reason}", row + 1);
                skipped += 1;
            }
        }
    }

    log::debug!("loaded {} points from CSV ({skipped} skipped)", points.len());
    Ok(points)
}

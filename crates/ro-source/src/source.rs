//! The `CoordinateSource` trait and its built-in implementations.
//!
//! # Pluggability
//!
//! Callers hand the planner a `CoordinateSource` rather than a literal array,
//! so the same code can run against a string table, a CSV file, or points
//! produced elsewhere (a `Vec<GeoPoint>` is itself a source).

use std::path::PathBuf;

use ro_core::{BoundaryPath, GeoPoint};

use crate::{SourceResult, load_points_csv, parse_pair};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Supplies an ordered list of valid points.
pub trait CoordinateSource {
    /// Load the points.  Malformed entries are skipped, not returned.
    fn points(&self) -> SourceResult<Vec<GeoPoint>>;
}

impl CoordinateSource for Vec<GeoPoint> {
    fn points(&self) -> SourceResult<Vec<GeoPoint>> {
        Ok(self.clone())
    }
}

/// Load `source` as a boundary path.
///
/// # Errors
///
/// `SourceError::Core(CoreError::EmptyInput)` if the source yields no valid
/// point, plus whatever the source itself returns.
pub fn load_boundary(source: &dyn CoordinateSource) -> SourceResult<BoundaryPath> {
    Ok(BoundaryPath::new(source.points()?)?)
}

// ── CoordinateTable ───────────────────────────────────────────────────────────

/// Parallel latitude and longitude columns of decimal strings.
///
/// Entry `i` of each column forms point `i`.  Pairs that fail to parse are
/// skipped; if one column is longer, its extra entries are ignored.
///
/// # Example
///
/// ```
/// use ro_source::{CoordinateSource, CoordinateTable};
///
/// let table = CoordinateTable::new(
///     ["52.4652", "oops", "52.4659"],
///     ["13.4293", "13.4324", "13.4345"],
/// );
/// assert_eq!(table.points().unwrap().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CoordinateTable {
    latitudes:  Vec<String>,
    longitudes: Vec<String>,
}

impl CoordinateTable {
    pub fn new<I, J, S, T>(latitudes: I, longitudes: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            latitudes:  latitudes.into_iter().map(Into::into).collect(),
            longitudes: longitudes.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of rows (the shorter column's length).
    pub fn len(&self) -> usize {
        self.latitudes.len().min(self.longitudes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoordinateSource for CoordinateTable {
    fn points(&self) -> SourceResult<Vec<GeoPoint>> {
        if self.latitudes.len() != self.longitudes.len() {
            log::warn!(
                "coordinate table columns differ in length ({} latitudes, {} longitudes); \
                 ignoring the extra entries",
                self.latitudes.len(),
                self.longitudes.len(),
            );
        }

        let points = self
            .latitudes
            .iter()
            .zip(&self.longitudes)
            .enumerate()
            .filter_map(|(i, (lat, lon))| match parse_pair(lat, lon) {
                Ok(p) => Some(p),
                Err(reason) => {
                    log::warn!("skipping coordinate table row {i}: {reason}");
                    None
                }
            })
            .collect();
        Ok(points)
    }
}

// ── CsvPointSource ────────────────────────────────────────────────────────────

/// A CSV file read on every call to [`points`](CoordinateSource::points).
///
/// See [`crate::csv`] for the format.
#[derive(Clone, Debug)]
pub struct CsvPointSource {
    path: PathBuf,
}

impl CsvPointSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CoordinateSource for CsvPointSource {
    fn points(&self) -> SourceResult<Vec<GeoPoint>> {
        load_points_csv(&self.path)
    }
}

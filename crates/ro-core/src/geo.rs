//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Boundary rings are small (tens
//! of points), so there is nothing to gain from single precision, and source
//! tables carry up to 14 decimal places.

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per degree of latitude (and of longitude at the equator).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// The moving entity ("rider") queried against a boundary.
pub type ReferencePoint = GeoPoint;

impl GeoPoint {
    /// Unchecked constructor.  Use [`try_new`](Self::try_new) for data that
    /// comes from outside the program.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a point, rejecting non-finite values and values outside
    /// `lat ∈ [-90, 90]`, `lon ∈ [-180, 180]`.
    pub fn try_new(lat: f64, lon: f64) -> crate::CoreResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(crate::CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Squared Euclidean distance in lat/lon degree space.  Cheap and
    /// monotone with true distance over a few kilometres away from the poles.
    #[inline]
    pub fn planar_distance_2(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Approximate bounding-box check.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_lat_deg: f64, half_lon_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_lat_deg
            && (self.lon - center.lon).abs() <= half_lon_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── CoordinateRegion ──────────────────────────────────────────────────────────

/// A rectangular region given by its centre and its extent in metres.
///
/// Used for the initial camera region, the camera boundary, and snapshot
/// framing.  Metre extents are converted to degrees with a spherical
/// approximation (see [`span_degrees`](Self::span_degrees)).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateRegion {
    pub center: GeoPoint,
    /// North–south extent in metres.
    pub latitudinal_m: f64,
    /// East–west extent in metres.
    pub longitudinal_m: f64,
}

impl CoordinateRegion {
    pub fn new(center: GeoPoint, latitudinal_m: f64, longitudinal_m: f64) -> Self {
        Self { center, latitudinal_m, longitudinal_m }
    }

    /// Square region `meters` on each side.
    pub fn square(center: GeoPoint, meters: f64) -> Self {
        Self::new(center, meters, meters)
    }

    /// `(lat_span, lon_span)` in degrees.
    ///
    /// The longitude span widens with `1 / cos(lat)`; at the poles it is
    /// clamped to the full 360°.
    pub fn span_degrees(&self) -> (f64, f64) {
        let lat_span = self.latitudinal_m / METERS_PER_DEGREE;
        let cos_lat = self.center.lat.to_radians().cos();
        let lon_span = if cos_lat <= f64::EPSILON {
            360.0
        } else {
            (self.longitudinal_m / (METERS_PER_DEGREE * cos_lat)).min(360.0)
        };
        (lat_span, lon_span)
    }

    /// `true` if `point` lies inside the region (edges inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        let (lat_span, lon_span) = self.span_degrees();
        point.within_bbox(self.center, lat_span * 0.5, lon_span * 0.5)
    }
}

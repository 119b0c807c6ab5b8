//! Scene configuration.

use crate::{CoordinateRegion, GeoPoint};

/// Default radius of the initial camera region, metres.
pub const DEFAULT_REGION_RADIUS_M: f64 = 1_000.0;

/// Default side length of the snapshot region, metres.
pub const DEFAULT_SNAPSHOT_RADIUS_M: f64 = 8_000.0;

/// Everything needed to frame a map scene around a rider and a boundary.
///
/// Typically built by the application crate (or deserialized from JSON with
/// the `serde` feature) and passed to the planner and snapshot layers.  The
/// boundary itself is not part of the config; it comes from a coordinate
/// source.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneConfig {
    /// Centre of the initial camera region.
    pub initial_center: GeoPoint,

    /// Side length of the initial camera region in metres.  Default: 1000.
    #[cfg_attr(feature = "serde", serde(default = "default_region_radius"))]
    pub region_radius_m: f64,

    /// The camera may not be panned outside this region.
    pub camera_boundary: CoordinateRegion,

    /// Maximum camera-to-centre distance (zoom-out limit) in metres.
    pub max_center_distance_m: f64,

    /// The reference point queried against the boundary.
    pub rider: GeoPoint,

    /// Side length of the snapshot region in metres.  Default: 8000.
    #[cfg_attr(feature = "serde", serde(default = "default_snapshot_radius"))]
    pub snapshot_radius_m: f64,
}

#[cfg(feature = "serde")]
fn default_region_radius() -> f64 {
    DEFAULT_REGION_RADIUS_M
}

#[cfg(feature = "serde")]
fn default_snapshot_radius() -> f64 {
    DEFAULT_SNAPSHOT_RADIUS_M
}

impl SceneConfig {
    /// Config with default radii.
    pub fn new(
        initial_center:        GeoPoint,
        camera_boundary:       CoordinateRegion,
        max_center_distance_m: f64,
        rider:                 GeoPoint,
    ) -> Self {
        Self {
            initial_center,
            region_radius_m: DEFAULT_REGION_RADIUS_M,
            camera_boundary,
            max_center_distance_m,
            rider,
            snapshot_radius_m: DEFAULT_SNAPSHOT_RADIUS_M,
        }
    }

    /// The region the camera starts on.
    pub fn initial_region(&self) -> CoordinateRegion {
        CoordinateRegion::square(self.initial_center, self.region_radius_m)
    }

    /// `true` if the camera may be centred on `point`.
    pub fn camera_allows(&self, point: GeoPoint) -> bool {
        self.camera_boundary.contains(point)
    }

    /// `distance_m` limited to the zoom-out range.  Negative and NaN
    /// distances clamp to 0.
    pub fn clamp_center_distance(&self, distance_m: f64) -> f64 {
        if distance_m.is_nan() {
            return 0.0;
        }
        distance_m.clamp(0.0, self.max_center_distance_m.max(0.0))
    }
}

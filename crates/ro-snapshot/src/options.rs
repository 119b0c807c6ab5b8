//! What a snapshot should show.

use ro_core::{CoordinateRegion, GeoPoint};

/// Base map style.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapType {
    #[default]
    Standard,
    /// Standard with de-emphasised colours, so overlays stand out.
    MutedStandard,
    Satellite,
    Hybrid,
}

/// A request for one static map image.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapshotOptions {
    /// Geographic area framed by the image.
    pub region: CoordinateRegion,
    /// Image size in points, `(width, height)`.
    pub size: (u32, u32),
    /// Pixels per point.
    pub scale: f32,
    pub map_type: MapType,
    pub shows_buildings: bool,
}

impl SnapshotOptions {
    /// Square region `meters` across centred on `center`, muted map with
    /// buildings, scale 1.
    pub fn around(center: GeoPoint, meters: f64, size: (u32, u32)) -> Self {
        Self {
            region: CoordinateRegion::square(center, meters),
            size,
            scale: 1.0,
            map_type: MapType::MutedStandard,
            shows_buildings: true,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    /// Image size in pixels (`size × scale`, rounded).
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |v: u32| (v as f32 * self.scale).round() as u32;
        (px(self.size.0), px(self.size.1))
    }
}

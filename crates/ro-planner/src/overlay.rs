//! Overlay values handed to a rendering collaborator, and their styles.

use ro_core::{BoundaryPath, GeoPoint};

/// A shape to draw on top of the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overlay {
    /// A filled, implicitly closed ring.
    Polygon(BoundaryPath),
    /// An open line through the points in order.
    Polyline(Vec<GeoPoint>),
    /// A filled circle.
    Circle { center: GeoPoint, radius_m: f64 },
}

impl Overlay {
    /// Short lowercase name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Overlay::Polygon(_)     => "polygon",
            Overlay::Polyline(_)    => "polyline",
            Overlay::Circle { .. }  => "circle",
        }
    }

    /// Points that define the overlay's geometry.
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Overlay::Polygon(path)           => path.as_slice(),
            Overlay::Polyline(points)        => points,
            Overlay::Circle { center, .. }   => std::slice::from_ref(center),
        }
    }
}

// ── Styling ───────────────────────────────────────────────────────────────────

/// 8-bit RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK_HALF: Rgba = Rgba(0, 0, 0, 128);
    pub const BLUE:       Rgba = Rgba(0, 0, 255, 255);
    pub const DARK_GRAY:  Rgba = Rgba(85, 85, 85, 255);
    pub const ORANGE:     Rgba = Rgba(255, 128, 0, 255);

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, alpha: u8) -> Rgba {
        Rgba(self.0, self.1, self.2, alpha)
    }
}

/// How a renderer should paint one overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayStyle {
    /// `None` for unfilled shapes (lines).
    pub fill:       Option<Rgba>,
    pub stroke:     Rgba,
    pub line_width: f32,
}

impl OverlayStyle {
    /// Default style table:
    ///
    /// | Overlay    | Fill          | Stroke    | Width |
    /// |------------|---------------|-----------|-------|
    /// | `Circle`   | black, 50 %   | blue      | 2     |
    /// | `Polyline` | —             | dark gray | 3     |
    /// | `Polygon`  | black, 50 %   | orange    | 2     |
    pub fn for_overlay(overlay: &Overlay) -> Self {
        match overlay {
            Overlay::Circle { .. } => OverlayStyle {
                fill:       Some(Rgba::BLACK_HALF),
                stroke:     Rgba::BLUE,
                line_width: 2.0,
            },
            Overlay::Polyline(_) => OverlayStyle {
                fill:       None,
                stroke:     Rgba::DARK_GRAY,
                line_width: 3.0,
            },
            Overlay::Polygon(_) => OverlayStyle {
                fill:       Some(Rgba::BLACK_HALF),
                stroke:     Rgba::ORANGE,
                line_width: 2.0,
            },
        }
    }
}

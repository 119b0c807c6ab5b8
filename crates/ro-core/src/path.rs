//! Boundary rings and route segments.

use crate::{CoreError, CoreResult, GeoPoint};

// ── BoundaryPath ──────────────────────────────────────────────────────────────

/// An ordered, non-empty sequence of points describing a region's border or
/// a route's waypoints.
///
/// The first and last point are usually equal (a closed ring), but this is
/// not required: when treated as a polygon the ring is closed implicitly.
///
/// # Example
///
/// ```
/// use ro_core::{BoundaryPath, GeoPoint};
///
/// let square = BoundaryPath::new(vec![
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 10.0),
///     GeoPoint::new(10.0, 10.0),
///     GeoPoint::new(10.0, 0.0),
///     GeoPoint::new(0.0, 0.0),
/// ]).unwrap();
/// assert!(square.is_closed());
/// assert_eq!(square.ring().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryPath {
    points: Vec<GeoPoint>,
}

impl BoundaryPath {
    /// Wrap `points`.  Fails with [`CoreError::EmptyInput`] if empty.
    pub fn new(points: Vec<GeoPoint>) -> CoreResult<Self> {
        if points.is_empty() {
            return Err(CoreError::EmptyInput);
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point of the path.  Always present.
    #[inline]
    pub fn first(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeoPoint> + '_ {
        self.points.iter()
    }

    /// `true` if the path has more than one point and ends where it starts.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// The ring's vertices without the repeated closing point.
    pub fn ring(&self) -> &[GeoPoint] {
        if self.is_closed() {
            &self.points[..self.points.len() - 1]
        } else {
            &self.points
        }
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

impl TryFrom<Vec<GeoPoint>> for BoundaryPath {
    type Error = CoreError;

    fn try_from(points: Vec<GeoPoint>) -> CoreResult<Self> {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a BoundaryPath {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// A two-point line from a reference point to its nearest boundary point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSegment {
    pub origin:      GeoPoint,
    pub destination: GeoPoint,
}

impl RouteSegment {
    #[inline]
    pub fn new(origin: GeoPoint, destination: GeoPoint) -> Self {
        Self { origin, destination }
    }

    /// Both endpoints in drawing order.
    #[inline]
    pub fn points(&self) -> [GeoPoint; 2] {
        [self.origin, self.destination]
    }

    /// Great-circle length in metres.
    pub fn length_m(&self) -> f64 {
        self.origin.distance_m(self.destination)
    }
}

impl std::fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

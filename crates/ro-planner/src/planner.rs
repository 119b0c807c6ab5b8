//! Nearest-point lookup, point-in-polygon test, and the planner that
//! composes them for a fixed boundary.
//!
//! # Distance
//!
//! Nearest-point queries default to haversine great-circle distance
//! ([`DistanceMetric::Haversine`]).  [`DistanceMetric::Planar`] compares
//! squared degree-space distances instead; it is cheaper and agrees with
//! haversine for city-scale boundaries away from the poles.
//!
//! # Containment
//!
//! [`point_in_polygon`] uses even-odd ray casting in `(lon, lat)` degree
//! space, treating the ring as implicitly closed.  A point exactly on an
//! edge may be reported either way.

use rustc_hash::FxHashSet;

use ro_core::{BoundaryPath, GeoPoint, ReferencePoint, RouteSegment};

use crate::overlay::Overlay;
use crate::{PlanError, PlanResult};

// ── DistanceMetric ────────────────────────────────────────────────────────────

/// How nearest-point queries measure distance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// Great-circle distance in metres.
    #[default]
    Haversine,
    /// Squared Euclidean distance in lat/lon degrees.
    Planar,
}

impl DistanceMetric {
    /// Comparable distance between `a` and `b`.  Only the ordering is
    /// meaningful for `Planar`, which is squared.
    #[inline]
    pub fn measure(self, a: GeoPoint, b: GeoPoint) -> f64 {
        match self {
            DistanceMetric::Haversine => a.distance_m(b),
            DistanceMetric::Planar    => a.planar_distance_2(b),
        }
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Index of the point in `path` closest to `from`.
///
/// Linear scan with a strict `<` comparison, so the first of several
/// equidistant points wins.  Points whose distance is NaN never win,
/// wherever they sit; if every distance is NaN the first point is returned.
pub fn nearest_index(
    path:   &[GeoPoint],
    from:   ReferencePoint,
    metric: DistanceMetric,
) -> PlanResult<usize> {
    if path.is_empty() {
        return Err(PlanError::EmptyInput);
    }

    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &p) in path.iter().enumerate() {
        let d = metric.measure(p, from);
        if d < best_dist {
            best_idx = i;
            best_dist = d;
        }
    }
    Ok(best_idx)
}

/// The point in `path` closest to `from` by great-circle distance.
///
/// # Errors
///
/// [`PlanError::EmptyInput`] if `path` is empty.
///
/// # Example
///
/// ```
/// use ro_core::GeoPoint;
/// use ro_planner::nearest_point;
///
/// let square = [
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 10.0),
///     GeoPoint::new(10.0, 10.0),
///     GeoPoint::new(10.0, 0.0),
/// ];
/// let nearest = nearest_point(&square, GeoPoint::new(1.0, -1.0)).unwrap();
/// assert_eq!(nearest, GeoPoint::new(0.0, 0.0));
/// ```
pub fn nearest_point(path: &[GeoPoint], from: ReferencePoint) -> PlanResult<GeoPoint> {
    nearest_index(path, from, DistanceMetric::Haversine).map(|i| path[i])
}

/// Pair a reference point with its destination.
#[inline]
pub fn build_route_segment(from: ReferencePoint, to: GeoPoint) -> RouteSegment {
    RouteSegment::new(from, to)
}

/// `true` if `point` lies inside the closed ring `polygon`.
///
/// Rings with fewer than three distinct vertices enclose no area and always
/// return `false`.  A trailing vertex equal to the first is ignored, so the
/// result does not depend on where the ring starts.
pub fn point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    let ring = match polygon {
        [first, .., last] if first == last => &polygon[..polygon.len() - 1],
        _ => polygon,
    };
    if distinct_count(ring, 3) < 3 {
        return false;
    }

    let (px, py) = (point.lon, point.lat);
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lon, ring[i].lat);
        let (xj, yj) = (ring[j].lon, ring[j].lat);
        // Edge straddles the horizontal ray through the point.
        if (yi > py) != (yj > py) {
            let x_cross = xi + (py - yi) * (xj - xi) / (yj - yi);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Number of distinct points in `points`, counting stops at `limit`.
fn distinct_count(points: &[GeoPoint], limit: usize) -> usize {
    let mut seen: FxHashSet<(u64, u64)> = FxHashSet::default();
    for p in points {
        // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
        seen.insert(((p.lat + 0.0).to_bits(), (p.lon + 0.0).to_bits()));
        if seen.len() >= limit {
            break;
        }
    }
    seen.len()
}

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// Result of planning a route from a rider to a boundary.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Closest boundary point to the rider.
    pub nearest: GeoPoint,
    /// Position of `nearest` in the boundary path.
    pub nearest_index: usize,
    /// Rider → nearest boundary point.
    pub segment: RouteSegment,
    /// Whether the rider is already inside the boundary.
    pub rider_inside: bool,
}

impl RoutePlan {
    /// Length of the connecting segment in metres.
    pub fn distance_m(&self) -> f64 {
        self.segment.length_m()
    }
}

// ── RouteOverlayPlanner ───────────────────────────────────────────────────────

/// Plans routes from reference points to one fixed boundary.
///
/// # Example
///
/// ```
/// use ro_core::{BoundaryPath, GeoPoint};
/// use ro_planner::RouteOverlayPlanner;
///
/// let boundary = BoundaryPath::new(vec![
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 10.0),
///     GeoPoint::new(10.0, 10.0),
///     GeoPoint::new(10.0, 0.0),
/// ]).unwrap();
/// let planner = RouteOverlayPlanner::new(boundary);
///
/// let plan = planner.plan(GeoPoint::new(5.0, 5.0)).unwrap();
/// assert!(plan.rider_inside);
/// assert_eq!(planner.overlays(&plan).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct RouteOverlayPlanner {
    boundary: BoundaryPath,
    metric:   DistanceMetric,
}

impl RouteOverlayPlanner {
    pub fn new(boundary: BoundaryPath) -> Self {
        Self { boundary, metric: DistanceMetric::default() }
    }

    /// Build a planner directly from raw points.
    ///
    /// # Errors
    ///
    /// [`PlanError::Core`] wrapping `CoreError::EmptyInput` if `points` is
    /// empty.
    pub fn from_points(points: Vec<GeoPoint>) -> PlanResult<Self> {
        Ok(Self::new(BoundaryPath::new(points)?))
    }

    /// Use `metric` for nearest-point queries.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn boundary(&self) -> &BoundaryPath {
        &self.boundary
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Nearest boundary point to `rider`.
    pub fn nearest(&self, rider: ReferencePoint) -> PlanResult<GeoPoint> {
        let i = nearest_index(self.boundary.as_slice(), rider, self.metric)?;
        Ok(self.boundary.as_slice()[i])
    }

    /// `true` if `point` is inside the boundary ring.
    pub fn contains(&self, point: GeoPoint) -> bool {
        point_in_polygon(point, self.boundary.as_slice())
    }

    /// Nearest point, connecting segment, and containment for `rider`.
    pub fn plan(&self, rider: ReferencePoint) -> PlanResult<RoutePlan> {
        let nearest_index = nearest_index(self.boundary.as_slice(), rider, self.metric)?;
        let nearest = self.boundary.as_slice()[nearest_index];
        let plan = RoutePlan {
            nearest,
            nearest_index,
            segment: build_route_segment(rider, nearest),
            rider_inside: self.contains(rider),
        };
        log::debug!(
            "planned route {} (boundary index {nearest_index}, {:.1} m, inside: {})",
            plan.segment,
            plan.distance_m(),
            plan.rider_inside,
        );
        Ok(plan)
    }

    /// Overlays for the rendering collaborator: the boundary polygon first,
    /// then the route line.
    pub fn overlays(&self, plan: &RoutePlan) -> Vec<Overlay> {
        vec![
            Overlay::Polygon(self.boundary.clone()),
            Overlay::Polyline(plan.segment.points().to_vec()),
        ]
    }
}

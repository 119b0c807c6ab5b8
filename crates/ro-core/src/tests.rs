//! Unit tests for ro-core primitives.

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(52.493552, 13.4621654);
        assert!(p.distance_m(p) < 0.001);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(52.0, 13.0);
        let b = GeoPoint::new(53.0, 13.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(52.46523208572938, 13.4293270111084);
        let b = GeoPoint::new(52.493552, 13.4621654);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn planar_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_eq!(a.planar_distance_2(b), 25.0);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(GeoPoint::try_new(52.5, 13.4).is_ok());
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
        assert_eq!(
            GeoPoint::try_new(91.0, 0.0),
            Err(CoreError::InvalidCoordinate { lat: 91.0, lon: 0.0 })
        );
        assert!(GeoPoint::try_new(0.0, -180.5).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(52.5, 13.25).to_string(), "(52.500000, 13.250000)");
    }
}

#[cfg(test)]
mod region {
    use crate::{CoordinateRegion, GeoPoint};

    #[test]
    fn span_at_equator() {
        let r = CoordinateRegion::square(GeoPoint::new(0.0, 0.0), 111_320.0);
        let (lat, lon) = r.span_degrees();
        assert!((lat - 1.0).abs() < 1e-9);
        assert!((lon - 1.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_span_widens_with_latitude() {
        let r = CoordinateRegion::square(GeoPoint::new(60.0, 0.0), 111_320.0);
        let (lat, lon) = r.span_degrees();
        assert!((lat - 1.0).abs() < 1e-9);
        assert!((lon - 2.0).abs() < 1e-6, "cos(60°) = 0.5 → 2°, got {lon}");
    }

    #[test]
    fn pole_is_clamped() {
        let r = CoordinateRegion::square(GeoPoint::new(90.0, 0.0), 1_000.0);
        assert_eq!(r.span_degrees().1, 360.0);
    }

    #[test]
    fn contains() {
        let r = CoordinateRegion::new(GeoPoint::new(52.4983, 13.4066), 50_000.0, 60_000.0);
        assert!(r.contains(GeoPoint::new(52.4983, 13.4066)));
        assert!(r.contains(GeoPoint::new(52.6, 13.6)));
        assert!(!r.contains(GeoPoint::new(52.8, 13.4066)));
        assert!(!r.contains(GeoPoint::new(52.4983, 14.0)));
    }
}

#[cfg(test)]
mod path {
    use crate::{BoundaryPath, CoreError, GeoPoint, RouteSegment};

    fn square_ring() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(10.0, 0.0),
            GeoPoint::new(0.0, 0.0),
        ]
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(BoundaryPath::new(vec![]), Err(CoreError::EmptyInput));
        assert!(BoundaryPath::try_from(Vec::new()).is_err());
    }

    #[test]
    fn single_point_is_open() {
        let p = BoundaryPath::new(vec![GeoPoint::new(1.0, 2.0)]).unwrap();
        assert_eq!(p.len(), 1);
        assert!(!p.is_closed());
        assert_eq!(p.ring().len(), 1);
        assert_eq!(p.first(), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn closed_ring_strips_closing_point() {
        let p = BoundaryPath::new(square_ring()).unwrap();
        assert!(p.is_closed());
        assert_eq!(p.len(), 5);
        assert_eq!(p.ring(), &square_ring()[..4]);
    }

    #[test]
    fn open_ring_is_unchanged() {
        let mut pts = square_ring();
        pts.pop();
        let p = BoundaryPath::new(pts.clone()).unwrap();
        assert!(!p.is_closed());
        assert_eq!(p.ring(), pts.as_slice());
        assert_eq!(p.iter().count(), 4);
        assert_eq!((&p).into_iter().count(), 4);
    }

    #[test]
    fn segment_points_and_length() {
        let a = GeoPoint::new(52.0, 13.0);
        let b = GeoPoint::new(53.0, 13.0);
        let seg = RouteSegment::new(a, b);
        assert_eq!(seg.points(), [a, b]);
        assert!((seg.length_m() - a.distance_m(b)).abs() < 1e-9);
    }
}

#[cfg(test)]
mod config {
    use crate::config::{DEFAULT_REGION_RADIUS_M, DEFAULT_SNAPSHOT_RADIUS_M};
    use crate::{CoordinateRegion, GeoPoint, SceneConfig};

    fn berlin() -> SceneConfig {
        SceneConfig::new(
            GeoPoint::new(52.499967, 13.4632702),
            CoordinateRegion::new(GeoPoint::new(52.4983, 13.4066), 50_000.0, 60_000.0),
            1_000_000.0,
            GeoPoint::new(52.493552, 13.4621654),
        )
    }

    #[test]
    fn defaults() {
        let cfg = berlin();
        assert_eq!(cfg.region_radius_m, DEFAULT_REGION_RADIUS_M);
        assert_eq!(cfg.snapshot_radius_m, DEFAULT_SNAPSHOT_RADIUS_M);
        assert_eq!(cfg.initial_region().center, cfg.initial_center);
        assert_eq!(cfg.initial_region().latitudinal_m, 1_000.0);
    }

    #[test]
    fn camera_boundary() {
        let cfg = berlin();
        assert!(cfg.camera_allows(cfg.rider));
        assert!(!cfg.camera_allows(GeoPoint::new(48.137, 11.575))); // Munich
    }

    #[test]
    fn zoom_out_limit() {
        let mut cfg = berlin();
        assert_eq!(cfg.clamp_center_distance(8_000.0), 8_000.0);
        assert_eq!(cfg.clamp_center_distance(2_000_000.0), 1_000_000.0);
        assert_eq!(cfg.clamp_center_distance(-5.0), 0.0);
        assert_eq!(cfg.clamp_center_distance(f64::NAN), 0.0);

        cfg.max_center_distance_m = 5_000.0;
        assert_eq!(cfg.clamp_center_distance(cfg.snapshot_radius_m), 5_000.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_with_default_radii() {
        let json = r#"{
            "initial_center": { "lat": 52.5, "lon": 13.46 },
            "camera_boundary": {
                "center": { "lat": 52.4983, "lon": 13.4066 },
                "latitudinal_m": 50000.0,
                "longitudinal_m": 60000.0
            },
            "max_center_distance_m": 1000000.0,
            "rider": { "lat": 52.493552, "lon": 13.4621654 }
        }"#;
        let cfg: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.region_radius_m, DEFAULT_REGION_RADIUS_M);
        assert_eq!(cfg.snapshot_radius_m, DEFAULT_SNAPSHOT_RADIUS_M);
        assert_eq!(cfg.rider, GeoPoint::new(52.493552, 13.4621654));
    }
}

//! Unit tests for ro-source.
//!
//! Loaders are exercised through `Cursor` readers; file-path entry points
//! use a temporary directory.

#[cfg(test)]
mod table {
    use ro_core::{CoreError, GeoPoint};

    use crate::{CoordinateSource, CoordinateTable, SourceError, load_boundary};

    #[test]
    fn parses_all_valid_rows() {
        let table = CoordinateTable::new(
            ["52.46523208572938", " 52.46531705969792 "],
            ["13.4293270111084", "13.4324149042368"],
        );
        let pts = table.points().unwrap();
        assert_eq!(
            pts,
            vec![
                GeoPoint::new(52.46523208572938, 13.4293270111084),
                GeoPoint::new(52.46531705969792, 13.4324149042368),
            ]
        );
    }

    #[test]
    fn skips_malformed_rows() {
        let table = CoordinateTable::new(
            ["52.1", "north", "52.3", "95.0", "NaN"],
            ["13.1", "13.2", "east", "13.4", "13.5"],
        );
        assert_eq!(table.len(), 5);
        assert_eq!(table.points().unwrap(), vec![GeoPoint::new(52.1, 13.1)]);
    }

    #[test]
    fn mismatched_columns_use_shorter() {
        let table = CoordinateTable::new(["52.1", "52.2", "52.3"], ["13.1"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.points().unwrap().len(), 1);
    }

    #[test]
    fn vec_is_a_source() {
        let v = vec![GeoPoint::new(1.0, 2.0)];
        assert_eq!(v.points().unwrap(), v);
    }

    #[test]
    fn boundary_from_source() {
        let table = CoordinateTable::new(["52.1", "52.2"], ["13.1", "13.2"]);
        assert_eq!(load_boundary(&table).unwrap().len(), 2);
    }

    #[test]
    fn boundary_from_all_malformed_source_is_empty() {
        let table = CoordinateTable::new(["x"], ["y"]);
        let err = load_boundary(&table).unwrap_err();
        assert!(matches!(err, SourceError::Core(CoreError::EmptyInput)));

        assert!(CoordinateTable::default().is_empty());
    }
}

#[cfg(test)]
mod csv {
    use std::io::{Cursor, Write};

    use ro_core::GeoPoint;

    use crate::{CoordinateSource, CsvPointSource, SourceError, load_points_csv, load_points_reader};

    const POINTS_CSV: &str = "\
lat,lon\n\
52.46523208572938,13.4293270111084\n\
52.46531705969792,13.4324149042368\n\
52.46559567511719,13.43451105058194\n\
";

    #[test]
    fn loads_in_order() {
        let pts = load_points_reader(Cursor::new(POINTS_CSV)).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], GeoPoint::new(52.46523208572938, 13.4293270111084));
        assert_eq!(pts[2], GeoPoint::new(52.46559567511719, 13.43451105058194));
    }

    #[test]
    fn long_header_names() {
        let csv = "latitude,longitude\n52.5,13.4\n";
        assert_eq!(load_points_reader(Cursor::new(csv)).unwrap(), vec![GeoPoint::new(52.5, 13.4)]);
    }

    #[test]
    fn skips_bad_rows() {
        let csv = "lat,lon\n52.5,13.4\nabc,13.4\n52.6\n200.0,13.4\n52.7,13.5\n";
        let pts = load_points_reader(Cursor::new(csv)).unwrap();
        assert_eq!(pts, vec![GeoPoint::new(52.5, 13.4), GeoPoint::new(52.7, 13.5)]);
    }

    #[test]
    fn header_only_is_empty() {
        assert!(load_points_reader(Cursor::new("lat,lon\n")).unwrap().is_empty());
    }

    #[test]
    fn spaced_header_and_fields() {
        let csv = "\u{feff}lat, lon\n52.5, 13.4\n 52.6 ,13.5\n";
        let pts = load_points_reader(Cursor::new(csv)).unwrap();
        assert_eq!(pts, vec![GeoPoint::new(52.5, 13.4), GeoPoint::new(52.6, 13.5)]);
    }

    #[test]
    fn headerless_file_is_an_error() {
        let err = load_points_reader(Cursor::new("52.5,13.4\n52.6,13.5\n")).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn("lat")), "{err:?}");
    }

    #[test]
    fn missing_longitude_column_is_an_error() {
        let err = load_points_reader(Cursor::new("lat,lng\n52.5,13.4\n")).unwrap_err();
        assert!(matches!(err, SourceError::MissingColumn("lon")), "{err:?}");
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(load_points_reader(Cursor::new("")).is_err());
    }

    struct BrokenReader;

    impl std::io::Read for BrokenReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk unplugged"))
        }
    }

    #[test]
    fn read_failure_keeps_csv_error() {
        let err = load_points_reader(BrokenReader).unwrap_err();
        assert!(matches!(err, SourceError::Csv(ref e) if e.is_io_error()), "{err:?}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_points_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }

    #[test]
    fn file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boundary.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(POINTS_CSV.as_bytes())
            .unwrap();

        let source = CsvPointSource::new(&path);
        assert_eq!(source.points().unwrap().len(), 3);
    }
}

#[cfg(test)]
mod geojson {
    use std::io::{Cursor, Write};

    use ro_core::GeoPoint;

    use crate::{SourceError, load_places_geojson, load_places_reader};

    const PLACES: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [13.4032, 52.4987] },
          "properties": { "title": "Checkpoint", "location": "Friedrichstraße", "discipline": "Monument" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [13.4194, 52.4875, 34.0] },
          "properties": { "location": "Hermannplatz" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Polygon", "coordinates": [[[13.4, 52.4], [13.5, 52.4], [13.5, 52.5], [13.4, 52.4]]] },
          "properties": { "title": "Area" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [13.4] },
          "properties": { "title": "Short" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [13.4, 99.0] },
          "properties": { "title": "Off the globe" }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [13.4, 52.4] },
          "properties": null
        },
        {
          "type": "Feature",
          "geometry": null,
          "properties": { "title": "Nowhere" }
        }
      ]
    }"#;

    #[test]
    fn keeps_point_features_only() {
        let places = load_places_reader(Cursor::new(PLACES)).unwrap();
        assert_eq!(places.len(), 2);

        assert_eq!(places[0].title.as_deref(), Some("Checkpoint"));
        assert_eq!(places[0].subtitle(), Some("Friedrichstraße"));
        assert_eq!(places[0].discipline.as_deref(), Some("Monument"));
        assert_eq!(places[0].location, GeoPoint::new(52.4987, 13.4032));
    }

    #[test]
    fn missing_properties_are_none() {
        let places = load_places_reader(Cursor::new(PLACES)).unwrap();
        assert_eq!(places[1].title, None);
        assert_eq!(places[1].discipline, None);
        assert_eq!(places[1].subtitle(), Some("Hermannplatz"));
        // Altitude is ignored.
        assert_eq!(places[1].location, GeoPoint::new(52.4875, 13.4194));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = load_places_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));

        let err = load_places_reader(Cursor::new(r#"{ "type": "Feature" }"#)).unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }

    #[test]
    fn empty_collection() {
        let json = r#"{ "type": "FeatureCollection", "features": [] }"#;
        assert!(load_places_reader(Cursor::new(json)).unwrap().is_empty());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.geojson");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(PLACES.as_bytes())
            .unwrap();
        assert_eq!(load_places_geojson(&path).unwrap().len(), 2);
    }
}

//! Unit tests for tc-catalogue.
//!
//! All tests use small hand-crafted fixtures; coordinates are chosen so
//! great-circle fallbacks are easy to reason about.

#[cfg(test)]
mod helpers {
    use tc_core::Coordinates;

    use crate::TransportCatalogue;

    /// Three stops on a short line.
    ///
    /// ```text
    /// A (55.611087, 37.20829)
    /// B (55.595884, 37.209755)
    /// C (55.632761, 37.333324)
    /// ```
    ///
    /// Recorded distances: A→B 600 m, B→C 400 m.
    pub fn linear_fixture() -> TransportCatalogue {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", Coordinates::new(55.611087, 37.20829)).unwrap();
        cat.add_stop("B", Coordinates::new(55.595884, 37.209755)).unwrap();
        cat.add_stop("C", Coordinates::new(55.632761, 37.333324)).unwrap();
        cat.add_distance("A", "B", 600.0).unwrap();
        cat.add_distance("B", "C", 400.0).unwrap();
        cat
    }
}

#[cfg(test)]
mod population {
    use tc_core::{Coordinates, StopId};

    use crate::{CatalogueError, TransportCatalogue};

    #[test]
    fn stop_ids_are_dense_insertion_order() {
        let cat = super::helpers::linear_fixture();
        assert_eq!(cat.stop_count(), 3);
        for (i, stop) in cat.stops().iter().enumerate() {
            assert_eq!(stop.id, StopId(i as u32));
        }
        assert_eq!(cat.stop_by_name("B").unwrap().id, StopId(1));
    }

    #[test]
    fn duplicate_stop_rejected() {
        let mut cat = super::helpers::linear_fixture();
        let err = cat.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateStop(name) if name == "A"));
    }

    #[test]
    fn duplicate_bus_rejected() {
        let mut cat = super::helpers::linear_fixture();
        cat.add_bus("l", &["A".into(), "B".into()], false).unwrap();
        let err = cat.add_bus("l", &["A".into()], true).unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateBus(_)));
    }

    #[test]
    fn bus_with_unknown_stop_rejected() {
        let mut cat = super::helpers::linear_fixture();
        let err = cat
            .add_bus("l", &["A".into(), "Nowhere".into()], true)
            .unwrap_err();
        assert!(matches!(err, CatalogueError::UnknownStop(name) if name == "Nowhere"));
    }

    #[test]
    fn distance_between_unknown_stops_rejected() {
        let mut cat = TransportCatalogue::new();
        assert!(cat.add_distance("A", "B", 1.0).is_err());
    }

    #[test]
    fn add_distance_overwrites() {
        let mut cat = super::helpers::linear_fixture();
        cat.add_distance("A", "B", 750.0).unwrap();
        let a = cat.stop_by_name("A").unwrap().id;
        let b = cat.stop_by_name("B").unwrap().id;
        assert_eq!(cat.distance(a, b), 750.0);
    }
}

#[cfg(test)]
mod distances {
    use tc_core::Coordinates;

    use crate::TransportCatalogue;

    #[test]
    fn forward_then_reverse_then_geo() {
        let mut cat = TransportCatalogue::new();
        let a = cat.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
        let b = cat.add_stop("B", Coordinates::new(55.1, 37.0)).unwrap();

        // No record in either direction: both lookups fall back to the same
        // great-circle value.
        let geo = cat.distance(a, b);
        assert_eq!(cat.distance(b, a), geo);
        assert!(geo > 0.0);

        // Reverse-only record serves both directions.
        cat.add_distance("B", "A", 12_000.0).unwrap();
        assert_eq!(cat.distance(a, b), 12_000.0);
        assert_eq!(cat.distance(b, a), 12_000.0);

        // A forward record then wins for its own direction only.
        cat.add_distance("A", "B", 11_000.0).unwrap();
        assert_eq!(cat.distance(a, b), 11_000.0);
        assert_eq!(cat.distance(b, a), 12_000.0);
    }

    #[test]
    fn self_distance_is_recordable() {
        let mut cat = TransportCatalogue::new();
        let a = cat.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
        assert_eq!(cat.distance(a, a), 0.0);
        cat.add_distance("A", "A", 500.0).unwrap();
        assert_eq!(cat.distance(a, a), 500.0);
    }
}

#[cfg(test)]
mod queries {
    use tc_core::Coordinates;

    use crate::TransportCatalogue;

    #[test]
    fn stop_info_empty_set_vs_absent() {
        let cat = super::helpers::linear_fixture();
        assert!(cat.stop_info("A").unwrap().is_empty());
        assert!(cat.stop_info("Nowhere").is_none());
    }

    #[test]
    fn stop_info_sorted_and_deduplicated() {
        let mut cat = super::helpers::linear_fixture();
        // "b" visits A twice (linear A-B materializes as A,B,A).
        cat.add_bus("b", &["A".into(), "B".into()], false).unwrap();
        cat.add_bus("a", &["A".into()], true).unwrap();

        let buses: Vec<&str> = cat.stop_info("A").unwrap().into_iter().collect();
        assert_eq!(buses, ["a", "b"]);
    }

    #[test]
    fn linear_bus_counts_and_length() {
        let mut cat = super::helpers::linear_fixture();
        cat.add_bus("l", &["A".into(), "B".into(), "C".into()], false)
            .unwrap();

        let info = cat.bus_info("l").unwrap();
        // Materialized route A,B,C,B,A.
        assert_eq!(info.stop_count, 5);
        assert_eq!(info.unique_stop_count, 3);
        // 600 + 400 forward, and the same recorded values serve the reverse.
        assert_eq!(info.route_length, 2_000.0);

        let a = cat.stop_by_name("A").unwrap().coordinates;
        let b = cat.stop_by_name("B").unwrap().coordinates;
        let c = cat.stop_by_name("C").unwrap().coordinates;
        let geo = 2.0 * (a.distance_m(b) + b.distance_m(c));
        assert!((info.curvature - 2_000.0 / geo).abs() < 1e-12);
    }

    #[test]
    fn roundtrip_bus_keeps_declared_sequence() {
        let mut cat = super::helpers::linear_fixture();
        cat.add_bus("r", &["A".into(), "B".into(), "A".into()], true)
            .unwrap();
        let info = cat.bus_info("r").unwrap();
        assert_eq!(info.stop_count, 3);
        assert_eq!(info.unique_stop_count, 2);
    }

    #[test]
    fn empty_route_bus_is_legal() {
        let mut cat = TransportCatalogue::new();
        cat.add_bus("ghost", &[], true).unwrap();
        let info = cat.bus_info("ghost").unwrap();
        assert_eq!(info.stop_count, 0);
        assert_eq!(info.unique_stop_count, 0);
        assert_eq!(info.route_length, 0.0);
        assert_eq!(info.curvature, 0.0);
    }

    #[test]
    fn single_stop_bus_uses_self_distance() {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
        cat.add_distance("A", "A", 900.0).unwrap();
        cat.add_bus("o", &["A".into()], true).unwrap();
        assert_eq!(cat.bus_info("o").unwrap().route_length, 900.0);
    }

    #[test]
    fn bus_info_absent_for_unknown_bus() {
        let cat = super::helpers::linear_fixture();
        assert!(cat.bus_info("X").is_none());
    }
}

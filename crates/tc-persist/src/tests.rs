//! Unit tests for tc-persist.

#[cfg(test)]
mod round_trip {
    use tc_catalogue::TransportCatalogue;
    use tc_core::Coordinates;
    use tc_render::{MapRenderer, RenderSettings};
    use tc_routing::RoutingSettings;
    use tc_svg::{Color, Point, Rgb, Rgba};

    use crate::Archive;

    fn sample_catalogue() -> TransportCatalogue {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("Marushkino", Coordinates::new(55.595884, 37.209755)).unwrap();
        cat.add_stop("Tolstopaltsevo", Coordinates::new(55.611087, 37.20829)).unwrap();
        cat.add_stop("Rasskazovka", Coordinates::new(55.632761, 37.333324)).unwrap();
        cat.add_distance("Tolstopaltsevo", "Marushkino", 3_900.0).unwrap();
        cat.add_distance("Marushkino", "Rasskazovka", 9_900.0).unwrap();
        cat.add_distance("Marushkino", "Marushkino", 100.0).unwrap();
        cat.add_bus(
            "750",
            &["Tolstopaltsevo".into(), "Marushkino".into(), "Rasskazovka".into()],
            false,
        )
        .unwrap();
        cat.add_bus("014", &["Marushkino".into()], true).unwrap();
        cat
    }

    fn sample_render_settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
            line_width: 14.0,
            stop_radius: 5.0,
            bus_label_font_size: 20,
            bus_label_offset: Point::new(7.0, 15.0),
            stop_label_font_size: 18,
            stop_label_offset: Point::new(7.0, -3.0),
            underlayer_color: Color::from(Rgba::new(255, 255, 255, 0.85)),
            underlayer_width: 3.0,
            color_palette: vec![
                Color::from("green"),
                Color::from(Rgb::new(255, 160, 0)),
                Color::from("red"),
            ],
        }
    }

    const ROUTING: RoutingSettings = RoutingSettings {
        bus_wait_time: 6.0,
        bus_velocity: 40.0,
    };

    fn reload(
        cat: &TransportCatalogue,
        render: &RenderSettings,
    ) -> (TransportCatalogue, RenderSettings, RoutingSettings) {
        let archive = Archive::encode(cat, render, &ROUTING);
        let bytes = bincode::serialize(&archive).unwrap();
        let archive: Archive = bincode::deserialize(&bytes).unwrap();
        archive.restore().unwrap()
    }

    #[test]
    fn queries_survive_the_round_trip() {
        let cat = sample_catalogue();
        let render = sample_render_settings();
        let (restored, render2, routing2) = reload(&cat, &render);

        assert_eq!(render2, render);
        assert_eq!(routing2, ROUTING);

        for bus in ["750", "014", "no-such-bus"] {
            assert_eq!(restored.bus_info(bus), cat.bus_info(bus));
        }
        for stop in ["Marushkino", "Tolstopaltsevo", "Rasskazovka", "nowhere"] {
            assert_eq!(restored.stop_info(stop), cat.stop_info(stop));
        }

        // Ids and the distance table come back intact.
        for (i, stop) in cat.stops().iter().enumerate() {
            assert_eq!(restored.stops()[i].id, stop.id);
            assert_eq!(restored.stops()[i].name, stop.name);
        }
        for a in cat.stops() {
            for b in cat.stops() {
                assert_eq!(restored.distance(a.id, b.id), cat.distance(a.id, b.id));
            }
        }
    }

    #[test]
    fn stored_statistics_are_not_recomputed() {
        let cat = sample_catalogue();
        let info = cat.bus_info("750").unwrap();
        let (restored, ..) = reload(&cat, &sample_render_settings());
        let restored_info = restored.bus_info("750").unwrap();
        // Bit-for-bit, not approximately.
        assert_eq!(restored_info.route_length.to_bits(), info.route_length.to_bits());
        assert_eq!(restored_info.curvature.to_bits(), info.curvature.to_bits());
    }

    #[test]
    fn rendered_map_is_byte_identical() {
        let cat = sample_catalogue();
        let render = sample_render_settings();
        let before = MapRenderer::new(render.clone()).render(&cat);
        let (restored, render2, _) = reload(&cat, &render);
        let after = MapRenderer::new(render2).render(&restored);
        assert_eq!(before, after);
    }

    #[test]
    fn encoding_is_deterministic() {
        let cat = sample_catalogue();
        let render = sample_render_settings();
        let a = bincode::serialize(&Archive::encode(&cat, &render, &ROUTING)).unwrap();
        let b = bincode::serialize(&Archive::encode(&cat, &render, &ROUTING)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_catalogue_round_trips() {
        let cat = TransportCatalogue::new();
        let (restored, ..) = reload(&cat, &sample_render_settings());
        assert_eq!(restored.stop_count(), 0);
        assert!(restored.buses().is_empty());
    }
}

#[cfg(test)]
mod files {
    use tc_catalogue::TransportCatalogue;
    use tc_core::Coordinates;
    use tc_render::RenderSettings;
    use tc_routing::RoutingSettings;
    use tc_svg::{Color, Point};

    use crate::{load_archive, save_archive};

    #[test]
    fn save_then_load() {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", Coordinates::new(55.5, 37.5)).unwrap();
        cat.add_bus("b", &["A".into()], true).unwrap();

        let render = RenderSettings {
            width: 100.0,
            height: 100.0,
            padding: 10.0,
            line_width: 1.0,
            stop_radius: 1.0,
            bus_label_font_size: 10,
            bus_label_offset: Point::new(0.0, 0.0),
            stop_label_font_size: 10,
            stop_label_offset: Point::new(0.0, 0.0),
            underlayer_color: Color::from("white"),
            underlayer_width: 1.0,
            color_palette: vec![Color::from("red")],
        };
        let routing = RoutingSettings { bus_wait_time: 2.0, bus_velocity: 30.0 };

        let dir = std::env::temp_dir().join("tc-persist-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("catalogue.db");

        save_archive(&path, &cat, &render, &routing).unwrap();
        let (restored, render2, routing2) = load_archive(&path).unwrap();

        assert_eq!(restored.stop_count(), 1);
        assert_eq!(restored.bus_info("b"), cat.bus_info("b"));
        assert_eq!(render2, render);
        assert_eq!(routing2, routing);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("tc-persist-test-missing.db");
        assert!(load_archive(&path).is_err());
    }
}

//! Unit tests for tc-svg.

#[cfg(test)]
mod colors {
    use crate::{Color, Rgb, Rgba};

    #[test]
    fn rendering_forms() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("red").to_string(), "red");
        assert_eq!(Color::from(Rgb::new(255, 160, 0)).to_string(), "rgb(255,160,0)");
        assert_eq!(
            Color::from(Rgba::new(255, 160, 0, 0.3)).to_string(),
            "rgba(255,160,0,0.3)"
        );
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Color::default(), Color::None);
    }
}

#[cfg(test)]
mod elements {
    use crate::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Text};

    fn render_one(object: impl Into<crate::Object>) -> String {
        let mut doc = Document::new();
        doc.push(object);
        let rendered = doc.render();
        // Strip preamble, indent and closing tag; keep the element line.
        let line = rendered.lines().nth(2).unwrap();
        line.trim_start().to_string()
    }

    #[test]
    fn circle_attribute_order() {
        let circle = Circle::new()
            .center(Point::new(20.0, 20.0))
            .radius(10.0)
            .fill(Color::from("white"));
        assert_eq!(
            render_one(circle),
            "<circle cx=\"20\" cy=\"20\" r=\"10\" fill=\"white\"/>"
        );
    }

    #[test]
    fn path_props_only_when_set() {
        let circle = Circle::new().center(Point::new(1.0, 2.0)).radius(3.0);
        assert_eq!(render_one(circle), "<circle cx=\"1\" cy=\"2\" r=\"3\"/>");
    }

    #[test]
    fn polyline_points_then_props() {
        let line = Polyline::new()
            .point(Point::new(50.0, 50.0))
            .point(Point::new(70.0, 45.5))
            .fill(Color::None)
            .stroke(Color::from("green"))
            .stroke_width(14.0)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round);
        assert_eq!(
            render_one(line),
            "<polyline points=\"50,50 70,45.5\" fill=\"none\" stroke=\"green\" \
             stroke-width=\"14\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>"
        );
    }

    #[test]
    fn empty_polyline_has_empty_points() {
        assert_eq!(render_one(Polyline::new()), "<polyline points=\"\"/>");
    }

    #[test]
    fn text_props_before_geometry() {
        let text = Text::new()
            .fill(Color::from("black"))
            .position(Point::new(35.0, 20.0))
            .offset(Point::new(0.0, 6.0))
            .font_size(12)
            .font_family("Verdana")
            .data("Hello");
        assert_eq!(
            render_one(text),
            "<text fill=\"black\" x=\"35\" y=\"20\" dx=\"0\" dy=\"6\" \
             font-size=\"12\" font-family=\"Verdana\">Hello</text>"
        );
    }

    #[test]
    fn text_data_is_escaped() {
        let text = Text::new().data("R \"5\" <&'>");
        assert_eq!(
            render_one(text),
            "<text x=\"0\" y=\"0\" dx=\"0\" dy=\"0\" font-size=\"1\">\
             R &quot;5&quot; &lt;&amp;&apos;&gt;</text>"
        );
    }
}

#[cfg(test)]
mod document {
    use crate::{Circle, Document, Point};

    #[test]
    fn empty_document() {
        assert_eq!(
            Document::new().render(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n\
             </svg>"
        );
    }

    #[test]
    fn objects_in_insertion_order_two_space_indent() {
        let mut doc = Document::new();
        doc.push(Circle::new().center(Point::new(1.0, 1.0)).radius(2.0));
        doc.push(Circle::new().center(Point::new(3.0, 3.0)).radius(4.0));
        assert_eq!(
            doc.render(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n  \
             <circle cx=\"1\" cy=\"1\" r=\"2\"/>\n  \
             <circle cx=\"3\" cy=\"3\" r=\"4\"/>\n\
             </svg>"
        );
    }

    #[test]
    fn no_trailing_newline() {
        let rendered = Document::new().render();
        assert!(rendered.ends_with("</svg>"));
    }
}

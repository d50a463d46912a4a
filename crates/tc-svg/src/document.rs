//! Elements, path properties and document rendering.
//!
//! Attribute order is part of the output contract:
//!
//! - circle: `cx cy r`, then path properties;
//! - polyline: `points`, then path properties;
//! - text: path properties, then `x y dx dy font-size [font-family]
//!   [font-weight]`, then the escaped character data.
//!
//! Path properties render only when set, always as fill, stroke,
//! stroke-width, stroke-linecap, stroke-linejoin.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::Color;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `stroke-linecap` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

/// `stroke-linejoin` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Arcs,
    Bevel,
    Miter,
    MiterClip,
    Round,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Arcs => "arcs",
            LineJoin::Bevel => "bevel",
            LineJoin::Miter => "miter",
            LineJoin::MiterClip => "miter-clip",
            LineJoin::Round => "round",
        })
    }
}

// ── Path properties ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
struct PathProps {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
}

impl PathProps {
    fn render(&self, out: &mut impl Write) -> fmt::Result {
        if let Some(fill) = &self.fill {
            write!(out, " fill=\"{fill}\"")?;
        }
        if let Some(stroke) = &self.stroke {
            write!(out, " stroke=\"{stroke}\"")?;
        }
        if let Some(width) = self.stroke_width {
            write!(out, " stroke-width=\"{width}\"")?;
        }
        if let Some(cap) = self.line_cap {
            write!(out, " stroke-linecap=\"{cap}\"")?;
        }
        if let Some(join) = self.line_join {
            write!(out, " stroke-linejoin=\"{join}\"")?;
        }
        Ok(())
    }
}

/// Generate the five fluent path-property setters on an element type.
macro_rules! path_props {
    ($owner:ty) => {
        impl $owner {
            pub fn fill(mut self, color: impl Into<Color>) -> Self {
                self.props.fill = Some(color.into());
                self
            }

            pub fn stroke(mut self, color: impl Into<Color>) -> Self {
                self.props.stroke = Some(color.into());
                self
            }

            pub fn stroke_width(mut self, width: f64) -> Self {
                self.props.stroke_width = Some(width);
                self
            }

            pub fn line_cap(mut self, cap: LineCap) -> Self {
                self.props.line_cap = Some(cap);
                self
            }

            pub fn line_join(mut self, join: LineJoin) -> Self {
                self.props.line_join = Some(join);
                self
            }
        }
    };
}

// ── Elements ──────────────────────────────────────────────────────────────────

/// `<circle>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    props: PathProps,
}

impl Circle {
    pub fn new() -> Self {
        Self { radius: 1.0, ..Self::default() }
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        )?;
        self.props.render(out)?;
        out.write_str("/>")
    }
}

path_props!(Circle);

/// `<polyline>`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    props: PathProps,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex.
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<polyline points=\"")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{},{}", point.x, point.y)?;
        }
        out.write_char('"')?;
        self.props.render(out)?;
        out.write_str("/>")
    }
}

path_props!(Polyline);

/// `<text>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    data: String,
    props: PathProps,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            position: Point::default(),
            offset: Point::default(),
            font_size: 1,
            font_family: None,
            font_weight: None,
            data: String::new(),
            props: PathProps::default(),
        }
    }
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    fn render(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<text")?;
        self.props.render(out)?;
        write!(
            out,
            " x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        )?;
        if let Some(family) = &self.font_family {
            out.write_str(" font-family=\"")?;
            escape(family, out)?;
            out.write_char('"')?;
        }
        if let Some(weight) = &self.font_weight {
            out.write_str(" font-weight=\"")?;
            escape(weight, out)?;
            out.write_char('"')?;
        }
        out.write_char('>')?;
        escape(&self.data, out)?;
        out.write_str("</text>")
    }
}

path_props!(Text);

fn escape(data: &str, out: &mut impl Write) -> fmt::Result {
    for c in data.chars() {
        match c {
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '&' => out.write_str("&amp;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

// ── Document ──────────────────────────────────────────────────────────────────

/// Any element a [`Document`] can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Object {
    fn from(c: Circle) -> Self {
        Object::Circle(c)
    }
}

impl From<Polyline> for Object {
    fn from(p: Polyline) -> Self {
        Object::Polyline(p)
    }
}

impl From<Text> for Object {
    fn from(t: Text) -> Self {
        Object::Text(t)
    }
}

/// An ordered collection of elements with fixed-form rendering.
#[derive(Debug, Clone, Default)]
pub struct Document {
    objects: Vec<Object>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Render the document: XML declaration, `<svg>` root, one element per
    /// line indented by two spaces, closing tag without a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        self.render_to(&mut out).unwrap();
        out
    }

    pub fn render_to(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n")?;
        out.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n")?;
        for object in &self.objects {
            out.write_str("  ")?;
            match object {
                Object::Circle(c) => c.render(out)?,
                Object::Polyline(p) => p.render(out)?,
                Object::Text(t) => t.render(out)?,
            }
            out.write_char('\n')?;
        }
        out.write_str("</svg>")
    }
}

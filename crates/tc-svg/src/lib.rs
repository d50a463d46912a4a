//! `tc-svg` — just enough SVG to draw a transport map.
//!
//! Three element kinds (circle, polyline, text), a shared set of optional
//! path properties, and a [`Document`] that renders them in insertion order.
//! Rendering is plain `fmt::Write`; attribute order is fixed per element so
//! output is reproducible byte for byte.

mod color;
mod document;

#[cfg(test)]
mod tests;

pub use color::{Color, Rgb, Rgba};
pub use document::{Circle, Document, LineCap, LineJoin, Object, Point, Polyline, Text};

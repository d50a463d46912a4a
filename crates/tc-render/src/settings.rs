//! Render settings from the input document.

use serde::{Deserialize, Serialize};

use tc_svg::{Color, Point};

/// Everything the renderer needs besides the catalogue itself.
///
/// `color_palette` must be non-empty; the palette cursor arithmetic has no
/// meaning for an empty palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Canvas width and height in pixels.
    pub width: f64,
    pub height: f64,
    /// Blank margin on every side of the drawing, pixels.
    pub padding: f64,
    pub line_width: f64,
    pub stop_radius: f64,
    pub bus_label_font_size: u32,
    pub bus_label_offset: Point,
    pub stop_label_font_size: u32,
    pub stop_label_offset: Point,
    pub underlayer_color: Color,
    pub underlayer_width: f64,
    pub color_palette: Vec<Color>,
}

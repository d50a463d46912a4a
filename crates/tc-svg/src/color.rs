//! SVG colors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// An RGB triple with opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self { red, green, blue, opacity }
    }
}

/// A color attribute value.
///
/// The unset variant renders as the literal `none`, which is what path
/// properties want for "explicitly no paint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    None,
    Name(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Name(name.to_string())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Name(name) => f.write_str(name),
            Color::Rgb(c) => write!(f, "rgb({},{},{})", c.red, c.green, c.blue),
            Color::Rgba(c) => {
                write!(f, "rgba({},{},{},{})", c.red, c.green, c.blue, c.opacity)
            }
        }
    }
}

//! `tc-render` — the scalable vector map of all routes.
//!
//! [`SphereProjector`] maps geographic coordinates onto the canvas with an
//! equal-axis zoom; [`MapRenderer`] walks the catalogue's buses in name
//! order and emits four layers of SVG objects: route polylines, route
//! labels, stop circles, stop labels.

mod projector;
mod renderer;
mod settings;


pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use settings::RenderSettings;

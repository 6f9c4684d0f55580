//! Visualisation helpers
//!
//! Everything a display front-end needs to turn frames into pictures: the jet
//! colour scale between `Tf` and `T0`, viewport resampling, and a plain-text
//! heatmap. None of it touches simulation state.

pub mod ascii;
pub mod colormap;
pub mod raster;

pub use ascii::ascii_heatmap;
pub use colormap::{jet, ColorScale};
pub use raster::Raster;

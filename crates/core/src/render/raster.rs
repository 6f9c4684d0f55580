//! Nearest-neighbour resampling of a field onto a display viewport
//!
//! Output row 0 is the top of the picture, i.e. the largest `y`, so the image
//! reads like a plot with the y axis pointing up.

use crate::grid::TemperatureField;

/// Resampled temperatures for a `width×height` viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Viewport width in pixels/characters
    pub width: usize,
    /// Viewport height in pixels/characters
    pub height: usize,
    /// Row-major values, row 0 at the top
    pub values: Vec<f64>,
}

impl Raster {
    /// Resample `field` to `width×height`
    pub fn from_field(field: &TemperatureField, width: usize, height: usize) -> Self {
        let n = field.resolution();
        let mut values = Vec::with_capacity(width * height);

        for row in 0..height {
            let j = n - 1 - source_index(row, height, n);
            let src = field.row(j);
            for col in 0..width {
                values.push(src[source_index(col, width, n)]);
            }
        }

        Self {
            width,
            height,
            values,
        }
    }

    /// Value at viewport column `col`, row `row`
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.values[row * self.width + col]
    }
}

/// Grid index whose cell contains the centre of output pixel `k`
fn source_index(k: usize, out_len: usize, n: usize) -> usize {
    (((2 * k + 1) * n) / (2 * out_len)).min(n - 1)
}

//! Text heatmap for terminals without colour support

use super::colormap::ColorScale;
use super::raster::Raster;
use crate::grid::TemperatureField;
use crate::params::SimulationParameters;

/// Shades from coldest to hottest quarter of the colour scale
const SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];

fn shade(fraction: f64) -> char {
    // 0 maps to the ambient shade, (0, 1] split into four bands
    if fraction <= 0.0 {
        SHADES[0]
    } else {
        SHADES[((fraction * 4.0).ceil() as usize).clamp(1, 4)]
    }
}

/// Render `field` as a `size×size` character heatmap with legend and axes
///
/// Axis labels are in millimetres from the centre of the egg.
pub fn ascii_heatmap(field: &TemperatureField, params: &SimulationParameters, size: usize) -> String {
    let size = size.max(2);
    let scale = ColorScale::from_params(params);
    let raster = Raster::from_field(field, size, size);
    let radius_mm = params.radius() * 1000.0;
    let step_mm = 2.0 * radius_mm / size as f64;

    let mut out = String::new();
    out.push_str("═══════════════ TEMPERATURE HEATMAP ═══════════════\n");
    out.push_str(&format!(
        "Legend: {} ≤{:.0}°C  {} ≤{:.0}°C  {} ≤{:.0}°C  {} ≤{:.0}°C  {} ≤{:.0}°C\n\n",
        SHADES[0],
        scale.value_at(0.0),
        SHADES[1],
        scale.value_at(0.25),
        SHADES[2],
        scale.value_at(0.5),
        SHADES[3],
        scale.value_at(0.75),
        SHADES[4],
        scale.value_at(1.0),
    ));

    for row in 0..size {
        // Label with the y coordinate at the centre of the row
        let y_mm = radius_mm - (row as f64 + 0.5) * step_mm;
        out.push_str(&format!("{y_mm:6.2} │ "));
        for col in 0..size {
            out.push(shade(scale.normalize(raster.get(col, row))));
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("       └");
    out.push_str(&"──".repeat(size));
    out.push('\n');
    out.push_str(&format!(
        "        x: {:.2} mm … {:.2} mm   (y in mm)\n",
        -radius_mm, radius_mm
    ));

    out
}

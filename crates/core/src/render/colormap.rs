//! Jet colormap
//!
//! Piecewise-linear blue → cyan → yellow → red ramp, with the same control
//! points as the classic MATLAB/matplotlib `jet`.

use crate::params::SimulationParameters;

/// `(position, intensity)` control points per channel
const RED: [(f64, f64); 5] = [(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const GREEN: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const BLUE: [(f64, f64); 5] = [(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

fn channel(points: &[(f64, f64)], x: f64) -> f64 {
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }
    points[points.len() - 1].1
}

/// RGB colour for a normalised value; input is clamped to `[0, 1]`, NaN maps to 0
pub fn jet(x: f64) -> [u8; 3] {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    let to_byte = |v: f64| (v * 255.0).round() as u8;
    [
        to_byte(channel(&RED, x)),
        to_byte(channel(&GREEN, x)),
        to_byte(channel(&BLUE, x)),
    ]
}

/// Linear mapping from temperature to the colormap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    /// Temperature drawn at the bottom of the ramp (°C)
    pub vmin: f64,
    /// Temperature drawn at the top of the ramp (°C)
    pub vmax: f64,
}

impl ColorScale {
    /// Scale spanning the two prescribed temperatures
    pub fn from_params(params: &SimulationParameters) -> Self {
        let (vmin, vmax) = params.temperature_range();
        Self { vmin, vmax }
    }

    /// Position of `t` on the ramp, clamped to `[0, 1]`
    pub fn normalize(&self, t: f64) -> f64 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.5;
        }
        ((t - self.vmin) / span).clamp(0.0, 1.0)
    }

    /// Temperature at a fraction of the ramp (inverse of [`Self::normalize`])
    pub fn value_at(&self, fraction: f64) -> f64 {
        self.vmin + (self.vmax - self.vmin) * fraction
    }

    /// RGB colour for a temperature
    pub fn color(&self, t: f64) -> [u8; 3] {
        jet(self.normalize(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jet_endpoints() {
        // Dark blue at the bottom, dark red at the top
        assert_eq!(jet(0.0), [0, 0, 128]);
        assert_eq!(jet(1.0), [128, 0, 0]);
    }

    #[test]
    fn test_jet_midpoint_is_greenish() {
        let [r, g, b] = jet(0.5);
        assert_eq!(g, 255);
        assert!(r > 100 && b > 100, "({r}, {g}, {b})");
    }

    #[test]
    fn test_jet_clamps() {
        assert_eq!(jet(-3.0), jet(0.0));
        assert_eq!(jet(7.0), jet(1.0));
        assert_eq!(jet(f64::NAN), jet(0.0));
    }

    #[test]
    fn test_scale_spans_bath_to_egg() {
        let scale = ColorScale::from_params(&SimulationParameters::egg());
        assert_eq!(scale.vmin, -50.0);
        assert_eq!(scale.vmax, 50.0);
        assert_eq!(scale.normalize(0.0), 0.5);
        assert_eq!(scale.normalize(-80.0), 0.0);
        assert_eq!(scale.value_at(0.25), -25.0);
        assert_eq!(scale.color(50.0), jet(1.0));
    }

    #[test]
    fn test_degenerate_scale() {
        let scale = ColorScale {
            vmin: 20.0,
            vmax: 20.0,
        };
        assert_eq!(scale.normalize(20.0), 0.5);
    }
}

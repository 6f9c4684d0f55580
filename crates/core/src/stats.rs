//! Summary statistics over the in-domain cells of a frame

use crate::grid::{DomainMask, TemperatureField};
use crate::params::SimulationParameters;
use nalgebra::Vector2;
use serde::Serialize;

/// Temperature summary of one frame, restricted to cells inside the disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    /// Coldest in-domain temperature (°C)
    pub min: f64,
    /// Hottest in-domain temperature (°C)
    pub max: f64,
    /// Mean in-domain temperature (°C)
    pub mean: f64,
    /// Temperature at the grid centre (°C); mean of the four central cells for even N
    pub center: f64,
    /// Physical position of the hottest in-domain cell (m)
    pub hottest_position: Vector2<f64>,
    /// Number of in-domain cells
    pub inside_cells: usize,
}

impl FieldStats {
    /// Compute statistics for `field`
    ///
    /// A mask with no inside cells (never the case for `N ≥ 3`) yields NaN
    /// extrema and mean.
    ///
    /// # Panics
    ///
    /// Panics if `field`, `mask` and `params` disagree on the resolution
    pub fn compute(
        field: &TemperatureField,
        mask: &DomainMask,
        params: &SimulationParameters,
    ) -> Self {
        let n = field.resolution();
        assert_eq!(mask.resolution(), n, "Field resolution mismatch");
        assert_eq!(params.resolution(), n, "Field resolution mismatch");
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0_usize;
        let mut hottest = (n / 2, n / 2);

        for j in 0..n {
            for (i, &t) in field.row(j).iter().enumerate() {
                if mask.is_outside(i, j) {
                    continue;
                }
                min = min.min(t);
                if t > max {
                    max = t;
                    hottest = (i, j);
                }
                sum += t;
                count += 1;
            }
        }

        let (min, max, mean) = if count == 0 {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            (min, max, sum / count as f64)
        };

        Self {
            min,
            max,
            mean,
            center: center_temperature(field),
            hottest_position: params.cell_position(hottest.0, hottest.1),
            inside_cells: count,
        }
    }
}

/// Temperature at the geometric centre of the grid
pub fn center_temperature(field: &TemperatureField) -> f64 {
    let n = field.resolution();
    let mid = n / 2;
    if n % 2 == 1 {
        field.get(mid, mid)
    } else {
        (field.get(mid - 1, mid - 1)
            + field.get(mid, mid - 1)
            + field.get(mid - 1, mid)
            + field.get(mid, mid))
            / 4.0
    }
}

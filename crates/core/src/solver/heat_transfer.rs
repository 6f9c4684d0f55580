//! Explicit heat conduction kernel
//!
//! Forward-Euler in time, five-point Laplacian in space:
//! ```text
//! ∇²T[j,i] ≈ (T[j,i+1] + T[j,i-1] + T[j+1,i] + T[j-1,i] − 4·T[j,i]) / dx²
//! T'[j,i]  = T[j,i] + D·dt·∇²T[j,i]
//! ```
//!
//! Cells outside the domain are forced back to the ambient temperature after
//! the update, and the outer ring of the grid is copied through unchanged.
//! Every output cell depends only on the frozen input buffer, so rows can be
//! computed in any order (or in parallel) with bit-identical results.

use crate::params::SimulationParameters;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Coefficients of the explicit update, derived once from the parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatTransferParams {
    /// `D·dt` (m²)
    pub diffusivity_dt: f64,
    /// `dx²` (m²)
    pub dx_sq: f64,
    /// Temperature of the ambient medium (°C)
    pub ambient_temp: f64,
}

impl HeatTransferParams {
    /// Extract the stencil coefficients from simulation parameters
    pub fn from_simulation(params: &SimulationParameters) -> Self {
        Self {
            diffusivity_dt: params.diffusivity() * params.dt(),
            dx_sq: params.dx() * params.dx(),
            ambient_temp: params.ambient_temp(),
        }
    }
}

/// Update one output row from the input field
#[inline]
fn update_row(
    j: usize,
    temp_in: &[f64],
    row_out: &mut [f64],
    outside: &[bool],
    n: usize,
    params: HeatTransferParams,
) {
    let base = j * n;

    // Outer ring: copied from the input
    if j == 0 || j == n - 1 {
        row_out.copy_from_slice(&temp_in[base..base + n]);
        return;
    }
    row_out[0] = temp_in[base];
    row_out[n - 1] = temp_in[base + n - 1];

    for i in 1..n - 1 {
        let idx = base + i;

        // Dirichlet condition outside the disk
        if outside[idx] {
            row_out[i] = params.ambient_temp;
            continue;
        }

        let t = temp_in[idx];
        let laplacian = (temp_in[idx + 1] + temp_in[idx - 1] + temp_in[idx + n]
            + temp_in[idx - n]
            - 4.0 * t)
            / params.dx_sq;

        row_out[i] = t + params.diffusivity_dt * laplacian;
    }
}

/// Advance the field by one time step on the calling thread
///
/// # Arguments
///
/// * `temp_in` - Input temperature field (°C), row-major `n×n`
/// * `temp_out` - Output temperature field (°C), row-major `n×n`
/// * `outside` - Outside-domain mask, same layout
/// * `n` - Points per axis
/// * `params` - Stencil coefficients
pub fn step_heat_transfer_serial(
    temp_in: &[f64],
    temp_out: &mut [f64],
    outside: &[bool],
    n: usize,
    params: HeatTransferParams,
) {
    temp_out
        .chunks_mut(n)
        .enumerate()
        .for_each(|(j, row)| update_row(j, temp_in, row, outside, n, params));
}

/// Advance the field by one time step, one rayon task per row
///
/// Produces exactly the same values as [`step_heat_transfer_serial`].
#[cfg(feature = "parallel")]
pub fn step_heat_transfer_parallel(
    temp_in: &[f64],
    temp_out: &mut [f64],
    outside: &[bool],
    n: usize,
    params: HeatTransferParams,
) {
    temp_out
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(j, row)| update_row(j, temp_in, row, outside, n, params));
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 7;

    fn params() -> HeatTransferParams {
        // D·dt/dx² = 0.25, the stability bound
        HeatTransferParams {
            diffusivity_dt: 0.25,
            dx_sq: 1.0,
            ambient_temp: -10.0,
        }
    }

    fn no_mask() -> Vec<bool> {
        vec![false; N * N]
    }

    #[test]
    fn test_hot_spot_spreads_to_neighbours() {
        let mut temp_in = vec![0.0; N * N];
        let mut temp_out = vec![0.0; N * N];
        let center = 3 * N + 3;
        temp_in[center] = 100.0;

        step_heat_transfer_serial(&temp_in, &mut temp_out, &no_mask(), N, params());

        // At the stability bound the centre hands all its heat to the neighbours
        assert_eq!(temp_out[center], 0.0);
        for idx in [center - 1, center + 1, center - N, center + N] {
            assert_eq!(temp_out[idx], 25.0, "neighbour {idx}");
        }
        // Diagonals untouched by the five-point stencil
        assert_eq!(temp_out[center - N - 1], 0.0);
    }

    #[test]
    fn test_uniform_field_is_stationary() {
        let temp_in = vec![12.5; N * N];
        let mut temp_out = vec![0.0; N * N];
        step_heat_transfer_serial(&temp_in, &mut temp_out, &no_mask(), N, params());
        assert_eq!(temp_in, temp_out);
    }

    #[test]
    fn test_outer_ring_copied_unchanged() {
        let temp_in: Vec<f64> = (0..N * N).map(|v| v as f64).collect();
        let mut temp_out = vec![f64::NAN; N * N];
        step_heat_transfer_serial(&temp_in, &mut temp_out, &no_mask(), N, params());

        for k in 0..N {
            assert_eq!(temp_out[k], temp_in[k], "top edge at i={k}");
            let bottom = (N - 1) * N + k;
            assert_eq!(temp_out[bottom], temp_in[bottom], "bottom edge at i={k}");
            let left = k * N;
            assert_eq!(temp_out[left], temp_in[left], "left edge at j={k}");
            let right = k * N + N - 1;
            assert_eq!(temp_out[right], temp_in[right], "right edge at j={k}");
        }
    }

    #[test]
    fn test_masked_cells_pinned_to_ambient() {
        let temp_in = vec![40.0; N * N];
        let mut temp_out = vec![0.0; N * N];
        let mut outside = no_mask();
        let masked = 2 * N + 4;
        outside[masked] = true;

        step_heat_transfer_serial(&temp_in, &mut temp_out, &outside, N, params());

        assert_eq!(temp_out[masked], -10.0);
        assert_eq!(temp_out[3 * N + 3], 40.0);
    }

    #[test]
    fn test_masked_neighbour_draws_heat() {
        let mut temp_in = vec![40.0; N * N];
        let mut outside = no_mask();
        let masked = 3 * N + 4;
        outside[masked] = true;
        temp_in[masked] = -10.0;
        let mut temp_out = vec![0.0; N * N];

        step_heat_transfer_serial(&temp_in, &mut temp_out, &outside, N, params());

        // 40 + 0.25 * (-10 - 40)
        assert_eq!(temp_out[3 * N + 3], 27.5);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let temp_in: Vec<f64> = (0..N * N).map(|v| ((v * 37) % 11) as f64).collect();
        let mut serial = vec![0.0; N * N];
        let mut parallel = vec![0.0; N * N];
        let mut outside = no_mask();
        outside[N + 1] = true;

        step_heat_transfer_serial(&temp_in, &mut serial, &outside, N, params());
        step_heat_transfer_parallel(&temp_in, &mut parallel, &outside, N, params());

        assert_eq!(serial, parallel);
    }
}

//! Initial condition
//!
//! A disk of `T0` surrounded by a square of `Tf`: the egg the moment it is
//! dropped into the bath.

use super::field::TemperatureField;
use super::mask::DomainMask;
use crate::params::SimulationParameters;
use tracing::debug;

/// Build the initial field using an already computed mask
///
/// Every cell starts at the initial temperature, then every cell outside the
/// domain is overwritten with the ambient temperature.
///
/// # Panics
///
/// Panics if the mask resolution differs from `params.resolution()`
#[must_use]
pub fn initial_field(params: &SimulationParameters, mask: &DomainMask) -> TemperatureField {
    let mut field = TemperatureField::with_value(params.resolution(), params.initial_temp());
    mask.enforce(&mut field, params.ambient_temp());

    debug!(
        "Initial field: {}x{} grid, {} cells at {:.1}°C inside, rest at {:.1}°C",
        params.resolution(),
        params.resolution(),
        mask.inside_count(),
        params.initial_temp(),
        params.ambient_temp()
    );

    field
}

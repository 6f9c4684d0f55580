//! CPU stepper implementation
//!
//! Owns the outside-domain mask and the stencil coefficients. Runs rows either
//! on the calling thread or, with the `parallel` feature, on the rayon pool.

#[cfg(feature = "parallel")]
use super::heat_transfer::step_heat_transfer_parallel;
use super::heat_transfer::{step_heat_transfer_serial, HeatTransferParams};
use super::FieldStepper;
use crate::grid::{DomainMask, TemperatureField};
use crate::params::SimulationParameters;

/// Explicit finite-difference stepper on the CPU
#[derive(Debug, Clone)]
pub struct CpuStepper {
    mask: DomainMask,
    coefficients: HeatTransferParams,
    parallel: bool,
}

impl CpuStepper {
    /// Single-threaded stepper
    #[must_use]
    pub fn serial(params: &SimulationParameters) -> Self {
        Self::build(params, false)
    }

    /// Row-parallel stepper using rayon
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn parallel(params: &SimulationParameters) -> Self {
        Self::build(params, true)
    }

    fn build(params: &SimulationParameters, parallel: bool) -> Self {
        Self {
            mask: DomainMask::new(params.resolution()),
            coefficients: HeatTransferParams::from_simulation(params),
            parallel,
        }
    }

    /// The outside-domain mask this stepper enforces
    pub fn mask(&self) -> &DomainMask {
        &self.mask
    }
}

impl FieldStepper for CpuStepper {
    fn step_into(&self, input: &TemperatureField, output: &mut TemperatureField) {
        let n = self.mask.resolution();
        assert_eq!(input.resolution(), n, "Input field resolution mismatch");
        assert_eq!(output.resolution(), n, "Output field resolution mismatch");

        #[cfg(feature = "parallel")]
        if self.parallel {
            step_heat_transfer_parallel(
                input.as_slice(),
                output.as_mut_slice(),
                self.mask.as_slice(),
                n,
                self.coefficients,
            );
            return;
        }

        step_heat_transfer_serial(
            input.as_slice(),
            output.as_mut_slice(),
            self.mask.as_slice(),
            n,
            self.coefficients,
        );
    }

    fn resolution(&self) -> usize {
        self.mask.resolution()
    }

    fn is_parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::initial_field;
    use crate::params::PhysicalInputs;

    fn small_params() -> SimulationParameters {
        SimulationParameters::new(PhysicalInputs {
            resolution: 15,
            ..PhysicalInputs::default()
        })
        .expect("valid inputs")
    }

    #[test]
    fn test_step_is_pure_and_keeps_shape() {
        let params = small_params();
        let stepper = CpuStepper::serial(&params);
        let field = initial_field(&params, stepper.mask());
        let before = field.clone();

        let next = stepper.step(&field);

        assert_eq!(field, before);
        assert_eq!(next.dimensions(), field.dimensions());
        assert_ne!(next, field);
    }

    #[test]
    fn test_boundary_holds_after_step() {
        let params = small_params();
        let stepper = CpuStepper::serial(&params);
        let mut field = initial_field(&params, stepper.mask());
        for _ in 0..10 {
            field = stepper.step(&field);
            assert!(stepper.mask().is_satisfied_by(&field, params.ambient_temp()));
        }
    }

    #[test]
    #[should_panic(expected = "Input field resolution mismatch")]
    fn test_rejects_wrong_shape() {
        let stepper = CpuStepper::serial(&small_params());
        let _ = stepper.step(&TemperatureField::with_value(4, 0.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_backend_bit_identical() {
        let params = small_params();
        let serial = CpuStepper::serial(&params);
        let parallel = CpuStepper::parallel(&params);
        assert!(parallel.is_parallel());
        assert!(!serial.is_parallel());

        let mut a = initial_field(&params, serial.mask());
        let mut b = a.clone();
        for _ in 0..25 {
            a = serial.step(&a);
            b = parallel.step(&b);
        }
        assert_eq!(a, b);
    }
}

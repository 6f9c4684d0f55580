//! Time-stepping module
//!
//! The core abstraction is the `FieldStepper` trait: one explicit forward-Euler
//! increment of the heat equation on the masked grid.
//!
//! # Feature Flags
//!
//! - `parallel` (default): Enables the row-parallel backend via rayon. Disable
//!   with `--no-default-features` for a strictly single-threaded build.
//!
//! # Backend Selection
//!
//! 1. [`Backend::Serial`] always runs on the calling thread
//! 2. [`Backend::Parallel`] uses rayon when the feature is enabled, and falls
//!    back to serial otherwise
//!
//! # Example
//!
//! ```rust
//! use egg_cooling_core::solver::{create_stepper, Backend};
//! use egg_cooling_core::{initial_field, DomainMask, SimulationParameters};
//!
//! let params = SimulationParameters::egg();
//! let stepper = create_stepper(&params, Backend::Serial);
//! let field = initial_field(&params, &DomainMask::new(params.resolution()));
//! let next = stepper.step(&field);
//! assert_eq!(next.dimensions(), field.dimensions());
//! ```

mod cpu;
mod heat_transfer;
#[allow(clippy::module_name_repetitions)]
mod r#trait;

// Re-exports
pub use cpu::CpuStepper;
pub use heat_transfer::HeatTransferParams;
pub use r#trait::FieldStepper;

use crate::params::SimulationParameters;
use tracing::info;

/// Which CPU execution strategy to use for each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// One thread, rows in order
    #[default]
    Serial,
    /// Rows distributed over the rayon thread pool
    Parallel,
}

/// Create a stepper for the given parameters
///
/// # Arguments
///
/// * `params` - Simulation parameters (step sizes, temperatures, resolution)
/// * `backend` - Requested execution strategy
///
/// # Returns
///
/// A boxed `FieldStepper` using the requested backend, or the serial one if
/// the `parallel` feature is disabled
pub fn create_stepper(params: &SimulationParameters, backend: Backend) -> Box<dyn FieldStepper> {
    match backend {
        Backend::Serial => {
            info!(
                "Using serial stepper ({}x{} grid)",
                params.resolution(),
                params.resolution()
            );
        }
        Backend::Parallel => {
            #[cfg(feature = "parallel")]
            {
                info!(
                    "Using parallel stepper ({}x{} grid, {} threads)",
                    params.resolution(),
                    params.resolution(),
                    rayon::current_num_threads()
                );
                return Box::new(CpuStepper::parallel(params));
            }

            #[cfg(not(feature = "parallel"))]
            info!("Parallel feature disabled, using serial stepper");
        }
    }

    Box::new(CpuStepper::serial(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_backend() {
        let stepper = create_stepper(&SimulationParameters::egg(), Backend::Serial);
        assert!(!stepper.is_parallel());
        assert_eq!(stepper.resolution(), 100);
    }

    #[test]
    fn test_parallel_backend_follows_feature() {
        let stepper = create_stepper(&SimulationParameters::egg(), Backend::Parallel);
        assert_eq!(stepper.is_parallel(), cfg!(feature = "parallel"));
    }

    #[test]
    fn test_default_backend_is_serial() {
        assert_eq!(Backend::default(), Backend::Serial);
    }
}

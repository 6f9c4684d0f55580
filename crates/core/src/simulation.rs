//! Simulation driver
//!
//! `CoolingSimulation` owns the only temperature field of a run, the mask and a
//! stepper. Callers decide the cadence: a batch runner calls
//! [`CoolingSimulation::run_to_completion`], an animation calls
//! [`CoolingSimulation::advance`] once per tick.

use crate::error::ConfigError;
use crate::grid::{initial_field, DomainMask, TemperatureField};
use crate::params::{PhysicalInputs, SimulationParameters};
use crate::solver::{create_stepper, Backend, FieldStepper};
use crate::stats::FieldStats;
use tracing::{debug, info};

/// Egg cooling run: field, double buffer and frame counter
pub struct CoolingSimulation {
    params: SimulationParameters,
    stepper: Box<dyn FieldStepper>,
    mask: DomainMask,

    // Ping-pong buffers (read from one, write to other, then swap)
    field: TemperatureField,
    field_back: TemperatureField,

    frame: usize,
}

impl CoolingSimulation {
    /// Create a run from validated parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Validated simulation parameters
    /// * `backend` - Serial or row-parallel stepping
    pub fn new(params: SimulationParameters, backend: Backend) -> Self {
        let stepper = create_stepper(&params, backend);
        let mask = DomainMask::new(params.resolution());
        let field = initial_field(&params, &mask);
        let field_back = field.clone();

        info!(
            "Egg cooling simulation: {}x{} grid, dx={:.3e} m, dt={:.4} s, {} frames to {:.1} s",
            params.resolution(),
            params.resolution(),
            params.dx(),
            params.dt(),
            params.frame_count(),
            params.duration()
        );

        Self {
            params,
            stepper,
            mask,
            field,
            field_back,
            frame: 0,
        }
    }

    /// Validate raw inputs and create a run
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the inputs are not physically meaningful
    pub fn from_inputs(inputs: PhysicalInputs, backend: Backend) -> Result<Self, ConfigError> {
        Ok(Self::new(SimulationParameters::new(inputs)?, backend))
    }

    /// Advance by one time step
    pub fn advance(&mut self) {
        self.stepper.step_into(&self.field, &mut self.field_back);
        std::mem::swap(&mut self.field, &mut self.field_back);
        self.frame += 1;
    }

    /// Advance by up to `frames` time steps, stopping at `frame_count`
    pub fn advance_by(&mut self, frames: usize) {
        let frames = frames.min(self.remaining_frames());
        for _ in 0..frames {
            self.advance();
        }
        debug!(
            "Advanced {} frames: frame={}, t={:.2}s, center={:.3}°C",
            frames,
            self.frame,
            self.elapsed_time(),
            crate::stats::center_temperature(&self.field)
        );
    }

    /// Advance until `frame_count` frames have been computed
    ///
    /// Does nothing if the run is already complete.
    pub fn run_to_completion(&mut self) {
        if !self.is_complete() {
            self.advance_by(self.remaining_frames());
        }
        info!(
            "Simulation complete: {} frames, t={:.2}s",
            self.frame,
            self.elapsed_time()
        );
    }

    /// Rebuild the initial field and rewind to frame 0
    pub fn reset(&mut self) {
        self.field = initial_field(&self.params, &self.mask);
        self.field_back.copy_from(&self.field);
        self.frame = 0;
        info!("Simulation reset");
    }

    /// Current frame
    pub fn field(&self) -> &TemperatureField {
        &self.field
    }

    /// Outside-domain mask
    pub fn mask(&self) -> &DomainMask {
        &self.mask
    }

    /// Parameters of this run
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Frames computed so far
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Simulated time in seconds (`frame · dt`)
    pub fn elapsed_time(&self) -> f64 {
        self.frame as f64 * self.params.dt()
    }

    /// Frames left before `frame_count` is reached
    pub fn remaining_frames(&self) -> usize {
        self.params.frame_count().saturating_sub(self.frame)
    }

    /// Whether `frame_count` frames have been computed
    pub fn is_complete(&self) -> bool {
        self.frame >= self.params.frame_count()
    }

    /// Check if the row-parallel backend is in use
    pub fn is_parallel(&self) -> bool {
        self.stepper.is_parallel()
    }

    /// Summary statistics of the current frame
    pub fn stats(&self) -> FieldStats {
        FieldStats::compute(&self.field, &self.mask, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CoolingSimulation {
        CoolingSimulation::from_inputs(
            PhysicalInputs {
                resolution: 21,
                duration: 10.0,
                ..PhysicalInputs::default()
            },
            Backend::Serial,
        )
        .expect("valid inputs")
    }

    #[test]
    fn test_advance_counts_frames_and_time() {
        let mut sim = small();
        assert_eq!(sim.frame(), 0);
        sim.advance();
        sim.advance_by(4);
        assert_eq!(sim.frame(), 5);
        assert_eq!(sim.elapsed_time(), 5.0 * sim.params().dt());
    }

    #[test]
    fn test_double_buffer_matches_pure_step() {
        let mut sim = small();
        let stepper = crate::solver::CpuStepper::serial(sim.params());
        let mut expected = sim.field().clone();
        for _ in 0..7 {
            expected = stepper.step(&expected);
            sim.advance();
        }
        assert_eq!(sim.field(), &expected);
    }

    #[test]
    fn test_run_to_completion_stops_at_frame_count() {
        let mut sim = small();
        let frames = sim.params().frame_count();
        assert!(frames > 0);
        sim.run_to_completion();
        assert_eq!(sim.frame(), frames);
        assert!(sim.is_complete());
        assert_eq!(sim.remaining_frames(), 0);

        sim.run_to_completion();
        assert_eq!(sim.frame(), frames);
    }

    #[test]
    fn test_advance_by_stops_at_frame_count() {
        let mut sim = small();
        let frames = sim.params().frame_count();
        sim.advance_by(frames + 10);
        assert_eq!(sim.frame(), frames);
        assert!(sim.elapsed_time() <= sim.params().duration());

        sim.advance_by(5);
        assert_eq!(sim.frame(), frames);
    }

    #[test]
    fn test_advance_by_without_frames_is_noop() {
        // dt ≈ 7.1 s on an 11-point grid, so a 1 s run has no frames
        let mut sim = CoolingSimulation::from_inputs(
            PhysicalInputs {
                resolution: 11,
                duration: 1.0,
                ..PhysicalInputs::default()
            },
            Backend::Serial,
        )
        .expect("valid inputs");
        let initial = sim.field().clone();
        assert_eq!(sim.params().frame_count(), 0);

        sim.advance_by(10);
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.elapsed_time(), 0.0);
        assert_eq!(sim.field(), &initial);
    }

    #[test]
    fn test_reset_restores_initial_field() {
        let mut sim = small();
        let initial = sim.field().clone();
        sim.advance_by(3);
        assert_ne!(sim.field(), &initial);
        sim.reset();
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.field(), &initial);
    }

    #[test]
    fn test_invalid_inputs_refuse_to_start() {
        let result = CoolingSimulation::from_inputs(
            PhysicalInputs {
                diffusivity: 0.0,
                ..PhysicalInputs::default()
            },
            Backend::Serial,
        );
        assert!(matches!(result, Err(ConfigError::InvalidDiffusivity(_))));
    }
}

//! Stepper trait definition
//!
//! Backend-agnostic interface for advancing a temperature field by one explicit
//! time step. The single-threaded and row-parallel CPU backends both implement
//! it and produce identical frames.

use crate::grid::TemperatureField;

/// One explicit time increment `dt` applied to a temperature field
///
/// Implementations close over the simulation parameters and the outside-domain
/// mask; they hold no per-frame state.
pub trait FieldStepper: Send + Sync {
    /// Write the next frame of `input` into `output`
    ///
    /// `output` is fully overwritten; its previous contents are ignored.
    ///
    /// # Panics
    ///
    /// Panics if either field's resolution differs from [`Self::resolution`]
    fn step_into(&self, input: &TemperatureField, output: &mut TemperatureField);

    /// Return the next frame of `field` as a new field
    ///
    /// The input is left untouched.
    fn step(&self, field: &TemperatureField) -> TemperatureField {
        let mut next = TemperatureField::with_value(field.resolution(), 0.0);
        self.step_into(field, &mut next);
        next
    }

    /// Points per axis this stepper was built for
    fn resolution(&self) -> usize;

    /// `true` if rows are computed on the rayon thread pool
    fn is_parallel(&self) -> bool;
}

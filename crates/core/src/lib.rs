//! Egg Cooling Simulation Core Library
//!
//! Two-dimensional transient heat conduction in a circular domain (the cross
//! section of an egg) immersed in a colder bath, solved with an explicit
//! finite-difference scheme on a uniform `N×N` grid.
//!
//! ## Pipeline
//!
//! - [`SimulationParameters`]: physical inputs plus the derived `dx` and `dt`
//! - [`DomainMask`] / [`initial_field`]: disk of `T0` in a square of `Tf`
//! - [`solver`]: one forward-Euler step of the five-point Laplacian, with the
//!   bath temperature re-imposed outside the disk
//! - [`CoolingSimulation`]: owns the field and advances it frame by frame
//! - [`render`]: colour scale, resampling and text heatmap for front-ends

pub mod error;
pub mod grid;
pub mod params;
pub mod render;
pub mod simulation;
pub mod solver;
pub mod stats;

// Re-export core types
pub use error::ConfigError;
pub use grid::{initial_field, DomainMask, TemperatureField};
pub use params::{PhysicalInputs, SimulationParameters};
pub use simulation::CoolingSimulation;
pub use solver::{create_stepper, Backend, CpuStepper, FieldStepper};
pub use stats::FieldStats;

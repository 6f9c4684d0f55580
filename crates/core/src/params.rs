//! Physical and numeric parameters
//!
//! `SimulationParameters` is built once before any field exists. The spatial step
//! `dx` and time step `dt` are derived here and nowhere else, so the initializer
//! and every stepper always agree on step sizes.
//!
//! # Derived quantities
//!
//! ```text
//! dx = 2r / (N - 1)
//! dt = dx² / (4D)          (explicit 2D diffusion stability bound)
//! frames = floor(t_final / dt)
//! ```

use crate::error::ConfigError;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Egg radius (m)
pub const EGG_RADIUS: f64 = 0.01;
/// Initial egg temperature (°C)
pub const EGG_INITIAL_TEMP: f64 = 50.0;
/// Temperature of the cooling bath (°C)
pub const BATH_TEMP: f64 = -50.0;
/// Thermal diffusivity of egg white/yolk (m²/s)
pub const EGG_DIFFUSIVITY: f64 = 1.40e-7;
/// Default points per axis
pub const DEFAULT_RESOLUTION: usize = 100;
/// Default simulated duration (s)
pub const DEFAULT_DURATION: f64 = 200.0;

/// Grids coarser than this still run but barely resolve the disk
const COARSE_GRID_WARNING: usize = 8;

/// Raw user-facing inputs, before validation and derivation
///
/// This is the serialized form of [`SimulationParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalInputs {
    /// Domain radius `r` (m)
    pub radius: f64,
    /// Initial body temperature `T0` (°C)
    pub initial_temp: f64,
    /// Ambient medium temperature `Tf` (°C)
    pub ambient_temp: f64,
    /// Thermal diffusivity `D` (m²/s)
    pub diffusivity: f64,
    /// Grid points per axis `N`
    pub resolution: usize,
    /// Total simulated duration `t_final` (s)
    pub duration: f64,
}

impl Default for PhysicalInputs {
    /// A 1 cm egg at 50 °C dropped into a -50 °C bath
    fn default() -> Self {
        Self {
            radius: EGG_RADIUS,
            initial_temp: EGG_INITIAL_TEMP,
            ambient_temp: BATH_TEMP,
            diffusivity: EGG_DIFFUSIVITY,
            resolution: DEFAULT_RESOLUTION,
            duration: DEFAULT_DURATION,
        }
    }
}

impl PhysicalInputs {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.diffusivity.is_finite() && self.diffusivity > 0.0) {
            return Err(ConfigError::InvalidDiffusivity(self.diffusivity));
        }
        if self.resolution < 3 {
            return Err(ConfigError::InvalidResolution(self.resolution));
        }
        if !self.initial_temp.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "initial",
                value: self.initial_temp,
            });
        }
        if !self.ambient_temp.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "ambient",
                value: self.ambient_temp,
            });
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(ConfigError::InvalidDuration(self.duration));
        }
        Ok(())
    }
}

/// Immutable simulation configuration with derived step sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PhysicalInputs", into = "PhysicalInputs")]
pub struct SimulationParameters {
    inputs: PhysicalInputs,
    dx: f64,
    dt: f64,
}

impl SimulationParameters {
    /// Validate inputs and derive `dx` and `dt`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the radius or diffusivity is not a positive
    /// finite number, the resolution is below 3, a temperature is not finite, or
    /// the duration is negative or not finite.
    pub fn new(inputs: PhysicalInputs) -> Result<Self, ConfigError> {
        inputs.validate()?;
        if inputs.resolution < COARSE_GRID_WARNING {
            warn!(
                "Resolution {} leaves only {} interior points per axis; the disk will be poorly resolved",
                inputs.resolution,
                inputs.resolution - 2
            );
        }
        Ok(Self::derive(inputs))
    }

    /// The reference egg scenario (`r = 1 cm`, `50 °C → -50 °C`, `N = 100`)
    #[must_use]
    pub fn egg() -> Self {
        Self::derive(PhysicalInputs::default())
    }

    fn derive(inputs: PhysicalInputs) -> Self {
        let dx = 2.0 * inputs.radius / (inputs.resolution - 1) as f64;
        let dt = dx * dx / (4.0 * inputs.diffusivity);
        Self { inputs, dx, dt }
    }

    /// The validated inputs these parameters were derived from
    pub fn inputs(&self) -> PhysicalInputs {
        self.inputs
    }

    /// Domain radius `r` (m)
    pub fn radius(&self) -> f64 {
        self.inputs.radius
    }

    /// Initial body temperature `T0` (°C)
    pub fn initial_temp(&self) -> f64 {
        self.inputs.initial_temp
    }

    /// Ambient medium temperature `Tf` (°C)
    pub fn ambient_temp(&self) -> f64 {
        self.inputs.ambient_temp
    }

    /// Thermal diffusivity `D` (m²/s)
    pub fn diffusivity(&self) -> f64 {
        self.inputs.diffusivity
    }

    /// Grid points per axis `N`
    pub fn resolution(&self) -> usize {
        self.inputs.resolution
    }

    /// Total simulated duration `t_final` (s)
    pub fn duration(&self) -> f64 {
        self.inputs.duration
    }

    /// Spatial step `dx` (m)
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Time step `dt` (s)
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of frames covering the duration, `floor(t_final / dt)`
    pub fn frame_count(&self) -> usize {
        (self.inputs.duration / self.dt).floor() as usize
    }

    /// Dimensionless `D·dt/dx²`; the scheme is stable for values up to 0.25
    pub fn stability_number(&self) -> f64 {
        self.inputs.diffusivity * self.dt / (self.dx * self.dx)
    }

    /// Physical coordinates `(x, y)` of cell `(i, j)`, in metres from the centre
    ///
    /// # Arguments
    ///
    /// * `i` - Column index (x axis)
    /// * `j` - Row index (y axis)
    pub fn cell_position(&self, i: usize, j: usize) -> Vector2<f64> {
        Vector2::new(
            i as f64 * self.dx - self.inputs.radius,
            j as f64 * self.dx - self.inputs.radius,
        )
    }

    /// `(min, max)` of the two prescribed temperatures
    pub fn temperature_range(&self) -> (f64, f64) {
        let (t0, tf) = (self.inputs.initial_temp, self.inputs.ambient_temp);
        (t0.min(tf), t0.max(tf))
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::egg()
    }
}

impl TryFrom<PhysicalInputs> for SimulationParameters {
    type Error = ConfigError;

    fn try_from(inputs: PhysicalInputs) -> Result<Self, Self::Error> {
        Self::new(inputs)
    }
}

impl From<SimulationParameters> for PhysicalInputs {
    fn from(params: SimulationParameters) -> Self {
        params.inputs
    }
}

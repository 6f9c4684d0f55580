//! Configuration errors
//!
//! The simulation has exactly one failure mode: refusing to start with
//! physically meaningless parameters. Once a `SimulationParameters` value exists
//! every later operation is total.

/// Invalid physical or numeric parameter detected at construction time
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Domain radius must be finite and strictly positive (m)
    InvalidRadius(f64),
    /// Thermal diffusivity must be finite and strictly positive (m²/s)
    InvalidDiffusivity(f64),
    /// Grid needs at least 3 points per axis to have an interior
    InvalidResolution(usize),
    /// A temperature (°C) was NaN or infinite
    NonFiniteTemperature {
        /// Which temperature was rejected (`"initial"` or `"ambient"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Simulated duration must be finite and non-negative (s)
    InvalidDuration(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidRadius(r) => {
                write!(f, "Domain radius must be a positive finite length, got {r} m")
            }
            ConfigError::InvalidDiffusivity(d) => write!(
                f,
                "Thermal diffusivity must be a positive finite value, got {d} m²/s"
            ),
            ConfigError::InvalidResolution(n) => write!(
                f,
                "Grid resolution must be at least 3 points per axis, got {n}"
            ),
            ConfigError::NonFiniteTemperature { name, value } => {
                write!(f, "The {name} temperature must be finite, got {value} °C")
            }
            ConfigError::InvalidDuration(t) => write!(
                f,
                "Simulated duration must be a non-negative finite time, got {t} s"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

//! Grid and boundary initialisation

pub mod field;
pub mod initial;
pub mod mask;

// Re-export main types
pub use field::TemperatureField;
pub use initial::initial_field;
pub use mask::DomainMask;

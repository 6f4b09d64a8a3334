//! Domain layer - Core entities

pub mod algorithm;

pub use algorithm::{Algorithm, InferenceParameters, ValidationError};

//! InSilico AWS resource definitions
//!
//! Typed, validated deployment resource definitions for machine-learning
//! workloads:
//! - The [`Algorithm`] record: region, allowed instance types, resource
//!   limits, and inference parameters, constructed all-or-nothing from an
//!   untyped mapping
//! - An [`AlgorithmCatalog`] loaded from JSON definition files
//! - A small CLI for validating and inspecting definition files

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::algorithm::{Algorithm, InferenceParameters, ValidationError};
pub use infrastructure::catalog::{AlgorithmCatalog, CatalogError};

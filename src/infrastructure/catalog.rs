//! Algorithm catalog - loading and lookup of algorithm definitions
//!
//! Definitions live in a JSON file holding an array of algorithm mappings.
//! Each entry goes through the same construction path as any other untyped
//! input, so a definition file can never yield a partially valid catalog.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::algorithm::{Algorithm, ValidationError};

/// Errors raised while loading or assembling an algorithm catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read definitions file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse definitions file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("definitions file must contain an array of algorithm mappings, got {actual}")]
    NotAnArray { actual: &'static str },

    #[error("invalid algorithm definition at index {index}: {source}")]
    Validation {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("duplicate algorithm name: {name}")]
    DuplicateAlgorithm { name: String },
}

/// In-memory registry of algorithm definitions, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmCatalog {
    algorithms: HashMap<String, Algorithm>,
}

impl AlgorithmCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-constructed algorithms. Names must be
    /// unique.
    pub fn from_algorithms(algorithms: Vec<Algorithm>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        for algorithm in algorithms {
            if catalog.algorithms.contains_key(algorithm.name()) {
                return Err(CatalogError::DuplicateAlgorithm {
                    name: algorithm.name().to_string(),
                });
            }
            catalog
                .algorithms
                .insert(algorithm.name().to_string(), algorithm);
        }

        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Algorithm> {
        self.algorithms.get(name)
    }

    /// All algorithms, sorted by name.
    pub fn list(&self) -> Vec<&Algorithm> {
        let mut algorithms: Vec<_> = self.algorithms.values().collect();
        algorithms.sort_by_key(|a| a.name());
        algorithms
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

/// Load a catalog from a JSON definitions file.
pub fn load_file(path: impl AsRef<Path>) -> Result<AlgorithmCatalog, CatalogError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_definitions(&contents)?;

    debug!(
        path = %path.display(),
        count = catalog.len(),
        "Loaded algorithm definitions"
    );

    Ok(catalog)
}

fn parse_definitions(contents: &str) -> Result<AlgorithmCatalog, CatalogError> {
    let document: Value = serde_json::from_str(contents)?;

    let entries = document.as_array().ok_or_else(|| CatalogError::NotAnArray {
        actual: crate::domain::algorithm::json_type_name(&document),
    })?;

    let algorithms = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Algorithm::from_value(entry)
                .map_err(|source| CatalogError::Validation { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    AlgorithmCatalog::from_algorithms(algorithms)
}

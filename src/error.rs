//! Error types for grillage mesh generation

use thiserror::Error;

use crate::config::MeshStrategy;
use crate::mesh::RegionKind;

/// Main error type for mesh generation
#[derive(Error, Debug)]
pub enum GrillageError {
    #[error(
        "{strategy} mesh not allowed for skew angle {skew}° (thresholds: orthogonal above {low}°, skew below {high}°)"
    )]
    Configuration {
        strategy: MeshStrategy,
        skew: f64,
        low: f64,
        high: f64,
    },

    #[error("Inconsistent mesh in region {region} at row {row}, column {column}: {detail}")]
    MeshConsistency {
        region: RegionKind,
        row: usize,
        column: usize,
        detail: String,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Node {0} not found in mesh")]
    NodeNotFound(usize),

    #[error("Convergence failed after {0} iterations")]
    ConvergenceFailed(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for mesh operations
pub type MeshResult<T> = Result<T, GrillageError>;

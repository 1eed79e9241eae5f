//! Error types for the beam solver

use thiserror::Error;

/// Main error type for beam analysis
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Malformed load: {0}")]
    MalformedLoad(String),

    #[error("Malformed support: {0}")]
    MalformedSupport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BeamError {
    /// Stable machine-readable kind, used by the transport layer
    pub fn kind(&self) -> &'static str {
        match self {
            BeamError::InvalidGeometry(_) => "InvalidGeometry",
            BeamError::UnsupportedConfiguration(_) => "UnsupportedConfiguration",
            BeamError::MalformedLoad(_) => "MalformedLoad",
            BeamError::MalformedSupport(_) => "MalformedSupport",
            BeamError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;

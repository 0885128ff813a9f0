use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdfEvoError {
    #[error("Structural invariant violated: {0}")]
    StructuralInvariant(String),

    #[error("Selection error: {0}")]
    Selection(String),

    #[error("Polygon needs at least 3 vertices, got {vertices}")]
    PolygonDefinition { vertices: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SdfEvoError>;

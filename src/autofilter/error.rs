use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutofilterError {
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    #[error("Invalid filter name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Project error: {0}")]
    Project(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AutofilterError>;

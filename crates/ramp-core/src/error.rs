use thiserror::Error;

#[derive(Debug, Error)]
pub enum RampError {
    /// Input dimensions cannot produce a usable curve or layout.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A conic solve produced no admissible real root.
    #[error("No solution: {0}")]
    NoSolution(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RampError {
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub fn no_solution(msg: impl Into<String>) -> Self {
        Self::NoSolution(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RampError>;

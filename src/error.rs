use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordSearchError>;

#[derive(Debug, Error)]
pub enum WordSearchError {
    /// A caller-supplied argument was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A query was made before the named dependency was built.
    #[error("{0} has not been initialized")]
    NotInitialized(&'static str),

    #[error("failed to read word source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse word list: {0}")]
    Json(#[from] serde_json::Error),
}

impl WordSearchError {
    /// Loader failures count as invalid input: the word source could not be produced.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, WordSearchError::NotInitialized(_))
    }
}

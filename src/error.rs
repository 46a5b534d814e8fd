use thiserror::Error;

/// Errors produced by the MST engines and the edge-file input layer.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated an engine precondition: an out-of-range vertex
    /// index, a negative or NaN weight, or an unknown policy name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The edge file could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A row in the edge file could not be parsed. Line numbers are 1-based.
    #[error("malformed input on line {line}: {msg}")]
    MalformedInput { line: usize, msg: String },

    /// The input contained no vertices at all.
    #[error("no vertices found in input")]
    NoVertices,
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// Result type for netspan operations.
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the simulation core.
///
/// The particle system itself is total over well-formed input; everything
/// here comes from decoding input text or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A particle or seed line could not be decoded.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Generator seed input did not name both generators.
    #[error("missing start value for generator {0}")]
    MissingSeed(&'static str),

    /// A setting holds a value the solvers cannot run with.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Settings JSON could not be read, or a report could not be written.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O errors (input and settings files).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

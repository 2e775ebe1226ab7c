use thiserror::Error;

/// Failure kinds surfaced by a widget repository
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parsing error: {0}")]
    Parsing(String),

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl CommonError {
    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            CommonError::Network(_) => "network",
            CommonError::Parsing(_) => "parsing",
            CommonError::Server { .. } => "server",
            CommonError::Unknown(_) => "unknown",
        }
    }
}

pub type DyResult<T> = std::result::Result<T, CommonError>;

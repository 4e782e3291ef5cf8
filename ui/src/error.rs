// Errors raised when button props are read from text or JSON
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropParseError {
    #[error("unknown button color: {0:?}")]
    UnknownColor(String),
    #[error("unknown button size: {0:?}")]
    UnknownSize(String),
    #[error("unknown button type: {0:?}")]
    UnknownType(String),
    #[error("invalid button config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type PropResult<T> = Result<T, PropParseError>;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Reject a `top_n` of zero before any ranking work starts
#[inline]
pub fn ensure_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        return Err(Error::InvalidArgument(
            "top_n must be at least 1".to_string(),
        ));
    }
    Ok(())
}

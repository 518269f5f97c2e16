use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{service} request failed with status {status}")]
    UpstreamStatus { service: &'static str, status: u16 },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type PulseResult<T> = Result<T, PulseError>;

use thiserror::Error;

/// Failure taxonomy for the client engine.
///
/// Remote failures carry the response body verbatim so callers can print it
/// straight into the output panel. Malformed locally-stored state is never an
/// error: the stores treat it as absence.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Profile must have a 'name' field")]
    MissingName,

    #[error("{0}")]
    Validation(String),

    #[error("Delete requires confirmation (pass --yes)")]
    DeleteNotConfirmed,

    #[error("State I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }
}

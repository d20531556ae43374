use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed event payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid event frame: {0}")]
    InvalidFrame(String),

    #[error("Display surface error: {0}")]
    Surface(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors after which an event source cannot produce further events.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DomainError::Surface(_) | DomainError::IoError(_))
    }
}

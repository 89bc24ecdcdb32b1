use thiserror::Error;

pub type Result<T> = std::result::Result<T, InteropError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteropError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl InteropError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::debug!(reason = %msg, "rejected boundary argument");
        InteropError::InvalidArgument(msg)
    }
}

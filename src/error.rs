//! Errors raised while a pipeline is running.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure signalled by a stage during a pull, push, or close.
///
/// The core performs no recovery: an error aborts the pipeline and
/// propagates to whoever ran it. Invariant violations are not errors, they
/// are programmer mistakes and panic instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A stage failed while producing, transforming, or consuming.
    #[error("stage failed: {0}")]
    Stage(Box<dyn std::error::Error>),

    /// A failure described only by a message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn stage<E>(cause: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Error::Stage(Box::new(cause))
    }

    pub fn message<M: Into<String>>(message: M) -> Self {
        Error::Message(message.into())
    }
}

impl From<io::Error> for Error {
    fn from(cause: io::Error) -> Self {
        Error::Stage(Box::new(cause))
    }
}

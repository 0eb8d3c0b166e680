use thiserror::Error;

/// Operation-level errors surfaced to the menu loop. Storage failures
/// are logged and absorbed inside the gateway and never reach this type.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("{0} is not supported yet")]
    Unsupported(&'static str),

    #[error("console input/output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type DeskResult<T> = Result<T, DeskError>;

use thiserror::Error;

/// Recoverable errors surfaced at the library boundary.
///
/// Shape faults inside the matrix engine (out-of-range cells, mismatched
/// `dot` operands, shapes that cannot be broadcast) are not represented
/// here; they indicate a malformed model and panic.
#[derive(Debug, Error)]
pub enum NnError {
    #[error("need at-least an output layer")]
    NoLayers,

    #[error("{what} must be positive")]
    InvalidSize { what: &'static str },

    #[error("need exactly {expected} inputs, got {actual}")]
    InputLength { expected: usize, actual: usize },

    #[error("need exactly {expected} outputs, got {actual}")]
    OutputLength { expected: usize, actual: usize },

    #[error("no network attached, nothing to train")]
    NoNetwork,

    #[error("training cancelled before epoch {epoch}")]
    Cancelled { epoch: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NnError>;

use thiserror::Error;

/// Application-level error type for example persistence.
///
/// The generator and analyzer never return this: their failures are folded
/// into result records or `"Error: ..."` strings.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

/// Failure of the output channel. Nothing else in a guest program can fail.
#[derive(Debug, Error)]
pub enum GuestError {
    #[error("failed to write to the console")]
    Console(#[from] core::fmt::Error),

    #[error("failed to flush the console: {0}")]
    Flush(#[from] std::io::Error),
}

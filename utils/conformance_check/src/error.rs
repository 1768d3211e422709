use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("unknown conformance case: {0}")]
    UnknownCase(String),

    #[error("console log is empty")]
    EmptyLog,

    #[error("no run of the selected cases found in the console log")]
    NoRuns,

    #[error("conformance failed for: {}", .0.join(", "))]
    Failed(Vec<String>),

    #[error("failed to write the runner report")]
    Report(#[from] core::fmt::Error),

    #[error("invalid log pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

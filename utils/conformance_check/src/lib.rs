//! Conformance checking for the Nanvix guest examples.
//!
//! The checker either runs the cases in-process, repeatedly, or reads a guest
//! console log captured from a real Nanvix run, and compares every run with
//! the expected transcript.

use types::CaseId;

pub mod comparison;
pub mod error;
pub mod log_parser;
pub mod runner;

pub use comparison::{ComparisonResult, compare_transcripts};
pub use error::CheckError;
pub use runner::{CaseReport, Runner, RunSource};

/// Where hyperlight-nanvix writes the guest console by default.
pub const DEFAULT_CONSOLE_LOG: &str = "/tmp/hyperlight-nanvix/guest-console.log";

/// Resolve a `--case` argument: `all`, a case name or a guest binary name.
pub fn select_cases(name: &str) -> Result<Vec<CaseId>, CheckError> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(CaseId::ALL.to_vec());
    }
    CaseId::from_name(name)
        .map(|case| vec![case])
        .ok_or_else(|| CheckError::UnknownCase(name.to_string()))
}

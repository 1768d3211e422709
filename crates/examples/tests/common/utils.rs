use nanvix_examples::run_case;
use program::{BufferWriter, ExitCode, entrypoint};
use types::{CaseId, Transcript};

/// Run `case` through the same entry point glue the guest binaries use and
/// capture what it printed.
pub fn capture(case: CaseId) -> (ExitCode, Transcript) {
    let (status, raw) = capture_raw(case);
    (status, Transcript::parse(&raw))
}

/// Like [`capture`], but returns the raw bytes written to the console.
pub fn capture_raw(case: CaseId) -> (ExitCode, String) {
    let mut console = BufferWriter::new();
    let status = entrypoint::run(&mut console, |out| run_case(case, out));
    (status, console.into_string())
}

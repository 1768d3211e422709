//! Conformance cases run as Nanvix guest programs.
//!
//! Each case prints a fixed, deterministic sequence of lines that proves a
//! set of runtime capabilities works in the guest. The program bodies are
//! generic over [`core::fmt::Write`] so the host can run them in-process and
//! compare their output with [`expected`].

use core::fmt::Write;

use program::GuestResult;
use types::CaseId;

pub mod basic;
pub mod calculator;
pub mod expected;
pub mod extended;

pub use calculator::Calculator;

/// Run `case` to completion, printing to `out`.
pub fn run_case<W: Write>(case: CaseId, out: &mut W) -> GuestResult {
    match case {
        CaseId::Basic => basic::run(out),
        CaseId::Extended => extended::run(out),
    }
}

#![no_std]

extern crate alloc;

pub mod case;
pub use case::CaseId;

pub mod result;
pub use result::ExitCode;

pub mod transcript;
pub use transcript::{OutputLine, Transcript};

//! Runtime support for the Nanvix guest programs.
//!
//! Programs print through a [`Console`] and return a [`GuestResult`];
//! [`entrypoint!`] turns that result into the process exit status.

pub mod console;
pub mod error;
pub mod float;
#[macro_use] // enables macro use across the crate
pub mod entrypoint;

pub use console::{BufferWriter, Console, StdoutWriter};
pub use error::GuestError;
pub use float::Float;

pub use types;
pub use types::ExitCode;

/// Result returned by every guest program body.
pub type GuestResult = Result<ExitCode, GuestError>;

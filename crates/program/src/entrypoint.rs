use types::ExitCode;

use crate::GuestResult;
use crate::console::Console;

/// Run a guest program body against `console` and flush it.
///
/// Any output failure becomes [`ExitCode::Failure`] and is reported on
/// stderr, since stdout is the channel that just failed.
pub fn run<C, F>(console: &mut C, program: F) -> ExitCode
where
    C: Console,
    F: FnOnce(&mut C) -> GuestResult,
{
    let result = program(console).and_then(|status| {
        console.flush()?;
        Ok(status)
    });

    match result {
        Ok(status) => status,
        Err(e) => {
            eprintln!("Error running guest program: {}", e);
            ExitCode::Failure
        }
    }
}

/// Declare `$func` as the program's entry point, printing to stdout.
///
/// `$func` takes `&mut StdoutWriter` (or any generic `core::fmt::Write`) and
/// returns a [`GuestResult`].
#[macro_export]
macro_rules! entrypoint {
    ($func:path) => {
        fn main() -> ::std::process::ExitCode {
            let mut console = $crate::console::StdoutWriter::new();
            let status = $crate::entrypoint::run(&mut console, |console| $func(console));
            ::std::process::ExitCode::from(status.code())
        }
    };
}

#[cfg(test)]
mod tests {
    use core::fmt::{self, Write};
    use std::io;

    use super::*;
    use crate::GuestError;
    use crate::console::BufferWriter;

    struct BrokenConsole;

    impl Write for BrokenConsole {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    impl Console for BrokenConsole {}

    /// Accepts writes but cannot flush them.
    #[derive(Default)]
    struct UnflushableConsole {
        written: String,
    }

    impl Write for UnflushableConsole {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.written.push_str(s);
            Ok(())
        }
    }

    impl Console for UnflushableConsole {
        fn flush(&mut self) -> Result<(), GuestError> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed").into())
        }
    }

    #[test]
    fn passes_through_program_status() {
        let mut console = BufferWriter::new();
        let status = run(&mut console, |out| {
            writeln!(out, "hi")?;
            Ok(ExitCode::Success)
        });
        assert_eq!(status, ExitCode::Success);
        assert_eq!(console.as_str(), "hi\n");
    }

    #[test]
    fn output_failure_becomes_failure_status() {
        let mut console = BrokenConsole;
        let status = run(&mut console, |out| {
            writeln!(out, "lost")?;
            Ok(ExitCode::Success)
        });
        assert_eq!(status, ExitCode::Failure);
    }

    #[test]
    fn flush_failure_becomes_failure_status() {
        let mut console = UnflushableConsole::default();
        let status = run(&mut console, |out| {
            writeln!(out, "written")?;
            Ok(ExitCode::Success)
        });
        assert_eq!(status, ExitCode::Failure);
        assert_eq!(console.written, "written\n");
    }
}

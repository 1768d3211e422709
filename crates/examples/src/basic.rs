//! Basic runtime case: formatted output, integer arithmetic and a bounded loop.

use core::fmt::Write;

use program::{ExitCode, GuestResult};

pub const FIRST_COUNT: i32 = 1;
pub const LAST_COUNT: i32 = 5;

pub fn run<W: Write>(out: &mut W) -> GuestResult {
    writeln!(out, "Hello from C in Nanvix!")?;
    writeln!(out, "Testing basic C operations...")?;

    let a: i32 = 10;
    let b: i32 = 20;
    let sum = a + b;
    writeln!(out, "Sum: {} + {} = {}", a, b, sum)?;

    writeln!(out, "Counting from {} to {}:", FIRST_COUNT, LAST_COUNT)?;
    for count in FIRST_COUNT..=LAST_COUNT {
        writeln!(out, "Count: {}", count)?;
    }

    writeln!(out, "C execution completed!")?;
    Ok(ExitCode::Success)
}

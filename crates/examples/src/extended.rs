//! Extended runtime case: objects with state, method calls, floats, a vector
//! and owned strings on top of the basic case.

use core::fmt::Write;

use program::{ExitCode, Float, GuestResult};

use crate::calculator::Calculator;

pub const CALCULATOR_NAME: &str = "NanvixCalc";

#[allow(clippy::approx_constant)]
pub fn run<W: Write>(out: &mut W) -> GuestResult {
    writeln!(out, "Hello from C++ in Nanvix!")?;
    writeln!(out, "Testing C++ features...")?;

    let calc = Calculator::new(CALCULATOR_NAME, out)?;

    let (a, b) = (15, 25);
    let sum = calc.add(a, b);
    writeln!(out, "Addition: {} + {} = {}", a, b, sum)?;

    let (x, y) = (3.14, 2.0);
    let product = calc.multiply(x, y);
    writeln!(
        out,
        "Multiplication: {} * {} = {}",
        Float(x),
        Float(y),
        Float(product)
    )?;

    let numbers: Vec<i32> = vec![1, 2, 3, 4, 5];
    calc.show_results(out, &numbers)?;

    let message = String::from("C++ execution completed successfully!");
    writeln!(out, "{}", message)?;

    Ok(ExitCode::Success)
}

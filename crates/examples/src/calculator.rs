use core::fmt::Write;

use program::GuestError;

/// A named calculator. Announces itself on the console when created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    name: String,
}

impl Calculator {
    pub fn new<W: Write>(name: impl Into<String>, out: &mut W) -> Result<Self, GuestError> {
        let name = name.into();
        writeln!(out, "Calculator '{}' initialized!", name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// Print `numbers` on one line, in order, each followed by a space.
    pub fn show_results<W: Write>(&self, out: &mut W, numbers: &[i32]) -> Result<(), GuestError> {
        write!(out, "Numbers: ")?;
        for number in numbers {
            write!(out, "{} ", number)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

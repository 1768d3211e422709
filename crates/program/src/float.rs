//! Floating point to text.
//!
//! Guests print floats as the shortest decimal that parses back to the same
//! `f64`, so `3.14` prints as `3.14` and `2.0` as `2.0` on every host.
//! Non-finite values print as `NaN`, `inf` and `-inf`.

use core::fmt;

/// Render `value` with the shortest round-trip rule.
pub fn format_f64(value: f64) -> String {
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_owned()
}

/// `Display` adapter applying the shortest round-trip rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Float(pub f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_f64(self.0))
    }
}

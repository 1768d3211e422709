use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

use serde::{Deserialize, Serialize};

/// Text of one print operation, without its line terminator.
///
/// Trailing whitespace is part of the line and is never trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputLine(String);

impl OutputLine {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OutputLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for OutputLine {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for OutputLine {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OutputLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered output of one guest run, in emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transcript {
    lines: Vec<OutputLine>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OutputLine>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split raw console text into lines.
    ///
    /// A final fragment without `\n` still counts as a line. A single `\r`
    /// before the `\n` is dropped so serial console captures compare equal.
    pub fn parse(text: &str) -> Self {
        text.split_terminator('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .map(OutputLine::from)
            .collect()
    }

    pub fn push<S: Into<OutputLine>>(&mut self, line: S) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn iter(&self) -> slice::Iter<'_, OutputLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Byte-exact text the guest wrote, every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.as_str());
            out.push('\n');
        }
        out
    }
}

impl FromIterator<OutputLine> for Transcript {
    fn from_iter<I: IntoIterator<Item = OutputLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a OutputLine;
    type IntoIter = slice::Iter<'a, OutputLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

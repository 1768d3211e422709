//! Output each case must produce, line by line, without terminators.

use types::{CaseId, Transcript};

pub const BASIC_LINES: &[&str] = &[
    "Hello from C in Nanvix!",
    "Testing basic C operations...",
    "Sum: 10 + 20 = 30",
    "Counting from 1 to 5:",
    "Count: 1",
    "Count: 2",
    "Count: 3",
    "Count: 4",
    "Count: 5",
    "C execution completed!",
];

pub const EXTENDED_LINES: &[&str] = &[
    "Hello from C++ in Nanvix!",
    "Testing C++ features...",
    "Calculator 'NanvixCalc' initialized!",
    "Addition: 15 + 25 = 40",
    "Multiplication: 3.14 * 2.0 = 6.28",
    "Numbers: 1 2 3 4 5 ",
    "C++ execution completed successfully!",
];

pub fn expected_lines(case: CaseId) -> &'static [&'static str] {
    match case {
        CaseId::Basic => BASIC_LINES,
        CaseId::Extended => EXTENDED_LINES,
    }
}

pub fn expected_transcript(case: CaseId) -> Transcript {
    Transcript::from_lines(expected_lines(case).iter().copied())
}

/// First line a case prints. Marks the start of a run in a console log.
pub fn greeting(case: CaseId) -> &'static str {
    expected_lines(case)[0]
}

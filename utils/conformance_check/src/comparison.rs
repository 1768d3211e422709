use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use types::Transcript;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub total_lines: usize,
    pub matching_lines: usize,
    pub differences: Vec<LineDifference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDifference {
    /// 1-based position in the transcript
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub difference_type: DifferenceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifferenceType {
    /// Both sides have a line here but the text differs
    DifferentText,
    /// The guest stopped before printing this line
    Missing,
    /// The guest printed more lines than expected
    Unexpected,
}

impl DifferenceType {
    pub fn label(&self) -> &'static str {
        match self {
            DifferenceType::DifferentText => "Different Text",
            DifferenceType::Missing => "Missing Line",
            DifferenceType::Unexpected => "Unexpected Line",
        }
    }
}

impl ComparisonResult {
    pub fn passed(&self) -> bool {
        self.differences.is_empty() && self.matching_lines == self.total_lines
    }

    /// Percentage of positions where both transcripts agree.
    pub fn match_rate(&self) -> f64 {
        if self.total_lines == 0 {
            return 100.0;
        }
        (self.matching_lines as f64 / self.total_lines as f64) * 100.0
    }

    pub fn count_by_type(&self) -> HashMap<DifferenceType, usize> {
        let mut by_type = HashMap::new();
        for diff in &self.differences {
            *by_type.entry(diff.difference_type).or_insert(0) += 1;
        }
        by_type
    }
}

/// Compare two transcripts position by position.
///
/// Order is part of the contract, so a line printed at the wrong position is
/// a difference even if it appears elsewhere in the other transcript.
pub fn compare_transcripts(expected: &Transcript, actual: &Transcript) -> ComparisonResult {
    let expected_lines = expected.lines();
    let actual_lines = actual.lines();
    let total = expected_lines.len().max(actual_lines.len());

    let mut matching = 0;
    let mut differences = Vec::new();

    for index in 0..total {
        let want = expected_lines.get(index);
        let got = actual_lines.get(index);

        let difference_type = match (want, got) {
            (Some(want), Some(got)) if want == got => {
                matching += 1;
                continue;
            }
            (Some(_), Some(_)) => DifferenceType::DifferentText,
            (Some(_), None) => DifferenceType::Missing,
            (None, _) => DifferenceType::Unexpected,
        };

        differences.push(LineDifference {
            line: index + 1,
            expected: want.map(|line| line.to_string()),
            actual: got.map(|line| line.to_string()),
            difference_type,
        });
    }

    ComparisonResult {
        total_lines: total,
        matching_lines: matching,
        differences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn transcript(lines: &[&str]) -> Transcript {
        Transcript::from_lines(lines.iter().copied())
    }

    #[test]
    fn identical_transcripts_pass() {
        let lines = transcript(&["Hello", "Count: 1"]);
        let result = compare_transcripts(&lines, &lines);
        assert!(result.passed());
        assert_eq!(result.matching_lines, 2);
        assert_eq!(result.match_rate(), 100.0);
    }

    #[test]
    fn trailing_space_is_significant() {
        let result = compare_transcripts(
            &transcript(&["Numbers: 1 2 3 4 5 "]),
            &transcript(&["Numbers: 1 2 3 4 5"]),
        );
        assert!(!result.passed());
        assert_eq!(
            result.differences,
            vec![LineDifference {
                line: 1,
                expected: Some("Numbers: 1 2 3 4 5 ".to_string()),
                actual: Some("Numbers: 1 2 3 4 5".to_string()),
                difference_type: DifferenceType::DifferentText,
            }]
        );
    }

    #[test]
    fn short_and_long_runs() {
        let expected = transcript(&["a", "b", "c"]);

        let short = compare_transcripts(&expected, &transcript(&["a"]));
        assert_eq!(short.total_lines, 3);
        assert_eq!(short.count_by_type().get(&DifferenceType::Missing), Some(&2));

        let long = compare_transcripts(&expected, &transcript(&["a", "b", "c", "c"]));
        assert_eq!(long.total_lines, 4);
        assert_eq!(long.differences.len(), 1);
        assert_eq!(long.differences[0].difference_type, DifferenceType::Unexpected);
        assert_eq!(long.differences[0].line, 4);
    }

    #[test]
    fn reordered_lines_do_not_match() {
        let result = compare_transcripts(
            &transcript(&["Count: 1", "Count: 2"]),
            &transcript(&["Count: 2", "Count: 1"]),
        );
        assert_eq!(result.matching_lines, 0);
        assert_eq!(result.match_rate(), 0.0);
    }

    #[test]
    fn empty_transcripts_match() {
        let result = compare_transcripts(&Transcript::new(), &Transcript::new());
        assert!(result.passed());
        assert_eq!(result.match_rate(), 100.0);
    }
}

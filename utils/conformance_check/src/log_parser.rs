use nanvix_examples::expected::greeting;
use regex::Regex;
use serde::{Deserialize, Serialize};
use types::{CaseId, OutputLine, Transcript};

use crate::error::CheckError;

/// Output of one guest run found in a console log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRun {
    pub case: CaseId,
    /// 1-based line of the log where the run's greeting appears
    pub start_line: usize,
    pub transcript: Transcript,
}

/// Split a guest console log into the runs it contains.
///
/// A run starts at a case greeting and lasts until the next greeting or the
/// end of the log. Lines with a bracketed prefix (`[INFO] ...`, `[ 0.001] ...`)
/// come from the kernel or the host and are skipped, as is anything before
/// the first greeting and blank lines closing a run.
pub fn parse_console_log(content: &str) -> Result<Vec<CapturedRun>, CheckError> {
    if content.trim().is_empty() {
        return Err(CheckError::EmptyLog);
    }

    let noise_re = Regex::new(r"^\s*\[[^\]]*\]")?;

    let mut runs = Vec::new();
    let mut current: Option<CapturedRun> = None;

    for (index, line) in Transcript::parse(content).iter().enumerate() {
        if let Some(case) = greeting_case(line) {
            if let Some(run) = current.take() {
                runs.push(finish(run));
            }
            current = Some(CapturedRun {
                case,
                start_line: index + 1,
                transcript: Transcript::from_lines([line.clone()]),
            });
            continue;
        }

        if noise_re.is_match(line.as_str()) {
            continue;
        }

        if let Some(run) = current.as_mut() {
            run.transcript.push(line.clone());
        }
    }

    if let Some(run) = current {
        runs.push(finish(run));
    }

    Ok(runs)
}

fn greeting_case(line: &OutputLine) -> Option<CaseId> {
    CaseId::ALL
        .into_iter()
        .find(|case| line.as_str() == greeting(*case))
}

fn finish(mut run: CapturedRun) -> CapturedRun {
    let mut lines = run.transcript.lines().to_vec();
    while lines.last().is_some_and(|line| line.as_str().is_empty()) {
        lines.pop();
    }
    run.transcript = lines.into_iter().collect();
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanvix_examples::expected::expected_transcript;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_runs_between_kernel_noise() {
        let log = "\
[INFO] booting kernel
Hello from C in Nanvix!\r
Testing basic C operations...\r
[ 0.004512] scheduler tick
Sum: 10 + 20 = 30\r
";
        let runs = parse_console_log(log).unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].case, CaseId::Basic);
        assert_eq!(runs[0].start_line, 2);
        assert_eq!(
            runs[0].transcript,
            Transcript::from_lines([
                "Hello from C in Nanvix!",
                "Testing basic C operations...",
                "Sum: 10 + 20 = 30",
            ])
        );
    }

    #[test]
    fn consecutive_runs_are_split_at_greetings() {
        let mut log = String::from("preamble\n");
        log.push_str(&expected_transcript(CaseId::Extended).render());
        log.push('\n');
        log.push_str(&expected_transcript(CaseId::Basic).render());

        let runs = parse_console_log(&log).unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].case, CaseId::Extended);
        assert_eq!(runs[0].transcript, expected_transcript(CaseId::Extended));
        assert_eq!(runs[1].case, CaseId::Basic);
        assert_eq!(runs[1].start_line, 10);
        assert_eq!(runs[1].transcript, expected_transcript(CaseId::Basic));
    }

    #[test]
    fn log_without_greeting_has_no_runs() {
        let runs = parse_console_log("[d] nothing to see\nplain text\n").unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn empty_log_is_an_error() {
        assert!(matches!(parse_console_log(""), Err(CheckError::EmptyLog)));
        assert!(matches!(parse_console_log(" \n\n"), Err(CheckError::EmptyLog)));
    }
}

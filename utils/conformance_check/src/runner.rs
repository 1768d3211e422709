use core::cell::RefCell;
use core::fmt::Write;
use std::fs::File;
use std::io::Write as IoWrite;
use std::path::Path;
use std::rc::Rc;

use nanvix_examples::expected::expected_transcript;
use nanvix_examples::run_case;
use program::{BufferWriter, ExitCode, entrypoint};
use serde::Serialize;
use tracing::{debug, info, warn};
use types::{CaseId, Transcript};

use crate::comparison::{ComparisonResult, compare_transcripts};
use crate::error::CheckError;
use crate::log_parser::{CapturedRun, parse_console_log};

/// Report sink writing straight into a file created by [`Runner::with_file`].
struct ReportFile(File);

impl Write for ReportFile {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)
    }
}

/// Default report sink: the process stdout.
struct StdoutReport;

impl Write for StdoutReport {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        std::io::stdout()
            .write_all(s.as_bytes())
            .map_err(|_| core::fmt::Error)
    }
}

/// Where the transcript of a report came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunSource {
    InProcess,
    ConsoleLog { start_line: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub case: CaseId,
    pub binary: &'static str,
    pub source: RunSource,
    pub runs: usize,
    /// Only known for in-process runs
    pub exit_code: Option<ExitCode>,
    /// Every run printed byte-identical output
    pub deterministic: bool,
    pub comparison: ComparisonResult,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.exit_code.is_none_or(ExitCode::is_success)
            && self.deterministic
            && self.comparison.passed()
    }
}

/// Runs conformance cases and checks their output, reporting to a
/// configurable writer.
pub struct Runner {
    writer: Rc<RefCell<dyn Write>>,
    verbose: bool,
    repetitions: usize,
    is_simulation: bool, // If true, mismatches are reported but not fatal
}

impl Runner {
    /// Create a new runner with console output (default)
    pub fn new() -> Self {
        Self::with_writer(Rc::new(RefCell::new(StdoutReport)))
    }

    /// Number of times each case is run in-process (at least once)
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions.max(1);
        self
    }

    /// Echo every captured transcript to the writer
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set simulation mode (reports without failing on mismatches)
    pub fn is_simulation(mut self, is_simulation: bool) -> Self {
        self.is_simulation = is_simulation;
        self
    }

    /// Create a runner writing its report to `path`, truncating any
    /// existing file.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self, CheckError> {
        let file = File::create(path)?;
        Ok(Self::with_writer(Rc::new(RefCell::new(ReportFile(file)))))
    }

    /// Create a runner with a custom writer
    pub fn with_writer(writer: Rc<RefCell<dyn Write>>) -> Self {
        Runner {
            writer,
            verbose: false,
            repetitions: 3,
            is_simulation: false,
        }
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Run every case in-process and compare with its expected transcript.
    pub fn execute(&self, cases: &[CaseId]) -> Result<Vec<CaseReport>, CheckError> {
        self.write_header("in-process")?;

        let mut reports = Vec::with_capacity(cases.len());
        for case in cases {
            reports.push(self.run_case(*case)?);
        }

        self.write_footer(&reports)?;
        Ok(reports)
    }

    /// Check the runs recorded in a guest console log.
    ///
    /// Selected cases absent from the log are skipped; a log holding none of
    /// them is an error.
    pub fn verify_log(&self, content: &str, cases: &[CaseId]) -> Result<Vec<CaseReport>, CheckError> {
        let runs = parse_console_log(content)?;
        debug!(runs = runs.len(), "parsed console log");
        self.write_header("console log")?;

        let mut reports = Vec::new();
        for case in cases {
            let case_runs: Vec<&CapturedRun> = runs.iter().filter(|run| run.case == *case).collect();
            let Some(first) = case_runs.first() else {
                warn!(%case, "case not present in console log");
                writeln!(self.writer.borrow_mut(), "Skipping {}: no run in console log", case)?;
                continue;
            };

            let transcripts: Vec<&Transcript> = case_runs.iter().map(|run| &run.transcript).collect();
            let report = CaseReport {
                case: *case,
                binary: case.binary_name(),
                source: RunSource::ConsoleLog {
                    start_line: first.start_line,
                },
                runs: case_runs.len(),
                exit_code: None,
                deterministic: transcripts.windows(2).all(|pair| pair[0] == pair[1]),
                comparison: compare_transcripts(&expected_transcript(*case), &first.transcript),
            };
            self.write_case(&report, &first.transcript)?;
            reports.push(report);
        }

        if reports.is_empty() {
            return Err(CheckError::NoRuns);
        }

        self.write_footer(&reports)?;
        Ok(reports)
    }

    /// Fail unless every report passed. Always succeeds in simulation mode.
    pub fn verdict(&self, reports: &[CaseReport]) -> Result<(), CheckError> {
        let failed: Vec<String> = reports
            .iter()
            .filter(|report| !report.passed())
            .map(|report| report.binary.to_string())
            .collect();

        if failed.is_empty() || self.is_simulation {
            return Ok(());
        }
        Err(CheckError::Failed(failed))
    }

    /// Run a single case `repetitions` times
    fn run_case(&self, case: CaseId) -> Result<CaseReport, CheckError> {
        let mut outputs = Vec::with_capacity(self.repetitions);
        let mut exit_code = ExitCode::Success;

        for run in 1..=self.repetitions {
            let mut console = BufferWriter::new();
            let status = entrypoint::run(&mut console, |out| run_case(case, out));
            debug!(%case, run, ?status, bytes = console.as_str().len(), "guest run finished");
            if !status.is_success() {
                exit_code = status;
            }
            outputs.push(console.into_string());
        }

        let deterministic = outputs.windows(2).all(|pair| pair[0] == pair[1]);
        let actual = outputs
            .first()
            .map(|raw| Transcript::parse(raw))
            .unwrap_or_default();

        let report = CaseReport {
            case,
            binary: case.binary_name(),
            source: RunSource::InProcess,
            runs: outputs.len(),
            exit_code: Some(exit_code),
            deterministic,
            comparison: compare_transcripts(&expected_transcript(case), &actual),
        };
        self.write_case(&report, &actual)?;
        Ok(report)
    }

    fn write_header(&self, mode: &str) -> Result<(), CheckError> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "=== Starting Conformance Run ({}) ===", mode)?;
        writeln!(writer, "Verbose logging: {}", if self.verbose { "enabled" } else { "disabled" })?;
        if self.is_simulation {
            writeln!(writer, "Simulation mode: mismatches are not fatal")?;
        }
        Ok(())
    }

    fn write_case(&self, report: &CaseReport, actual: &Transcript) -> Result<(), CheckError> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "\n############################################")?;
        writeln!(writer, "#### Running case: {} ({}) ####", report.case, report.binary)?;
        writeln!(writer, "############################################")?;
        writeln!(writer, "{}", report.case.description())?;
        writeln!(writer, "Runs: {}, deterministic: {}", report.runs, report.deterministic)?;
        if let Some(code) = report.exit_code {
            writeln!(writer, "Exit code: {}", code.code())?;
        }

        if self.verbose {
            writeln!(writer, "--- Transcript ---")?;
            for line in actual {
                // Quote so trailing spaces stay visible
                writeln!(writer, "  {:?}", line.as_str())?;
            }
            writeln!(writer, "------------------")?;
        }

        let comparison = &report.comparison;
        writeln!(
            writer,
            "Matching lines: {}/{}",
            comparison.matching_lines, comparison.total_lines
        )?;

        if report.passed() {
            info!(case = %report.case, "conformance case passed");
        } else {
            warn!(
                case = %report.case,
                differences = comparison.differences.len(),
                deterministic = report.deterministic,
                "conformance case failed"
            );
        }
        Ok(())
    }

    fn write_footer(&self, reports: &[CaseReport]) -> Result<(), CheckError> {
        let passed = reports.iter().filter(|report| report.passed()).count();
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "\n=== Conformance Run Complete ===")?;
        writeln!(writer, "Total cases: {}, passed: {}", reports.len(), passed)?;
        Ok(())
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use conformance_check::comparison::DifferenceType;
use conformance_check::{CaseReport, DEFAULT_CONSOLE_LOG, RunSource, Runner, select_cases};

/// Default log-level (overridden by RUST_LOG environment variable if set).
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Conformance checker for the Nanvix guest examples
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Case to check: basic, extended, hello-c, hello-cpp or all
    #[arg(short, long, default_value = "all")]
    case: String,

    /// Number of in-process runs per case
    #[arg(short, long, default_value_t = 3)]
    repetitions: usize,

    /// Verify a guest console log captured from a Nanvix run instead of
    /// running the cases in-process. Without a value, reads the default
    /// hyperlight-nanvix guest console log
    #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_CONSOLE_LOG)]
    log_file: Option<PathBuf>,

    /// Write the run report to this file instead of stdout
    #[arg(long)]
    report_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Show only differences (skip details of passing cases)
    #[arg(short, long)]
    diff_only: bool,

    /// Echo transcripts and enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Report mismatches without failing
    #[arg(long)]
    simulation: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    println!("{}", "Nanvix Guest Conformance Check v0.1.0".bold().blue());
    println!("{}", "=====================================".blue());
    println!();

    let cases = select_cases(&args.case)?;
    let runner = match &args.report_file {
        Some(path) => Runner::with_file(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?,
        None => Runner::new(),
    };
    let runner = runner
        .with_repetitions(args.repetitions)
        .with_verbose(args.verbose)
        .is_simulation(args.simulation);

    let reports = match &args.log_file {
        Some(log_file) => {
            if !log_file.exists() {
                anyhow::bail!("Log file does not exist: {:?}", log_file);
            }
            println!("{} {}", "📖".bold(), "Reading guest console log...".cyan());
            let content = fs::read_to_string(log_file).context("Failed to read log file")?;
            runner.verify_log(&content, &cases)?
        }
        None => {
            println!(
                "{} Running {} case(s) {} time(s) each",
                "🔍".bold(),
                cases.len(),
                runner.repetitions()
            );
            runner.execute(&cases)?
        }
    };

    for report in &reports {
        print_case_summary(report, args.diff_only);
    }
    print_overall_summary(&reports);

    if args.format == Format::Json {
        let output_path = report_path(args.log_file.as_deref());
        let json_output = serde_json::to_string_pretty(&reports)?;
        fs::write(&output_path, json_output)
            .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
        println!();
        println!("📝 Results exported to: {}", output_path.display());
    }

    runner.verdict(&reports)?;
    Ok(())
}

fn report_path(log_file: Option<&Path>) -> PathBuf {
    match log_file {
        Some(log_file) => log_file.with_extension("conformance.json"),
        None => PathBuf::from("conformance-report.json"),
    }
}

fn print_case_summary(report: &CaseReport, diff_only: bool) {
    if diff_only && report.passed() {
        return;
    }

    let comparison = &report.comparison;
    println!();
    println!("  {} {}", "Case:".bold(), report.binary.yellow());
    match report.source {
        RunSource::InProcess => println!("    Source: in-process, {} run(s)", report.runs),
        RunSource::ConsoleLog { start_line } => {
            println!("    Source: console log line {}, {} run(s)", start_line, report.runs)
        }
    }
    if let Some(code) = report.exit_code {
        let code_text = code.code().to_string();
        println!(
            "    Exit code: {}",
            if code.is_success() { code_text.green() } else { code_text.red() }
        );
    }
    if !report.deterministic {
        println!("    {}", "Output differs between runs".red());
    }
    println!(
        "    Matching: {} of {} ({}%)",
        comparison.matching_lines.to_string().green(),
        comparison.total_lines,
        comparison.match_rate() as u32
    );

    if !comparison.differences.is_empty() {
        println!(
            "    Differences: {}",
            comparison.differences.len().to_string().red()
        );
        for (diff_type, count) in comparison.count_by_type() {
            println!("      - {}: {}", diff_type.label(), count);
        }

        println!();
        println!("    {}", "First 5 differences:".yellow());
        for (i, diff) in comparison.differences.iter().take(5).enumerate() {
            println!("      {}. Line {} ({})", i + 1, diff.line, diff.difference_type.label());
            if diff.difference_type != DifferenceType::Unexpected {
                println!("         Expected: {:?}", diff.expected.as_deref().unwrap_or(""));
            }
            if diff.difference_type != DifferenceType::Missing {
                println!("         Actual:   {:?}", diff.actual.as_deref().unwrap_or(""));
            }
        }
    }
}

fn print_overall_summary(reports: &[CaseReport]) {
    println!();
    println!("{}", "=====================================".blue());
    println!("{}", "Overall Summary".bold().green());
    println!("{}", "=====================================".blue());

    let mut total_lines = 0;
    let mut total_matching = 0;
    let mut total_differences = 0;

    for report in reports {
        total_lines += report.comparison.total_lines;
        total_matching += report.comparison.matching_lines;
        total_differences += report.comparison.differences.len();

        let status = if report.passed() {
            "✅ PASS".green()
        } else if report.comparison.passed() {
            "⚠️  UNSTABLE".yellow()
        } else {
            "❌ FAIL".red()
        };

        println!(
            "  {} - {}: {:.1}% match",
            status,
            report.binary,
            report.comparison.match_rate()
        );
    }

    println!();
    println!("  {}", "Totals:".bold());
    println!("    Lines checked: {}", total_lines);
    println!("    Matching: {}", total_matching);
    println!("    Differences: {}", total_differences);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_log_file_flag_reads_default_console_log() {
        let args = Args::try_parse_from(["conformance_check", "--log-file"]).unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from(DEFAULT_CONSOLE_LOG)));

        let args = Args::try_parse_from(["conformance_check", "-l", "/var/log/guest.log"]).unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("/var/log/guest.log")));

        let args = Args::try_parse_from(["conformance_check"]).unwrap();
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn report_file_option() {
        let args =
            Args::try_parse_from(["conformance_check", "--report-file", "report.txt"]).unwrap();
        assert_eq!(args.report_file, Some(PathBuf::from("report.txt")));
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn json_report_sits_next_to_log() {
        assert_eq!(
            report_path(Some(Path::new(DEFAULT_CONSOLE_LOG))),
            PathBuf::from("/tmp/hyperlight-nanvix/guest-console.conformance.json")
        );
        assert_eq!(report_path(None), PathBuf::from("conformance-report.json"));
    }
}

//! CLI entry point for aix-check.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use aix_check::checks::CheckId;
use aix_check::expectations::Expectations;
use aix_check::report::run_suite;
use aix_check::ui::colors;
use aix_check::{local_today, COMMENT_DATE_FORMAT, DEFAULT_DOCUMENT};

/// Exit code when at least one check failed
const EXIT_FAILED: i32 = 1;
/// Exit code for configuration errors (matches clap's usage errors)
const EXIT_USAGE: i32 = 2;

#[derive(Parser)]
#[command(name = "aix-check")]
#[command(version)]
#[command(about = "Check the structure of the \"About AIX\" page", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    aix-check                        Check ./index.html\n    aix-check site/index.html --only lang --only title\n    aix-check --list                 Show available checks"
)]
struct Cli {
    /// HTML file to check
    #[arg(default_value = DEFAULT_DOCUMENT)]
    file: PathBuf,
    /// Run only the given check (can be specified multiple times)
    #[arg(long, value_enum, value_name = "CHECK")]
    only: Vec<CheckId>,
    /// Load expected values from a markdown file with YAML frontmatter
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Date expected in the signature comment (defaults to today)
    #[arg(long, value_name = "YYYY.MM.DD", value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Only print failing checks and the summary
    #[arg(long, short)]
    quiet: bool,
    /// List available checks and exit
    #[arg(long)]
    list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, COMMENT_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY.MM.DD: {}", e))
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_FAILED),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            std::process::exit(EXIT_USAGE);
        }
    }
}

/// Returns whether every selected check passed.
fn run(cli: Cli) -> Result<bool> {
    if cli.list {
        cmd_list();
        return Ok(true);
    }

    let expectations = match &cli.config {
        Some(path) => Expectations::load_from(path)
            .with_context(|| format!("Could not load expectations from {}", path.display()))?,
        None => Expectations::default(),
    };

    let selected: Vec<CheckId> = if cli.only.is_empty() {
        CheckId::ALL.to_vec()
    } else {
        cli.only
    };

    let today = cli.date.unwrap_or_else(local_today);
    let report = run_suite(&cli.file, &selected, &expectations, today);

    match cli.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            report.display(cli.quiet);
            report.display_summary();
        }
    }

    Ok(report.is_success())
}

fn cmd_list() {
    for id in CheckId::ALL {
        println!(
            "  {:<12} {}",
            colors::identifier(id.as_str()),
            id.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["aix-check"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("index.html"));
        assert!(cli.only.is_empty());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.date.is_none());
    }

    #[test]
    fn test_cli_only_and_date() {
        let cli = Cli::try_parse_from([
            "aix-check",
            "page.html",
            "--only",
            "h2",
            "--only",
            "comment",
            "--date",
            "2026.02.03",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("page.html"));
        assert_eq!(cli.only, vec![CheckId::H2, CheckId::Comment]);
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 2, 3));
    }

    #[test]
    fn test_cli_rejects_unknown_check() {
        assert!(Cli::try_parse_from(["aix-check", "--only", "footer"]).is_err());
    }

    #[test]
    fn test_parse_date_format() {
        assert!(parse_date("2026.02.03").is_ok());
        assert!(parse_date("2026-02-03").is_err());
        assert!(parse_date("2026.13.01").is_err());
    }
}

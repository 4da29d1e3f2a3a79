//! Running the check suite and presenting its outcome.
//!
//! The document is loaded once per run. When loading fails, every selected
//! check fails with the load error, so a missing file is named once per
//! check just as if each check had tried to open it on its own.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::checks::{run_check, CheckId, CheckOutcome};
use crate::document::Document;
use crate::expectations::Expectations;
use crate::ui::{self, colors, format};
use crate::COMMENT_DATE_FORMAT;

/// Outcome of one check in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub id: CheckId,
    pub passed: bool,
    /// Failure message (None when passed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    fn from_outcome(id: CheckId, outcome: CheckOutcome) -> Self {
        match outcome {
            Ok(()) => Self {
                id,
                passed: true,
                message: None,
            },
            Err(message) => Self {
                id,
                passed: false,
                message: Some(message),
            },
        }
    }
}

/// Result of a whole run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// File that was checked
    pub file: PathBuf,
    /// Date the signature comment was expected to carry
    pub date: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CheckResult>,
}

/// Load `path` and run the `selected` checks against it.
///
/// Checks are reported in their canonical order, each at most once,
/// whatever the order of `selected`.
pub fn run_suite(
    path: &Path,
    selected: &[CheckId],
    expectations: &Expectations,
    today: NaiveDate,
) -> CheckReport {
    let document = Document::load(path);

    let results: Vec<CheckResult> = CheckId::ALL
        .iter()
        .filter(|id| selected.contains(*id))
        .map(|&id| {
            let outcome = match &document {
                Ok(doc) => run_check(id, doc, expectations, today),
                Err(err) => Err(err.to_string()),
            };
            CheckResult::from_outcome(id, outcome)
        })
        .collect();

    let passed = results.iter().filter(|r| r.passed).count();

    CheckReport {
        file: path.to_path_buf(),
        date: today.format(COMMENT_DATE_FORMAT).to_string(),
        total: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    }
}

impl CheckReport {
    /// True when every selected check passed
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    /// Print one line per check. In quiet mode passing checks are omitted.
    pub fn display(&self, quiet: bool) {
        if !quiet {
            println!(
                "{} {}",
                colors::secondary("Checking"),
                colors::identifier(&self.file.display().to_string())
            );
        }

        for result in &self.results {
            if quiet && result.passed {
                continue;
            }

            print!(
                "  {} {}",
                ui::outcome_icon(result.passed),
                colors::identifier(result.id.as_str())
            );
            match &result.message {
                Some(message) => println!(": {}", message),
                None => println!(),
            }
        }
    }

    /// Print the framed summary block.
    pub fn display_summary(&self) {
        println!();
        println!("{}", colors::identifier(&format::rule(60)));

        print!("{} ", ui::outcome_icon(self.is_success()));
        if self.total == 0 {
            println!("no checks selected");
        } else {
            print!("{} total", self.total);
            if self.passed > 0 {
                print!(", {} {}", self.passed, colors::success("passed"));
            }
            if self.failed > 0 {
                print!(", {} {}", self.failed, colors::error("failed"));
            }
            println!();
        }

        println!("{}", colors::identifier(&format::rule(60)));
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize check report")
    }
}

//! # aix-check - structural checks for the "About AIX" page
//!
//! Loads a static HTML document and runs a fixed suite of structural
//! assertions against it: language attribute, browser tab title, headings,
//! paragraph count, bold and emphasized text, and a signature comment that
//! carries today's date.
//!
//! ## Modules
//!
//! - [`document`] - Loading and querying the parsed HTML tree
//! - [`checks`] - The individual checks and their identifiers
//! - [`expectations`] - Expected literal values, optionally loaded from a file
//! - [`report`] - Running the suite and rendering its outcome
//! - [`ui`] - Terminal colors and icons
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use aix_check::checks::CheckId;
//! use aix_check::expectations::Expectations;
//! use aix_check::report::run_suite;
//!
//! let expectations = Expectations::default();
//! let today = chrono::Local::now().date_naive();
//! let report = run_suite(Path::new("index.html"), &CheckId::ALL, &expectations, today);
//!
//! if !report.is_success() {
//!     for result in report.failures() {
//!         println!("{}: {}", result.id, result.message.as_deref().unwrap_or(""));
//!     }
//! }
//! ```

pub mod checks;
pub mod document;
pub mod expectations;
pub mod report;
pub mod ui;

/// File checked when no path is given on the command line.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Date format embedded in the signature comment: `YYYY.MM.DD`
pub const COMMENT_DATE_FORMAT: &str = "%Y.%m.%d";

/// Today's date from the local clock.
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

//! The structural checks run against the page.
//!
//! Each check is a pure function of the parsed [`Document`], the
//! [`Expectations`] and the date used for the signature comment. A check
//! either passes or returns a failure message meant for the student, so the
//! messages stay in Hungarian.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::document::{element_text, Document};
use crate::expectations::Expectations;
use crate::COMMENT_DATE_FORMAT;

/// Outcome of a single check: `Err` carries the failure message.
pub type CheckOutcome = Result<(), String>;

/// Identifier of a check, as accepted by `--only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CheckId {
    /// The document exists and can be loaded
    Exists,
    /// Root `lang` attribute
    Lang,
    /// Browser tab title
    Title,
    /// Single `<h1>` with the expected text
    H1,
    /// Number of `<p>` elements
    Paragraphs,
    /// `<h2>` count and texts
    H2,
    /// Bold text
    Bold,
    /// Every occurrence of the emphasized word is wrapped in `<em>`
    Em,
    /// Signature comment with today's date
    Comment,
}

impl CheckId {
    /// Every check, in the order they are reported.
    pub const ALL: [CheckId; 9] = [
        CheckId::Exists,
        CheckId::Lang,
        CheckId::Title,
        CheckId::H1,
        CheckId::Paragraphs,
        CheckId::H2,
        CheckId::Bold,
        CheckId::Em,
        CheckId::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::Exists => "exists",
            CheckId::Lang => "lang",
            CheckId::Title => "title",
            CheckId::H1 => "h1",
            CheckId::Paragraphs => "paragraphs",
            CheckId::H2 => "h2",
            CheckId::Bold => "bold",
            CheckId::Em => "em",
            CheckId::Comment => "comment",
        }
    }

    /// One-line description for `--list`.
    pub fn description(&self) -> &'static str {
        match self {
            CheckId::Exists => "the HTML file exists and can be read",
            CheckId::Lang => "root element declares the expected language",
            CheckId::Title => "browser tab title",
            CheckId::H1 => "exactly one main heading with the expected text",
            CheckId::Paragraphs => "number of paragraphs",
            CheckId::H2 => "sub-heading count and texts in order",
            CheckId::Bold => "bold text",
            CheckId::Em => "every occurrence of the keyword is emphasized",
            CheckId::Comment => "a comment with a name and today's date",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run the check identified by `id`.
pub fn run_check(
    id: CheckId,
    doc: &Document,
    expectations: &Expectations,
    today: NaiveDate,
) -> CheckOutcome {
    match id {
        // Reaching a loaded document is the whole check
        CheckId::Exists => Ok(()),
        CheckId::Lang => check_language(doc, expectations),
        CheckId::Title => check_title(doc, expectations),
        CheckId::H1 => check_main_heading(doc, expectations),
        CheckId::Paragraphs => check_paragraph_count(doc, expectations),
        CheckId::H2 => check_subheadings(doc, expectations),
        CheckId::Bold => check_bold_text(doc, expectations),
        CheckId::Em => check_emphasis(doc, expectations),
        CheckId::Comment => check_dated_comment(doc, today),
    }
}

pub fn check_language(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    if doc.root_attr("lang") != Some(expectations.lang.as_str()) {
        return Err(language_message(&expectations.lang));
    }
    Ok(())
}

fn language_message(lang: &str) -> String {
    match lang {
        "hu" => "A nyelv beállítása nem magyar.".to_string(),
        other => format!("A nyelv beállítása nem '{}'.", other),
    }
}

pub fn check_title(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    let title = doc
        .first("title")
        .ok_or_else(|| "Nem található <title> elem.".to_string())?;

    if element_text(&title) != expectations.title {
        return Err(format!(
            "A böngészőfülön nem az '{}' felirat jelenik meg.",
            expectations.title
        ));
    }
    Ok(())
}

pub fn check_main_heading(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    let headings = doc.texts("h1");

    match headings.as_slice() {
        [] => Err("Nem található egyes szintű főcím (h1).".to_string()),
        [text] if *text == expectations.main_heading => Ok(()),
        [_] => Err(format!(
            "A főcím tartalma nem '{}'.",
            expectations.main_heading
        )),
        _ => Err("Nem pontosan egy egyes szintű főcím (h1) található.".to_string()),
    }
}

pub fn check_paragraph_count(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    if doc.elements("p").count() != expectations.paragraphs {
        return Err(format!(
            "Nem pontosan {} bekezdés található.",
            expectations.paragraphs
        ));
    }
    Ok(())
}

pub fn check_subheadings(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    let texts = doc.texts("h2");
    let expected = &expectations.subheadings;

    if texts.len() != expected.len() {
        return Err(format!(
            "Nem pontosan {} darab kettes szintű fejezetcím található.",
            expected.len()
        ));
    }

    for (i, (actual, wanted)) in texts.iter().zip(expected).enumerate() {
        if actual != wanted {
            return Err(format!("A {}. alcím szövege nem megfelelő.", i + 1));
        }
    }
    Ok(())
}

pub fn check_bold_text(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    let bold = doc
        .first("b")
        .ok_or_else(|| "Nem található félkövér szöveg.".to_string())?;

    if element_text(&bold) != expectations.bold_text {
        return Err(format!(
            "A félkövér szöveg tartalma nem '{}'.",
            expectations.bold_text
        ));
    }
    Ok(())
}

/// The emphasized word must be wrapped in `<em>` at each of its occurrences
/// inside paragraphs, and `<em>` must not be used for anything else.
pub fn check_emphasis(doc: &Document, expectations: &Expectations) -> CheckOutcome {
    let word = expectations.emphasized.as_str();
    let emphasized = doc.texts("em");

    if emphasized.is_empty() {
        return Err("Nem található kiemelt szöveg.".to_string());
    }

    let occurrences: usize = doc
        .texts("p")
        .iter()
        .map(|text| text.matches(word).count())
        .sum();

    if emphasized.len() != occurrences {
        return Err(format!("Nem az összes {} szó van kiemelve", word));
    }

    if emphasized.iter().any(|text| text != word) {
        return Err(format!("A kiemelt szöveg tartalma nem '{}'.", word));
    }
    Ok(())
}

/// Pattern for the signature comment: at least one character (the author's
/// name), optional whitespace, then the date. Anchored at the start of the
/// text node.
pub fn dated_comment_pattern(date: NaiveDate) -> Result<Regex, regex::Error> {
    let formatted = date.format(COMMENT_DATE_FORMAT).to_string();
    // Dots in the date are literal: 2026x03x14 is not a date
    Regex::new(&format!(r"^.+\s*{}", regex::escape(&formatted)))
}

pub fn check_dated_comment(doc: &Document, today: NaiveDate) -> CheckOutcome {
    let formatted = today.format(COMMENT_DATE_FORMAT).to_string();
    let pattern = dated_comment_pattern(today).map_err(|e| e.to_string())?;

    if doc.find_text_node(|text| pattern.is_match(text)).is_none() {
        return Err(format!(
            "Nem található komment, ami nevet és a mai dátumot ({}) tartalmaz.",
            formatted
        ));
    }
    Ok(())
}

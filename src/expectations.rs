//! Expected literal values for the checks.
//!
//! Defaults describe the "About AIX" exercise page. A markdown file with YAML
//! frontmatter may override any of them:
//!
//! ```text
//! ---
//! title: AIX
//! subheadings: [Egy, Kettő, Három]
//! ---
//!
//! # Notes for this exercise
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Expectations {
    /// Value of the root `lang` attribute
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Browser tab title
    #[serde(default = "default_title")]
    pub title: String,
    /// Text of the single `<h1>`
    #[serde(default = "default_main_heading")]
    pub main_heading: String,
    /// Number of `<p>` elements
    #[serde(default = "default_paragraphs")]
    pub paragraphs: usize,
    /// `<h2>` texts in document order
    #[serde(default = "default_subheadings")]
    pub subheadings: Vec<String>,
    /// Text of the first `<b>`
    #[serde(default = "default_bold_text")]
    pub bold_text: String,
    /// Word that must be wrapped in `<em>` wherever it appears in a paragraph
    #[serde(default = "default_emphasized")]
    pub emphasized: String,
}

fn default_lang() -> String {
    "hu".to_string()
}

fn default_title() -> String {
    "AIX".to_string()
}

fn default_main_heading() -> String {
    "AIX".to_string()
}

fn default_paragraphs() -> usize {
    4
}

fn default_subheadings() -> Vec<String> {
    vec!["Egy".to_string(), "Kettő".to_string(), "Három".to_string()]
}

fn default_bold_text() -> String {
    "Advanced Interactive eXecutive".to_string()
}

fn default_emphasized() -> String {
    "AIX".to_string()
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            title: default_title(),
            main_heading: default_main_heading(),
            paragraphs: default_paragraphs(),
            subheadings: default_subheadings(),
            bold_text: default_bold_text(),
            emphasized: default_emphasized(),
        }
    }
}

impl Expectations {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read expectations from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid expectations file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from expectations")?;

        let expectations: Expectations = if frontmatter.trim().is_empty() {
            Expectations::default()
        } else {
            serde_yaml::from_str(&frontmatter)
                .context("Failed to parse expectations frontmatter")?
        };

        expectations.validate()?;
        Ok(expectations)
    }

    /// Reject values no document could satisfy in a meaningful way.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("lang", &self.lang),
            ("title", &self.title),
            ("main_heading", &self.main_heading),
            ("bold_text", &self.bold_text),
            ("emphasized", &self.emphasized),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                anyhow::bail!("'{}' must not be empty", name);
            }
        }

        if let Some(pos) = self.subheadings.iter().position(|s| s.trim().is_empty()) {
            anyhow::bail!("subheading #{} must not be empty", pos + 1);
        }

        Ok(())
    }
}

/// Split `---` fenced YAML frontmatter from the markdown body.
fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    match rest.find("\n---") {
        Some(end) => (Some(rest[..end].to_string()), rest[end + 4..].trim_start()),
        None => (None, content),
    }
}

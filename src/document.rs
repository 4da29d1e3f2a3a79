//! Loading and querying the parsed HTML document.
//!
//! A [`Document`] is read once from disk and never mutated. Element lookups
//! walk the tree depth-first, so results come back in document order.

use scraper::{ElementRef, Html, Node};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why a document could not be loaded.
///
/// Carries rendered messages rather than the source `io::Error` so the same
/// failure can be reported by every check of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file does not exist
    NotFound(PathBuf),
    /// Any other read failure, including invalid UTF-8
    Read(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => {
                write!(f, "A fájl nem található: {}", path.display())
            }
            LoadError::Read(err) => {
                write!(f, "Hiba történt a fájl betöltése során: {}", err)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// A parsed HTML document.
pub struct Document {
    path: PathBuf,
    html: Html,
}

impl Document {
    /// Read `path` as UTF-8 and parse it.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Read(err.to_string()),
        })?;

        Ok(Self::parse(path, &content))
    }

    /// Parse already loaded markup. `path` is kept for reporting only.
    pub fn parse(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            html: Html::parse_document(content),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attribute of the root `<html>` element.
    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.html.root_element().value().attr(name)
    }

    /// All elements with the given tag name, in document order.
    pub fn elements(&self, tag: &str) -> impl Iterator<Item = ElementRef<'_>> + '_ {
        let tag = tag.to_owned();
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| el.value().name() == tag)
    }

    /// First element with the given tag name.
    pub fn first(&self, tag: &str) -> Option<ElementRef<'_>> {
        self.elements(tag).next()
    }

    /// Text content of every element with the given tag name.
    pub fn texts(&self, tag: &str) -> Vec<String> {
        self.elements(tag).map(|el| element_text(&el)).collect()
    }

    /// Raw text fragments, comments included, in document order.
    pub fn text_nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(|node| match node.value() {
                Node::Text(text) => Some(&**text),
                Node::Comment(comment) => Some(&**comment),
                _ => None,
            })
    }

    /// First text fragment accepted by `predicate`.
    pub fn find_text_node<F>(&self, mut predicate: F) -> Option<&str>
    where
        F: FnMut(&str) -> bool,
    {
        self.text_nodes().find(|&text| predicate(text))
    }
}

/// Concatenated text of all descendants of `el`.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

//! The book catalog: entry records, the normalized-title index, and the
//! JSON loader. Loaded once at startup and immutable afterward.

use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::normalize_title;

/// Errors raised while loading the catalog. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no books")]
    Empty,

    #[error("failed to compile title pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// A catalog field that may be stored as text or as a bare number.
/// Renders without quotes either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
        }
    }
}

/// One book. `title` and `summary` are guaranteed by the catalog source;
/// the remaining fields are optional and render as placeholder text when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub summary: String,
    pub verdict: Option<String>,
    #[serde(rename = "Author")]
    pub author: Option<String>,
    #[serde(rename = "Pages")]
    pub pages: Option<FieldValue>,
    #[serde(rename = "Rating")]
    pub rating: Option<FieldValue>,
}

/// A catalog entry's precomputed matching data. The boundary pattern is
/// `\b<normalized title>\b`, compiled once; entries whose title normalizes
/// to the empty string carry no pattern and never match by containment.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedTitle {
    pub text: String,
    pub boundary: Option<Regex>,
}

/// The loaded catalog plus its normalized-title index, in source order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    titles: Vec<NormalizedTitle>,
}

impl Catalog {
    /// Load a catalog from a JSON array of entries.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&content)?;
        Self::from_entries(entries)
    }

    /// Build the catalog and its title index from already-parsed entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut titles = Vec::with_capacity(entries.len());
        for entry in &entries {
            let text = normalize_title(&entry.title);
            let boundary = if text.is_empty() {
                None
            } else {
                Some(Regex::new(&format!(r"\b{}\b", regex::escape(&text)))?)
            };
            titles.push(NormalizedTitle { text, boundary });
        }
        Ok(Self { entries, titles })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub(crate) fn titles(&self) -> &[NormalizedTitle] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_string(),
            summary: format!("Summary of {}", title),
            verdict: None,
            author: None,
            pages: None,
            rating: None,
        }
    }

    #[test]
    fn test_index_normalizes_titles_in_order() {
        let catalog =
            Catalog::from_entries(vec![entry("The Hunger Games"), entry("Dune")]).expect("catalog");
        let normalized: Vec<&str> = catalog.titles().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(normalized, vec!["hunger games", "dune"]);
        assert!(catalog.titles()[0].boundary.is_some());
    }

    #[test]
    fn test_empty_normalized_title_has_no_pattern() {
        let catalog = Catalog::from_entries(vec![entry("?!"), entry("It")]).expect("catalog");
        assert_eq!(catalog.titles()[0].text, "");
        assert!(catalog.titles()[0].boundary.is_none());
        assert!(catalog.titles()[1].boundary.is_some());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_entries(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_entry_deserializes_with_optional_fields_absent() {
        let json = r#"{"title": "Dune", "summary": "Desert planet."}"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("entry parses");
        assert_eq!(entry.title, "Dune");
        assert!(entry.verdict.is_none());
        assert!(entry.author.is_none());
    }

    #[test]
    fn test_field_value_accepts_text_and_numbers() {
        let json = r#"{
            "title": "Dune",
            "summary": "Desert planet.",
            "Author": "Frank Herbert",
            "Pages": 688,
            "Rating": 4.27
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("entry parses");
        assert_eq!(entry.pages, Some(FieldValue::Integer(688)));
        assert_eq!(entry.rating, Some(FieldValue::Float(4.27)));

        let json = r#"{"title": "It", "summary": "Clown.", "Pages": "1138 pages"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).expect("entry parses");
        assert_eq!(entry.pages, Some(FieldValue::Text("1138 pages".to_string())));
    }

    #[test]
    fn test_field_value_renders_bare() {
        assert_eq!(FieldValue::Integer(688).to_string(), "688");
        assert_eq!(FieldValue::Float(4.27).to_string(), "4.27");
        assert_eq!(FieldValue::Text("688 pages".to_string()).to_string(), "688 pages");
    }
}

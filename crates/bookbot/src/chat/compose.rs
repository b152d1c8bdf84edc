//! Reply formatting. Resolution decides *which* book; this module only
//! renders the answer text, substituting placeholders for absent fields.

use crate::catalog::{CatalogEntry, FieldValue};

pub const DEFAULT_GREETING: &str = "Hello! How can I help you today?";
pub const MISSING_REFERENCE: &str = "Please mention the book title.";
pub const UNHANDLED_INTENT: &str = "Sorry, I didn’t understand that.";

/// Reply for a random catalog pick.
pub fn random_pick(book: &CatalogEntry) -> String {
    format!("📖 Random pick: {} — {}", book.title, book.summary)
}

/// Reply for a detail intent (summary, verdict, author, pages, rating).
pub fn detail(label: &str, book: &CatalogEntry) -> String {
    match label {
        "summary" => format!("📖 {} — {}", book.title, book.summary),
        "verdict" => format!(
            "✅ Verdict on {}: {}",
            book.title,
            book.verdict.as_deref().unwrap_or("No verdict available")
        ),
        "author" => format!(
            "✍️ Author of {} is {}.",
            book.title,
            book.author.as_deref().unwrap_or("Unknown Author")
        ),
        "pages" => format!(
            "📄 {} has {}.",
            book.title,
            field_or(book.pages.as_ref(), "Unknown number of")
        ),
        "rating" => format!(
            "⭐ Rating of {}: {}",
            book.title,
            field_or(book.rating.as_ref(), "No rating available")
        ),
        _ => format!("Sorry, I couldn’t find details for '{}'.", book.title),
    }
}

fn field_or(value: Option<&FieldValue>, fallback: &str) -> String {
    match value {
        Some(v) => v.to_string(),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> CatalogEntry {
        CatalogEntry {
            title: "Dune".to_string(),
            summary: "Desert politics and giant worms.".to_string(),
            verdict: Some("A classic worth the sand.".to_string()),
            author: Some("Frank Herbert".to_string()),
            pages: Some(FieldValue::Integer(688)),
            rating: Some(FieldValue::Float(4.27)),
        }
    }

    fn bare() -> CatalogEntry {
        CatalogEntry {
            title: "It".to_string(),
            summary: "A clown terrorizes Derry.".to_string(),
            verdict: None,
            author: None,
            pages: None,
            rating: None,
        }
    }

    #[test]
    fn test_detail_formats() {
        let book = dune();
        assert_eq!(
            detail("summary", &book),
            "📖 Dune — Desert politics and giant worms."
        );
        assert_eq!(detail("verdict", &book), "✅ Verdict on Dune: A classic worth the sand.");
        assert_eq!(detail("author", &book), "✍️ Author of Dune is Frank Herbert.");
        assert_eq!(detail("pages", &book), "📄 Dune has 688.");
        assert_eq!(detail("rating", &book), "⭐ Rating of Dune: 4.27");
    }

    #[test]
    fn test_placeholders_for_absent_fields() {
        let book = bare();
        assert_eq!(detail("verdict", &book), "✅ Verdict on It: No verdict available");
        assert_eq!(detail("author", &book), "✍️ Author of It is Unknown Author.");
        assert_eq!(detail("pages", &book), "📄 It has Unknown number of.");
        assert_eq!(detail("rating", &book), "⭐ Rating of It: No rating available");
    }

    #[test]
    fn test_unknown_detail_label_falls_back() {
        assert_eq!(
            detail("mood", &bare()),
            "Sorry, I couldn’t find details for 'It'."
        );
    }

    #[test]
    fn test_random_pick_format() {
        assert_eq!(
            random_pick(&bare()),
            "📖 Random pick: It — A clown terrorizes Derry."
        );
    }
}

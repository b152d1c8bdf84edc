//! Conversation state and the reply engine.

pub mod compose;
pub mod engine;

pub use engine::ChatEngine;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::catalog::CatalogEntry;

/// One conversation's context: the most recently discussed book.
///
/// Reads and writes go through a lock; the last writer wins, which is the
/// documented behavior when several callers share one session.
#[derive(Debug)]
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    last_book: Mutex<Option<CatalogEntry>>,
}

impl ChatSession {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            last_book: Mutex::new(None),
        };
        tracing::debug!("💬 Session {} started at {}", session.id, session.started_at);
        session
    }

    /// The remembered book, if any. A failed resolution never clears it.
    pub fn last_book(&self) -> Option<CatalogEntry> {
        self.last_book.lock().clone()
    }

    /// Overwrite the remembered book.
    pub fn remember(&self, book: CatalogEntry) {
        *self.last_book.lock() = Some(book);
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> CatalogEntry {
        CatalogEntry {
            title: title.to_string(),
            summary: String::new(),
            verdict: None,
            author: None,
            pages: None,
            rating: None,
        }
    }

    #[test]
    fn test_session_starts_empty() {
        let session = ChatSession::new();
        assert!(session.last_book().is_none());
    }

    #[test]
    fn test_remember_overwrites() {
        let session = ChatSession::new();
        session.remember(entry("Dune"));
        session.remember(entry("It"));
        assert_eq!(session.last_book().expect("book remembered").title, "It");
    }
}

//! Book-reference resolution.
//!
//! Given a noisy user message, recover which catalog entry it refers to.
//! Tiers run in strict precedence order and the first success wins:
//! word-boundary containment (longest title wins), exact equality against
//! normalized titles, fuzzy similarity at a fixed threshold, and the same
//! fuzzy pass with any leading article dropped from the message.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry};
use crate::normalize::{normalize_text, strip_helper_phrases, strip_leading_article};

/// Minimum similarity for a fuzzy match, on a 0-1 scale. Matches below
/// this score are rejected outright.
pub const FUZZY_THRESHOLD: f64 = 0.73;

#[derive(Debug, Clone)]
pub struct BookResolver {
    catalog: Arc<Catalog>,
}

impl BookResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Strip helper phrases from the raw message, then resolve what is left.
    pub fn extract_from_input(&self, raw: &str) -> Option<&CatalogEntry> {
        let cleaned = strip_helper_phrases(raw);
        self.resolve(&cleaned)
    }

    /// Find the catalog entry a message refers to, or `None`.
    pub fn resolve(&self, message: &str) -> Option<&CatalogEntry> {
        // 1. Empty guard
        let msg = normalize_text(message);
        if msg.is_empty() {
            return None;
        }

        // 2. Word-boundary containment of a known title inside the message.
        //    Longest normalized title wins, measured in characters; equal
        //    lengths keep catalog order.
        let mut best: Option<(usize, usize)> = None;
        for (idx, title) in self.catalog.titles().iter().enumerate() {
            let Some(re) = &title.boundary else { continue };
            if !re.is_match(&msg) {
                continue;
            }
            let len = title.text.chars().count();
            if best.map_or(true, |(best_len, _)| len > best_len) {
                best = Some((len, idx));
            }
        }
        if let Some((_, idx)) = best {
            return self.catalog.entries().get(idx);
        }

        // 3. Exact equality against normalized titles, in catalog order
        for (idx, title) in self.catalog.titles().iter().enumerate() {
            if msg == title.text {
                return self.catalog.entries().get(idx);
            }
        }

        // 4. Fuzzy match on the message as given
        if let Some(idx) = self.fuzzy_match(&msg) {
            return self.catalog.entries().get(idx);
        }

        // 5. Fuzzy match again with any leading article dropped
        let stripped = strip_leading_article(&msg);
        if stripped != msg {
            if let Some(idx) = self.fuzzy_match(stripped) {
                return self.catalog.entries().get(idx);
            }
        }

        None
    }

    /// Best similarity across all normalized titles, accepted only at or
    /// above [`FUZZY_THRESHOLD`]. Score ties keep the first catalog entry.
    fn fuzzy_match(&self, msg: &str) -> Option<usize> {
        let mut best: Option<(f64, usize)> = None;
        for (idx, title) in self.catalog.titles().iter().enumerate() {
            let score = strsim::normalized_levenshtein(msg, &title.text);
            if best.map_or(true, |(s, _)| score > s) {
                best = Some((score, idx));
            }
        }
        best.and_then(|(score, idx)| (score >= FUZZY_THRESHOLD).then_some(idx))
    }
}

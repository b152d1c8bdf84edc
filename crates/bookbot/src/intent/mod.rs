//! Intent classification.
//!
//! The engine only depends on the [`IntentClassifier`] trait; the shipped
//! implementation is a small Naive Bayes model in [`bayes`], trained at
//! startup from a CSV of labeled example patterns.

pub mod bayes;

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

pub use bayes::BayesClassifier;

/// Maps a raw user message to an intent label such as "greeting" or
/// "summary". Deterministic for a fitted model: same input, same label.
pub trait IntentClassifier: Send + Sync {
    fn predict(&self, text: &str) -> String;
}

/// One labeled training row. The `response` column is only meaningful for
/// the greeting intent, where it supplies canned replies.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingExample {
    pub intent: String,
    pub pattern: String,
    pub response: Option<String>,
}

/// The full labeled dataset, as loaded from `intents.csv`.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub examples: Vec<TrainingExample>,
}

impl TrainingSet {
    /// Load training rows from a CSV file with an `intent,pattern,response`
    /// header.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let mut examples = Vec::new();
        for row in reader.deserialize() {
            let example: TrainingExample = row?;
            examples.push(example);
        }
        if examples.is_empty() {
            anyhow::bail!("training set has no rows");
        }
        Ok(Self { examples })
    }

    /// All non-empty responses recorded for one intent, in row order.
    pub fn responses_for(&self, intent: &str) -> Vec<String> {
        self.examples
            .iter()
            .filter(|e| e.intent == intent)
            .filter_map(|e| e.response.clone())
            .filter(|r| !r.is_empty())
            .collect()
    }
}

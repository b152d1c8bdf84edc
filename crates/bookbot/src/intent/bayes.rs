//! Multinomial Naive Bayes over bag-of-words token counts.
//!
//! Trained once at startup, immutable afterward. Scores are computed in
//! log space with Laplace smoothing; prediction is the argmax class.

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::intent::{IntentClassifier, TrainingSet};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token regex is valid"));

#[derive(Debug, Clone)]
pub struct BayesClassifier {
    /// Labels in sorted order so argmax ties always break the same way.
    classes: Vec<String>,
    vocabulary: HashMap<String, usize>,
    class_log_prior: Vec<f64>,
    /// Laplace-smoothed log likelihoods, indexed [class][token slot].
    token_log_likelihood: Vec<Vec<f64>>,
}

impl BayesClassifier {
    /// Fit the model on the labeled example patterns.
    pub fn train(training: &TrainingSet) -> Result<Self> {
        let mut classes: Vec<String> =
            training.examples.iter().map(|e| e.intent.clone()).collect();
        classes.sort();
        classes.dedup();
        if classes.is_empty() {
            anyhow::bail!("cannot train on an empty training set");
        }

        let class_of: HashMap<&str, usize> = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut token_counts: Vec<HashMap<usize, u64>> = vec![HashMap::new(); classes.len()];
        let mut doc_counts = vec![0u64; classes.len()];
        for example in &training.examples {
            let Some(&class) = class_of.get(example.intent.as_str()) else { continue };
            doc_counts[class] += 1;
            for token in tokenize(&example.pattern) {
                let next = vocabulary.len();
                let slot = *vocabulary.entry(token).or_insert(next);
                *token_counts[class].entry(slot).or_insert(0) += 1;
            }
        }

        let total_docs: u64 = doc_counts.iter().sum();
        let class_log_prior = doc_counts
            .iter()
            .map(|&n| (n as f64 / total_docs as f64).ln())
            .collect();

        // Laplace smoothing: one phantom occurrence of every token per class
        let vocab_len = vocabulary.len();
        let token_log_likelihood = token_counts
            .iter()
            .map(|counts| {
                let class_total: u64 = counts.values().sum();
                let denominator = (class_total + vocab_len as u64) as f64;
                (0..vocab_len)
                    .map(|slot| {
                        let count = counts.get(&slot).copied().unwrap_or(0);
                        ((count + 1) as f64 / denominator).ln()
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            classes,
            vocabulary,
            class_log_prior,
            token_log_likelihood,
        })
    }
}

impl IntentClassifier for BayesClassifier {
    fn predict(&self, text: &str) -> String {
        let tokens = tokenize(text);
        let mut best_class = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, prior) in self.class_log_prior.iter().enumerate() {
            let mut score = *prior;
            for token in &tokens {
                // tokens outside the vocabulary are ignored
                if let Some(&slot) = self.vocabulary.get(token.as_str()) {
                    score += self.token_log_likelihood[class][slot];
                }
            }
            // strictly greater keeps the alphabetically-first class on ties
            if score > best_score {
                best_score = score;
                best_class = class;
            }
        }
        self.classes.get(best_class).cloned().unwrap_or_default()
    }
}

/// Lowercased runs of two or more word characters; single-character tokens
/// are dropped.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

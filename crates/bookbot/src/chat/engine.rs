//! The reply engine: classify the message, route to a handler, resolve the
//! book reference with the session's memory as fallback, format the reply.

use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::catalog::Catalog;
use crate::chat::{compose, ChatSession};
use crate::config::BotConfig;
use crate::intent::{BayesClassifier, IntentClassifier, TrainingSet};
use crate::resolver::BookResolver;

pub struct ChatEngine {
    catalog: Arc<Catalog>,
    resolver: BookResolver,
    classifier: Box<dyn IntentClassifier>,
    greetings: Vec<String>,
    rng: Mutex<StdRng>,
}

impl ChatEngine {
    pub fn new(
        catalog: Arc<Catalog>,
        classifier: Box<dyn IntentClassifier>,
        greetings: Vec<String>,
    ) -> Self {
        Self {
            resolver: BookResolver::new(Arc::clone(&catalog)),
            catalog,
            classifier,
            greetings,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fix the random source so sampled replies (greeting, random pick)
    /// are repeatable.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Load the catalog and training data, fit the classifier, and build
    /// the engine. Any failure here is fatal to startup.
    pub fn from_config(config: &BotConfig) -> Result<Self> {
        let catalog = Catalog::from_file(&config.catalog_path)?;
        tracing::info!(
            "📚 Loaded {} books from {}",
            catalog.len(),
            config.catalog_path.display()
        );

        let training = TrainingSet::from_csv(&config.intents_path)?;
        let classifier = BayesClassifier::train(&training)?;
        tracing::info!(
            "🎯 Trained intent classifier on {} patterns from {}",
            training.examples.len(),
            config.intents_path.display()
        );

        let greetings = training.responses_for("greeting");
        Ok(Self::new(Arc::new(catalog), Box::new(classifier), greetings))
    }

    /// Produce the reply to one message within a session.
    pub fn respond(&self, session: &ChatSession, message: &str) -> String {
        // 1. Classify the message
        let label = self.classifier.predict(message);
        tracing::debug!("🎯 Intent '{}' for session {}", label, session.id);

        // 2. Route to the handler for that intent
        match label.as_str() {
            "greeting" => self.greeting_reply(),
            "random_book" => self.random_pick_reply(session),
            "summary" | "verdict" | "author" | "pages" | "rating" => {
                self.detail_reply(session, &label, message)
            }
            _ => compose::UNHANDLED_INTENT.to_string(),
        }
    }

    fn greeting_reply(&self) -> String {
        let mut rng = self.rng.lock();
        match self.greetings.choose(&mut *rng) {
            Some(reply) => reply.clone(),
            None => compose::DEFAULT_GREETING.to_string(),
        }
    }

    fn random_pick_reply(&self, session: &ChatSession) -> String {
        let mut rng = self.rng.lock();
        let Some(book) = self.catalog.entries().choose(&mut *rng) else {
            return compose::UNHANDLED_INTENT.to_string();
        };
        // remember the pick so follow-up questions have context
        session.remember(book.clone());
        compose::random_pick(book)
    }

    fn detail_reply(&self, session: &ChatSession, label: &str, message: &str) -> String {
        // Resolve from the current message; fall back to the remembered book
        let book = match self.resolver.extract_from_input(message) {
            Some(entry) => {
                session.remember(entry.clone());
                Some(entry.clone())
            }
            None => session.last_book(),
        };

        let Some(book) = book else {
            return compose::MISSING_REFERENCE.to_string();
        };

        tracing::debug!("📚 Matched book: {:?}", book);
        compose::detail(label, &book)
    }
}

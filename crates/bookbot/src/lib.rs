//! Conversational front-end over a fixed book catalog.
//!
//! A message comes in, the intent classifier picks a coarse category, and
//! the resolver works out which catalog entry the user meant, falling back
//! to the last discussed book for follow-up questions.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod intent;
pub mod normalize;
pub mod resolver;

// Re-export primary types for convenience
pub use catalog::{Catalog, CatalogEntry, CatalogError, FieldValue};
pub use chat::{ChatEngine, ChatSession};
pub use config::{BotConfig, ServerConfig};
pub use intent::{BayesClassifier, IntentClassifier, TrainingExample, TrainingSet};
pub use resolver::{BookResolver, FUZZY_THRESHOLD};

// Re-export common types
pub use anyhow::{Error, Result};
pub use uuid::Uuid;

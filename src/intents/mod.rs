//! Intent dispatch.
//!
//! The conversational platform classifies each utterance into an intent and
//! names it by display name. [`IntentRegistry`] maps those names to handler
//! functions. The standard registry is built once, on first use, and is
//! read-only afterwards.

mod handlers;


use crate::engine::Trace;
use crate::{Error, KnowledgeBase, Query, Reply, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Intent display names understood by the standard registry.
pub mod names {
    pub const WELCOME: &str = "Default Welcome Intent";
    pub const FALLBACK: &str = "Default Fallback Intent";
    pub const AUTHOR_RECOMMENDATION: &str = "AuthorBasedRecommendationIntent";
    pub const BOOK_INFORMATION: &str = "BookInformationIntent";
    pub const GENRE_RECOMMENDATION: &str = "GenreBasedRecommendationIntent";
    pub const MULTI_CRITERIA_RECOMMENDATION: &str = "MultiCriteriaRecommendationIntent";
    pub const SIMILAR_BOOK_RECOMMENDATION: &str = "SimilarBookRecommendationIntent";
    pub const TOP_RATED_BOOKS: &str = "TopRatedBooksIntent";
    pub const GOODBYE: &str = "Goodbye";
}

/// A handler turns one query into a reply, recording its lookups and the
/// selected rule into the trace.
pub type Handler = fn(&Query, &KnowledgeBase, &mut Trace) -> Reply;

static STANDARD: Lazy<IntentRegistry> = Lazy::new(IntentRegistry::standard);

/// Intent name → handler table.
#[derive(Clone, Default)]
pub struct IntentRegistry {
    handlers: HashMap<&'static str, Handler>,
}

impl std::fmt::Debug for IntentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRegistry").field("intents", &self.intents()).finish()
    }
}

impl IntentRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry with every built-in intent.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(names::WELCOME, handlers::welcome);
        registry.register(names::FALLBACK, handlers::fallback);
        registry.register(names::AUTHOR_RECOMMENDATION, handlers::author_recommendation);
        registry.register(names::BOOK_INFORMATION, handlers::book_information);
        registry.register(names::GENRE_RECOMMENDATION, handlers::genre_recommendation);
        registry.register(names::MULTI_CRITERIA_RECOMMENDATION, handlers::multi_criteria_recommendation);
        registry.register(names::SIMILAR_BOOK_RECOMMENDATION, handlers::similar_book_recommendation);
        registry.register(names::TOP_RATED_BOOKS, handlers::top_rated_books);
        registry.register(names::GOODBYE, handlers::goodbye);
        registry
    }

    /// The shared standard registry.
    pub fn global() -> &'static IntentRegistry {
        &STANDARD
    }

    /// Register `handler` for `intent`, replacing any previous handler.
    pub fn register(&mut self, intent: &'static str, handler: Handler) {
        self.handlers.insert(intent, handler);
    }

    pub fn get(&self, intent: &str) -> Option<Handler> {
        self.handlers.get(intent).copied()
    }

    /// Registered intent names, sorted.
    pub fn intents(&self) -> Vec<&'static str> {
        let mut intents: Vec<&'static str> = self.handlers.keys().copied().collect();
        intents.sort_unstable();
        intents
    }

    /// Run the handler registered for `intent`.
    pub fn dispatch(&self, intent: &str, query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Result<Reply> {
        let Some(handler) = self.get(intent) else {
            tracing::warn!(intent, "no handler registered for intent");
            return Err(Error::UnknownIntent(intent.to_string()));
        };

        tracing::debug!(intent, text = %query.text, "dispatching intent");
        Ok(handler(query, kb, trace))
    }
}

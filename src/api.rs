use crate::engine::{self, Lookup, MatchResult, ResponseList, Trace};
use crate::{BookRecord, IntentRegistry, KnowledgeBase, Query, Reply, Result, Table};
use std::time::{Duration, Instant};

/// Extra details returned by [`respond_verbose_with`].
#[derive(Debug, Clone)]
pub struct ReplyDetails {
    /// Intent the query was dispatched to.
    pub intent: String,
    /// Lookups performed and the selection rule that fired.
    pub trace: Trace,
    /// Time spent in the handler.
    pub elapsed: Duration,
}

/// Result from [`respond_verbose_with`].
#[derive(Debug, Clone)]
pub struct ReplyVerbose {
    pub reply: Reply,
    pub details: ReplyDetails,
}

/// Answer `query` for `intent` using the built-in knowledge base.
///
/// # Example
/// ```
/// use libris::{Param, Query, intent_names, respond};
///
/// let query = Query::new("who wrote 1984").with(Param::BookInfo, "1984");
/// let reply = respond(intent_names::BOOK_INFORMATION, &query).unwrap();
/// assert_eq!(reply.messages[0], "1984 was written by George Orwell.");
/// ```
pub fn respond(intent: &str, query: &Query) -> Result<Reply> {
    respond_with(intent, query, KnowledgeBase::builtin())
}

/// Answer `query` for `intent` against `kb`.
pub fn respond_with(intent: &str, query: &Query, kb: &KnowledgeBase) -> Result<Reply> {
    IntentRegistry::global().dispatch(intent, query, kb, &mut Trace::new())
}

/// Like [`respond_with`], but also returns the lookup trace and timing.
pub fn respond_verbose_with(intent: &str, query: &Query, kb: &KnowledgeBase) -> Result<ReplyVerbose> {
    let start = Instant::now();
    let mut trace = Trace::new();
    let reply = IntentRegistry::global().dispatch(intent, query, kb, &mut trace)?;

    Ok(ReplyVerbose {
        reply,
        details: ReplyDetails { intent: intent.to_string(), trace, elapsed: start.elapsed() },
    })
}

/// Case-fold `s` and strip punctuation; see [`engine::normalize`].
pub fn normalize(s: &str) -> String {
    engine::normalize(s)
}

/// Fuzzy-resolve `input` against `table`.
///
/// Blank input resolves to the longest key; guard against it first.
pub fn resolve<'a, T>(input: &str, table: &'a Table<T>) -> MatchResult<'a, T> {
    engine::resolve(input, table)
}

/// Direct lookup with fuzzy fallback.
pub fn lookup<'a, T>(input: &str, table: &'a Table<T>) -> Lookup<'a, T> {
    engine::lookup(input, table)
}

/// Render the book-information reply for `record` given the raw query.
///
/// # Example
/// ```
/// use libris::{KnowledgeBase, select_book_info_response};
///
/// let record = KnowledgeBase::builtin().book_details.get("1984").unwrap();
/// assert_eq!(select_book_info_response(record, "who published 1984"), "1984 was published in 1949.");
/// ```
pub fn select_book_info_response(record: &BookRecord, raw_query: &str) -> String {
    engine::select_book_info(record, raw_query).render()
}

/// Apply the multi-criteria decision table against the built-in knowledge
/// base.
pub fn select_multi_criteria(genre: Option<&str>, length: Option<&str>, rated: Option<&str>) -> ResponseList {
    engine::select_multi_criteria(KnowledgeBase::builtin(), genre, length, rated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CriteriaSource, LookupPath, Param, intent_names};

    #[test]
    fn respond_returns_messages_in_order() {
        let query = Query::new("what is vampire academy").with(Param::BookInfo, "vampire academy");
        let reply = respond(intent_names::BOOK_INFORMATION, &query).unwrap();
        assert_eq!(reply.messages.len(), 2);
        assert!(reply.messages[0].starts_with("Vampire Academy: Rose Hathaway"));
        assert_eq!(reply.messages[1], "Is there anything else you'd like to know?");
    }

    #[test]
    fn respond_verbose_includes_trace() {
        let query = Query::new("similar to hunger games").with(Param::BookTitle, "hunger games");
        let res = respond_verbose_with(intent_names::SIMILAR_BOOK_RECOMMENDATION, &query, KnowledgeBase::builtin())
            .unwrap();

        assert_eq!(res.details.intent, "SimilarBookRecommendationIntent");
        assert_eq!(res.details.trace.rule, Some("similar books"));
        let lookup = &res.details.trace.lookups[0];
        assert_eq!(lookup.table, "similar_books");
        assert_eq!(lookup.path, LookupPath::Fuzzy);
        assert_eq!(lookup.key.as_deref(), Some("the hunger games"));
        assert_eq!(lookup.candidates, ["the hunger games"]);
    }

    #[test]
    fn respond_with_uses_the_given_knowledge_base() {
        let kb = KnowledgeBase::from_json_str(r#"{ "author_recommendations": { "ursula k le guin": ["Earthsea"] } }"#)
            .unwrap();
        let query = Query::new("").with(Param::Author, "Le Guin");
        let reply = respond_with(intent_names::AUTHOR_RECOMMENDATION, &query, &kb).unwrap();
        assert_eq!(reply.messages[0], "Here are some recommended books by ursula k le guin:\n• Earthsea");
    }

    #[test]
    fn select_multi_criteria_defaults_to_builtin_tables() {
        let list = select_multi_criteria(Some("fantasy"), Some(""), Some(""));
        assert_eq!(list.source, CriteriaSource::GenreRecommendations);
    }

    #[test]
    fn public_resolve_and_lookup_agree() {
        let books = &KnowledgeBase::builtin().book_details;
        assert_eq!(resolve("gatsby", books).key(), Some("the great gatsby"));
        assert_eq!(lookup("gatsby", books).result.key(), Some("the great gatsby"));
        assert_eq!(normalize("Gatsby!"), "gatsby");
    }
}

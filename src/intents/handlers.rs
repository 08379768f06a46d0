//! Intent handlers.
//!
//! Every handler follows the same shape:
//!
//! ```text
//! read params (lowercase + trim)
//!   ├─ blank required param ─▶ clarifying question (nothing else)
//!   └─ lookup / select ─▶ composed message ─▶ closing prompt
//! ```
//!
//! Entity parameters (author, titles) go through `lookup`, which falls back
//! to fuzzy resolution. Genres are matched exactly.

use crate::engine::{MatchResult, Trace, compose, lookup, select_book_info, select_multi_criteria};
use crate::{KnowledgeBase, Param, Query, Reply};

pub(super) fn welcome(_query: &Query, _kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    trace.set_rule("welcome");
    Reply::single(compose::WELCOME)
}

pub(super) fn fallback(_query: &Query, _kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    trace.set_rule("fallback");
    Reply::single(compose::FALLBACK)
}

pub(super) fn goodbye(_query: &Query, _kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    trace.set_rule("goodbye");
    Reply::single(compose::GOODBYE)
}

pub(super) fn author_recommendation(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let author = query.params.value(Param::Author);
    if author.is_empty() {
        trace.set_rule("clarify author");
        return Reply::single(compose::ASK_AUTHOR);
    }

    let table = &kb.author_recommendations;
    let found = lookup(&author, table);
    trace.record_lookup("author_recommendations", &author, table, &found);

    let message = match found.result {
        MatchResult::Resolved { key, payload } => {
            trace.set_rule("author recommendations");
            compose::author_recommendations(key, payload)
        }
        MatchResult::Unresolved => {
            trace.set_rule("unknown author");
            compose::unknown_author(&author)
        }
    };

    Reply::single(message).closed()
}

pub(super) fn book_information(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let book = query.params.value(Param::BookInfo);
    if book.is_empty() {
        trace.set_rule("clarify book");
        return Reply::single(compose::ASK_BOOK_INFO);
    }

    let table = &kb.book_details;
    let found = lookup(&book, table);
    trace.record_lookup("book_details", &book, table, &found);

    let Some(record) = found.result.payload() else {
        trace.set_rule("unknown book");
        return Reply::single(compose::unknown_book(&book)).closed();
    };

    let directive = select_book_info(record, &query.text);
    trace.set_rule(directive.rule_name());
    Reply::single(directive.render()).closed()
}

pub(super) fn genre_recommendation(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let genre = query.params.value(Param::Genre);
    if genre.is_empty() {
        trace.set_rule("clarify genre");
        return Reply::single(compose::ASK_GENRE);
    }

    let found = kb.genre_recommendations.get(&genre);
    trace.record_exact("genre_recommendations", &genre, found.is_some());

    let message = match found {
        Some(titles) => {
            trace.set_rule("genre recommendations");
            compose::genre_recommendations(&genre, titles)
        }
        None => {
            trace.set_rule("unknown genre");
            compose::unknown_genre(&genre)
        }
    };

    Reply::single(message).closed()
}

pub(super) fn multi_criteria_recommendation(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let genre = query.params.value(Param::Genre);
    let length = query.params.value(Param::Length);
    let rated = query.params.value(Param::Rated);

    if genre.is_empty() && length.is_empty() && rated.is_empty() {
        trace.set_rule("clarify criteria");
        return Reply::single(compose::ASK_CRITERIA);
    }

    let list = select_multi_criteria(kb, Some(&genre), Some(&length), Some(&rated));
    trace.set_rule(list.source.as_str());

    let message = if list.items.is_empty() {
        compose::NO_CRITERIA_MATCHES.to_string()
    } else {
        compose::criteria_suggestions(&list.items)
    };

    Reply::single(message).closed()
}

pub(super) fn similar_book_recommendation(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let title = query.params.value(Param::BookTitle);
    if title.is_empty() {
        trace.set_rule("clarify similar");
        return Reply::single(compose::ASK_SIMILAR);
    }

    let table = &kb.similar_books;
    let found = lookup(&title, table);
    trace.record_lookup("similar_books", &title, table, &found);

    let message = match found.result {
        MatchResult::Resolved { key, payload } => {
            trace.set_rule("similar books");
            compose::similar_books(key, payload)
        }
        MatchResult::Unresolved => {
            trace.set_rule("unknown similar");
            compose::unknown_similar(&title)
        }
    };

    Reply::single(message).closed()
}

pub(super) fn top_rated_books(query: &Query, kb: &KnowledgeBase, trace: &mut Trace) -> Reply {
    let genre = query.params.value(Param::Genre);
    if genre.is_empty() {
        trace.set_rule("top rated general");
        return Reply::single(compose::top_rated_general(&kb.top_rated_general)).closed();
    }

    let found = kb.top_rated_by_genre.get(&genre);
    trace.record_exact("top_rated_by_genre", &genre, found.is_some());

    let message = match found {
        Some(titles) => {
            trace.set_rule("top rated genre");
            compose::top_rated_genre(&genre, titles)
        }
        None => {
            trace.set_rule("unknown top rated genre");
            compose::unknown_top_rated(&genre)
        }
    };

    Reply::single(message).closed()
}

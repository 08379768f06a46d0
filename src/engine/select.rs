//! Response selection.
//!
//! Two decision procedures live here:
//!
//! - [`select_book_info`]: an ordered keyword chain over the raw query text.
//!   The first rule that matches wins.
//! - [`select_multi_criteria`]: a fixed decision table over the genre, length
//!   and rating filters.
//!
//! Book-info chain, in evaluation order:
//!
//! ```text
//! 1. "published"                                  -> publication year
//! 2. "page" | "pages"                             -> page count
//! 3. "who wrote" | "author"                       -> authorship
//! 4. "introduce" | "i want to know"
//!    | ("tell me about" && <title>)               -> full profile
//! 5. "about" | "what is" | "tell me"              -> summary
//! 6. (nothing matched)                            -> summary
//! ```
//!
//! Rule 4 tests for the record's display title (e.g. "The Lord of the Rings"),
//! not the key the user's input resolved through.

use super::compose;
use super::signals::{CriteriaMask, QuerySignals};
use crate::{BookRecord, KnowledgeBase, Table, TitleList};

/// Which summary rule produced a [`ResponseDirective::Summary`]. Both render
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryRule {
    /// Rule 5: the query asked "about"/"what is"/"tell me".
    Keyword,
    /// Rule 6: no keyword matched.
    Default,
}

/// The template and record chosen for a book-information reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseDirective<'a> {
    PublicationYear(&'a BookRecord),
    PageCount(&'a BookRecord),
    Authorship(&'a BookRecord),
    FullProfile(&'a BookRecord),
    Summary(&'a BookRecord, SummaryRule),
}

impl<'a> ResponseDirective<'a> {
    pub fn record(&self) -> &'a BookRecord {
        match *self {
            ResponseDirective::PublicationYear(r)
            | ResponseDirective::PageCount(r)
            | ResponseDirective::Authorship(r)
            | ResponseDirective::FullProfile(r)
            | ResponseDirective::Summary(r, _) => r,
        }
    }

    /// Short rule name for traces.
    pub fn rule_name(&self) -> &'static str {
        match self {
            ResponseDirective::PublicationYear(_) => "published",
            ResponseDirective::PageCount(_) => "pages",
            ResponseDirective::Authorship(_) => "author",
            ResponseDirective::FullProfile(_) => "full profile",
            ResponseDirective::Summary(_, SummaryRule::Keyword) => "summary",
            ResponseDirective::Summary(_, SummaryRule::Default) => "summary (default)",
        }
    }

    /// Render the directive to reply text.
    pub fn render(&self) -> String {
        compose::book_info(self)
    }
}

/// Choose how to answer a book-information query about `record`.
pub fn select_book_info<'a>(record: &'a BookRecord, raw_query: &str) -> ResponseDirective<'a> {
    let lower = raw_query.to_lowercase();
    let signals = QuerySignals::scan_lowercase(&lower);

    if signals.contains(QuerySignals::PUBLISHED) {
        ResponseDirective::PublicationYear(record)
    } else if signals.contains(QuerySignals::PAGES) {
        ResponseDirective::PageCount(record)
    } else if signals.contains(QuerySignals::AUTHORSHIP) {
        ResponseDirective::Authorship(record)
    } else if signals.intersects(QuerySignals::INTRODUCE | QuerySignals::WANT_TO_KNOW)
        || (signals.contains(QuerySignals::TELL_ME_ABOUT) && lower.contains(&record.title.to_lowercase()))
    {
        ResponseDirective::FullProfile(record)
    } else if signals.intersects(QuerySignals::ABOUT | QuerySignals::WHAT_IS | QuerySignals::TELL_ME) {
        ResponseDirective::Summary(record, SummaryRule::Keyword)
    } else {
        ResponseDirective::Summary(record, SummaryRule::Default)
    }
}

/// Where a multi-criteria list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriteriaSource {
    /// No genre was given.
    Placeholder,
    ShortHighlyRated,
    LongHighlyRated,
    TopRatedByGenre,
    GenreRecommendations,
    /// The chosen table has no entry for the genre; the list holds a single
    /// explanatory message.
    Unavailable,
}

impl CriteriaSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CriteriaSource::Placeholder => "placeholder",
            CriteriaSource::ShortHighlyRated => "short highly rated",
            CriteriaSource::LongHighlyRated => "long highly rated",
            CriteriaSource::TopRatedByGenre => "top rated by genre",
            CriteriaSource::GenreRecommendations => "genre recommendations",
            CriteriaSource::Unavailable => "unavailable",
        }
    }
}

/// Ordered suggestions for a multi-criteria query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseList {
    pub source: CriteriaSource,
    pub items: Vec<String>,
}

/// Apply the multi-criteria decision table.
///
/// Blank values count as absent. The genre is matched exactly (after
/// lowercasing and trimming) against each table; there is no fuzzy fallback.
///
/// ```text
/// genre?  high/good?  short?  long?   source
/// no      -           -       -       placeholder
/// yes     yes         yes     -       short_highly_rated
/// yes     yes         no      yes     long_highly_rated
/// yes     yes         no      no      top_rated_by_genre
/// yes     no          -       -       genre_recommendations
/// ```
pub fn select_multi_criteria(
    kb: &KnowledgeBase,
    genre: Option<&str>,
    length: Option<&str>,
    rated: Option<&str>,
) -> ResponseList {
    let Some(genre) = present(genre).map(str::to_lowercase) else {
        return ResponseList { source: CriteriaSource::Placeholder, items: vec![compose::NO_GENRE_PLACEHOLDER.to_string()] };
    };

    let mask = CriteriaMask::scan(present(length), present(rated));

    if mask.contains(CriteriaMask::HIGH_RATED) {
        if mask.contains(CriteriaMask::SHORT) {
            from_table(&kb.short_highly_rated, &genre, CriteriaSource::ShortHighlyRated, compose::no_short_highly_rated)
        } else if mask.contains(CriteriaMask::LONG) {
            from_table(&kb.long_highly_rated, &genre, CriteriaSource::LongHighlyRated, compose::no_long_highly_rated)
        } else {
            from_table(&kb.top_rated_by_genre, &genre, CriteriaSource::TopRatedByGenre, compose::no_highly_rated)
        }
    } else {
        from_table(&kb.genre_recommendations, &genre, CriteriaSource::GenreRecommendations, compose::no_criteria_data)
    }
}

fn from_table(
    table: &Table<TitleList>,
    genre: &str,
    source: CriteriaSource,
    unavailable: fn(&str) -> String,
) -> ResponseList {
    match table.get(genre) {
        Some(titles) => ResponseList { source, items: titles.clone() },
        None => ResponseList { source: CriteriaSource::Unavailable, items: vec![unavailable(genre)] },
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(key: &str) -> &'static BookRecord {
        KnowledgeBase::builtin().book_details.get(key).unwrap()
    }

    fn rule(key: &str, query: &str) -> &'static str {
        select_book_info(book(key), query).rule_name()
    }

    #[test]
    fn published_outranks_authorship() {
        assert_eq!(rule("1984", "who published 1984"), "published");
        assert_eq!(rule("1984", "who wrote 1984 and when was it published"), "published");
    }

    #[test]
    fn keyword_chain_follows_precedence() {
        assert_eq!(rule("1984", "how many pages is 1984"), "pages");
        assert_eq!(rule("1984", "what page count about 1984"), "pages");
        assert_eq!(rule("1984", "who wrote 1984"), "author");
        assert_eq!(rule("1984", "tell me about the author of 1984"), "author");
        assert_eq!(rule("1984", "introduce 1984 to me"), "full profile");
        assert_eq!(rule("1984", "I want to know everything"), "full profile");
        assert_eq!(rule("1984", "what is 1984"), "summary");
        assert_eq!(rule("1984", "1984"), "summary (default)");
    }

    #[test]
    fn tell_me_about_needs_the_display_title_for_a_full_profile() {
        assert_eq!(rule("1984", "Tell me about 1984"), "full profile");
        assert_eq!(rule("lord of the rings", "tell me about the lord of the rings"), "full profile");
        // The resolved key is not the display title.
        assert_eq!(rule("lord of the rings", "tell me about lord of the rings"), "summary");
    }

    #[test]
    fn summary_rules_render_identically() {
        let record = book("the great gatsby");
        let keyword = select_book_info(record, "what is gatsby");
        let fallback = select_book_info(record, "gatsby");
        assert_eq!(keyword, ResponseDirective::Summary(record, SummaryRule::Keyword));
        assert_eq!(fallback, ResponseDirective::Summary(record, SummaryRule::Default));
        assert_eq!(keyword.render(), fallback.render());
    }

    #[test]
    fn short_highly_rated_fantasy() {
        let kb = KnowledgeBase::builtin();
        let list = select_multi_criteria(kb, Some("fantasy"), Some("short"), Some("highly rated"));
        assert_eq!(list.source, CriteriaSource::ShortHighlyRated);
        assert_eq!(list.items, ["The Ocean at the End of the Lane", "Coraline"]);
    }

    #[test]
    fn modifiers_change_the_result_for_the_same_genre() {
        let kb = KnowledgeBase::builtin();
        let plain = select_multi_criteria(kb, Some("fantasy"), Some(""), Some(""));
        assert_eq!(plain.source, CriteriaSource::GenreRecommendations);
        assert_eq!(plain.items, ["The Hobbit", "A Game of Thrones", "The Name of the Wind"]);

        let long = select_multi_criteria(kb, Some("Fantasy"), Some("long"), Some("good reviews"));
        assert_eq!(long.source, CriteriaSource::LongHighlyRated);
        assert_eq!(long.items, ["The Way of Kings", "The Eye of the World"]);

        let top = select_multi_criteria(kb, Some("fantasy"), None, Some("high-rate"));
        assert_eq!(top.source, CriteriaSource::TopRatedByGenre);
        assert_eq!(top.items[0], "The Lord of the Rings");
    }

    #[test]
    fn short_wins_when_both_lengths_are_mentioned() {
        let kb = KnowledgeBase::builtin();
        let list = select_multi_criteria(kb, Some("horror"), Some("short or long"), Some("good"));
        assert_eq!(list.source, CriteriaSource::ShortHighlyRated);
    }

    #[test]
    fn length_without_rating_falls_through_to_genre_recommendations() {
        let kb = KnowledgeBase::builtin();
        let list = select_multi_criteria(kb, Some("horror"), Some("short"), None);
        assert_eq!(list.source, CriteriaSource::GenreRecommendations);
        assert_eq!(list.items, ["The Shining", "It", "House of Leaves"]);
    }

    #[test]
    fn missing_genre_yields_the_placeholder() {
        let kb = KnowledgeBase::builtin();
        for genre in [None, Some(""), Some("   ")] {
            let list = select_multi_criteria(kb, genre, Some("short"), Some("high"));
            assert_eq!(list.source, CriteriaSource::Placeholder);
            assert_eq!(list.items, [compose::NO_GENRE_PLACEHOLDER]);
        }
    }

    #[test]
    fn unknown_genre_combinations_explain_themselves() {
        let kb = KnowledgeBase::builtin();

        let short = select_multi_criteria(kb, Some("thriller"), Some("short"), Some("high"));
        assert_eq!(short.source, CriteriaSource::Unavailable);
        assert_eq!(short.items, ["No short highly-rated thriller in my list right now."]);

        let long = select_multi_criteria(kb, Some("thriller"), Some("long"), Some("high"));
        assert_eq!(long.items, ["No long highly-rated thriller in my list right now."]);

        let top = select_multi_criteria(kb, Some("thriller"), None, Some("good"));
        assert_eq!(top.items, ["No highly-rated thriller in my list."]);

        let plain = select_multi_criteria(kb, Some("westerns"), None, None);
        assert_eq!(plain.items, ["I don't have multi-criteria data for genre \"westerns\" right now."]);
    }

    #[test]
    fn genre_filters_do_not_fall_back_to_fuzzy_matching() {
        let kb = KnowledgeBase::builtin();
        let list = select_multi_criteria(kb, Some("fiction"), None, None);
        assert_eq!(list.source, CriteriaSource::Unavailable);

        // The short/long tables spell it without the hyphen.
        let short = select_multi_criteria(kb, Some("non-fiction"), Some("short"), Some("high"));
        assert_eq!(short.source, CriteriaSource::Unavailable);
        let short = select_multi_criteria(kb, Some("nonfiction"), Some("short"), Some("high"));
        assert_eq!(short.source, CriteriaSource::ShortHighlyRated);
    }
}

//! Reply templates.
//!
//! Pure formatting. All branching happens in the selector and the handlers;
//! these functions only fill in a fixed phrasing.

use super::select::ResponseDirective;

/// Appended after every reply except welcome, goodbye, fallback and the
/// clarifying questions.
pub const CLOSING_PROMPT: &str = "Is there anything else you'd like to know?";

pub const WELCOME: &str = "Hello! I'm your Book Recommender Bot.\n\
I can help you with:\n\
• Author-based recommendations\n\
• Book information\n\
• Genre-based recommendations\n\
• Multi-criteria recommendations\n\
• Similar book suggestions\n\
• Top-rated books\n\n\
Just ask! If you're done, say 'goodbye'.";

pub const FALLBACK: &str = "I’m sorry, I didn’t catch that. Could you please rephrase?";

pub const GOODBYE: &str = "It was my pleasure to help you! Have a great day!";

// Clarifying questions
pub const ASK_AUTHOR: &str = "Which author are you interested in?";
pub const ASK_BOOK_INFO: &str = "Which book would you like information about?";
pub const ASK_GENRE: &str = "Which genre are you interested in?";
pub const ASK_SIMILAR: &str = "Which book would you like to find something similar to?";
pub const ASK_CRITERIA: &str = "Sure, can you specify the genre, length (short/long), or rating preference (high-rate/good reviews) you're looking for?";

pub const NO_GENRE_PLACEHOLDER: &str = "(No specific genre provided) Possibly: '1984', 'Pride and Prejudice', 'The Hobbit'...";
pub const NO_CRITERIA_MATCHES: &str = "I couldn't find any matches for those criteria, sorry.";

/// `header` followed by one `• item` line per item.
pub fn bullet_list(header: &str, items: &[String]) -> String {
    format!("{header}\n• {}", items.join("\n• "))
}

pub fn book_info(directive: &ResponseDirective<'_>) -> String {
    let r = directive.record();
    match directive {
        ResponseDirective::PublicationYear(_) => format!("{} was published in {}.", r.title, r.published_year),
        ResponseDirective::PageCount(_) => format!("{} has about {} pages.", r.title, r.pages),
        ResponseDirective::Authorship(_) => format!("{} was written by {}.", r.title, r.author),
        ResponseDirective::FullProfile(_) => format!(
            "Here's everything about \"{}\":\n• Author: {}\n• Published: {}\n• Pages: {}\n• Book Description: {}",
            r.title,
            r.author,
            r.published_year,
            r.pages,
            r.full_description()
        ),
        ResponseDirective::Summary(..) => format!("{}: {}", r.title, r.description),
    }
}

pub fn author_recommendations(author: &str, titles: &[String]) -> String {
    bullet_list(&format!("Here are some recommended books by {author}:"), titles)
}

pub fn unknown_author(author: &str) -> String {
    format!("I don't have recommendations for \"{author}\" at the moment.")
}

pub fn unknown_book(book: &str) -> String {
    format!("I don't have information about \"{book}\" at the moment.")
}

pub fn genre_recommendations(genre: &str, titles: &[String]) -> String {
    bullet_list(&format!("Here are some {genre} recommendations:"), titles)
}

pub fn unknown_genre(genre: &str) -> String {
    format!("I'm not sure about \"{genre}\" right now. I don't have data for that genre.")
}

pub fn criteria_suggestions(items: &[String]) -> String {
    bullet_list("Based on your preferences, here are some suggestions:", items)
}

pub fn similar_books(title: &str, titles: &[String]) -> String {
    bullet_list(&format!("Here are some books similar to \"{title}\":"), titles)
}

pub fn unknown_similar(title: &str) -> String {
    format!("I don't have similar titles for \"{title}\" at the moment.")
}

pub fn top_rated_general(titles: &[String]) -> String {
    bullet_list("Some top-rated books in general:", titles)
}

pub fn top_rated_genre(genre: &str, titles: &[String]) -> String {
    bullet_list(&format!("Here are some top-rated {genre} books:"), titles)
}

pub fn unknown_top_rated(genre: &str) -> String {
    format!("I don't have top-rated {genre} books on my list right now.")
}

// Multi-criteria "none available" items
pub fn no_short_highly_rated(genre: &str) -> String {
    format!("No short highly-rated {genre} in my list right now.")
}

pub fn no_long_highly_rated(genre: &str) -> String {
    format!("No long highly-rated {genre} in my list right now.")
}

pub fn no_highly_rated(genre: &str) -> String {
    format!("No highly-rated {genre} in my list.")
}

pub fn no_criteria_data(genre: &str) -> String {
    format!("I don't have multi-criteria data for genre \"{genre}\" right now.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SummaryRule;
    use crate::KnowledgeBase;
    use pretty_assertions::assert_eq;

    #[test]
    fn bullet_lists_put_each_item_on_its_own_line() {
        let titles = vec!["Dune".to_string(), "Foundation".to_string()];
        assert_eq!(bullet_list("Try these:", &titles), "Try these:\n• Dune\n• Foundation");
    }

    #[test]
    fn single_fact_sentences() {
        let record = KnowledgeBase::builtin().book_details.get("1984").unwrap();
        assert_eq!(book_info(&ResponseDirective::PublicationYear(record)), "1984 was published in 1949.");
        assert_eq!(book_info(&ResponseDirective::PageCount(record)), "1984 has about 328 pages.");
        assert_eq!(book_info(&ResponseDirective::Authorship(record)), "1984 was written by George Orwell.");
        assert_eq!(
            book_info(&ResponseDirective::Summary(record, SummaryRule::Default)),
            format!("1984: {}", record.description)
        );
    }

    #[test]
    fn full_profile_lists_every_field() {
        let record = KnowledgeBase::builtin().book_details.get("heart of darkness").unwrap();
        let expected = format!(
            "Here's everything about \"Heart of Darkness\":\n\
             • Author: Joseph Conrad\n\
             • Published: 1899\n\
             • Pages: 96\n\
             • Book Description: {}",
            record.description
        );
        assert_eq!(book_info(&ResponseDirective::FullProfile(record)), expected);
    }

    #[test]
    fn welcome_lists_capabilities() {
        assert!(WELCOME.starts_with("Hello! I'm your Book Recommender Bot.\nI can help you with:\n• Author-based"));
        assert!(WELCOME.ends_with("\n\nJust ask! If you're done, say 'goodbye'."));
    }
}

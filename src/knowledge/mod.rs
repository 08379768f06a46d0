//! Knowledge base: the static tables the engine resolves entities against.
//!
//! Every table is independent. Lookups never cross from one table into
//! another, even when the same book appears in several of them (for example
//! "pride and prejudice" is both a book-details key and a similar-books key).
//!
//! The built-in tables are initialized once, on first use, and never change.
//! A replacement knowledge base can be loaded from JSON; see
//! [`KnowledgeBase::from_json_str`] for the document shape.

mod builtin;
mod table;

#[cfg(test)]
mod tests;

pub use table::Table;

use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(builtin::knowledge_base);

/// An ordered list of book titles.
pub type TitleList = Vec<String>;

/// Details for one book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub pages: u32,
    /// Short description used by summary replies.
    pub description: String,
    /// Optional long-form description, preferred by full-profile replies.
    #[serde(default)]
    pub long_description: Option<String>,
}

impl BookRecord {
    /// The richest description available.
    pub fn full_description(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnowledgeBase {
    pub book_details: Table<BookRecord>,
    pub author_recommendations: Table<TitleList>,
    pub genre_recommendations: Table<TitleList>,
    pub similar_books: Table<TitleList>,
    pub top_rated_by_genre: Table<TitleList>,
    /// Top-rated list used when no genre is given.
    pub top_rated_general: TitleList,
    pub short_highly_rated: Table<TitleList>,
    pub long_highly_rated: Table<TitleList>,
}

impl KnowledgeBase {
    /// The process-wide default knowledge base.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Parse a knowledge base from JSON.
    ///
    /// The document is an object with one member per table. Tables are maps
    /// from canonical key to payload, and `top_rated_general` is an array of
    /// titles. Missing tables are empty.
    ///
    /// ```
    /// use libris::KnowledgeBase;
    ///
    /// let kb = KnowledgeBase::from_json_str(r#"{
    ///     "genre_recommendations": { "fantasy": ["The Hobbit"] }
    /// }"#).unwrap();
    /// assert_eq!(kb.genre_recommendations.len(), 1);
    /// assert!(kb.book_details.is_empty());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Knowledge)
    }

    /// Read and parse a knowledge base file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let kb = Self::from_json_str(&json)?;

        tracing::debug!(
            path = %path.display(),
            books = kb.book_details.len(),
            authors = kb.author_recommendations.len(),
            genres = kb.genre_recommendations.len(),
            "loaded knowledge base"
        );

        Ok(kb)
    }
}

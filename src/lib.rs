extern crate self as libris;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod intents;
mod knowledge;
pub mod webhook;

pub use api::{
    ReplyDetails, ReplyVerbose, lookup, normalize, resolve, respond, respond_verbose_with, respond_with,
    select_book_info_response, select_multi_criteria,
};
pub use engine::{
    CriteriaSource, Lookup, LookupPath, LookupTrace, MatchResult, ResponseDirective, ResponseList, SummaryRule, Trace,
};
pub use error::{Error, Result};
pub use intents::{Handler, IntentRegistry, names as intent_names};
pub use knowledge::{BookRecord, KnowledgeBase, Table, TitleList};

use std::fmt;
use std::str::FromStr;

// --- Request types ----------------------------------------------------------

/// Named parameters an upstream NLU layer may extract from an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Author,
    BookTitle,
    BookInfo,
    Genre,
    Length,
    Rated,
}

impl Param {
    pub const ALL: [Param; 6] =
        [Param::Author, Param::BookTitle, Param::BookInfo, Param::Genre, Param::Length, Param::Rated];

    /// Wire name of the parameter, as sent by the conversational platform.
    pub fn name(self) -> &'static str {
        match self {
            Param::Author => "author",
            Param::BookTitle => "book_title",
            Param::BookInfo => "book_info",
            Param::Genre => "genre",
            Param::Length => "length",
            Param::Rated => "rated",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Param {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Param::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown parameter '{s}' (expected one of: {})", param_list()))
    }
}

fn param_list() -> String {
    Param::ALL.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
}

/// Extracted parameter values. Absent and blank values are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: Vec<(Param, String)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `param`, replacing any earlier value.
    pub fn set(&mut self, param: Param, value: impl Into<String>) {
        let value = value.into();
        match self.values.iter_mut().find(|(p, _)| *p == param) {
            Some(slot) => slot.1 = value,
            None => self.values.push((param, value)),
        }
    }

    /// Raw value as extracted, if any.
    pub fn raw(&self, param: Param) -> Option<&str> {
        self.values.iter().find(|(p, _)| *p == param).map(|(_, v)| v.as_str())
    }

    /// Lowercased, trimmed value; empty when the parameter is absent.
    pub fn value(&self, param: Param) -> String {
        self.raw(param).map(|v| v.to_lowercase().trim().to_string()).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Param, &str)> {
        self.values.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

/// Immutable snapshot of one user request: extracted parameters plus the raw
/// utterance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    pub params: Parameters,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), params: Parameters::new() }
    }

    /// Builder-style parameter setter.
    pub fn with(mut self, param: Param, value: impl Into<String>) -> Self {
        self.params.set(param, value);
        self
    }
}

// --- Reply ------------------------------------------------------------------

/// Ordered plain-text messages produced for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub messages: Vec<String>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// A reply consisting of exactly one message.
    pub fn single(message: impl Into<String>) -> Self {
        Self { messages: vec![message.into()] }
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append the closing prompt and return the finished reply.
    pub(crate) fn closed(mut self) -> Self {
        self.push(engine::compose::CLOSING_PROMPT);
        self
    }

    /// All messages joined with a newline.
    pub fn text(&self) -> String {
        self.messages.join("\n")
    }
}

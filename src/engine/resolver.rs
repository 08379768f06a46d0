//! Entity resolution against knowledge tables.
//!
//! Two entry points:
//!
//! - [`resolve`]: the fuzzy resolver. Normalizes the input and every key, and
//!   picks the longest key that contains, or is contained in, the input.
//! - [`lookup`]: what handlers call. Tries an exact key match on the
//!   lowercased, trimmed input first and only falls back to [`resolve`] on a
//!   miss.
//!
//! ## Tie-break
//!
//! Candidates are compared by normalized key length in characters, and only a
//! strictly longer candidate replaces the current best. Among equally long
//! keys the first one in table order wins, whatever its meaning.
//!
//! ```text
//! keys:   "war"  "war and peace"  "peace and war"
//! input:  "tell me about war and peace and war"
//!          candidate(3)  candidate(13)  candidate(13)
//! result: "war and peace"        (first of the two 13-char keys)
//! ```
//!
//! ## Empty input
//!
//! The empty string is contained in every key, so `resolve("")` returns the
//! longest key in the table. Callers must reject blank input before resolving;
//! the intent handlers answer with a clarifying question instead.

use super::normalize::normalize;
use crate::Table;

/// Outcome of resolving one input against one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a, T> {
    Resolved { key: &'a str, payload: &'a T },
    Unresolved,
}

impl<'a, T> MatchResult<'a, T> {
    /// The canonical key, when resolved.
    pub fn key(&self) -> Option<&'a str> {
        match self {
            MatchResult::Resolved { key, .. } => Some(key),
            MatchResult::Unresolved => None,
        }
    }

    pub fn payload(&self) -> Option<&'a T> {
        match self {
            MatchResult::Resolved { payload, .. } => Some(payload),
            MatchResult::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MatchResult::Resolved { .. })
    }
}

/// How a [`lookup`] was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupPath {
    /// Exact key match.
    Direct,
    /// Exact match missed; the fuzzy resolver found a key.
    Fuzzy,
    /// Neither path found a key.
    Unresolved,
}

impl LookupPath {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupPath::Direct => "direct",
            LookupPath::Fuzzy => "fuzzy",
            LookupPath::Unresolved => "unresolved",
        }
    }
}

/// Result of [`lookup`]: the match plus the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a, T> {
    pub result: MatchResult<'a, T>,
    pub path: LookupPath,
}

/// Fuzzy-resolve `input` against `table`.
///
/// See the module docs for the candidate rule and the tie-break.
pub fn resolve<'a, T>(input: &str, table: &'a Table<T>) -> MatchResult<'a, T> {
    let needle = normalize(input);
    let mut best: Option<(&'a str, &'a T)> = None;
    let mut best_len = 0usize;

    for (key, payload) in table.iter() {
        let normalized_key = normalize(key);
        if !is_candidate(&needle, &normalized_key) {
            continue;
        }

        let len = normalized_key.chars().count();
        if len > best_len {
            best = Some((key, payload));
            best_len = len;
        }
    }

    match best {
        Some((key, payload)) => MatchResult::Resolved { key, payload },
        None => MatchResult::Unresolved,
    }
}

/// Every key that qualifies as a fuzzy candidate for `input`, in table order.
///
/// Used for tracing; [`resolve`] does not allocate this list.
pub fn candidates<'a, T>(input: &str, table: &'a Table<T>) -> Vec<&'a str> {
    let needle = normalize(input);
    table.keys().filter(|key| is_candidate(&needle, &normalize(key))).collect()
}

/// Direct lookup with a fuzzy fallback.
///
/// `input` should already be lowercased and trimmed (handlers do this when
/// reading parameters), since the direct path compares it to keys verbatim.
pub fn lookup<'a, T>(input: &str, table: &'a Table<T>) -> Lookup<'a, T> {
    if let Some((key, payload)) = table.get_key_value(input) {
        tracing::debug!(input, key, "direct lookup hit");
        return Lookup { result: MatchResult::Resolved { key, payload }, path: LookupPath::Direct };
    }

    let result = resolve(input, table);
    match result.key() {
        Some(key) => {
            tracing::debug!(input, key, "fuzzy lookup hit");
            Lookup { result, path: LookupPath::Fuzzy }
        }
        None => {
            tracing::debug!(input, "lookup unresolved");
            Lookup { result, path: LookupPath::Unresolved }
        }
    }
}

fn is_candidate(needle: &str, normalized_key: &str) -> bool {
    needle.contains(normalized_key) || normalized_key.contains(needle)
}

//! Resolution traces.
//!
//! Handlers always receive a `Trace` and record what they did into it: every
//! table lookup and the rule that chose the reply. Recording is cheap (a few
//! small strings per request); the fuzzy candidate list is only computed for
//! lookups that missed the direct path.
//!
//! The plain [`crate::respond`] entry point discards the trace;
//! [`crate::respond_verbose_with`] returns it for debugging.

use super::normalize::normalize;
use super::resolver::{self, Lookup, LookupPath};
use crate::Table;

/// Record of one table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTrace {
    /// Name of the table consulted.
    pub table: &'static str,
    /// Input as passed to the lookup (lowercased and trimmed).
    pub input: String,
    /// Normalized form the fuzzy resolver compares.
    pub normalized: String,
    pub path: LookupPath,
    /// Canonical key the lookup landed on.
    pub key: Option<String>,
    /// Fuzzy candidates in table order (empty unless the fuzzy path ran).
    pub candidates: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub lookups: Vec<LookupTrace>,
    /// Name of the selection rule or template that produced the reply.
    pub rule: Option<&'static str>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `lookup` of `input` in `table`.
    pub(crate) fn record_lookup<T>(
        &mut self,
        table_name: &'static str,
        input: &str,
        table: &Table<T>,
        lookup: &Lookup<'_, T>,
    ) {
        let candidates = match lookup.path {
            LookupPath::Direct => Vec::new(),
            LookupPath::Fuzzy | LookupPath::Unresolved => {
                resolver::candidates(input, table).into_iter().map(str::to_string).collect()
            }
        };

        if !candidates.is_empty() {
            tracing::trace!(table = table_name, input, ?candidates, "fuzzy candidates");
        }

        self.lookups.push(LookupTrace {
            table: table_name,
            input: input.to_string(),
            normalized: normalize(input),
            path: lookup.path,
            key: lookup.result.key().map(str::to_string),
            candidates,
        });
    }

    /// Record an exact-only lookup (filter parameters).
    pub(crate) fn record_exact(&mut self, table_name: &'static str, input: &str, found: bool) {
        self.lookups.push(LookupTrace {
            table: table_name,
            input: input.to_string(),
            normalized: normalize(input),
            path: if found { LookupPath::Direct } else { LookupPath::Unresolved },
            key: found.then(|| input.to_string()),
            candidates: Vec::new(),
        });
    }

    pub(crate) fn set_rule(&mut self, rule: &'static str) {
        tracing::debug!(rule, "selected reply rule");
        self.rule = Some(rule);
    }
}

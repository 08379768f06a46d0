//! Entity resolution and response selection engine.
//!
//! This is the only part of the crate with decision logic. Everything around
//! it (intent dispatch, webhook envelopes, the knowledge tables themselves) is
//! plumbing or data.
//!
//! ## How the parts work together
//!
//! ```text
//! raw parameter ──▶ lookup (resolver.rs)
//!                     ├─ direct: exact key match on the lowercased input
//!                     └─ fuzzy:  normalize (normalize.rs) + symmetric
//!                                substring containment, longest key wins
//!                               │
//!                               v
//!                        MatchResult
//!                               │
//! raw query ──▶ QuerySignals::scan (signals.rs)
//!                               │
//!                               v
//!                  select_book_info (select.rs)      filter params ──▶ CriteriaMask::scan
//!                               │                                           │
//!                               v                                           v
//!                     ResponseDirective                    select_multi_criteria (select.rs)
//!                               │                                           │
//!                               └────────────▶ compose.rs ◀─────────────────┘
//!                                                  │
//!                                                  v
//!                                           reply strings
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: case folding and punctuation stripping.
//! - `resolver.rs`: direct lookup, fuzzy resolution and the tie-break rule.
//! - `signals.rs`: scans the raw query and filter values for keyword signals.
//! - `select.rs`: the book-info keyword chain and the multi-criteria table.
//! - `compose.rs`: fixed reply templates.
//! - `trace.rs`: optional record of lookups and rule choices for debugging.
//!
//! ## Asymmetry between entities and filters
//!
//! Free-text entity parameters (titles, authors) go through `lookup`, which
//! falls back to fuzzy resolution. Filter parameters (genre, length, rating)
//! are matched exactly. Keep it that way: a fuzzy genre match would silently
//! turn "fiction" into "historical fiction".

#[path = "engine/compose.rs"]
pub(crate) mod compose;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/resolver.rs"]
mod resolver;
#[path = "engine/select.rs"]
mod select;
#[path = "engine/signals.rs"]
mod signals;
#[path = "engine/trace.rs"]
mod trace;

pub use normalize::normalize;
pub use resolver::{Lookup, LookupPath, MatchResult, lookup, resolve};
pub use select::{CriteriaSource, ResponseDirective, ResponseList, SummaryRule, select_book_info, select_multi_criteria};
#[allow(unused_imports)]
pub use signals::{CriteriaMask, QuerySignals};
pub use trace::{LookupTrace, Trace};

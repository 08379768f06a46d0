//! String normalization for fuzzy comparison.

/// Lowercase `s`, drop every character that is neither an ASCII word
/// character (`[A-Za-z0-9_]`) nor whitespace, then trim.
///
/// Total and idempotent. Non-ASCII letters are treated as punctuation and
/// removed.
///
/// ```text
/// "The Hobbit!"      -> "the hobbit"
/// "J.R.R. Tolkien"   -> "jrr tolkien"
/// "  non-fiction  "  -> "nonfiction"
/// ```
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let stripped = regex!(r"[^A-Za-z0-9_\s]").replace_all(&lower, "");
    stripped.trim().to_string()
}

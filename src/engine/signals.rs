//! Keyword signal scanning.
//!
//! The selector never inspects the query text directly; it asks which keyword
//! signals are present. Scanning is plain case-insensitive substring search
//! over the raw text, so "pages" also raises `PAGES` through "page", and
//! "authored" raises `AUTHORSHIP` through "author". False positives of that
//! kind are accepted behavior.

bitflags::bitflags! {
    /// Keyword signals found in a raw book-information query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QuerySignals: u16 {
        const PUBLISHED     = 1 << 0;
        const PAGES         = 1 << 1;
        const AUTHORSHIP    = 1 << 2;
        const INTRODUCE     = 1 << 3;
        const WANT_TO_KNOW  = 1 << 4;
        const TELL_ME_ABOUT = 1 << 5;
        const ABOUT         = 1 << 6;
        const WHAT_IS       = 1 << 7;
        const TELL_ME       = 1 << 8;
    }
}

const QUERY_KEYWORDS: &[(&str, QuerySignals)] = &[
    ("published", QuerySignals::PUBLISHED),
    ("page", QuerySignals::PAGES),
    ("pages", QuerySignals::PAGES),
    ("who wrote", QuerySignals::AUTHORSHIP),
    ("author", QuerySignals::AUTHORSHIP),
    ("introduce", QuerySignals::INTRODUCE),
    ("i want to know", QuerySignals::WANT_TO_KNOW),
    ("tell me about", QuerySignals::TELL_ME_ABOUT),
    ("about", QuerySignals::ABOUT),
    ("what is", QuerySignals::WHAT_IS),
    ("tell me", QuerySignals::TELL_ME),
];

impl QuerySignals {
    /// Scan raw query text. Case-insensitive.
    pub fn scan(query: &str) -> Self {
        Self::scan_lowercase(&query.to_lowercase())
    }

    /// Scan text that is already lowercased.
    pub fn scan_lowercase(lower: &str) -> Self {
        QUERY_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lower.contains(keyword))
            .fold(QuerySignals::empty(), |acc, (_, signal)| acc | *signal)
    }
}

bitflags::bitflags! {
    /// Modifiers found in the multi-criteria filter values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CriteriaMask: u8 {
        /// `rated` mentions "high" or "good".
        const HIGH_RATED = 1 << 0;
        /// `length` mentions "short".
        const SHORT      = 1 << 1;
        /// `length` mentions "long".
        const LONG       = 1 << 2;
    }
}

impl CriteriaMask {
    /// Scan the `length` and `rated` filter values. Absent values raise
    /// nothing.
    pub fn scan(length: Option<&str>, rated: Option<&str>) -> Self {
        let mut mask = CriteriaMask::empty();

        if let Some(rated) = rated.map(str::to_lowercase) {
            if rated.contains("high") || rated.contains("good") {
                mask |= CriteriaMask::HIGH_RATED;
            }
        }

        if let Some(length) = length.map(str::to_lowercase) {
            if length.contains("short") {
                mask |= CriteriaMask::SHORT;
            }
            if length.contains("long") {
                mask |= CriteriaMask::LONG;
            }
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_is_case_insensitive() {
        let signals = QuerySignals::scan("When was it PUBLISHED?");
        assert_eq!(signals, QuerySignals::PUBLISHED);
    }

    #[test]
    fn overlapping_phrases_raise_every_signal() {
        let signals = QuerySignals::scan("tell me about 1984");
        assert!(signals.contains(QuerySignals::TELL_ME_ABOUT | QuerySignals::TELL_ME | QuerySignals::ABOUT));
        assert!(!signals.contains(QuerySignals::WHAT_IS));
    }

    #[test]
    fn who_alone_does_not_raise_authorship() {
        let signals = QuerySignals::scan("who published 1984");
        assert!(signals.contains(QuerySignals::PUBLISHED));
        assert!(!signals.contains(QuerySignals::AUTHORSHIP));

        assert!(QuerySignals::scan("who wrote 1984").contains(QuerySignals::AUTHORSHIP));
        assert!(QuerySignals::scan("who's the author").contains(QuerySignals::AUTHORSHIP));
    }

    #[test]
    fn unrelated_text_raises_nothing() {
        assert!(QuerySignals::scan("1984").is_empty());
        assert!(QuerySignals::scan("").is_empty());
    }

    #[test]
    fn criteria_mask_reads_modifiers() {
        assert_eq!(CriteriaMask::scan(Some("Short"), Some("highly rated")), CriteriaMask::SHORT | CriteriaMask::HIGH_RATED);
        assert_eq!(CriteriaMask::scan(Some("long read"), Some("good reviews")), CriteriaMask::LONG | CriteriaMask::HIGH_RATED);
        assert_eq!(CriteriaMask::scan(Some("short"), Some("any")), CriteriaMask::SHORT);
        assert_eq!(CriteriaMask::scan(None, None), CriteriaMask::empty());
    }
}

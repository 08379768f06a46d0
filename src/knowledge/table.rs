use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// An ordered mapping from canonical key to payload.
///
/// Iteration order is insertion order (declaration order for built-in data,
/// document order for loaded JSON). The fuzzy resolver breaks ties by this
/// order, so it is part of the table's observable behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Table<T> {
    /// Create a table from pre-validated entries, keeping their order.
    pub fn from_entries(entries: Vec<(String, T)>) -> Self {
        debug_assert!(entries.iter().all(|(k, _)| is_canonical_key(k)), "non-canonical table key");
        Self { entries }
    }

    /// Exact lookup by canonical key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Exact lookup returning the stored key alongside the payload.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &T)> {
        self.iter().find(|(k, _)| *k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A key is canonical when it is already lowercased and trimmed.
pub(crate) fn is_canonical_key(key: &str) -> bool {
    key.trim() == key && key.to_lowercase() == key
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for TableVisitor<T> {
            type Value = Table<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from canonical lowercase keys to entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, T)> = Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    if !is_canonical_key(&key) {
                        return Err(de::Error::custom(format!("table key {key:?} must be lowercase and trimmed")));
                    }
                    if entries.iter().any(|(k, _)| *k == key) {
                        return Err(de::Error::custom(format!("duplicate table key {key:?}")));
                    }
                    entries.push((key, value));
                }

                Ok(Table { entries })
            }
        }

        deserializer.deserialize_map(TableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_matches_whole_keys_only() {
        let table: Table<u32> = table! { "war" => 1, "war and peace" => 2 };
        assert_eq!(table.get("war"), Some(&1));
        assert_eq!(table.get("war and peace"), Some(&2));
        assert_eq!(table.get("war and"), None);
        assert_eq!(table.get_key_value("war"), Some(("war", &1)));
    }

    #[test]
    fn canonical_keys() {
        assert!(is_canonical_key("the great gatsby"));
        assert!(is_canonical_key("non-fiction"));
        assert!(!is_canonical_key("The Great Gatsby"));
        assert!(!is_canonical_key(" dune"));
    }
}

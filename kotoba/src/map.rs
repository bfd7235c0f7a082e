//! Insertion-ordered map keyed by strings.
//!
//! Backed by an [`IndexMap`], so lookups and inserts stay constant-time while
//! iteration follows the order in which keys first appeared.

use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;

/// A string-keyed map that remembers the order in which keys first appeared.
///
/// Re-inserting an existing key replaces its value without moving it.
/// Equality is order-sensitive.
#[derive(Clone)]
pub struct OrderedMap<V> {
    entries: IndexMap<String, V>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap {
            entries: IndexMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present. The key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// IndexMap equality ignores order
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V: Eq> Eq for OrderedMap<V> {}

impl<V: Debug> Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::OrderedMap;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = OrderedMap::new();
        assert_eq!(None, map.insert("b", 1));
        assert_eq!(None, map.insert("a", 2));
        assert_eq!(Some(1), map.insert("b", 3));

        assert_eq!(vec!["b", "a"], map.keys().collect::<Vec<_>>());
        assert_eq!(Some(&3), map.get("b"));
        assert_eq!(2, map.len());
    }

    #[test]
    fn test_get_mut() {
        let mut map: OrderedMap<Vec<u8>> = [("k", vec![1])].into_iter().collect();
        if let Some(v) = map.get_mut("k") {
            v.push(2);
        }
        assert_eq!(Some(&vec![1, 2]), map.get("k"));
        assert!(map.get_mut("missing").is_none());
    }

    #[rstest(
        left,
        right,
        equal,
        case(vec![("a", 1), ("b", 2)], vec![("a", 1), ("b", 2)], true),
        case(vec![("a", 1), ("b", 2)], vec![("b", 2), ("a", 1)], false),
        case(vec![], vec![], true)
    )]
    fn test_equality_is_order_sensitive(
        left: Vec<(&str, i32)>,
        right: Vec<(&str, i32)>,
        equal: bool,
    ) {
        let left: OrderedMap<i32> = left.into_iter().collect();
        let right: OrderedMap<i32> = right.into_iter().collect();
        assert_eq!(equal, left == right);
    }

    #[test]
    fn test_many_distinct_keys() {
        let map: OrderedMap<usize> = (0..50_000).map(|i| (format!("k{i}"), i)).collect();
        assert_eq!(50_000, map.len());
        assert_eq!(Some(&49_999), map.get("k49999"));
        assert_eq!(Some("k0"), map.keys().next());
        assert!(map.iter().enumerate().all(|(i, (_, v))| i == *v));
    }

    #[test]
    fn test_into_iter_keeps_order() {
        let map: OrderedMap<i32> = [("b", 1), ("a", 2), ("b", 3)].into_iter().collect();
        let entries: Vec<(String, i32)> = map.into_iter().collect();
        assert_eq!(vec![("b".to_string(), 3), ("a".to_string(), 2)], entries);
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_send_sync() {
        assert_send_sync::<OrderedMap<String>>();
    }

    #[test]
    fn test_debug_renders_as_map() {
        let map: OrderedMap<i32> = [("x", 1)].into_iter().collect();
        assert_eq!(r#"{"x": 1}"#, format!("{map:?}"));
    }
}

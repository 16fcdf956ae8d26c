use fnv::FnvHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// An insertion-ordered, append-only map.
///
/// Mirrors the `Vec<Data>` + `FnvHashMap<Key, InternalId>` symbol table shape
/// used throughout the dictionary model: lookups go through the index, but
/// iteration always walks the backing `Vec` in insertion order. Every map
/// the spec calls "ordered" (the tag table, the pruned tag/group outputs,
/// the component and message tables) is one of these.
#[derive(Clone, Debug)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FnvHashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FnvHashMap::default(),
        }
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Inserts `value` under `key`, returning `false` if `key` was already
    /// present (the entry is left untouched; callers that need
    /// duplicate-detection semantics check the return value themselves).
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        let idx = self.entries.len();
        self.index.insert(key.clone(), idx);
        self.entries.push((key, value));
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = OrderedMap::new();
        map.insert("c", 3);
        map.insert("a", 1);
        map.insert("b", 2);
        let order: Vec<_> = map.keys().copied().collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_duplicate_insert() {
        let mut map = OrderedMap::new();
        assert!(map.insert("a", 1));
        assert!(!map.insert("a", 2));
        assert_eq!(*map.get(&"a").unwrap(), 1);
    }
}

//! Insertion-ordered map with O(1) removal.
//!
//! Removed entries leave a tombstone in the slot vector so that the
//! remaining entries keep their original relative order. Once tombstones
//! outnumber live entries the slots are compacted.
//!
//! # Determinism
//! Iteration always follows first-insertion order. Removing a key and
//! inserting it again places it at the end.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

const MIN_COMPACT_SLOTS: usize = 64;

#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    slots: Vec<Option<(K, V)>>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_ref().map(|(_, v)| v)
    }

    /// Insert `value` unless `key` is already present. Returns `true` when
    /// the value was stored.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.slots.len());
        self.slots.push(Some((key, value)));
        true
    }

    /// Mutable access to the value for `key`, appending `default()` first if
    /// the key is new.
    pub fn get_or_insert_with<F: FnOnce() -> V>(&mut self, key: K, default: F) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.slots.len();
                self.index.insert(key.clone(), slot);
                self.slots.push(Some((key, default())));
                slot
            }
        };
        match self.slots[slot].as_mut() {
            Some((_, v)) => v,
            None => unreachable!("index points at a tombstone"),
        }
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let removed = self.slots[slot].take().map(|(_, v)| v);
        if self.slots.len() >= MIN_COMPACT_SLOTS && self.slots.len() > 2 * self.index.len() {
            self.compact();
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots
            .iter()
            .filter_map(|s| s.as_ref().map(|(k, v)| (k, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.slots
            .iter_mut()
            .filter_map(|s| s.as_mut().map(|(k, v)| (&*k, v)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some((k, _)) = entry {
                self.index.insert(k.clone(), slot);
            }
        }
    }
}

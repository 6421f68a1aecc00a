use std::{collections::HashMap, hash::Hash};

/// An append-only, first-occurrence-indexed symbol table.
///
/// Keys are interned in insertion order with 1-based indices. Re-interning
/// an already-seen key returns the existing index and never allocates a new
/// one. Entries are only removed wholesale via [`SymbolTable::clear`] when
/// the lexer is re-initialized.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable<K: Eq + Hash> {
    map: HashMap<K, usize>,
}

impl<K: Eq + Hash> SymbolTable<K> {
    pub fn new() -> Self {
        SymbolTable {
            map: HashMap::new(),
        }
    }

    /// Returns the index for `key`, inserting it at the next free index
    /// if it has not been seen before.
    pub fn intern(&mut self, key: K) -> usize {
        let next = self.map.len() + 1;
        *self.map.entry(key).or_insert(next)
    }

    /// Looks up a key without inserting.
    pub fn get(&self, key: &K) -> Option<usize> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// All entries sorted by their insertion-order index.
    pub fn entries(&self) -> Vec<(&K, usize)> {
        let mut entries: Vec<_> = self.map.iter().map(|(key, &index)| (key, index)).collect();
        entries.sort_by_key(|&(_, index)| index);
        entries
    }
}

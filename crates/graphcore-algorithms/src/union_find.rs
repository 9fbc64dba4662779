//! Disjoint-set forest (union-find)
//!
//! Path compression plus union by rank. Elements are admitted explicitly
//! through [`DisjointSet::make_set`] (insert-or-get); `find` and `union` call
//! it for unseen elements, so no operation can fail.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Partition of elements into equivalence classes.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    index: FxHashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        DisjointSet {
            index,
            elements: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Insert `item` as a singleton class unless it is already known.
    /// Returns the element's slot either way.
    pub fn make_set(&mut self, item: T) -> usize {
        if let Some(&slot) = self.index.get(&item) {
            return slot;
        }
        let slot = self.elements.len();
        self.elements.push(item.clone());
        self.parent.push(slot);
        self.rank.push(0);
        self.index.insert(item, slot);
        self.sets += 1;
        slot
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Representative of `item`'s class. Unseen items become singletons.
    pub fn find(&mut self, item: T) -> T {
        let slot = self.make_set(item);
        let root = self.find_root(slot);
        self.elements[root].clone()
    }

    /// Merge the classes of `a` and `b`.
    ///
    /// Returns `false` when both were already in the same class.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let slot_a = self.make_set(a);
        let slot_b = self.make_set(b);
        let root_a = self.find_root(slot_a);
        let root_b = self.find_root(slot_b);

        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn same_set(&mut self, a: T, b: T) -> bool {
        let slot_a = self.make_set(a);
        let slot_b = self.make_set(b);
        self.find_root(slot_a) == self.find_root(slot_b)
    }

    /// Number of elements seen so far
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint classes
    pub fn set_count(&self) -> usize {
        self.sets
    }

    // Iterative so deep chains cannot exhaust the stack.
    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

impl<T: Eq + Hash + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

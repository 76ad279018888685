//! Bounded recency cache for single-best lookups.

use ahash::AHashMap;

use crate::lookup::Suggestion;

const NIL: usize = usize::MAX;

struct Node {
    key: String,
    value: Suggestion,
    prev: usize,
    next: usize,
}

/// Fixed-capacity LRU map from phrase to its best suggestion.
///
/// Recency links are indices into a node arena, so eviction reuses slots in
/// place and the structure holds no pointers.
pub(crate) struct TopCache {
    capacity: usize,
    nodes: Vec<Node>,
    map: AHashMap<String, usize>,
    head: usize,
    tail: usize,
}

impl TopCache {
    pub fn new(capacity: usize) -> Self {
        TopCache {
            capacity: capacity.max(1),
            nodes: Vec::new(),
            map: AHashMap::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Cached suggestion for `key`, refreshing its recency.
    pub fn get(&mut self, key: &str) -> Option<Suggestion> {
        let slot = *self.map.get(key)?;
        self.unlink(slot);
        self.push_front(slot);
        Some(self.nodes[slot].value.clone())
    }

    /// Insert or refresh `key`, evicting the least recently used entry when
    /// full.
    pub fn insert(&mut self, key: String, value: Suggestion) {
        if let Some(&slot) = self.map.get(&key) {
            self.nodes[slot].value = value;
            self.unlink(slot);
            self.push_front(slot);
            return;
        }

        let slot = if self.nodes.len() < self.capacity {
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        } else {
            let slot = self.tail;
            self.unlink(slot);
            let evicted_key = std::mem::replace(&mut self.nodes[slot].key, key.clone());
            self.map.remove(&evicted_key);
            self.nodes[slot].value = value;
            slot
        };

        self.map.insert(key, slot);
        self.push_front(slot);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    fn unlink(&mut self, slot: usize) {
        let prev = self.nodes[slot].prev;
        let next = self.nodes[slot].next;
        if prev != NIL {
            self.nodes[prev].next = next;
        } else if self.head == slot {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else if self.tail == slot {
            self.tail = prev;
        }
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = NIL;
    }

    fn push_front(&mut self, slot: usize) {
        self.nodes[slot].prev = NIL;
        self.nodes[slot].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }
}

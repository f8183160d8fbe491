//! Recency List Module
//!
//! Arena-backed doubly-linked list ordering entries by access time.
//!
//! Nodes live in a `Vec` of slots and link to each other by slot index, so
//! the lookup index can hold plain [`NodeHandle`]s instead of references.
//! Freed slots are recycled through a free list.

use crate::cache::CacheEntry;

// == Node Handle ==
/// Stable handle to a node in a [`RecencyList`].
///
/// A handle stays valid until its node is removed. After that its slot may be
/// reused by a later insertion, so callers must drop handles they remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

#[derive(Debug)]
struct Node<V> {
    entry: CacheEntry<V>,
    /// Neighbour towards the front (more recently used)
    prev: Option<usize>,
    /// Neighbour towards the back (less recently used)
    next: Option<usize>,
}

// == Recency List ==
/// Ordered sequence of cache entries.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct RecencyList<V> {
    slots: Vec<Option<Node<V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<V> Default for RecencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecencyList<V> {
    // == Constructor ==
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Front ==
    /// Inserts an entry at the front and returns its handle.
    pub fn push_front(&mut self, entry: CacheEntry<V>) -> NodeHandle {
        let node = Node {
            entry,
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        self.link_front(idx);
        self.len += 1;
        NodeHandle(idx)
    }

    // == Move To Front ==
    /// Moves a live node to the front without reallocating it.
    ///
    /// Returns false if the handle does not point at a live node.
    pub fn move_to_front(&mut self, handle: NodeHandle) -> bool {
        if self.node(handle.0).is_none() {
            return false;
        }
        if self.head != Some(handle.0) {
            self.unlink(handle.0);
            self.link_front(handle.0);
        }
        true
    }

    // == Remove ==
    /// Unlinks a node and hands its entry back to the caller.
    pub fn remove(&mut self, handle: NodeHandle) -> Option<CacheEntry<V>> {
        self.node(handle.0)?;
        self.unlink(handle.0);

        let node = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry<V>> {
        let tail = self.tail?;
        self.remove(NodeHandle(tail))
    }

    // == Accessors ==
    pub fn get(&self, handle: NodeHandle) -> Option<&CacheEntry<V>> {
        self.node(handle.0).map(|node| &node.entry)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut CacheEntry<V>> {
        self.node_mut(handle.0).map(|node| &mut node.entry)
    }

    /// Returns the most recently used entry.
    pub fn front(&self) -> Option<&CacheEntry<V>> {
        self.head.and_then(|idx| self.node(idx)).map(|node| &node.entry)
    }

    /// Returns the least recently used entry.
    pub fn back(&self) -> Option<&CacheEntry<V>> {
        self.tail.and_then(|idx| self.node(idx)).map(|node| &node.entry)
    }

    /// Iterates entries from front (most recent) to back.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Internal: Linking ==
    fn node(&self, idx: usize) -> Option<&Node<V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<V>> {
        self.slots.get_mut(idx).and_then(Option::as_mut)
    }

    /// Detaches a node from its neighbours, leaving it in its slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev.and_then(|p| self.node_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.node_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = None;
        }
    }

    /// Links a detached node in at the front.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(idx) {
            node.prev = None;
            node.next = old_head;
        }

        match old_head.and_then(|h| self.node_mut(h)) {
            Some(head_node) => head_node.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a CacheEntry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = list.node(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

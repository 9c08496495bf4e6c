//! Doubly linked sequencing over an index arena
//!
//! Characters, clusters, syllables and words all need "previous" and "next"
//! lookups. Instead of back-pointers, a [`Chain`] owns its items in a vector
//! and keeps the neighbor relation as explicit index pairs. The chain is a
//! derived view: it is rebuilt whenever a level's sequence is produced, and
//! the vector order stays the canonical storage.

use std::ops::{Deref, Index};

/// Neighbor indices of one unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Link {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// An ordered sequence with predecessor/successor links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    items: Vec<T>,
    links: Vec<Link>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            links: Vec::new(),
        }
    }
}

impl<T> Chain<T> {
    /// Take ownership of `items` and link each to its immediate neighbors
    pub fn new(items: Vec<T>) -> Self {
        let mut chain = Self {
            items,
            links: Vec::new(),
        };
        chain.set_successor_chain();
        chain
    }

    /// Rewire every link from the current item order
    ///
    /// The first item has no predecessor inside the chain; whatever owns the
    /// chain (the parent) reaches it through [`Chain::first`].
    pub fn set_successor_chain(&mut self) {
        let len = self.items.len();
        self.links = (0..len)
            .map(|i| Link {
                prev: i.checked_sub(1),
                next: (i + 1 < len).then_some(i + 1),
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Link of the unit at `index`
    pub fn link(&self, index: usize) -> Link {
        self.links.get(index).copied().unwrap_or_default()
    }

    pub fn prev(&self, index: usize) -> Option<usize> {
        self.link(index).prev
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        self.link(index).next
    }

    /// The parent's first child
    pub fn first(&self) -> Option<Node<'_, T>> {
        self.node(0)
    }

    pub fn last(&self) -> Option<Node<'_, T>> {
        self.len().checked_sub(1).and_then(|i| self.node(i))
    }

    /// A cursor on the unit at `index`
    pub fn node(&self, index: usize) -> Option<Node<'_, T>> {
        (index < self.items.len()).then_some(Node { chain: self, index })
    }

    /// A cursor on the unit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn at(&self, index: usize) -> Node<'_, T> {
        assert!(index < self.items.len(), "chain index {index} out of bounds");
        Node { chain: self, index }
    }

    /// Every unit reachable from `start` by following successor links,
    /// `start` excluded
    pub fn successors(&self, start: usize) -> Successors<'_, T> {
        Successors {
            chain: self,
            cursor: self.next(start),
        }
    }

    /// Every unit reachable from `start` by following predecessor links,
    /// nearest first, `start` excluded
    pub fn predecessors(&self, start: usize) -> Predecessors<'_, T> {
        Predecessors {
            chain: self,
            cursor: self.prev(start),
        }
    }

    /// Cursors over the whole chain, first to last
    pub fn nodes(&self) -> impl Iterator<Item = Node<'_, T>> + '_ {
        (0..self.items.len()).map(move |index| Node { chain: self, index })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Chain<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A unit together with the chain it lives in
#[derive(Debug)]
pub struct Node<'a, T> {
    chain: &'a Chain<T>,
    index: usize,
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

impl<'a, T> Node<'a, T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &'a T {
        &self.chain.items[self.index]
    }

    pub fn chain(&self) -> &'a Chain<T> {
        self.chain
    }

    pub fn prev(&self) -> Option<Node<'a, T>> {
        self.chain.prev(self.index).and_then(|i| self.chain.node(i))
    }

    pub fn next(&self) -> Option<Node<'a, T>> {
        self.chain.next(self.index).and_then(|i| self.chain.node(i))
    }

    pub fn is_first(&self) -> bool {
        self.chain.prev(self.index).is_none()
    }

    pub fn is_last(&self) -> bool {
        self.chain.next(self.index).is_none()
    }

    pub fn successors(&self) -> Successors<'a, T> {
        self.chain.successors(self.index)
    }

    pub fn predecessors(&self) -> Predecessors<'a, T> {
        self.chain.predecessors(self.index)
    }
}

impl<T> Deref for Node<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

/// Iterator following successor links; ends at the first missing successor
pub struct Successors<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Successors<'a, T> {
    type Item = Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        self.cursor = self.chain.next(index);
        self.chain.node(index)
    }
}

/// Iterator following predecessor links
pub struct Predecessors<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Predecessors<'a, T> {
    type Item = Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        self.cursor = self.chain.prev(index);
        self.chain.node(index)
    }
}

//! In-order traversal over the tree.
//!
//! The iterator keeps an explicit stack of the left spine still to be
//! unwound, so traversal is lazy: each `next` does O(1) amortized work
//! and nothing is visited until the caller asks for it. Every call to
//! [`AvlTree::iter`](super::AvlTree::iter) builds a fresh iterator.

use std::iter::FusedIterator;

use crate::types::{KeyOrdered, NodeId};

use super::node::NodeArena;
use super::tree::AvlTree;

/// Lazy in-order iterator yielding records in ascending key order.
///
/// Read-only with respect to the tree; consuming the records (printing,
/// exporting) is entirely the caller's concern.
#[derive(Debug)]
pub struct InOrderIter<'a, R> {
    arena: &'a NodeArena<R>,
    /// Left spine still to be unwound, deepest node on top.
    stack: Vec<NodeId>,
    /// Records not yet yielded.
    remaining: usize,
}

impl<'a, R> InOrderIter<'a, R> {
    /// Creates an iterator over the whole tree rooted at `root`.
    pub(crate) fn new(arena: &'a NodeArena<R>, root: Option<NodeId>) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and every left descendant onto the stack.
    fn push_left_spine(&mut self, mut node: Option<NodeId>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.arena[id].left;
        }
    }
}

impl<'a, R> Iterator for InOrderIter<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let right = self.arena[id].right;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(&self.arena[id].record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for InOrderIter<'_, R> {}

impl<R> FusedIterator for InOrderIter<'_, R> {}

impl<'a, R: KeyOrdered> IntoIterator for &'a AvlTree<R> {
    type Item = &'a R;
    type IntoIter = InOrderIter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

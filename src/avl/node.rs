//! Node storage for the AVL tree.
//!
//! Nodes live in a slab arena and reference their children by [`NodeId`]
//! index rather than by owning pointer, so structural rewrites during
//! rebalancing are plain slot reassignments.

use std::ops::{Index, IndexMut};

use crate::types::NodeId;

/// A single tree node: one record, a cached height, and two child slots.
///
/// The record is immutable once placed. The cached height always equals
/// `1 + max(height(left), height(right))` (1 for a leaf) after the node
/// has settled; the tree recomputes it after every child reassignment.
#[derive(Debug, Clone)]
pub struct AvlNode<R> {
    /// The stored record.
    pub(crate) record: R,
    /// Cached subtree height; a fresh leaf has height 1.
    pub(crate) height: u32,
    /// Left child slot.
    pub(crate) left: Option<NodeId>,
    /// Right child slot.
    pub(crate) right: Option<NodeId>,
}

impl<R> AvlNode<R> {
    /// Creates a new leaf node holding `record`.
    pub(crate) fn new(record: R) -> Self {
        Self {
            record,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the stored record.
    #[inline]
    pub fn record(&self) -> &R {
        &self.record
    }

    /// Returns the cached subtree height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns true if the node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Slab arena holding every node in the tree.
///
/// [`alloc`](NodeArena::alloc) is the only place nodes are created; nodes
/// are never freed individually (the tree has no deletion operation), so
/// a `NodeId` stays valid for the lifetime of the arena.
#[derive(Debug, Clone)]
pub struct NodeArena<R> {
    nodes: Vec<AvlNode<R>>,
}

impl<R> NodeArena<R> {
    /// Creates an empty arena.
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a fresh leaf node and returns its ID.
    ///
    /// # Panics
    ///
    /// Panics if the arena has exhausted the u32 index space.
    pub(crate) fn alloc(&mut self, record: R) -> NodeId {
        assert!(
            self.nodes.len() < u32::MAX as usize,
            "node arena capacity exceeded"
        );
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(AvlNode::new(record));
        id
    }

    /// Returns the number of nodes in the arena.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena holds no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops all nodes, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl<R> Index<NodeId> for NodeArena<R> {
    type Output = AvlNode<R>;

    #[inline]
    fn index(&self, id: NodeId) -> &AvlNode<R> {
        &self.nodes[id.index()]
    }
}

impl<R> IndexMut<NodeId> for NodeArena<R> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut AvlNode<R> {
        &mut self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_node_is_leaf() {
        let node = AvlNode::new(42);
        assert_eq!(*node.record(), 42);
        assert_eq!(node.height(), 1);
        assert!(node.is_leaf());
    }

    #[test]
    fn test_arena_alloc_sequential_ids() {
        let mut arena = NodeArena::new();
        assert!(arena.is_empty());

        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");

        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(c, NodeId::new(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_arena_indexing() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(10);

        assert_eq!(*arena[id].record(), 10);

        arena[id].height = 3;
        assert_eq!(arena[id].height(), 3);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = NodeArena::new();
        arena.alloc(1);
        arena.alloc(2);

        arena.clear();
        assert!(arena.is_empty());

        // IDs restart from zero after a clear
        let id = arena.alloc(3);
        assert_eq!(id, NodeId::new(0));
    }
}

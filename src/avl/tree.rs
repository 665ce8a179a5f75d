//! Main AVL tree implementation.
//!
//! The tree descends recursively by comparison, inserts at the first
//! absent slot, then recomputes heights on the way back up and applies
//! one of the four canonical rotation cases (LL, RR, LR, RL) wherever a
//! node's balance factor leaves `{-1, 0, 1}`.
//!
//! A single insertion can unbalance any ancestor by at most one level,
//! which is what makes the textbook case selection valid: comparing the
//! just-inserted record against the unbalanced node's immediate child is
//! a correct proxy for which side the insertion went down.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{KeyOrdered, NodeId};

use super::iter::InOrderIter;
use super::node::NodeArena;

/// Counters describing the rebalancing work a tree has performed.
///
/// Each single rotation increments exactly one of the `ll`/`rr` counters;
/// each double rotation increments exactly one of `lr`/`rl` (not the
/// single-rotation counters it is composed of).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Left-left cases resolved with a single right rotation.
    pub ll_rotations: u64,
    /// Right-right cases resolved with a single left rotation.
    pub rr_rotations: u64,
    /// Left-right cases resolved with a left-then-right double rotation.
    pub lr_rotations: u64,
    /// Right-left cases resolved with a right-then-left double rotation.
    pub rl_rotations: u64,
    /// Inserts dropped because an equal key was already present.
    pub rejected_duplicates: u64,
}

impl TreeStats {
    /// Total number of rebalancing events (double rotations count once).
    #[must_use]
    pub fn total_rotations(&self) -> u64 {
        self.ll_rotations + self.rr_rotations + self.lr_rotations + self.rl_rotations
    }
}

/// A self-balancing binary search tree over records with an injected
/// total order.
///
/// The tree owns an arena of nodes addressed by [`NodeId`] and keeps the
/// AVL balance invariant (every node's balance factor in `{-1, 0, 1}`)
/// after each [`insert`](AvlTree::insert), bounding its height at
/// `1.44 * log2(n + 2)`.
///
/// Inserting a record whose key is already present is a silent no-op: the
/// existing entry is retained and the new record is dropped, even if
/// non-key fields differ.
///
/// The tree is not thread-safe; guard the whole tree with one exclusive
/// lock per insert if an embedding system shares it across threads, since
/// rebalancing touches arbitrarily many ancestors.
///
/// # Example
///
/// ```rust
/// use arbor::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for key in [10, 20, 30] {
///     tree.insert(key);
/// }
///
/// // The RR insertion order forced one left rotation; 20 is now the root.
/// assert_eq!(tree.root(), Some(&20));
/// assert_eq!(tree.stats().rr_rotations, 1);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<R> {
    /// Node storage.
    pub(crate) arena: NodeArena<R>,
    /// Root node, absent when the tree is empty.
    pub(crate) root: Option<NodeId>,
    /// Rebalancing counters.
    stats: TreeStats,
}

impl<R: KeyOrdered> AvlTree<R> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            stats: TreeStats::default(),
        }
    }

    /// Creates an empty tree with arena capacity for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            root: None,
            stats: TreeStats::default(),
        }
    }

    /// Returns the number of records in the tree.
    ///
    /// Nodes are created only when a genuinely new key is inserted, so
    /// this is exactly the arena's node count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the tree holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree (0 when empty, 1 for a lone root).
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Returns the record at the root, if any.
    #[inline]
    pub fn root(&self) -> Option<&R> {
        self.root.map(|id| self.arena[id].record())
    }

    /// Returns a copy of the rebalancing counters.
    #[inline]
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Drops every record and resets the counters.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.stats = TreeStats::default();
    }

    /// Inserts a record, rebalancing as needed.
    ///
    /// If a record with an equal key (per [`KeyOrdered::cmp_keys`]) is
    /// already present, the tree is left unchanged and `record` is
    /// dropped; `stats().rejected_duplicates` is the only trace of the
    /// attempt.
    pub fn insert(&mut self, record: R) {
        let (new_root, _) = self.insert_at(self.root, record);
        self.root = Some(new_root);
    }

    /// Returns a fresh lazy in-order iterator over the records, in
    /// ascending key order.
    pub fn iter(&self) -> InOrderIter<'_, R> {
        InOrderIter::new(&self.arena, self.root)
    }

    // =========================================================================
    // Height/Balance Helpers
    // =========================================================================

    /// Cached height of a possibly-absent subtree (0 for absent).
    ///
    /// Pure accessor: callers keep it fresh by recomputing a node's height
    /// immediately after any child reassignment, before an ancestor reads
    /// it again.
    #[inline]
    fn height_of(&self, node: Option<NodeId>) -> u32 {
        node.map_or(0, |id| self.arena[id].height)
    }

    /// Recomputes and caches a node's height from its children.
    fn recompute_height(&mut self, id: NodeId) {
        let height = 1 + self
            .height_of(self.arena[id].left)
            .max(self.height_of(self.arena[id].right));
        self.arena[id].height = height;
    }

    /// Balance factor: left height minus right height.
    #[inline]
    fn balance_factor(&self, id: NodeId) -> i32 {
        self.height_of(self.arena[id].left) as i32 - self.height_of(self.arena[id].right) as i32
    }

    // =========================================================================
    // Rotations
    // =========================================================================

    /// Right rotation around `y`; returns the new subtree root.
    ///
    /// Requires `y.left` to be present. Heights are recomputed child
    /// before parent (`y` ends up below `x`).
    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let x = self.arena[y].left.expect("rotate_right requires a left child");
        let t2 = self.arena[x].right;

        self.arena[x].right = Some(y);
        self.arena[y].left = t2;

        self.recompute_height(y);
        self.recompute_height(x);

        trace!(node = y.as_u32(), new_root = x.as_u32(), "rotate_right");
        x
    }

    /// Left rotation around `x`; mirror of [`rotate_right`](Self::rotate_right).
    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let y = self.arena[x].right.expect("rotate_left requires a right child");
        let t2 = self.arena[y].left;

        self.arena[y].left = Some(x);
        self.arena[x].right = t2;

        self.recompute_height(x);
        self.recompute_height(y);

        trace!(node = x.as_u32(), new_root = y.as_u32(), "rotate_left");
        y
    }

    // =========================================================================
    // Recursive Insert
    // =========================================================================

    /// Inserts into the subtree rooted at `node` and returns the subtree's
    /// new root together with the freshly created node, if any.
    ///
    /// Threading the inserted node's id back up lets the rebalancing step
    /// compare the just-inserted record (now living in the arena) against
    /// the unbalanced node's immediate child.
    fn insert_at(&mut self, node: Option<NodeId>, record: R) -> (NodeId, Option<NodeId>) {
        let Some(id) = node else {
            // The only place nodes are created.
            let new_id = self.arena.alloc(record);
            return (new_id, Some(new_id));
        };

        let inserted = match record.cmp_keys(&self.arena[id].record) {
            Ordering::Less => {
                let (new_left, inserted) = self.insert_at(self.arena[id].left, record);
                self.arena[id].left = Some(new_left);
                inserted
            }
            Ordering::Greater => {
                let (new_right, inserted) = self.insert_at(self.arena[id].right, record);
                self.arena[id].right = Some(new_right);
                inserted
            }
            Ordering::Equal => {
                // Duplicate key: keep the existing entry, drop the new
                // record. Not an error.
                self.stats.rejected_duplicates += 1;
                return (id, None);
            }
        };

        self.recompute_height(id);

        let Some(new_id) = inserted else {
            // A duplicate below us changed nothing structurally.
            return (id, None);
        };

        let balance = self.balance_factor(id);
        if (-1..=1).contains(&balance) {
            return (id, Some(new_id));
        }

        let new_root = if balance > 1 {
            let left = self.arena[id].left.expect("left-heavy node has a left child");
            match self.arena[new_id].record.cmp_keys(&self.arena[left].record) {
                Ordering::Less => {
                    // LL: single right rotation.
                    self.stats.ll_rotations += 1;
                    self.rotate_right(id)
                }
                Ordering::Greater => {
                    // LR: rotate the left child left, then this node right.
                    let new_left = self.rotate_left(left);
                    self.arena[id].left = Some(new_left);
                    self.stats.lr_rotations += 1;
                    self.rotate_right(id)
                }
                // Unreachable: an equal key never creates a node.
                Ordering::Equal => id,
            }
        } else {
            let right = self.arena[id].right.expect("right-heavy node has a right child");
            match self.arena[new_id].record.cmp_keys(&self.arena[right].record) {
                Ordering::Greater => {
                    // RR: single left rotation.
                    self.stats.rr_rotations += 1;
                    self.rotate_left(id)
                }
                Ordering::Less => {
                    // RL: rotate the right child right, then this node left.
                    let new_right = self.rotate_right(right);
                    self.arena[id].right = Some(new_right);
                    self.stats.rl_rotations += 1;
                    self.rotate_left(id)
                }
                Ordering::Equal => id,
            }
        };

        (new_root, Some(new_id))
    }
}

impl<R: KeyOrdered> Default for AvlTree<R> {
    fn default() -> Self {
        Self::new()
    }
}

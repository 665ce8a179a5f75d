//! AVL ordered index.
//!
//! An AVL tree keeps the difference between subtree heights (the balance
//! factor) within `{-1, 0, 1}` at every node, restoring the invariant
//! after each insertion with at most one single or double rotation. This
//! bounds the tree height at `1.44 * log2(n + 2)`, so insertion and
//! traversal stay logarithmic regardless of insertion order.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  AvlTree<R>                  │
//! │  root: Option<NodeId>     stats: TreeStats  │
//! │  ┌────────────────────────────────────────┐  │
//! │  │            NodeArena<R>                │  │
//! │  │  [ AvlNode | AvlNode | AvlNode | ... ] │  │
//! │  │    record, height, left/right NodeIds  │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Nodes live in a slab arena and point at each other through [`NodeId`]
//! indices, so rotations are plain slot reassignments. The record type is
//! anything implementing [`KeyOrdered`]; the tree never inspects records
//! beyond that single comparison.
//!
//! [`NodeId`]: crate::types::NodeId
//! [`KeyOrdered`]: crate::types::KeyOrdered

mod iter;
mod node;
mod tree;

// Re-export main types
pub use iter::InOrderIter;
pub use node::{AvlNode, NodeArena};
pub use tree::{AvlTree, TreeStats};

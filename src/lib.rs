//! # arbor
//!
//! An in-memory AVL ordered index with arena-backed nodes.
//!
//! Arbor stores records identified by an injected total order and keeps
//! itself height-balanced after every insertion, guaranteeing O(log n)
//! depth. It provides:
//!
//! - **Types**: [`NodeId`] arena indices and the [`KeyOrdered`] comparison
//!   capability
//! - **Tree**: [`AvlTree`] with balance-factor-driven rebalancing and
//!   per-case rotation counters in [`TreeStats`]
//! - **Traversal**: [`InOrderIter`], a lazy in-order walk yielding records
//!   in ascending key order
//!
//! ## Example
//!
//! ```rust
//! use arbor::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! tree.insert(30);
//! tree.insert(10);
//! tree.insert(20);
//!
//! let sorted: Vec<i32> = tree.iter().copied().collect();
//! assert_eq!(sorted, vec![10, 20, 30]);
//! assert_eq!(tree.root(), Some(&20));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod avl;
pub mod types;

// Re-export commonly used items at the crate root
pub use avl::{AvlTree, InOrderIter, TreeStats};
pub use types::{KeyOrdered, NodeId};

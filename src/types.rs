//! Core types for the arbor index.
//!
//! `NodeId` provides a type-safe wrapper around arena indices, preventing
//! accidental misuse of raw integers. `KeyOrdered` is the comparison
//! capability the tree is generic over.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Node identifier - uniquely identifies a node in the tree's arena.
///
/// Node IDs are assigned sequentially when a node is allocated and remain
/// stable for the lifetime of the tree; nodes are never freed individually.
///
/// # Example
///
/// ```rust
/// use arbor::NodeId;
///
/// let node = NodeId::new(42);
/// assert_eq!(node.as_u32(), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a new `NodeId` from a raw u32 value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw u32 value.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the ID as a usize arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// The injected total order the tree keeps records sorted by.
///
/// A record's key is whatever `cmp_keys` says it is: two records comparing
/// [`Ordering::Equal`] carry the same key and the tree treats the second
/// one as a duplicate, even if other fields differ.
///
/// Every `T: Ord` gets a blanket implementation that compares whole
/// values. Record types whose identity is a subset of their fields should
/// implement `KeyOrdered` directly (and not derive `Ord`):
///
/// ```rust
/// use arbor::KeyOrdered;
/// use std::cmp::Ordering;
///
/// struct Station {
///     id: u32,
///     label: String,
/// }
///
/// impl KeyOrdered for Station {
///     fn cmp_keys(&self, other: &Self) -> Ordering {
///         self.id.cmp(&other.id)
///     }
/// }
/// ```
///
/// The implementation must be a valid total order (reflexive-zero,
/// antisymmetric, transitive); the tree performs no runtime verification.
pub trait KeyOrdered {
    /// Three-way comparison of this record's key against another's.
    fn cmp_keys(&self, other: &Self) -> Ordering;
}

impl<T: Ord> KeyOrdered for T {
    #[inline]
    fn cmp_keys(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

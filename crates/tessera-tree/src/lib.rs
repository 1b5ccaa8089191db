//! Arena-based node tree for the Tessera layout engine.
//!
//! # Design
//!
//! The tree stores every node in one contiguous vector and uses [`NodeId`]
//! indices for all relationships. A parent owns its children only through
//! the ordered `children` list; the child's `parent` field is a plain
//! back-reference index, so ownership can never become cyclic.
//!
//! Invariants maintained by every mutation:
//! - a node appears in at most one `children` list;
//! - `parent(child) == Some(p)` exactly when `child` is in `children(p)`;
//! - no node is its own ancestor.
//!
//! Detached nodes stay allocated in the arena and can be re-attached later.

use std::ops::{Index, IndexMut};

use thiserror::Error;

/// A type-safe index into a [`Tree`].
///
/// `NodeId` provides O(1) access to any node without holding a borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural misuse of a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id does not name a node of this tree.
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),
    /// Attaching `child` under `parent` would make a node its own ancestor.
    #[error("cannot attach {child} under {parent}: {child} is an ancestor of {parent}")]
    Cycle {
        /// The would-be parent.
        parent: NodeId,
        /// The node being attached.
        child: NodeId,
    },
    /// `child` is not currently a child of `parent`.
    #[error("{child} is not a child of {parent}")]
    NotAChild {
        /// The expected parent.
        parent: NodeId,
        /// The node that was looked up.
        child: NodeId,
    },
}

/// One arena slot: payload plus structural links.
#[derive(Debug, Clone)]
struct Slot<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena tree with O(1) node access and parent lookup.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of allocated nodes (attached or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no node has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Allocate a new, detached node and return its ID.
    pub fn alloc(&mut self, data: T) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            data,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Whether `id` names a node of this tree.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.slots.len()
    }

    /// Get a node's payload by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.data)
    }

    /// Get a mutable reference to a node's payload by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.data)
    }

    /// Iterate over every allocated node in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (NodeId(index), &slot.data))
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first, so a
    /// node is never owned by two parents.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] for foreign ids and
    /// [`TreeError::Cycle`] if `child` is `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.insert_before(parent, child, None)
    }

    /// Inserts `child` into `parent`'s children before `reference`, or at
    /// the end when `reference` is `None` or not a child of `parent`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Tree::append_child`].
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(child)?;
        if child == parent || self.is_descendant_of(parent, child) {
            return Err(TreeError::Cycle { parent, child });
        }

        let _ = self.detach(child);

        let siblings = &mut self.slots[parent.0].children;
        let position = reference
            .and_then(|r| siblings.iter().position(|&c| c == r))
            .unwrap_or(siblings.len());
        siblings.insert(position, child);
        self.slots[child.0].parent = Some(parent);
        Ok(())
    }

    /// Removes `child` from `parent`'s children, leaving it detached.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotAChild`] if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(child)?;
        if self.slots[child.0].parent != Some(parent) {
            return Err(TreeError::NotAChild { parent, child });
        }
        let _ = self.detach(child);
        Ok(())
    }

    /// Detach a node from its parent, returning the former parent.
    ///
    /// Detaching a root (or unknown id) is a no-op returning `None`.
    pub fn detach(&mut self, child: NodeId) -> Option<NodeId> {
        let parent = self.slots.get_mut(child.0)?.parent.take()?;
        self.slots[parent.0].children.retain(|&c| c != child);
        Some(parent)
    }

    /// Detach every child of `parent` for which `remove` returns `true`,
    /// preserving the order of the remaining children.
    ///
    /// Returns the detached ids in their former order.
    pub fn remove_children_where<F>(&mut self, parent: NodeId, mut remove: F) -> Vec<NodeId>
    where
        F: FnMut(NodeId, &T) -> bool,
    {
        let Some(slot) = self.slots.get(parent.0) else {
            return Vec::new();
        };
        let removed: Vec<NodeId> = slot
            .children
            .iter()
            .copied()
            .filter(|&c| remove(c, &self.slots[c.0].data))
            .collect();
        for &child in &removed {
            let _ = self.detach(child);
        }
        removed
    }

    /// Detach all children of `parent`, returning them in former order.
    pub fn clear_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let Some(slot) = self.slots.get_mut(parent.0) else {
            return Vec::new();
        };
        let children = std::mem::take(&mut slot.children);
        for &child in &children {
            self.slots[child.0].parent = None;
        }
        children
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    /// Get all children of a node, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .map_or(&[], |slot| slot.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let position = siblings.iter().position(|&c| c == id)?;
        siblings.get(position + 1).copied()
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let position = siblings.iter().position(|&c| c == id)?;
        position.checked_sub(1).map(|p| siblings[p])
    }

    /// Check if `descendant` is a strict descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_, T> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over `id` and all its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_, T> {
        DescendantIterator {
            tree: self,
            stack: if self.contains(id) { vec![id] } else { Vec::new() },
        }
    }
}

/// # Panics
///
/// Panics if `id` was not allocated by this tree.
impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.slots[id.0].data
    }
}

/// # Panics
///
/// Panics if `id` was not allocated by this tree.
impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.slots[id.0].data
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a, T> {
    tree: &'a Tree<T>,
    current: Option<NodeId>,
}

impl<T> Iterator for AncestorIterator<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct DescendantIterator<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for DescendantIterator<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

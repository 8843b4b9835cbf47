//! Name-keyed family tree.
//!
//! All lookups use exact, case-sensitive name comparison and walk the tree in
//! pre-order (a node, then its children in insertion order). Names are not
//! unique: the first pre-order match wins. Callers that need to address one of
//! several equally named members use the index-based methods instead.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{FamilyArena, Individual, MemberNode, PostOrderIterator, PreOrderIterator};
use crate::domain::error::{DomainError, DomainResult};

/// A rooted family tree. The root always exists and can never be removed.
#[derive(Debug)]
pub struct FamilyTree {
    arena: FamilyArena,
    root: Index,
}

impl FamilyTree {
    /// Creates a tree holding only the root individual.
    #[instrument(level = "debug", skip_all, fields(root = %root_name.as_ref()))]
    pub fn new(root_name: impl AsRef<str>, root_birthdate: impl AsRef<str>) -> Self {
        let mut arena = FamilyArena::new();
        let root = arena.insert_root(Individual::new(
            root_name.as_ref(),
            root_birthdate.as_ref(),
        ));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_individual(&self) -> &Individual {
        // the root is never removed from the arena
        &self.arena[self.root].data
    }

    /// Returns the first individual named `name` in pre-order, if any.
    #[instrument(level = "trace", skip(self))]
    pub fn find_individual(&self, name: &str) -> Option<Index> {
        self.arena
            .iter()
            .find(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx)
    }

    /// All individuals named `name`, in pre-order.
    pub fn find_all(&self, name: &str) -> Vec<Index> {
        self.arena
            .iter()
            .filter(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Appends a child under the first individual named `parent_name`.
    ///
    /// Returns false, leaving the tree untouched, if no such parent exists.
    #[instrument(level = "debug", skip(self))]
    pub fn add_child(&mut self, parent_name: &str, child_name: &str, child_birthdate: &str) -> bool {
        let Some(parent) = self.find_individual(parent_name) else {
            debug!("parent not found");
            return false;
        };
        self.add_child_at(parent, Individual::new(child_name, child_birthdate))
            .is_ok()
    }

    /// Removes the first non-root individual named `name` with its subtree.
    ///
    /// Any name equal to the root's name is refused, even when it would match
    /// a descendant.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_member(&mut self, name: &str) -> bool {
        if self.root_individual().name == name {
            debug!("refusing to delete root");
            return false;
        }
        // pre-order minus the root: a child is checked before its own subtree,
        // and its subtree before its next sibling
        let target = self
            .arena
            .iter()
            .skip(1)
            .find(|(_, node)| node.data.name == name)
            .map(|(idx, _)| idx);

        match target {
            Some(idx) => self.remove_subtree(idx).is_ok(),
            None => false,
        }
    }

    /// Appends `individual` as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child_at(&mut self, parent: Index, individual: Individual) -> DomainResult<Index> {
        let idx = self
            .arena
            .insert_child(individual, parent)
            .ok_or(DomainError::UnknownMember(parent))?;
        debug!(?idx, ?parent, "added member");
        Ok(idx)
    }

    /// Removes `idx` and everything below it; returns the number of removed members.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_subtree(&mut self, idx: Index) -> DomainResult<usize> {
        if idx == self.root {
            return Err(DomainError::RootNotRemovable(
                self.root_individual().name.clone(),
            ));
        }
        match self.arena.remove_subtree(idx) {
            0 => Err(DomainError::UnknownMember(idx)),
            removed => {
                debug!(?idx, removed, "removed subtree");
                Ok(removed)
            }
        }
    }

    pub fn individual(&self, idx: Index) -> Option<&Individual> {
        self.arena.get_node(idx).map(|node| &node.data)
    }

    pub fn node(&self, idx: Index) -> Option<&MemberNode> {
        self.arena.get_node(idx)
    }

    /// Children of `idx` in insertion order; empty for a stale index.
    pub fn children(&self, idx: Index) -> &[Index] {
        self.arena
            .get_node(idx)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.arena.get_node(idx).and_then(|node| node.parent)
    }

    /// Number of individuals in the tree, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.arena.depth()
    }

    /// Names in pre-order.
    pub fn names(&self) -> Vec<String> {
        self.arena.iter().map(|(_, node)| node.data.name.clone()).collect()
    }

    pub fn leaf_names(&self) -> Vec<String> {
        self.arena.leaf_nodes()
    }

    pub fn iter(&self) -> PreOrderIterator<'_> {
        self.arena.iter()
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        self.arena.iter_postorder()
    }
}

use generational_arena::{Arena, Index};
use std::{fmt, ops};
use tracing::instrument;

/// Data payload for tree nodes: one person of the genealogy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// Display name, also the lookup key (not unique)
    pub name: String,
    /// Free-form birthdate, never validated
    pub birthdate: String,
}

impl Individual {
    pub fn new(name: impl Into<String>, birthdate: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birthdate: birthdate.into(),
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.birthdate)
    }
}

/// Tree node in the arena-based family structure.
#[derive(Debug)]
pub struct MemberNode {
    /// The individual stored in this node
    pub data: Individual,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based tree storage.
///
/// Every node is owned by the arena; parent/child links are plain indices, so
/// a node belongs to exactly one parent's `children` list. Generational
/// indices make a removed node's index resolve to `None` even after its slot
/// has been reused.
#[derive(Debug)]
pub struct FamilyArena {
    /// Arena storage for all tree nodes
    arena: Arena<MemberNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl Default for FamilyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ops::Index<Index> for FamilyArena {
    type Output = MemberNode;

    fn index(&self, idx: Index) -> &MemberNode {
        &self.arena[idx]
    }
}

impl FamilyArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Inserts a parentless node and makes it the root.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_root(&mut self, data: Individual) -> Index {
        let node_idx = self.arena.insert(MemberNode {
            data,
            parent: None,
            children: Vec::new(),
        });
        self.root = Some(node_idx);
        node_idx
    }

    /// Inserts a node as the last child of `parent`.
    ///
    /// Returns `None` if `parent` is stale; nothing is inserted in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, data: Individual, parent: Index) -> Option<Index> {
        if !self.arena.contains(parent) {
            return None;
        }
        let node_idx = self.arena.insert(MemberNode {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent) = self.arena.get_mut(parent) {
            parent.children.push(node_idx);
        }
        Some(node_idx)
    }

    /// Detaches `idx` from its parent and drops it with its whole subtree.
    ///
    /// Returns the number of nodes removed (0 for a stale index). Siblings
    /// keep their relative order.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_subtree(&mut self, idx: Index) -> usize {
        let parent = match self.arena.get(idx) {
            Some(node) => node.parent,
            None => return 0,
        };

        match parent {
            Some(parent_idx) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    parent.children.retain(|&child| child != idx);
                }
            }
            None => self.root = None,
        }

        let mut removed = 0;
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&MemberNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Collects the names of all leaf nodes (no children), left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a FamilyArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a FamilyArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a MemberNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    arena: &'a FamilyArena,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(arena: &'a FamilyArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a MemberNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}

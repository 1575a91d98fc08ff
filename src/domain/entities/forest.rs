//! Forest of menu nodes
//!
//! One arena owns every node of one menu; `NodeId` is an index into that
//! arena. Parent links are plain index lookups, never owning references,
//! so the structure cannot form reference cycles regardless of what the
//! input data looked like.

use crate::models::{ItemId, MenuItemRecord};

/// Index of a node within its forest's arena
///
/// Only valid for the forest that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One menu item placed in the tree
#[derive(Debug, Clone)]
pub struct Node {
    pub record: MenuItemRecord,
    pub parent: Option<NodeId>,
    /// Direct children, sorted by the sibling-order rule
    pub children: Vec<NodeId>,
    /// Distance from the root level (roots are 0)
    pub depth: usize,
}

impl Node {
    pub fn id(&self) -> ItemId {
        self.record.id
    }
}

/// All nodes of one menu, roots first
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    pub(crate) fn new(nodes: Vec<Node>, roots: Vec<NodeId>) -> Self {
        Self { nodes, roots }
    }

    /// Look up a node; panics on an id from another forest.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Root-level nodes in sibling order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first walk over the whole forest, siblings in order
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            forest: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Walk from a node's parent up to its root, exclusive of the node
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            forest: self,
            next: self.node(id).parent,
        }
    }
}

pub struct Preorder<'a> {
    forest: &'a Forest,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = self.forest.node(id);
        self.stack.extend(node.children.iter().rev().copied());
        Some(id)
    }
}

pub struct Ancestors<'a> {
    forest: &'a Forest,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.forest.node(id).parent;
        Some(id)
    }
}

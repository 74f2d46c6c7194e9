//! Error-node graph produced by a failed form submission, and its flattening
//! into a list of user-facing messages.
//!
//! DESIGN
//! ======
//! Nodes live in an arena and refer to children by `NodeId`, so the graph may
//! contain shared or cyclic links. Flattening is a depth-first walk that keeps
//! a seen set of node ids and emits each distinct message once.

#[cfg(test)]
#[path = "form_errors_test.rs"]
mod form_errors_test;

use std::collections::HashSet;

/// Index of a node inside an [`ErrorTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Error payload carried by one node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorNode {
    /// Primary message for this node, if any.
    pub message: Option<String>,
    /// Additional messages keyed by rule (all-criteria mode).
    pub types: Vec<String>,
}

#[derive(Clone, Debug)]
struct Slot {
    node: ErrorNode,
    children: Vec<(String, NodeId)>,
}

/// Arena of error nodes rooted at a message-less root.
#[derive(Clone, Debug)]
pub struct ErrorTree {
    slots: Vec<Slot>,
}

impl Default for ErrorTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorTree {
    pub fn new() -> Self {
        Self { slots: vec![Slot { node: ErrorNode::default(), children: Vec::new() }] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> Option<&ErrorNode> {
        self.slots.get(id.0).map(|s| &s.node)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.len() <= 1
    }

    /// Insert `node` under `parent` at `key`; returns the new node's id.
    pub fn add_child(&mut self, parent: NodeId, key: &str, node: ErrorNode) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot { node, children: Vec::new() });
        self.link(parent, key, id);
        id
    }

    /// Point `parent[key]` at an existing node. May create cycles.
    pub fn link(&mut self, parent: NodeId, key: &str, target: NodeId) {
        if target.0 >= self.slots.len() {
            return;
        }
        if let Some(slot) = self.slots.get_mut(parent.0) {
            slot.children.push((key.to_owned(), target));
        }
    }

    /// Every distinct message reachable from the root, depth-first in
    /// insertion order. Each child's own message and `types` are emitted
    /// before its descendants.
    pub fn flatten_messages(&self) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut emitted = HashSet::new();
        let mut out = Vec::new();
        self.walk(self.root(), &mut visited, &mut emitted, &mut out);
        out
    }

    fn walk(&self, id: NodeId, visited: &mut HashSet<NodeId>, emitted: &mut HashSet<String>, out: &mut Vec<String>) {
        if !visited.insert(id) {
            return;
        }
        let Some(slot) = self.slots.get(id.0) else {
            return;
        };
        for (_, child_id) in &slot.children {
            let Some(child) = self.node(*child_id) else {
                continue;
            };
            for message in child.message.iter().chain(child.types.iter()) {
                if emitted.insert(message.clone()) {
                    out.push(message.clone());
                }
            }
            self.walk(*child_id, visited, emitted, out);
        }
    }
}

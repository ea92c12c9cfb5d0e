//! The active path: live state instances from root to leaf.

use crate::builder::StateRegistry;
use crate::core::{State, StateId};

/// A live state on the active path.
pub(crate) struct StateNode<I: StateId, O: ?Sized> {
    pub(crate) id: I,
    pub(crate) parent: Option<I>,
    pub(crate) state: Box<dyn State<I, O>>,
}

/// Ordered chain of live states, root first.
pub(crate) struct ActivePath<I: StateId, O: ?Sized> {
    nodes: Vec<StateNode<I, O>>,
}

impl<I: StateId, O: ?Sized> ActivePath<I, O> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn leaf(&self) -> Option<&StateNode<I, O>> {
        self.nodes.last()
    }

    pub(crate) fn leaf_mut(&mut self) -> Option<&mut StateNode<I, O>> {
        self.nodes.last_mut()
    }

    pub(crate) fn node_mut(&mut self, depth: usize) -> Option<&mut StateNode<I, O>> {
        self.nodes.get_mut(depth)
    }

    pub(crate) fn push(&mut self, node: StateNode<I, O>) {
        self.nodes.push(node);
    }

    pub(crate) fn pop(&mut self) -> Option<StateNode<I, O>> {
        self.nodes.pop()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    pub(crate) fn contains(&self, id: I) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Check that every adjacent pair matches the declared hierarchy.
    pub(crate) fn is_well_formed(&self, registry: &StateRegistry<I, O>) -> bool {
        let mut expected_parent = None;
        for node in &self.nodes {
            if node.parent != expected_parent {
                return false;
            }
            match registry.parent_of(node.id) {
                Ok(declared) if declared == node.parent => {}
                _ => return false,
            }
            expected_parent = Some(node.id);
        }
        true
    }
}

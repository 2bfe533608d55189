//! Preorder traversal
//!
//! Lazy walk over the tree: node first, then the left subtree, then
//! the right subtree. Absent children surface as explicit markers so
//! a sink can reconstruct the full shape from the flat event stream.
//!
//! The walk drives an explicit stack instead of recursing, so even a
//! degenerate linked-list-shaped tree cannot exhaust the call stack.

use super::TreeNode;
use crate::OrderedList;

#[cfg(feature = "visualize")]
use serde::Serialize;

/// One step of a preorder walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEvent<'a> {
    /// A node's list, at the node's depth (root = 0)
    Node {
        /// Distance from the root
        depth: usize,
        /// List stored at the node
        list: &'a OrderedList,
    },

    /// Marker for an absent child slot
    NoChild {
        /// Depth the child would occupy
        depth: usize,
    },
}

impl TreeEvent<'_> {
    /// Depth the event occurred at
    #[inline]
    pub fn depth(&self) -> usize {
        match self {
            TreeEvent::Node { depth, .. } | TreeEvent::NoChild { depth } => *depth,
        }
    }

    /// Check whether the event carries a list
    #[inline]
    pub fn is_node(&self) -> bool {
        matches!(self, TreeEvent::Node { .. })
    }

    /// Flatten into a serializable record
    #[cfg(feature = "visualize")]
    pub fn record(&self) -> TraceRecord {
        match self {
            TreeEvent::Node { depth, list } => TraceRecord {
                depth: *depth,
                values: Some(list.iter().collect()),
            },
            TreeEvent::NoChild { depth } => TraceRecord {
                depth: *depth,
                values: None,
            },
        }
    }
}

/// Flat traversal record, `values = None` for an absent child
#[cfg(feature = "visualize")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Distance from the root
    pub depth: usize,

    /// Elements in ascending order, or `None` for a missing child
    pub values: Option<Vec<i64>>,
}

/// Work item: either a subtree still to visit or a recorded absence
#[derive(Debug)]
enum Pending<'a> {
    Visit { node: &'a TreeNode, depth: usize },
    Missing { depth: usize },
}

fn pending_for<'a>(child: Option<&'a TreeNode>, depth: usize) -> Pending<'a> {
    match child {
        Some(node) => Pending::Visit { node, depth },
        None => Pending::Missing { depth },
    }
}

/// Lazy preorder iterator
///
/// Generated fresh by every [`crate::ListTree::traverse`] call; two
/// walks with no interleaved insertion yield identical events.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: Vec<Pending<'a>>,
}

impl<'a> Preorder<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            stack: vec![pending_for(root, 0)],
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = TreeEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Pending::Missing { depth } => Some(TreeEvent::NoChild { depth }),
            Pending::Visit { node, depth } => {
                // Right goes on the stack first so the left subtree
                // drains completely before the right one starts.
                self.stack.push(pending_for(node.right(), depth + 1));
                self.stack.push(pending_for(node.left(), depth + 1));

                Some(TreeEvent::Node {
                    depth,
                    list: node.list(),
                })
            }
        }
    }
}

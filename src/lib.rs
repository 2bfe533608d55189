//! # List trees
//!
//! A list tree is a binary search tree whose nodes are whole sorted
//! integer lists, ordered against one another by a three-level
//! composite rule:
//!
//! 1. **Count**: fewer elements compare less
//! 2. **Total**: equal counts fall through to the element sum
//! 3. **Elements**: equal counts and totals fall through to an
//!    element-wise comparison, first differing pair decisive
//!
//! Exact ties always descend right, so duplicate lists collect in the
//! right subtree of the list they match. The tree is unbalanced; its
//! shape follows insertion order directly.
//!
//! ## Usage Example
//!
//! ```
//! use listtree::TreeBuilder;
//!
//! let mut builder = TreeBuilder::new();
//! builder.push_sequence(&[3, 1, 2])?;
//! builder.push_sequence(&[5, 6, 7])?;
//!
//! let tree = builder.finish();
//! assert_eq!(tree.len(), 2);
//! # Ok::<(), listtree::ListTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod list;   // Self-sorting ordered lists
pub mod render; // Textual sink for traversal output
pub mod tree;   // BST keyed by whole lists

// Re-exports for convenience
pub use list::{ElementIter, OrderedList};
pub use render::{render_tree, RenderOptions};
#[cfg(feature = "visualize")]
pub use tree::TraceRecord;
pub use tree::{ListTree, Preorder, TreeEvent, TreeNode};

use thiserror::Error;
use tracing::debug;

/// Errors that can arise while assembling lists for the tree
///
/// Tree insertion and traversal themselves are total; only list
/// construction has preconditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTreeError {
    /// Element insertion attempted on a list with no seed element
    #[error("cannot insert into an empty list; seed it with a first element")]
    EmptyListInsert,

    /// List construction attempted from a sequence with no integers
    #[error("cannot build a list from an empty sequence")]
    EmptySequence,
}

/// Folds tokenized integer sequences into a growing tree
///
/// One list per sequence: the first integer seeds the list, the rest
/// are spliced into sorted position, and the finished list is
/// installed in the tree. The tree is an explicit value surrendered by
/// [`TreeBuilder::finish`]; nothing lives in process-wide state.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: ListTree,
}

impl TreeBuilder {
    /// Create a builder holding an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one list from `values` and install it in the tree
    ///
    /// The sequence's order is irrelevant; the list sorts itself as it
    /// grows. Fails only on an empty sequence.
    pub fn push_sequence(&mut self, values: &[i64]) -> Result<(), ListTreeError> {
        let list = OrderedList::from_values(values)?;

        debug!(
            count = list.count(),
            total = list.total(),
            installed = self.tree.len(),
            "list assembled"
        );

        self.tree.insert(list);
        Ok(())
    }

    /// Number of lists installed so far
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check whether no list has been installed yet
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Surrender the finished tree
    pub fn finish(self) -> ListTree {
        self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_installs_one_list_per_sequence() {
        let mut builder = TreeBuilder::new();
        builder.push_sequence(&[1, 2]).unwrap();
        builder.push_sequence(&[5, 6, 7]).unwrap();
        builder.push_sequence(&[0]).unwrap();

        let tree = builder.finish();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn builder_rejects_empty_sequence() {
        let mut builder = TreeBuilder::new();

        assert_eq!(
            builder.push_sequence(&[]),
            Err(ListTreeError::EmptySequence)
        );
        assert!(builder.is_empty());
    }
}

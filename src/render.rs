//! Output sink: textual tree rendering
//!
//! Consumes the flat preorder event stream and reconstructs the
//! indented printout: one `Level N:` line per node, `Left children:` /
//! `Right children:` labels between subtrees, and a `No child.` line
//! per absent slot. Which side a subtree belongs to is recovered from
//! the stream alone by tracking how many children each open node has
//! yet to start.

use std::fmt::{self, Write};

use crate::{ListTree, TreeEvent};

/// Presentation knobs for [`render_tree`]
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces added per tree level
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Render the whole tree into `out`
///
/// Level numbers start at 1 for the root; an empty tree renders as a
/// single `No child.` line.
pub fn render_tree<W: Write>(
    tree: &ListTree,
    options: &RenderOptions,
    out: &mut W,
) -> fmt::Result {
    // open[i] = children of the node at depth i that have not started
    // yet: 2 before the left subtree, 1 before the right.
    let mut open: Vec<u8> = Vec::new();

    for event in tree.traverse() {
        let depth = event.depth();
        open.truncate(depth);

        if let Some(remaining) = open.last_mut() {
            let label = if *remaining == 2 {
                "Left children:"
            } else {
                "Right children:"
            };
            *remaining -= 1;

            pad(out, options.indent * (depth - 1))?;
            writeln!(out, " {label}")?;
        }

        match event {
            TreeEvent::Node { depth, list } => {
                pad(out, options.indent * depth)?;
                writeln!(out, "Level {}: {}", depth + 1, list)?;
                open.push(2);
            }
            TreeEvent::NoChild { depth } => {
                pad(out, options.indent * depth)?;
                writeln!(out, " No child.")?;
            }
        }
    }

    Ok(())
}

fn pad<W: Write>(out: &mut W, width: usize) -> fmt::Result {
    write!(out, "{:width$}", "")
}

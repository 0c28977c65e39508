use std::io::{self, Write};

use crate::model::{MenuTree, NodeId};

/// Print an indented outline of the menu labels.
///
/// Separator nodes produce no output; `&` accelerator markers are stripped.
pub fn print_tree(tree: &MenuTree, out: &mut dyn Write) -> io::Result<()> {
    for &child in tree.node(tree.root()).children() {
        print_node(tree, child, 0, out)?;
    }
    Ok(())
}

fn print_node(tree: &MenuTree, id: NodeId, indent: usize, out: &mut dyn Write) -> io::Result<()> {
    let node = tree.node(id);
    if node.label.is_empty() {
        return Ok(());
    }
    writeln!(out, "{}- {}", " ".repeat(indent), node.plain_label())?;
    for &child in node.children() {
        print_node(tree, child, indent + 2, out)?;
    }
    Ok(())
}

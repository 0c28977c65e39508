use std::io::{self, Write};

use crate::model::{MenuTree, NodeId};

/// Print every command and its place in the menu hierarchy.
pub fn print_commands(tree: &MenuTree, out: &mut dyn Write) -> io::Result<()> {
    print_commands_with(tree, out, " | ", " > ")
}

/// `print_commands` with custom separators between the command and its path
/// and between path segments.
pub fn print_commands_with(
    tree: &MenuTree,
    out: &mut dyn Write,
    item_sep: &str,
    menu_sep: &str,
) -> io::Result<()> {
    print_node(tree, tree.root(), item_sep, menu_sep, out)
}

fn print_node(
    tree: &MenuTree,
    id: NodeId,
    item_sep: &str,
    menu_sep: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    let node = tree.node(id);
    if let Some(data) = &node.data {
        if !data.command.is_empty() {
            writeln!(
                out,
                "{}{}{}",
                data.command,
                item_sep,
                tree.path_labels(id).join(menu_sep)
            )?;
        }
    }
    for &child in node.children() {
        print_node(tree, child, item_sep, menu_sep, out)?;
    }
    Ok(())
}

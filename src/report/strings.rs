use std::io::{self, Write};

use crate::model::{MenuTree, NodeId};

/// Print the translatable strings as a Python source fragment.
///
/// The translation pipeline greps these `_('...')` calls out of generated
/// files, so the output has to stay a valid Python list literal: a
/// `menustrings_{name} = [` header, one entry per string, and an empty
/// string sentinel closing the list.
pub fn print_strings(tree: &MenuTree, name: &str, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "menustrings_{} = [", name)?;
    for &child in tree.node(tree.root()).children() {
        print_node(tree, child, out)?;
    }
    writeln!(out, "    '']")?;
    Ok(())
}

fn print_node(tree: &MenuTree, id: NodeId, out: &mut dyn Write) -> io::Result<()> {
    let node = tree.node(id);

    // Submenus carry their string on the node itself; items store the
    // undecorated label and the description in their data record.
    if !node.label.is_empty() && node.data.is_none() {
        writeln!(out, "    _('{}'),", escape(&node.label))?;
    }
    if let Some(data) = &node.data {
        if !data.label.is_empty() {
            writeln!(out, "    _('{}'),", escape(&data.label))?;
        }
        if !data.description.is_empty() {
            writeln!(out, "    _('{}'),", escape(&data.description))?;
        }
    }

    for &child in node.children() {
        print_node(tree, child, out)?;
    }
    Ok(())
}

/// Escape a string for a single-quoted Python literal.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

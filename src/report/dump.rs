use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::{json, Value};
use std::io::{self, Write};

use crate::model::{MenuTree, NodeId};

/// Print the tree with the data stored on each node.
pub fn print_dump(tree: &MenuTree, out: &mut dyn Write) -> io::Result<()> {
    for &child in tree.node(tree.root()).children() {
        print_node(tree, child, 0, out)?;
    }
    Ok(())
}

fn print_node(tree: &MenuTree, id: NodeId, indent: usize, out: &mut dyn Write) -> io::Result<()> {
    let node = tree.node(id);
    let pad = " ".repeat(indent);

    if node.is_separator() {
        writeln!(out, "{}-----", pad)?;
    } else {
        writeln!(out, "{}- {}", pad, node.label)?;
        if let Some(data) = &node.data {
            writeln!(out, "{}  description: {}", pad, data.description)?;
            writeln!(out, "{}  handler: {}", pad, data.handler)?;
            if !data.command.is_empty() {
                writeln!(out, "{}  command: {}", pad, data.command)?;
            }
            if !data.keywords.is_empty() {
                writeln!(out, "{}  keywords: {}", pad, data.keywords)?;
            }
            if !data.shortcut.is_empty() {
                writeln!(out, "{}  shortcut: {}", pad, data.shortcut)?;
            }
            if let Some(id) = &data.id {
                writeln!(out, "{}  id: {}", pad, id)?;
            }
        }
    }

    for &child in node.children() {
        print_node(tree, child, indent + 2, out)?;
    }
    Ok(())
}

/// Serialize the tree as nested JSON.
pub fn print_dump_json(tree: &MenuTree, out: &mut dyn Write) -> Result<()> {
    let value = json!({ "menubar": children_json(tree, tree.root()) });
    serde_json::to_writer_pretty(&mut *out, &value)
        .into_diagnostic()
        .wrap_err("Failed to serialize menu tree")?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}

fn children_json(tree: &MenuTree, id: NodeId) -> Vec<Value> {
    tree.node(id)
        .children()
        .iter()
        .map(|&child| {
            let node = tree.node(child);
            let mut value = json!({ "label": node.label });
            if let Some(data) = &node.data {
                value["data"] = serde_json::to_value(data).unwrap_or(Value::Null);
            }
            if node.is_separator() {
                value["separator"] = Value::Bool(true);
            }
            let children = children_json(tree, child);
            if !children.is_empty() {
                value["children"] = Value::Array(children);
            }
            value
        })
        .collect()
}

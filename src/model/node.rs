use serde::Serialize;

use super::NodeId;

/// Data record stored on a leaf menu item.
///
/// `label` keeps the undecorated display string even when the tree node's
/// label carries a `[command]` suffix for display purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MenuData {
    pub label: String,
    pub description: String,
    pub handler: String,
    pub command: String,
    pub keywords: String,
    pub shortcut: String,
    pub id: Option<String>,
}

/// A single node in a [`MenuTree`](super::MenuTree).
///
/// Nodes come in three flavours: submenus (label, no data), items (label and
/// data) and separators (neither). The root is a special fourth case that
/// only anchors the top-level menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub label: String,
    pub data: Option<MenuData>,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl MenuNode {
    pub(super) fn new(label: String, data: Option<MenuData>, parent: Option<NodeId>) -> Self {
        Self {
            label,
            data,
            parent,
            children: Vec::new(),
        }
    }

    /// Separators are placeholder nodes with no label and no data.
    pub fn is_separator(&self) -> bool {
        self.label.is_empty() && self.data.is_none()
    }

    /// Non-owning back-reference to the parent node. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child ids in menu display order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Display label with `&` accelerator markers stripped.
    pub fn plain_label(&self) -> String {
        self.label.replace('&', "")
    }
}

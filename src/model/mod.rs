// Ordered menu tree container
//
// Arena-backed: the tree owns all nodes in a single Vec and hands out
// NodeId indices, which gives child lists and a non-owning parent
// back-reference without reference counting.

mod node;

pub use node::{MenuData, MenuNode};

/// Index of a node inside its [`MenuTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Ordered tree of menus, items and separators built from one XML source.
///
/// Built once by the parser and only copied (optionally pruning separators)
/// afterwards; nothing removes or reorders nodes in place.
#[derive(Debug, Clone)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
}

impl MenuTree {
    /// Create a tree holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![MenuNode::new(String::new(), None, None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &MenuNode {
        &self.nodes[id.0]
    }

    /// Append a child under `parent`, keeping document order.
    pub fn append(&mut self, parent: NodeId, label: String, data: Option<MenuData>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MenuNode::new(label, data, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Number of nodes including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Labels on the path from the top-level menu down to `id`, in order.
    ///
    /// The root is skipped, so the first entry is always a menubar menu.
    pub fn path_labels(&self, id: NodeId) -> Vec<String> {
        let mut labels = vec![self.node(id).plain_label()];
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            // Stop before the root; it has no label of its own.
            if self.node(parent).parent().is_none() {
                break;
            }
            labels.insert(0, self.node(parent).plain_label());
            current = parent;
        }
        labels
    }

    /// Deep copy of the tree with every separator node dropped.
    ///
    /// This is the variant consumed by searchable command lists, where a
    /// visual divider has no meaning.
    pub fn without_separators(&self) -> MenuTree {
        let mut copy = MenuTree::new();
        let root = copy.root();
        self.copy_filtered(self.root(), root, &mut copy);
        copy
    }

    fn copy_filtered(&self, from: NodeId, to: NodeId, dst: &mut MenuTree) {
        for &child in self.node(from).children() {
            let node = self.node(child);
            if node.is_separator() {
                continue;
            }
            let id = dst.append(to, node.label.clone(), node.data.clone());
            self.copy_filtered(child, id, dst);
        }
    }
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

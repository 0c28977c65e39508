// Menu XML parser
//
// Walks the fixed menu-definition schema (menubar -> menu -> items, where
// items hold menuitem / separator / nested menu elements) and builds the
// ordered MenuTree the reports run over.

use miette::{IntoDiagnostic, Result, WrapErr};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::config::MenuStyle;
use crate::model::{MenuData, MenuTree, NodeId};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("No <menubar> element found")]
    MissingMenubar,

    #[error("<{parent}> is missing its <{child}> child")]
    MissingChild {
        parent: &'static str,
        child: &'static str,
    },

    #[error("Unknown tag <{0}> in <items>")]
    UnknownTag(String),
}

/// Builds a [`MenuTree`] from a menu-definition XML source.
///
/// The parse happens once, in the constructor; afterwards the builder only
/// hands out the tree or deep copies of it.
#[derive(Debug)]
pub struct MenuTreeBuilder {
    tree: MenuTree,
}

impl MenuTreeBuilder {
    /// Parse a menu definition file.
    pub fn from_path(path: &Path, style: MenuStyle) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read menu file: {}", path.display()))?;

        let builder = Self::from_str(&contents, style)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to parse menu file: {}", path.display()))?;

        debug!(
            "Parsed {}: {} nodes",
            path.display(),
            builder.tree.len() - 1
        );
        Ok(builder)
    }

    /// Parse a menu definition from a string.
    pub fn from_str(contents: &str, style: MenuStyle) -> std::result::Result<Self, ParseError> {
        let tree = SchemaWalker::new(style).parse(contents)?;
        Ok(Self { tree })
    }

    /// The parsed tree, separators included.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Deep copy of the tree, with or without separator nodes.
    ///
    /// The copy without separators feeds searchable command lists; the copy
    /// with them feeds actual menu construction.
    pub fn model(&self, separators: bool) -> MenuTree {
        if separators {
            self.tree.clone()
        } else {
            self.tree.without_separators()
        }
    }
}

/// Which menuitem field element the reader is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Label,
    Help,
    Handler,
    Command,
    Keywords,
    Shortcut,
    Id,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"label" => Some(Field::Label),
            b"help" => Some(Field::Help),
            b"handler" => Some(Field::Handler),
            b"command" => Some(Field::Command),
            b"keywords" => Some(Field::Keywords),
            b"shortcut" => Some(Field::Shortcut),
            b"id" => Some(Field::Id),
            _ => None,
        }
    }
}

/// Collected children of one <menuitem> element.
#[derive(Debug, Default)]
struct ItemFields {
    label: Option<String>,
    help: Option<String>,
    handler: Option<String>,
    command: Option<String>,
    keywords: Option<String>,
    shortcut: Option<String>,
    id: Option<String>,
}

impl ItemFields {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Label => self.label = Some(value),
            Field::Help => self.help = Some(value),
            Field::Handler => self.handler = Some(value),
            Field::Command => self.command = Some(value),
            Field::Keywords => self.keywords = Some(value),
            Field::Shortcut => self.shortcut = Some(value),
            Field::Id => self.id = Some(value),
        }
    }
}

/// One open <menu> element. `id` stays None until its <label> text arrives.
struct MenuFrame {
    id: Option<NodeId>,
    in_items: bool,
}

struct SchemaWalker {
    style: MenuStyle,
    tree: MenuTree,
    stack: Vec<MenuFrame>,
    current_item: Option<ItemFields>,
    current_field: Option<Field>,
    seen_menubar: bool,
    in_menubar: bool,
}

impl SchemaWalker {
    fn new(style: MenuStyle) -> Self {
        Self {
            style,
            tree: MenuTree::new(),
            stack: Vec::new(),
            current_item: None,
            current_field: None,
            seen_menubar: false,
            in_menubar: false,
        }
    }

    fn parse(mut self, contents: &str) -> std::result::Result<MenuTree, ParseError> {
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => self.on_start(e.name().as_ref())?,
                Event::Empty(ref e) => {
                    // An empty element starts and ends in one event
                    let name = e.name().as_ref().to_vec();
                    self.on_start(&name)?;
                    self.on_end(&name)?;
                }
                Event::Text(ref e) => {
                    let text = e.unescape()?.into_owned();
                    self.on_text(text);
                }
                Event::End(ref e) => self.on_end(e.name().as_ref())?,
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !self.seen_menubar {
            return Err(ParseError::MissingMenubar);
        }
        Ok(self.tree)
    }

    fn on_start(&mut self, tag: &[u8]) -> std::result::Result<(), ParseError> {
        if self.current_item.is_some() {
            // Inside <menuitem>: only field elements matter, extras are ignored
            self.current_field = Field::from_tag(tag);
            return Ok(());
        }

        match tag {
            // Only the first <menubar> in the document counts
            b"menubar" if !self.seen_menubar => {
                self.seen_menubar = true;
                self.in_menubar = true;
            }
            b"menu" if self.in_menubar => {
                self.stack.push(MenuFrame {
                    id: None,
                    in_items: false,
                });
            }
            b"items" if !self.in_items() => {
                if let Some(frame) = self.stack.last_mut() {
                    frame.in_items = true;
                }
            }
            b"menuitem" if self.in_items() => {
                self.current_item = Some(ItemFields::default());
            }
            b"separator" if self.in_items() => {
                let parent = self.current_menu().ok_or(ParseError::MissingChild {
                    parent: "items",
                    child: "menu",
                })?;
                self.tree.append(parent, String::new(), None);
            }
            b"label" if !self.in_items() => {
                // A <label> outside any <menuitem> names the open <menu>
                self.current_field = Some(Field::Label);
            }
            // Anything else directly under <items> is not part of the schema
            other if self.in_items() => {
                return Err(ParseError::UnknownTag(
                    String::from_utf8_lossy(other).into_owned(),
                ));
            }
            _ => {}
        }
        Ok(())
    }

    fn on_text(&mut self, text: String) {
        let Some(field) = self.current_field else {
            return;
        };

        if let Some(item) = self.current_item.as_mut() {
            item.set(field, text);
        } else if field == Field::Label {
            // Menu label: the menu node can be appended now, before its items
            if let Some(frame) = self.stack.last() {
                if frame.id.is_none() {
                    let parent = self
                        .stack
                        .iter()
                        .rev()
                        .skip(1)
                        .find_map(|f| f.id)
                        .unwrap_or_else(|| self.tree.root());
                    let id = self.tree.append(parent, text, None);
                    self.stack.last_mut().unwrap().id = Some(id);
                }
            }
        }
    }

    fn on_end(&mut self, tag: &[u8]) -> std::result::Result<(), ParseError> {
        if self.current_item.is_some() {
            if tag == b"menuitem" {
                let fields = self.current_item.take().unwrap();
                self.flush_item(fields)?;
            } else {
                self.current_field = None;
            }
            return Ok(());
        }

        match tag {
            b"menu" => {
                let frame = self.stack.pop();
                if let Some(frame) = frame {
                    if frame.id.is_none() {
                        return Err(ParseError::MissingChild {
                            parent: "menu",
                            child: "label",
                        });
                    }
                }
            }
            b"items" => {
                if let Some(frame) = self.stack.last_mut() {
                    frame.in_items = false;
                }
            }
            b"menubar" => {
                self.in_menubar = false;
            }
            _ => {
                self.current_field = None;
            }
        }
        Ok(())
    }

    fn flush_item(&mut self, fields: ItemFields) -> std::result::Result<(), ParseError> {
        let missing = |child| ParseError::MissingChild {
            parent: "menuitem",
            child,
        };
        let orig_label = fields.label.ok_or(missing("label"))?;
        let description = fields.help.ok_or(missing("help"))?;
        let handler = fields.handler.ok_or(missing("handler"))?;
        let command = fields.command.unwrap_or_default();

        let label = match self.style {
            MenuStyle::Labels => orig_label.clone(),
            _ if command.is_empty() => orig_label.clone(),
            MenuStyle::LabelsCommands => format!("{}   [{}]", orig_label, command),
            MenuStyle::Commands => format!("      [{}]", command),
        };

        let data = MenuData {
            label: orig_label,
            description,
            handler,
            command,
            keywords: fields.keywords.unwrap_or_default(),
            shortcut: fields.shortcut.unwrap_or_default(),
            id: fields.id,
        };

        let parent = self.current_menu().ok_or(ParseError::MissingChild {
            parent: "items",
            child: "menu",
        })?;
        self.tree.append(parent, label, Some(data));
        Ok(())
    }

    fn in_items(&self) -> bool {
        self.stack.last().map(|f| f.in_items).unwrap_or(false)
    }

    fn current_menu(&self) -> Option<NodeId> {
        self.stack.iter().rev().find_map(|f| f.id)
    }
}

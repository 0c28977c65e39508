//! menutree - Parse declarative XML menu definitions into an ordered tree
//!
//! This library turns the fixed three-level menu schema
//! (`menubar` -> `menu` -> `items`) into an in-memory tree and derives
//! reports from it for localization and documentation tooling.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! 1. **Parsing** - Walk the XML schema with quick-xml and build the tree
//! 2. **Model** - Arena-backed ordered tree of menus, items and separators
//! 3. **Pruning** - Deep copy with separator nodes removed, for searchable
//!    command lists
//! 4. **Reporting** - Translatable strings, tree outline, command paths,
//!    full dump (terminal or JSON)

pub mod config;
pub mod model;
pub mod parser;
pub mod report;

pub use config::{Config, MenuStyle};
pub use model::{MenuData, MenuNode, MenuTree, NodeId};
pub use parser::{MenuTreeBuilder, ParseError};
pub use report::{Action, DumpFormat, Reporter};

// Report module
//
// The four derived listings: translatable strings, tree outline, command
// paths, and the full data dump.

mod commands;
mod dump;
mod strings;
mod tree;

pub use commands::{print_commands, print_commands_with};
pub use dump::{print_dump, print_dump_json};
pub use strings::print_strings;
pub use tree::print_tree;

use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::model::MenuTree;

/// Which listing to derive from the menu tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    Strings,
    Tree,
    Commands,
    Dump,
}

/// Output format for the dump action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Terminal,
    Json,
}

/// Reporter dispatching a menu tree to one of the listings.
pub struct Reporter {
    action: Action,
    format: DumpFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(action: Action, format: DumpFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            action,
            format,
            output_path,
        }
    }

    /// Run the report. `name` labels the strings listing header.
    pub fn report(&self, tree: &MenuTree, name: &str) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let file = File::create(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to create output file: {}", path.display()))?;
                let mut out = io::BufWriter::new(file);
                self.write_report(tree, name, &mut out)
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                self.write_report(tree, name, &mut out)
            }
        }
    }

    fn write_report(&self, tree: &MenuTree, name: &str, out: &mut dyn Write) -> Result<()> {
        let result = match self.action {
            Action::Strings => print_strings(tree, name, out),
            Action::Tree => print_tree(tree, out),
            Action::Commands => print_commands(tree, out),
            Action::Dump => match self.format {
                DumpFormat::Terminal => print_dump(tree, out),
                DumpFormat::Json => return print_dump_json(tree, out),
            },
        };
        result.into_diagnostic().wrap_err("Failed to write report")
    }
}

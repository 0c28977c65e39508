use clap::Parser;
use colored::Colorize;
use miette::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

mod config;
mod model;
mod parser;
mod report;

use config::{Config, MenuStyle};
use parser::MenuTreeBuilder;
use report::Reporter;

/// menutree - Parse XML menu definitions and emit translation, outline and
/// command listings
#[derive(Parser, Debug)]
#[command(name = "menutree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the menu definition XML file
    file: PathBuf,

    /// Which listing to produce
    #[arg(short, long, value_enum, default_value = "strings")]
    action: ActionArg,

    /// Label decoration for items with commands (overrides config)
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Identifier used in the strings listing header
    /// (default: derived from the file name)
    #[arg(long)]
    name: Option<String>,

    /// Output format (dump action only)
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: FormatArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum ActionArg {
    #[default]
    Strings,
    Tree,
    Commands,
    Dump,
}

impl From<ActionArg> for report::Action {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Strings => report::Action::Strings,
            ActionArg::Tree => report::Action::Tree,
            ActionArg::Commands => report::Action::Commands,
            ActionArg::Dump => report::Action::Dump,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum StyleArg {
    Labels,
    LabelsCommands,
    Commands,
}

impl From<StyleArg> for MenuStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Labels => MenuStyle::Labels,
            StyleArg::LabelsCommands => MenuStyle::LabelsCommands,
            StyleArg::Commands => MenuStyle::Commands,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum FormatArg {
    #[default]
    Terminal,
    Json,
}

impl From<FormatArg> for report::DumpFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Terminal => report::DumpFormat::Terminal,
            FormatArg::Json => report::DumpFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    if !cli.file.exists() {
        eprintln!(
            "{}: menu file not found: {}",
            "Error".red().bold(),
            cli.file.display()
        );
        std::process::exit(1);
    }

    let config = load_config(&cli)?;

    let style = cli
        .style
        .clone()
        .map(MenuStyle::from)
        .unwrap_or(config.appearance.menu_style);
    debug!("Using menu style {:?}", style);

    let builder = MenuTreeBuilder::from_path(&cli.file, style)?;

    let name = cli.name.clone().unwrap_or_else(|| strings_name(&cli.file));

    let reporter = Reporter::new(
        cli.action.clone().into(),
        cli.format.clone().into(),
        cli.output.clone(),
    );
    reporter.report(builder.tree(), &name)?;

    if let Some(output) = &cli.output {
        if !cli.quiet {
            eprintln!("{} {}", "Report written to".green(), output.display());
        }
    }

    Ok(())
}

/// Derive a Python-identifier-safe name from the input file stem.
fn strings_name(file: &Path) -> String {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "menu".to_string());
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        Config::from_file(config_path)
    } else {
        Config::from_default_locations(&cli.file)
    }
}

//! site-breadcrumbs CLI
//!
//! Resolves website breadcrumbs from a static menu configuration.
//! Prints trails, JSON-LD, navigation markup, menu outlines and menu checks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use site_breadcrumbs_core::{
    format_menu, format_output, format_report, BreadcrumbEngine, OutputFormat, SiteSettings,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Menu-driven breadcrumb resolution for websites
#[derive(Parser)]
#[command(name = "site-breadcrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve website breadcrumbs from a static menu configuration")]
#[command(long_about = r#"
site-breadcrumbs: Menu-Driven Breadcrumbs

Resolves the breadcrumb trail for a request path from the menu configuration
the site navigation is built from. Paths that are not menu entries fall back
to their nearest ancestor route (a/b/c -> a/b -> a).

Menu files:
  - JSON (.json)
  - YAML (.yaml, .yml)

Output formats:
  - JSON (default) - Trail, links, title and structured data
  - YAML - Human-readable YAML format
  - ANSI - Colorful terminal output
  - Summary - Plain "Home > A > B"
  - JSON-LD - schema.org BreadcrumbList
  - HTML - Breadcrumb nav fragment with embedded JSON-LD (menu nav for tree)

Examples:
  site-breadcrumbs resolve /empresa --menu items-menu.json
  site-breadcrumbs resolve /produtos/x --menu menu.yaml --format html
  site-breadcrumbs tree --menu items-menu.json --format ansi
  site-breadcrumbs tree --menu items-menu.json --format html
  site-breadcrumbs check --menu items-menu.json --strict
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Menu configuration file (JSON or YAML)
    #[arg(short, long, global = true, env = "SITE_MENU", default_value = "items-menu.json")]
    pub menu: PathBuf,

    /// Site origin used for absolute urls
    #[arg(long, global = true, env = "SITE_ORIGIN", default_value = "http://localhost")]
    pub origin: String,

    /// Label of the first breadcrumb
    #[arg(long, global = true, default_value = "Home")]
    pub home_label: String,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the breadcrumb for a request path
    Resolve {
        /// Request path (e.g. /empresa/sobre)
        #[arg(default_value = "/")]
        path: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json)]
        format: OutputFormatArg,

        /// Page title (default: label of the current page)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print the menu outline
    Tree {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Ansi)]
        format: OutputFormatArg,
    },

    /// Check the menu for duplicated urls and entries without url
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Summary)]
        format: OutputFormatArg,

        /// Fail when duplicated urls are found
        #[arg(long)]
        strict: bool,
    },
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Summary,
    JsonLd,
    Html,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
            OutputFormatArg::JsonLd => OutputFormat::JsonLd,
            OutputFormatArg::Html => OutputFormat::Html,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Commands::Resolve {
            path,
            format,
            title,
        } => run_resolve(path, *format, title.as_deref(), &args),
        Commands::Tree { format } => run_tree(*format, &args),
        Commands::Check { format, strict } => run_check(*format, *strict, &args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the menu once and build the engine
fn build_engine(args: &Args) -> Result<BreadcrumbEngine> {
    let settings = SiteSettings::new(args.origin.clone()).with_home_label(args.home_label.clone());

    BreadcrumbEngine::from_file(&args.menu, settings)
        .with_context(|| format!("Failed to load menu {}", args.menu.display()))
}

/// ANSI only when writing to a terminal
fn effective_format(format: OutputFormatArg, args: &Args) -> OutputFormat {
    let format: OutputFormat = format.into();
    if format == OutputFormat::Ansi && (args.output.is_some() || !atty::is(atty::Stream::Stdout)) {
        OutputFormat::Summary
    } else {
        format
    }
}

fn run_resolve(path: &str, format: OutputFormatArg, title: Option<&str>, args: &Args) -> Result<()> {
    let engine = build_engine(args)?;

    let view = engine.view(path, title);
    let output = format_output(&view, effective_format(format, args))
        .context("Failed to format breadcrumb")?;

    write_output(&output, args.output.as_ref())
}

fn run_tree(format: OutputFormatArg, args: &Args) -> Result<()> {
    let engine = build_engine(args)?;

    let output = format_menu(engine.menu(), effective_format(format, args))
        .context("Failed to format menu")?;

    write_output(&output, args.output.as_ref())
}

fn run_check(format: OutputFormatArg, strict: bool, args: &Args) -> Result<()> {
    let engine = build_engine(args)?;

    let report = engine.check();
    let output = format_report(&report, effective_format(format, args))
        .context("Failed to format menu report")?;

    write_output(&output, args.output.as_ref())?;

    if strict && !report.is_clean() {
        anyhow::bail!(
            "{} url(s) shared by several menu entries",
            report.duplicates.len()
        );
    }

    Ok(())
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}

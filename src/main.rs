use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use paper_catalog::catalog;
use paper_catalog::config::{find_config_file, load_config, Config};
use paper_catalog::topics::ClassificationMode;
use paper_catalog::ui;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Paper Catalog - Classify academic papers into topics and export a catalog JSON document
#[derive(Parser, Debug)]
#[command(name = "paper-catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify academic papers into topics and export a catalog JSON document", long_about = None)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Configuration file path (default: ./paper-catalog.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source JSON array of paper records
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Catalog file to write
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Classification mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Classify and summarize without writing the catalog
    #[arg(long)]
    dry_run: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Show all environment variables
    #[arg(long)]
    env: bool,
}

/// Classification mode
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// One topic per paper, the first matching rule
    Single,
    /// Every matching topic, the first one primary
    Multi,
}

impl From<Mode> for ClassificationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single => ClassificationMode::Single,
            Mode::Multi => ClassificationMode::Multi,
        }
    }
}

/// Print all available environment variables
fn print_env_vars() {
    println!("Paper Catalog - Environment Variables");
    println!();
    println!("Paths:");
    println!("  PAPER_CATALOG_PATHS__INPUT              Source JSON array of paper records");
    println!("  PAPER_CATALOG_PATHS__OUTPUT             Catalog file to write (default: papers.json)");
    println!();
    println!("Classification:");
    println!("  PAPER_CATALOG_CLASSIFICATION__MODE      single or multi (default: multi)");
    println!();
    println!("Logging:");
    println!("  PAPER_CATALOG_LOGGING__LEVEL            Default log level (default: info)");
    println!("  RUST_LOG                                Rust logging filter, overrides everything else");
    println!("  NO_COLOR                                Disable colored output");
}

fn init_tracing(cli: &Cli, config: &Config) {
    let level = if cli.quiet {
        "error".to_string()
    } else {
        match cli.verbose {
            0 => config.logging.level.clone(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("paper_catalog={}", level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve configuration: file (explicit or discovered), environment, then CLI flags
fn resolve_config(cli: &Cli) -> Result<(Config, Option<PathBuf>)> {
    let config_path = cli.config.clone().or_else(find_config_file);
    let mut config = load_config(config_path.as_deref()).with_context(|| match &config_path {
        Some(path) => format!("Failed to load configuration from '{}'", path.display()),
        None => "Failed to load configuration from environment".to_string(),
    })?;

    if let Some(input) = &cli.input {
        config.paths.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.paths.output = output.clone();
    }
    if let Some(mode) = cli.mode {
        config.classification.mode = mode.into();
    }

    Ok((config, config_path))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.env {
        print_env_vars();
        return Ok(());
    }

    let (config, config_path) = resolve_config(&cli)?;
    init_tracing(&cli, &config);

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    if cli.print_config {
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    let summary = catalog::run(&config, cli.dry_run).with_context(|| {
        format!(
            "Catalog build failed ({} -> {})",
            config.paths.input.display(),
            config.paths.output.display()
        )
    })?;

    if !cli.quiet {
        ui::print_summary(&summary);
    }

    Ok(())
}

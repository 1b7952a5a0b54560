//! sqlexpress: compile fragment sequences into T-SQL
//!
//! # Usage
//!
//! ```bash
//! # Compile one or more JSON fragment files
//! sqlexpress compile query.json other.json
//!
//! # Machine-readable output
//! sqlexpress compile query.json --format json
//!
//! # Show the catalog in effect
//! sqlexpress --config sqlexpress.toml catalog
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use sqlexpress::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlexpress")]
#[command(version)]
#[command(about = "Compile expression trees into parameterized T-SQL", long_about = None)]
#[command(after_help = "EXAMPLES:
    sqlexpress compile query.json
    sqlexpress compile queries/*.json --format json
    sqlexpress operations")]
struct Cli {
    /// Configuration file (defaults to ./sqlexpress.toml, then the user config dir)
    #[arg(short, long, global = true, env = "SQLEXPRESS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile JSON fragment files
    Compile {
        /// Files holding a JSON array of fragments
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the catalog and options in effect
    Catalog,
    /// Show the operation reference
    Operations,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Compile { files, format } => {
            load_config(&cli).and_then(|config| compile_files(config, files, *format))
        }
        Commands::Catalog => load_config(&cli).and_then(show_catalog),
        Commands::Operations => {
            show_operations();
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sqlexpress=debug" } else { "sqlexpress=warn" };
    let filter = EnvFilter::try_from_env("SQLEXPRESS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::discover().context("failed to load config"),
    }
}

/// Compile each file on its own; returns false if any failed.
fn compile_files(config: Config, files: &[PathBuf], format: OutputFormat) -> anyhow::Result<bool> {
    let compiler = Compiler::from_config(config);
    let mut failures = 0;

    for path in files {
        match compile_file(&compiler, path) {
            Ok(stmt) => print_statement(path, &stmt, format)?,
            Err(e) => {
                failures += 1;
                tracing::warn!("{} failed: {:#}", path.display(), e);
                eprintln!("{} {} => {:#}", "✗".red().bold(), path.display(), e);
            }
        }
    }

    if failures > 0 {
        eprintln!(
            "{}",
            format!("{} of {} files failed", failures, files.len()).yellow()
        );
    }
    Ok(failures == 0)
}

fn compile_file(compiler: &Compiler, path: &Path) -> anyhow::Result<CompiledStatement> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let fragments: Vec<Fragment> =
        serde_json::from_str(&content).context("invalid fragment JSON")?;
    Ok(compiler.compile(&fragments)?)
}

fn print_statement(path: &Path, stmt: &CompiledStatement, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(stmt)?);
        }
        OutputFormat::Text => {
            println!("{} {}", "--".dimmed(), path.display().to_string().cyan());
            println!("{}", stmt.text.white());
            if !stmt.parameters.is_empty() {
                println!();
                println!("{}", "Parameters:".cyan());
                for p in &stmt.parameters {
                    let direction = match p.direction {
                        ParameterDirection::In => String::new(),
                        other => format!(" ({:?})", other).dimmed().to_string(),
                    };
                    println!("  {} = {}{}", p.name.green(), p.value.to_string().yellow(), direction);
                }
            }
            println!();
        }
    }
    Ok(())
}

fn show_catalog(config: Config) -> anyhow::Result<bool> {
    let text = toml::to_string_pretty(&config).context("failed to render config")?;
    println!("{}", "Configuration in effect".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", text);
    Ok(true)
}

fn show_operations() {
    println!("{}", "Operation Reference".cyan().bold());
    println!();
    println!(
        "{:18} {}",
        "Category".white().bold(),
        "Operations".white().bold()
    );
    println!("{}", "─".repeat(80).dimmed());

    for category in Category::ALL {
        let operations: Vec<String> = category
            .operations()
            .iter()
            .map(|op| op.to_string())
            .collect();
        println!(
            "{:18} {}",
            category.to_string().yellow(),
            operations.join(", ").dimmed()
        );
    }
}

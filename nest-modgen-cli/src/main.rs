//! # nest-modgen
//!
//! CLI tool for generating NestJS feature modules from a Prisma schema.
//!
//! ## Usage
//!
//! ```bash
//! # Generate the module for one model
//! nest-modgen Product
//!
//! # List the models in the schema
//! nest-modgen --list
//!
//! # Preview the generated files without writing them
//! nest-modgen Product --dry-run
//!
//! # Write a default configuration file
//! nest-modgen --init
//! ```

use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use nest_modgen::ir::Capability;
use nest_modgen_cli::{
    config::{CliArgs, ConfigManager, CONFIG_FILENAME},
    error::CliError,
    generator::{GenerationPlan, ModuleGenerator},
    writer::{FileWriter, WriteResult},
};

const EXAMPLES: &str = "Examples:
  nest-modgen Product
  nest-modgen User --dry-run
  nest-modgen Product --ext mts
  nest-modgen --list
  nest-modgen --list --json";

#[derive(Parser)]
#[command(name = "nest-modgen")]
#[command(author, version, about = "Generate NestJS modules from Prisma models", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Model to generate a module for (case-insensitive)
    model: Option<String>,

    /// List all models in the schema
    #[arg(short, long, conflicts_with = "model")]
    list: bool,

    /// Print the model list as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Schema file (overrides config)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Modules root directory (overrides config)
    #[arg(long)]
    modules_dir: Option<PathBuf>,

    /// Extension of generated files (overrides config)
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preview generated files without writing them
    #[arg(long)]
    dry_run: bool,

    /// Write a default configuration file
    #[arg(long, conflicts_with_all = ["model", "list"])]
    init: bool,

    /// Overwrite an existing configuration file
    #[arg(long, requires = "init")]
    force: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.init {
        return cmd_init(cli.config.as_deref(), cli.force);
    }

    if !cli.list && cli.model.is_none() {
        print_usage()?;
        return Ok(());
    }

    let config = ConfigManager::load(cli.config.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            schema: cli.schema,
            modules_dir: cli.modules_dir,
            file_extension: cli.ext,
        },
    );
    let generator = ModuleGenerator::new(config)?;

    match cli.model {
        Some(model) if !cli.list => cmd_generate(&generator, &model, cli.dry_run),
        _ => cmd_list(&generator, cli.json),
    }
}

/// Print usage and examples.
fn print_usage() -> Result<(), CliError> {
    println!("\n{}\n", "NestJS Module Generator".bold());
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Generate command implementation.
fn cmd_generate(generator: &ModuleGenerator, name: &str, dry_run: bool) -> Result<(), CliError> {
    let schema = generator.load_schema()?;
    let model = generator.find_model(&schema, name)?;

    println!(
        "{} {} ({})",
        "Generating module for".cyan(),
        model.name().bold(),
        model.capability().description()
    );

    let plan = generator.plan(model);
    let writer = FileWriter::new(dry_run);

    for result in generator.write(&plan, &writer)? {
        let path = result.path().display();
        match &result {
            WriteResult::Written { .. } => {
                println!("{} Generated: {}", "✓".green(), path);
            }
            WriteResult::DryRun { content, .. } => {
                println!("{} Would write to {}:", "[dry-run]".yellow(), path);
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    if !dry_run {
        print_next_steps(&plan);
    }

    Ok(())
}

/// Final banner after a successful generation.
fn print_next_steps(plan: &GenerationPlan) {
    println!(
        "\n{} Module \"{}\" generated successfully!",
        "✓".green().bold(),
        plan.model_name
    );
    println!("\n{} {}", "Files created in:".cyan(), plan.module_dir.display());
    println!("\n{}", "Next steps:".cyan());
    println!("   1. Add {}Module to your app.module.ts", plan.model_name);
    println!("   2. Review and customize the generated files");
    println!("   3. Add any custom business logic to the service");
    println!("   4. Add authentication guards if needed");
}

/// List command implementation.
fn cmd_list(generator: &ModuleGenerator, json: bool) -> Result<(), CliError> {
    let models = generator.list()?;

    if json {
        let rendered = serde_json::to_string_pretty(&models)
            .map_err(std::io::Error::from)?;
        println!("{}", rendered);
        return Ok(());
    }

    println!(
        "\n{} {}:\n",
        "Available models in".cyan(),
        generator.config().paths.schema.display()
    );

    for model in &models {
        let status = match model.capability {
            Capability::Rich => format!("({})", model.capability.description()).green(),
            Capability::Basic => format!("({})", model.capability.description()).yellow(),
        };
        println!("   {} {}", model.name, status);
    }

    if models.is_empty() {
        println!("   {}", "No models found.".yellow());
    }

    println!("\n{} nest-modgen <ModelName>", "Usage:".cyan());
    Ok(())
}

/// Init command implementation.
fn cmd_init(path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let output = path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

    if output.exists() && !force {
        return Err(CliError::AlreadyExists { path: output });
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

//! `icicle` binary: runs the companion generator over a JSON model file.

mod model;

use clap::{Args, Parser, Subcommand};
use icicle_config_build::{CONFIG_FILE, Config, ConfigError};
use icicle_core::{
    diagnostic::TracingReporter,
    generator::Generator,
    hierarchy::TypeGraph,
    model::PersistenceCommand,
    sink::FsSink,
};
use model::{Model, ModelError};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(
    name = "icicle",
    version = icicle_core::VERSION,
    about = "Generate instance-state companion classes for Android components"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit one companion class per owner listed in a model file
    Generate(GenerateArgs),

    /// Print the persistence command chosen for each type name
    Resolve(ResolveArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// JSON model with declared types and annotated fields
    #[arg(long, value_name = "PATH")]
    model: PathBuf,

    /// Generator config; defaults apply when the file does not exist
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Output directory (overrides output.out_dir)
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ResolveArgs {
    /// Type names to resolve, e.g. `int[]` or `java.util.ArrayList<java.lang.String>`
    #[arg(required = true, value_name = "TYPE")]
    types: Vec<String>,

    /// Optional model whose declared types extend the stock graph
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Print one JSON object per line
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("generation finished with {0} error(s)")]
    Diagnostics(usize),
}

///
/// Resolution
/// one `resolve` output record
///

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    type_name: &'a str,
    command: &'a PersistenceCommand,
    storage: String,
    retrieval: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => generate(args),
        Command::Resolve(args) => resolve(&args),
    }
}

fn load_config(path: &Path) -> Result<Config, CliError> {
    let config = icicle_config_build::load(path)?;
    tracing::debug!(path = %path.display(), ?config, "config loaded");

    Ok(config)
}

// generate
// artifacts are listed on stdout, diagnostics go through tracing
fn generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = load_config(&args.config)?;
    let (graph, fields) = Model::load(&args.model)?.into_parts();
    let out_dir = args.out_dir.unwrap_or(config.output.out_dir);

    let mut sink = FsSink::new(out_dir);
    let mut reporter = TracingReporter::new();
    let report =
        Generator::new(&config.generator, &graph).generate(fields, &mut sink, &mut reporter);

    let mut stdout = io::stdout().lock();
    for artifact in &report.written {
        writeln!(stdout, "{}", sink.path_of(artifact).display())?;
    }
    tracing::info!(
        written = report.written.len(),
        rejected_fields = report.rejected_fields,
        failed_groups = report.failed_groups,
        skipped_groups = report.skipped_groups,
        "generation finished"
    );

    match reporter.error_count() {
        0 => Ok(()),
        errors => Err(CliError::Diagnostics(errors)),
    }
}

fn resolve(args: &ResolveArgs) -> Result<(), CliError> {
    let config = load_config(&args.config)?;
    let graph = match &args.model {
        Some(path) => Model::load(path)?.into_parts().0,
        None => TypeGraph::android(),
    };
    let resolver = Generator::new(&config.generator, &graph).resolver();

    let mut stdout = io::stdout().lock();
    for type_name in &args.types {
        let command = resolver.resolve(type_name);
        let resolution = Resolution {
            type_name,
            command: &command,
            storage: command.storage_method(),
            retrieval: command.retrieval_method(),
        };

        if args.json {
            serde_json::to_writer(&mut stdout, &resolution)?;
            writeln!(stdout)?;
        } else {
            writeln!(
                stdout,
                "{type_name} -> {command} ({} / {})",
                resolution.storage, resolution.retrieval
            )?;
        }
    }

    Ok(())
}

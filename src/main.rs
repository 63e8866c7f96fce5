mod cli;

use anyhow::Context;
use cli::{Args, Command, KindArgs, ListArgs, ResolveArgs};
use serde_json::json;
use srclib_pydep::adapters::outbound::console::StderrProgressReporter;
use srclib_pydep::adapters::outbound::container::DockerContainerRunner;
use srclib_pydep::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use srclib_pydep::application::dto::{ListRequest, ResolveRequest};
use srclib_pydep::application::registry::PluginRegistry;
use srclib_pydep::application::use_cases::{ListDependenciesUseCase, ResolveDependenciesUseCase};
use srclib_pydep::config::{load_lister_config, ListerConfig};
use srclib_pydep::dependency_listing::domain::{RawDependency, RepositoryConfig, SourceUnit};
use srclib_pydep::ports::outbound::{ListerOutputReader, OutputPresenter, RawDependencyReader};
use srclib_pydep::shared::error::{ExitCode, PydepError};
use srclib_pydep::shared::security::validate_source_dir;
use srclib_pydep::shared::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();

    let working_dir = std::env::current_dir().context("Failed to determine working directory")?;
    let config = load_lister_config(args.config.as_deref(), &working_dir)?;

    match args.command {
        Command::List(list) => run_list(list, &config, reporter(args.quiet)).await,
        Command::Resolve(resolve) => run_resolve(resolve, &config, reporter(args.quiet)),
        Command::Kind(kind) => run_kind(kind, &config),
    }
}

fn reporter(quiet: bool) -> StderrProgressReporter {
    if quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    }
}

async fn run_list(
    args: ListArgs,
    config: &ListerConfig,
    progress_reporter: StderrProgressReporter,
) -> Result<()> {
    let source_dir = checked_source_dir(&args.dir)?;

    let registry = PluginRegistry::with_python(config);
    let container_runner =
        DockerContainerRunner::new(config.docker_binary.clone(), config.container_timeout);

    let mut request = ListRequest::new(
        source_dir,
        SourceUnit::new(args.unit, args.unit_type, args.unit_root),
        RepositoryConfig::new(args.repo),
    );
    if let Some(path) = args.lister_output {
        let captured = FileSystemReader::new().read_lister_output(&path)?;
        request = request.with_captured_output(captured);
    }

    let use_case = ListDependenciesUseCase::new(&registry, container_runner, progress_reporter);
    let response = use_case.execute(request).await?;

    present(args.output, &format!("{}\n", response.to_json()?))
}

fn run_resolve(
    args: ResolveArgs,
    config: &ListerConfig,
    progress_reporter: StderrProgressReporter,
) -> Result<()> {
    let dependencies: Vec<RawDependency> = match args.input {
        Some(path) => FileSystemReader::new().read_raw_dependencies(&path)?,
        None => serde_json::from_reader(io::stdin().lock())
            .context("Failed to parse raw dependencies from stdin")?,
    };

    let registry = PluginRegistry::with_python(config);
    let use_case = ResolveDependenciesUseCase::new(&registry, progress_reporter);
    let targets = use_case.execute(ResolveRequest::new(
        dependencies,
        RepositoryConfig::new(args.repo),
    ))?;

    present(
        args.output,
        &format!("{}\n", serde_json::to_string_pretty(&targets)?),
    )
}

fn run_kind(args: KindArgs, config: &ListerConfig) -> Result<()> {
    let kind = config
        .symbol_kinds
        .kind(&args.name)
        .ok_or_else(|| PydepError::UnknownSymbolKind {
            kind: args.name.clone(),
        })?;

    let output = json!({
        "kind": kind,
        "callable": config.symbol_kinds.is_callable(&args.name),
    });
    StdoutPresenter::new().present(&format!("{}\n", output))
}

fn present(output: Option<PathBuf>, content: &str) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(content)
}

/// Validates the checkout directory and makes it absolute for the bind mount
fn checked_source_dir(path: &Path) -> Result<PathBuf> {
    validate_source_dir(path).map_err(|e| PydepError::InvalidSourceDirectory {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    path.canonicalize().map_err(|e| {
        PydepError::InvalidSourceDirectory {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        }
        .into()
    })
}

//! srclib-pydep - Python dependency lister and resolver
//!
//! Lists the dependencies of a Python source unit by running `pydep` inside a
//! Docker container, and resolves each listed requirement to the repository
//! and source unit it refers to.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_listing`): Requirement model, listers,
//!   output transforms and resolvers, all free of I/O
//! - **Application Layer** (`application`): Use cases, DTOs and the plugin registry
//! - **Ports** (`ports`): Plugin seams (inbound) and infrastructure interfaces (outbound)
//! - **Adapters** (`adapters`): Docker, file system and console implementations
//! - **Configuration** (`config`): Built-in and user YAML configuration
//! - **Shared** (`shared`): Error types, result alias and input validation
//!
//! # Example
//!
//! ```no_run
//! use srclib_pydep::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let config = ListerConfig::builtin()?;
//! let registry = PluginRegistry::with_python(&config);
//!
//! let use_case = ListDependenciesUseCase::new(
//!     &registry,
//!     DockerContainerRunner::new(config.docker_binary.clone(), config.container_timeout),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ListRequest::new(
//!     PathBuf::from("/work/flask"),
//!     SourceUnit::new("Flask", "PipPackage", "."),
//!     RepositoryConfig::new("github.com/mitsuhiko/flask"),
//! );
//! let response = use_case.execute(request).await?;
//! println!("{}", response.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_listing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::container::DockerContainerRunner;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{ListRequest, ListResponse, ResolveRequest};
    pub use crate::application::registry::PluginRegistry;
    pub use crate::application::use_cases::{
        ListDependenciesUseCase, ResolveDependenciesUseCase,
    };
    pub use crate::config::ListerConfig;
    pub use crate::dependency_listing::domain::{
        Container, ContainerCommand, DependencyTarget, DistPackage, ListerTransform,
        RawDependency, RepositoryConfig, Requirement, ResolvedTarget, SourceUnit, SymbolKind,
        SymbolKindTable,
    };
    pub use crate::ports::inbound::{DependencyLister, DependencyResolver};
    pub use crate::ports::outbound::{
        ContainerRunner, ListerOutputReader, OutputPresenter, ProgressReporter,
        RawDependencyReader,
    };
    pub use crate::shared::error::PydepError;
    pub use crate::shared::Result;
}

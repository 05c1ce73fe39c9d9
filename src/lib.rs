//! depgraph - Dependency graph discovery and visualization tool
//!
//! This library builds dependency graphs from static test repositories, the
//! NuGet registry or the local apt package manager, detects cycles, and
//! renders the result in several formats, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_exploration`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let dependency_source = StaticRepoSource::load(Path::new("repo.json"))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ExploreGraphUseCase::new(dependency_source, progress_reporter);
//!
//! // Execute
//! let request = ExploreRequest::new(PackageName::new("my-app".to_string())?, String::new(), 0);
//! let response = use_case.execute(request)?;
//!
//! // Render the graph
//! let renderer = MermaidRenderer::new();
//! println!("{}", renderer.render(&response.graph)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph_exploration;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, StaticRepoSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::NuGetClient;
    pub use crate::adapters::outbound::process::AptClient;
    pub use crate::adapters::outbound::renderers::{
        AsciiTreeRenderer, MermaidRenderer, PlantUmlRenderer, SvgRenderer,
    };
    pub use crate::adapters::outbound::CachingSource;
    pub use crate::application::dto::{ExploreRequest, ExploreResponse, RenderFormat, SourceMode};
    pub use crate::application::use_cases::ExploreGraphUseCase;
    pub use crate::graph_exploration::domain::{DependencyGraph, PackageName};
    pub use crate::graph_exploration::services::{
        DependencyFilter, GraphBuilder, ReverseDependencyResolver,
    };
    pub use crate::ports::outbound::{
        DependencySource, GraphRenderer, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}

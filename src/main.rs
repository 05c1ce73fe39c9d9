mod adapters;
mod application;
mod cli;
mod config;
mod graph_exploration;
mod ports;
mod shared;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{FileSystemWriter, StaticRepoSource, StdoutPresenter};
use adapters::outbound::network::NuGetClient;
use adapters::outbound::process::AptClient;
use adapters::outbound::CachingSource;
use application::dto::{ExploreRequest, ExploreResponse, RenderFormat, SourceMode};
use application::factories::RendererFactory;
use application::use_cases::ExploreGraphUseCase;
use cli::Args;
use config::{load_config, Settings};
use graph_exploration::domain::DependencyGraph;
use ports::outbound::{DependencySource, OutputPresenter};
use shared::error::{ExitCode, GraphError};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load the configuration file and merge it with the arguments
    let config = load_config(Path::new(&args.config))?;
    let settings = Settings::from_sources(config, &args)?;

    // Stage 1: effective configuration as key-value pairs, sorted by key
    println!("Stage 1: Configuration parameters");
    for (key, value) in settings.display_entries() {
        println!("  {}: {}", key, value);
    }
    println!();

    // Create adapters (Dependency Injection)
    let dependency_source = create_dependency_source(&settings)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ExploreGraphUseCase::new(dependency_source, progress_reporter);

    // Execute use case
    let request = ExploreRequest::new(
        settings.package.clone(),
        settings.filter_substring.clone(),
        settings.max_depth,
    );
    let response = use_case.execute(request)?;

    report_stages(&settings, &response)
}

/// Selects and constructs the dependency source for the configured mode.
///
/// The remote sources are wrapped in a cache so the root package, which is
/// queried once for the direct listing and once more during traversal, hits
/// the backend only once.
fn create_dependency_source(settings: &Settings) -> Result<Box<dyn DependencySource>> {
    match settings.mode {
        SourceMode::Test => {
            let source = StaticRepoSource::load(Path::new(&settings.repository))?;
            Ok(Box::new(source))
        }
        SourceMode::Nuget => {
            let client = if settings.repository.is_empty() {
                NuGetClient::new()?
            } else {
                NuGetClient::with_endpoint(&settings.repository)?
            };
            Ok(Box::new(CachingSource::new(client)))
        }
        SourceMode::Apt => {
            if !AptClient::is_available() {
                return Err(GraphError::AptUnavailable.into());
            }
            Ok(Box::new(CachingSource::new(AptClient::new()?)))
        }
    }
}

/// Prints the staged exploration report to stdout and writes the graph files.
fn report_stages(settings: &Settings, response: &ExploreResponse) -> Result<()> {
    // Stage 2: unfiltered direct dependencies of the root
    println!("Stage 2: Direct dependencies");
    for dependency in &response.direct_dependencies {
        println!("  {}", dependency);
    }
    if response.direct_dependencies.is_empty() {
        println!("  (none)");
    }
    println!();

    // Stage 3: cycle summary for the full graph
    println!("Stage 3: Building the dependency graph");
    if response.graph.has_cycles() {
        println!("Cycles detected in the dependency graph (see warnings above).");
    } else {
        println!("No cycles detected.");
    }
    println!("Graph built.");
    println!();

    // Stage 4: packages that depend on the root, sorted by name
    println!("Stage 4: Reverse dependencies");
    for dependent in &response.reverse_dependencies {
        println!("  {}", dependent);
    }
    if response.reverse_dependencies.is_empty() {
        println!("  (none)");
    }
    println!();

    // Stage 5: renderings on stdout, then the SVG and PlantUML files
    println!("Stage 5: Visualization");
    if settings.ascii_tree {
        println!("ASCII dependency tree:");
        let tree = RendererFactory::create(RenderFormat::AsciiTree).render(&response.graph)?;
        StdoutPresenter::new().present(&tree)?;
        println!();
    }
    println!("Mermaid:");
    let mermaid = RendererFactory::create(RenderFormat::Mermaid).render(&response.graph)?;
    println!("{}", mermaid);
    println!();

    let (svg_path, puml_path) = output_paths(&settings.output_file);
    save_rendered_file(RenderFormat::Svg, &response.graph, &svg_path);
    save_rendered_file(RenderFormat::PlantUml, &response.graph, &puml_path);

    Ok(())
}

/// Derives the SVG and PlantUML output paths from the configured base name.
/// A base already ending in `.svg` keeps its name, and the PlantUML file
/// replaces the extension.
fn output_paths(output_base: &str) -> (String, String) {
    let svg_path = if output_base.ends_with(".svg") {
        output_base.to_string()
    } else {
        format!("{}.svg", output_base)
    };
    let base_name = output_base.strip_suffix(".svg").unwrap_or(output_base);
    let puml_path = format!("{}.puml", base_name);
    (svg_path, puml_path)
}

/// Renders the graph in the given format and writes the result to `path`.
/// A failure is reported as a warning so the remaining files still get
/// written.
fn save_rendered_file(format: RenderFormat, graph: &DependencyGraph, path: &str) {
    let name = RendererFactory::display_name(format);
    let result = RendererFactory::create(format)
        .render(graph)
        .and_then(|content| FileSystemWriter::new(PathBuf::from(path)).present(&content));

    match result {
        Ok(()) => println!("Graph saved to {}: {}", name, path),
        Err(e) => eprintln!("⚠️  Warning: Failed to write {}: {}", name, e),
    }
}

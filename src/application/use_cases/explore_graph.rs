use crate::application::dto::{ExploreRequest, ExploreResponse};
use crate::graph_exploration::services::{
    DependencyFilter, GraphBuilder, ReverseDependencyResolver,
};
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;

/// ExploreGraphUseCase - Core use case for dependency graph discovery
///
/// Orchestrates the exploration workflow: resolve the root's direct
/// dependencies, build the full graph, surface cycle diagnostics, and
/// compute the reverse dependency set of the root. Uses generic dependency
/// injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `DS` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreGraphUseCase<DS, PR> {
    dependency_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> ExploreGraphUseCase<DS, PR>
where
    DS: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new ExploreGraphUseCase with injected dependencies
    pub fn new(dependency_source: DS, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the graph exploration use case
    ///
    /// # Arguments
    /// * `request` - Validated traversal parameters
    ///
    /// # Returns
    /// ExploreResponse with direct dependencies, the discovered graph,
    /// and the root's reverse dependencies
    pub fn execute(&self, request: ExploreRequest) -> Result<ExploreResponse> {
        let package = request.package.as_str();

        // Step 1: Resolve direct dependencies of the root, unfiltered
        self.progress_reporter
            .report(&format!("📦 Resolving direct dependencies of {}...", package));
        let direct_dependencies = self.dependency_source.direct_dependencies(package);

        // Step 2: Build the full graph with filtering and depth limiting
        self.progress_reporter
            .report(&format!("🌳 Building dependency graph of {}...", package));
        let filter = DependencyFilter::new(request.filter_substring.clone());
        let graph = GraphBuilder::build(
            &request.package,
            &self.dependency_source,
            &filter,
            request.max_depth,
        );

        // Step 3: Surface cycle diagnostics, in detection order
        for cycle in graph.cycles() {
            self.progress_reporter
                .report_error(&format!("⚠️  Cycle detected: {}", cycle));
        }

        // Step 4: Derive the reverse dependency set of the root
        let reverse_dependencies =
            ReverseDependencyResolver::reverse_dependencies(package, &graph);

        self.progress_reporter.report_completion(&format!(
            "✅ Graph complete: {} package(s), {} edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));

        Ok(ExploreResponse::new(
            direct_dependencies,
            graph,
            reverse_dependencies,
        ))
    }
}

use crate::graph_exploration::domain::DependencyGraph;
use std::collections::BTreeSet;

/// ExploreResponse - Internal response DTO from the graph exploration use case
///
/// Contains everything the presentation stages need: the unfiltered direct
/// dependencies of the root, the full discovered graph, and the reverse
/// dependency set of the root.
#[derive(Debug, Clone)]
pub struct ExploreResponse {
    /// Direct dependencies of the root package, as reported by the source
    pub direct_dependencies: Vec<String>,
    /// The discovered dependency graph with cycle diagnostics
    pub graph: DependencyGraph,
    /// All packages in the graph that depend on the root, sorted by name
    pub reverse_dependencies: BTreeSet<String>,
}

impl ExploreResponse {
    pub fn new(
        direct_dependencies: Vec<String>,
        graph: DependencyGraph,
        reverse_dependencies: BTreeSet<String>,
    ) -> Self {
        Self {
            direct_dependencies,
            graph,
            reverse_dependencies,
        }
    }
}

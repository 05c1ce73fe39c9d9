use crate::graph_exploration::domain::PackageName;

/// ExploreRequest - Internal request DTO for the graph exploration use case
///
/// Carries the already validated traversal parameters; CLI and configuration
/// merging happen before this DTO is built.
#[derive(Debug, Clone)]
pub struct ExploreRequest {
    /// Root package to explore from
    pub package: PackageName,
    /// Dependencies containing this substring are excluded (empty = keep all)
    pub filter_substring: String,
    /// Maximum traversal depth below the root (0 = unlimited)
    pub max_depth: usize,
}

impl ExploreRequest {
    pub fn new(package: PackageName, filter_substring: String, max_depth: usize) -> Self {
        Self {
            package,
            filter_substring,
            max_depth,
        }
    }
}

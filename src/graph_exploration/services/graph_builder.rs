use crate::graph_exploration::domain::{DependencyGraph, PackageName};
use crate::graph_exploration::services::DependencyFilter;
use crate::ports::outbound::DependencySource;
use std::collections::{BTreeMap, HashSet};

/// GraphBuilder service for discovering the transitive dependency graph
///
/// Walks the dependency source depth-first from the root package, recording
/// each package's filtered direct dependencies. The traversal uses an
/// explicit work stack, so graph depth is bounded by memory rather than by
/// the call stack.
///
/// Cycle handling: a dependency that is already on the active traversal path
/// is recorded as a cycle and not expanded again. Cycles are diagnostics on
/// the returned graph, not errors; traversal always runs to completion.
pub struct GraphBuilder;

/// One node being expanded: its filtered dependencies, the index of the next
/// dependency to walk, and the node's depth below the root.
struct Frame {
    package: String,
    dependencies: Vec<String>,
    next: usize,
    depth: usize,
}

impl GraphBuilder {
    /// Builds the dependency graph rooted at `root`.
    ///
    /// # Arguments
    /// * `root` - The validated package to start from (depth 0)
    /// * `source` - Resolver for direct dependencies
    /// * `filter` - Dependencies matching the filter are neither recorded nor walked
    /// * `max_depth` - Packages at this depth are recorded but not expanded; 0 means unlimited
    ///
    /// Every package is expanded at most once, no matter how many parents
    /// reference it. A package first reached at the depth limit keeps its
    /// recorded dependency list even if a later, shallower path could have
    /// expanded it further.
    pub fn build(
        root: &PackageName,
        source: &dyn DependencySource,
        filter: &DependencyFilter,
        max_depth: usize,
    ) -> DependencyGraph {
        let mut packages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut cycles: Vec<String> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut in_progress: HashSet<String> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();

        let root_name = root.as_str().to_string();
        let root_dependencies = filter.apply(source.direct_dependencies(&root_name));
        visited.insert(root_name.clone());
        in_progress.insert(root_name.clone());
        packages.insert(root_name.clone(), root_dependencies.clone());
        stack.push(Frame {
            package: root_name,
            dependencies: root_dependencies,
            next: 0,
            depth: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.dependencies.len() {
                in_progress.remove(&frame.package);
                stack.pop();
                continue;
            }

            let dependency = frame.dependencies[frame.next].clone();
            frame.next += 1;
            let depth = frame.depth + 1;

            if in_progress.contains(&dependency) {
                // Back-edge to a package on the active path
                cycles.push(dependency);
                continue;
            }
            if visited.contains(&dependency) {
                continue;
            }

            visited.insert(dependency.clone());
            let dependencies = filter.apply(source.direct_dependencies(&dependency));
            packages.insert(dependency.clone(), dependencies.clone());

            if max_depth == 0 || depth < max_depth {
                in_progress.insert(dependency.clone());
                stack.push(Frame {
                    package: dependency,
                    dependencies,
                    next: 0,
                    depth,
                });
            }
        }

        DependencyGraph::new(root.as_str().to_string(), packages, cycles)
    }
}

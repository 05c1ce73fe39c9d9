use crate::graph_exploration::domain::DependencyGraph;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Resolves which packages depend on a given target, directly or transitively
///
/// Works entirely on an already built graph: it inverts the recorded edges
/// and walks them from the target. Packages outside the graph, or with no
/// path to the target, simply yield an empty set.
pub struct ReverseDependencyResolver;

impl ReverseDependencyResolver {
    /// Returns every package from which the target is reachable.
    ///
    /// The result is sorted by package name. If the target sits on a cycle,
    /// it reaches itself through that cycle and appears in its own result.
    pub fn reverse_dependencies(target: &str, graph: &DependencyGraph) -> BTreeSet<String> {
        let mut reverse_edges: HashMap<&str, Vec<&str>> = HashMap::new();
        for (package, dependencies) in graph.packages() {
            for dependency in dependencies {
                reverse_edges
                    .entry(dependency.as_str())
                    .or_default()
                    .push(package.as_str());
            }
        }

        let mut dependents: BTreeSet<String> = BTreeSet::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![target];
        while let Some(current) = stack.pop() {
            if let Some(parents) = reverse_edges.get(current) {
                for parent in parents {
                    dependents.insert(parent.to_string());
                    if visited.insert(parent) {
                        stack.push(parent);
                    }
                }
            }
        }
        dependents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn graph_from(entries: &[(&str, &[&str])]) -> DependencyGraph {
        let packages: BTreeMap<String, Vec<String>> = entries
            .iter()
            .map(|(name, deps)| {
                (
                    name.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        let root = entries[0].0.to_string();
        DependencyGraph::new(root, packages, Vec::new())
    }

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_direct_dependents() {
        let graph = graph_from(&[("a", &["b"]), ("c", &["b"]), ("b", &[])]);
        let result = ReverseDependencyResolver::reverse_dependencies("b", &graph);

        assert_eq!(names(&result), vec!["a", "c"]);
    }

    #[test]
    fn test_transitive_dependents() {
        let graph = graph_from(&[("app", &["lib1", "lib2"]), ("lib1", &["lib2"]), ("lib2", &[])]);
        let result = ReverseDependencyResolver::reverse_dependencies("lib2", &graph);

        assert_eq!(names(&result), vec!["app", "lib1"]);
    }

    #[test]
    fn test_root_has_no_dependents() {
        let graph = graph_from(&[("app", &["lib"]), ("lib", &[])]);
        let result = ReverseDependencyResolver::reverse_dependencies("app", &graph);

        assert!(result.is_empty());
    }

    #[test]
    fn test_unknown_target_yields_empty_set() {
        let graph = graph_from(&[("app", &["lib"]), ("lib", &[])]);
        let result = ReverseDependencyResolver::reverse_dependencies("missing", &graph);

        assert!(result.is_empty());
    }

    #[test]
    fn test_target_on_cycle_depends_on_itself() {
        let graph = graph_from(&[("a", &["b"]), ("b", &["a"])]);
        let result = ReverseDependencyResolver::reverse_dependencies("a", &graph);

        assert_eq!(names(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_diamond_counts_each_dependent_once() {
        let graph = graph_from(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        let result = ReverseDependencyResolver::reverse_dependencies("d", &graph);

        assert_eq!(names(&result), vec!["a", "b", "c"]);
    }
}

use crate::graph_exploration::domain::DependencyGraph;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::collections::HashSet;

/// AsciiTreeRenderer for console-friendly tree output
///
/// Draws the classic connector tree (`└── `, `├── `, `│   `). The renderer
/// tracks the current root-to-node path itself: a package that reappears on
/// its own path is printed once more with a ` (cycle)` mark and not expanded,
/// so cyclic graphs render as finite trees. Shared dependencies that are not
/// cycles are expanded under every parent.
pub struct AsciiTreeRenderer;

impl AsciiTreeRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_node(
        &self,
        name: &str,
        graph: &DependencyGraph,
        prefix: &str,
        is_last: bool,
        path: &mut HashSet<String>,
        out: &mut String,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        if path.contains(name) {
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(name);
            out.push_str(" (cycle)\n");
            return;
        }

        path.insert(name.to_string());
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');

        let dependencies = graph.dependencies_of(name).unwrap_or_default();
        let sub_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        for (i, dependency) in dependencies.iter().enumerate() {
            let is_last_dependency = i == dependencies.len() - 1;
            self.render_node(dependency, graph, &sub_prefix, is_last_dependency, path, out);
        }
        path.remove(name);
    }
}

impl Default for AsciiTreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for AsciiTreeRenderer {
    fn render(&self, graph: &DependencyGraph) -> Result<String> {
        let mut out = String::new();
        let mut path = HashSet::new();
        self.render_node(graph.root(), graph, "", true, &mut path, &mut out);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn graph_from(root: &str, entries: &[(&str, &[&str])]) -> DependencyGraph {
        let packages: BTreeMap<String, Vec<String>> = entries
            .iter()
            .map(|(name, deps)| {
                (
                    name.to_string(),
                    deps.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        DependencyGraph::new(root.to_string(), packages, Vec::new())
    }

    #[test]
    fn test_render_single_node() {
        let graph = graph_from("app", &[("app", &[])]);
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        assert_eq!(tree, "└── app\n");
    }

    #[test]
    fn test_render_nested_tree() {
        let graph = graph_from(
            "app",
            &[("app", &["lib1", "lib2"]), ("lib1", &["lib2"]), ("lib2", &[])],
        );
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        let expected = "\
└── app
    ├── lib1
    │   └── lib2
    └── lib2
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_render_marks_cycles() {
        let graph = graph_from("a", &[("a", &["b"]), ("b", &["a"])]);
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        let expected = "\
└── a
    └── b
        └── a (cycle)
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_render_self_cycle() {
        let graph = graph_from("a", &[("a", &["a"])]);
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        assert_eq!(tree, "└── a\n    └── a (cycle)\n");
    }

    #[test]
    fn test_shared_dependency_appears_under_each_parent() {
        let graph = graph_from(
            "top",
            &[("top", &["mid1", "mid2"]), ("mid1", &["leaf"]), ("mid2", &["leaf"]), ("leaf", &[])],
        );
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        let expected = "\
└── top
    ├── mid1
    │   └── leaf
    └── mid2
        └── leaf
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_unknown_root_renders_as_leaf() {
        let graph = DependencyGraph::new("ghost".to_string(), BTreeMap::new(), Vec::new());
        let tree = AsciiTreeRenderer::new().render(&graph).unwrap();

        assert_eq!(tree, "└── ghost\n");
    }
}

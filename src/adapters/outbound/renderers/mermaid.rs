use crate::graph_exploration::domain::DependencyGraph;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;

/// MermaidRenderer producing a `graph TD` edge list
///
/// Package names are sanitized into Mermaid-safe node identifiers:
/// `-` and `.` become `_`, and names starting with a digit get a `P`
/// prefix, since Mermaid identifiers cannot start with one.
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn node_id(name: &str) -> String {
    let id: String = name
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            other => other,
        })
        .collect();
    if id.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("P{}", id)
    } else {
        id
    }
}

impl GraphRenderer for MermaidRenderer {
    fn render(&self, graph: &DependencyGraph) -> Result<String> {
        let mut lines = vec!["graph TD".to_string()];
        for (package, dependencies) in graph.packages() {
            for dependency in dependencies {
                lines.push(format!("    {} --> {}", node_id(package), node_id(dependency)));
            }
        }
        Ok(lines.join("\n"))
    }
}

use crate::graph_exploration::domain::DependencyGraph;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;

/// PlantUmlRenderer producing a quoted edge list between @startuml/@enduml
///
/// Names are quoted verbatim, so any package name is representable; only
/// embedded double quotes need escaping.
pub struct PlantUmlRenderer;

impl PlantUmlRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_quotes(name: &str) -> String {
    name.replace('"', "\\\"")
}

impl GraphRenderer for PlantUmlRenderer {
    fn render(&self, graph: &DependencyGraph) -> Result<String> {
        let mut lines = vec![
            "@startuml".to_string(),
            "skinparam defaultFontName Arial".to_string(),
            String::new(),
        ];
        for (package, dependencies) in graph.packages() {
            for dependency in dependencies {
                lines.push(format!(
                    "  \"{}\" --> \"{}\"",
                    escape_quotes(package),
                    escape_quotes(dependency)
                ));
            }
        }
        lines.push("@enduml".to_string());
        Ok(lines.join("\n"))
    }
}

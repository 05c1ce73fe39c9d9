use crate::graph_exploration::domain::DependencyGraph;
use crate::shared::Result;

/// GraphRenderer port for turning a dependency graph into text
///
/// Each implementation produces one output notation (ASCII tree, Mermaid,
/// PlantUML or SVG markup). Rendering is pure: the same graph always
/// produces the same string.
pub trait GraphRenderer {
    /// Renders the graph into its textual notation
    ///
    /// # Arguments
    /// * `graph` - The dependency graph to render
    ///
    /// # Returns
    /// The rendered document as a string
    ///
    /// # Errors
    /// Returns an error if the graph cannot be expressed in this notation
    fn render(&self, graph: &DependencyGraph) -> Result<String>;
}

/// Renderer adapters producing textual notations of a dependency graph
mod ascii_tree;
mod mermaid;
mod plantuml;
mod svg;

pub use ascii_tree::AsciiTreeRenderer;
pub use mermaid::MermaidRenderer;
pub use plantuml::PlantUmlRenderer;
pub use svg::SvgRenderer;

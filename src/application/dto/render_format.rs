/// Render format enumeration for graph visualization
///
/// This enum represents the supported output notations. It belongs in the
/// application layer as it is the key by which the renderer factory selects
/// an outbound adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Console tree with box-drawing connectors
    AsciiTree,
    /// Mermaid `graph TD` edge list
    Mermaid,
    /// PlantUML component diagram
    PlantUml,
    /// Self-contained SVG document
    Svg,
}

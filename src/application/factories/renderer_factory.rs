use crate::adapters::outbound::renderers::{
    AsciiTreeRenderer, MermaidRenderer, PlantUmlRenderer, SvgRenderer,
};
use crate::application::dto::RenderFormat;
use crate::ports::outbound::GraphRenderer;

/// Factory for creating graph renderers
///
/// This factory encapsulates the creation logic for the different renderer
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified format
    ///
    /// # Arguments
    /// * `format` - The render format to create a renderer for
    ///
    /// # Returns
    /// A boxed GraphRenderer trait object appropriate for the specified format
    ///
    /// # Examples
    /// ```
    /// use depgraph::application::dto::RenderFormat;
    /// use depgraph::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(RenderFormat::Mermaid);
    /// ```
    pub fn create(format: RenderFormat) -> Box<dyn GraphRenderer> {
        match format {
            RenderFormat::AsciiTree => Box::new(AsciiTreeRenderer::new()),
            RenderFormat::Mermaid => Box::new(MermaidRenderer::new()),
            RenderFormat::PlantUml => Box::new(PlantUmlRenderer::new()),
            RenderFormat::Svg => Box::new(SvgRenderer::new()),
        }
    }

    /// Returns the human-readable name of the specified format
    ///
    /// # Examples
    /// ```
    /// use depgraph::application::dto::RenderFormat;
    /// use depgraph::application::factories::RendererFactory;
    ///
    /// assert_eq!(RendererFactory::display_name(RenderFormat::Svg), "SVG");
    /// ```
    pub fn display_name(format: RenderFormat) -> &'static str {
        match format {
            RenderFormat::AsciiTree => "ASCII tree",
            RenderFormat::Mermaid => "Mermaid",
            RenderFormat::PlantUml => "PlantUML",
            RenderFormat::Svg => "SVG",
        }
    }
}

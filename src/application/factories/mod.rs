/// Factories for selecting infrastructure adapters
mod renderer_factory;

pub use renderer_factory::RendererFactory;

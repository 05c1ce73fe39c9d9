mod dependency_filter;
mod graph_builder;
mod reverse_resolver;

pub use dependency_filter::DependencyFilter;
pub use graph_builder::GraphBuilder;
pub use reverse_resolver::ReverseDependencyResolver;

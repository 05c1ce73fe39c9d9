mod dependency_graph;
mod package_name;

pub use dependency_graph::DependencyGraph;
pub use package_name::PackageName;

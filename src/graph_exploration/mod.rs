/// Graph exploration - Pure business logic and domain models
///
/// This layer contains the dependency graph aggregate and the services
/// that build and query it. It performs no I/O of its own; dependency
/// data is pulled through the DependencySource port.
pub mod domain;
pub mod services;

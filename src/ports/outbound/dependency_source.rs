/// DependencySource port for resolving direct dependencies
///
/// This port abstracts where dependency information comes from: a static
/// repository file, the NuGet registry, or the local apt database.
pub trait DependencySource {
    /// Returns the direct dependencies of a package, in source order.
    ///
    /// # Arguments
    /// * `package` - Name of the package to resolve
    ///
    /// Resolution is total: a package the source does not know, or a lookup
    /// that fails, yields an empty list so graph discovery can continue.
    /// Implementations report lookup failures through their own channels
    /// (typically a warning on stderr).
    fn direct_dependencies(&self, package: &str) -> Vec<String>;
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        (**self).direct_dependencies(package)
    }
}

impl std::fmt::Debug for dyn DependencySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn DependencySource")
    }
}

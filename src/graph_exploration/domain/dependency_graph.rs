use std::collections::BTreeMap;

/// DependencyGraph aggregate representing the discovered dependency structure
///
/// Maps each visited package to its (filtered) direct dependencies, in the
/// order the dependency source returned them. A name that appears only inside
/// a dependency list was never expanded, either because the depth limit was
/// reached or because expansion stopped at a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    root: String,
    packages: BTreeMap<String, Vec<String>>,
    cycles: Vec<String>,
}

impl DependencyGraph {
    pub fn new(root: String, packages: BTreeMap<String, Vec<String>>, cycles: Vec<String>) -> Self {
        Self {
            root,
            packages,
            cycles,
        }
    }

    /// The package the traversal started from.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn packages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.packages
    }

    /// Direct dependencies recorded for `package`, or `None` if it was never
    /// expanded. An expanded package with no dependencies yields `Some(&[])`.
    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains_key(package)
    }

    /// Packages at which a back-edge to the active traversal path was seen,
    /// in detection order. A package may appear more than once if it closed
    /// more than one cycle.
    pub fn cycles(&self) -> &[String] {
        &self.cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn edge_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }
}

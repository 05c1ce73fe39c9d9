/// Substring-based dependency filter
///
/// A dependency whose name contains the pattern is dropped before it is
/// recorded in the graph, so it is never traversed either. An empty pattern
/// disables filtering.
#[derive(Debug, Clone)]
pub struct DependencyFilter {
    pattern: String,
}

impl DependencyFilter {
    pub fn new(pattern: String) -> Self {
        Self { pattern }
    }

    /// A filter that keeps everything.
    pub fn none() -> Self {
        Self {
            pattern: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.pattern.is_empty()
    }

    pub fn excludes(&self, name: &str) -> bool {
        self.is_active() && name.contains(&self.pattern)
    }

    /// Applies the filter to a dependency list, preserving order.
    pub fn apply(&self, dependencies: Vec<String>) -> Vec<String> {
        if !self.is_active() {
            return dependencies;
        }
        dependencies
            .into_iter()
            .filter(|name| !self.excludes(name))
            .collect()
    }
}

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use depgraph::prelude::*;

/// Mock DependencySource for testing that records every lookup
#[derive(Default, Clone)]
pub struct MockDependencySource {
    packages: HashMap<String, Vec<String>>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockDependencySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, name: &str, dependencies: &[&str]) -> Self {
        self.packages.insert(
            name.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    /// All lookups in call order, including repeats.
    pub fn queried_packages(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// How many times a particular package was looked up.
    pub fn query_count(&self, package: &str) -> usize {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.as_str() == package)
            .count()
    }
}

impl DependencySource for MockDependencySource {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        self.queries.lock().unwrap().push(package.to_string());
        self.packages.get(package).cloned().unwrap_or_default()
    }
}

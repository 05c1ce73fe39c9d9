use crate::ports::outbound::DependencySource;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingSource decorator that memoizes dependency lookups
///
/// Wraps any DependencySource and caches its answers by package name, so a
/// package referenced by many parents is resolved against the backing
/// source only once. Registry and apt lookups are the expensive part of
/// graph discovery; the cache makes repeat visits free.
pub struct CachingSource<S: DependencySource> {
    inner: S,
    cache: Arc<DashMap<String, Vec<String>>>,
}

impl<S: DependencySource> CachingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the number of cached packages (for testing)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl<S: DependencySource> DependencySource for CachingSource<S> {
    fn direct_dependencies(&self, package: &str) -> Vec<String> {
        if let Some(cached) = self.cache.get(package) {
            return cached.clone();
        }

        let dependencies = self.inner.direct_dependencies(package);
        self.cache
            .insert(package.to_string(), dependencies.clone());
        dependencies
    }
}

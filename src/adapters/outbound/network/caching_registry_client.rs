use crate::ports::outbound::{RegistryClient, RegistryVersion};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for registry lookups
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    package_name: String,
    version: String,
}

impl CacheKey {
    fn new(package_name: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingRegistryClient wraps a RegistryClient and adds in-memory caching.
///
/// This adapter implements the decorator pattern: callers see the same port,
/// repeat lookups of a name and version are answered without a request.
/// Failed lookups are not cached.
pub struct CachingRegistryClient<C: RegistryClient> {
    inner: C,
    cache: Arc<DashMap<CacheKey, RegistryVersion>>,
}

impl<C: RegistryClient> CachingRegistryClient<C> {
    /// Creates a new caching client wrapping the given inner client
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<C: RegistryClient> RegistryClient for CachingRegistryClient<C> {
    async fn fetch_version(&self, package_name: &str, version: &str) -> Result<RegistryVersion> {
        let key = CacheKey::new(package_name, version);

        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let fetched = self.inner.fetch_version(package_name, version).await?;
        self.cache.insert(key, fetched.clone());

        Ok(fetched)
    }
}

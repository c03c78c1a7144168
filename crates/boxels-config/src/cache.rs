//! Memoized resolution
//!
//! A `ConfigCache` owns one resolver and at most one successful
//! resolution. The first caller runs the load; callers arriving while it is
//! in flight wait on the same lock and then share the cached result.
//! Failures are returned to the caller that triggered them and are not
//! cached.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::engine::ResolvedConfig;
use crate::error::Result;
use crate::resolver::ConfigResolver;

/// Caller-owned cache of a single configuration resolution
#[derive(Debug)]
pub struct ConfigCache {
    resolver: ConfigResolver,
    slot: Mutex<Option<Arc<ResolvedConfig>>>,
}

impl ConfigCache {
    pub fn new(resolver: ConfigResolver) -> Self {
        Self {
            resolver,
            slot: Mutex::new(None),
        }
    }

    pub fn resolver(&self) -> &ConfigResolver {
        &self.resolver
    }

    /// Return the cached resolution, resolving on first access
    ///
    /// The file system work runs on the blocking thread pool.
    pub async fn get_or_resolve(&self) -> Result<Arc<ResolvedConfig>> {
        let mut slot = self.slot.lock().await;
        if let Some(config) = slot.as_ref() {
            return Ok(Arc::clone(config));
        }

        let resolver = self.resolver.clone();
        let resolved = tokio::task::spawn_blocking(move || resolver.resolve()).await??;
        tracing::debug!(root = ?self.resolver.root(), "Configuration resolved and cached");

        let config = Arc::new(resolved);
        *slot = Some(Arc::clone(&config));
        Ok(config)
    }

    /// The cached resolution, if one has completed
    pub async fn cached(&self) -> Option<Arc<ResolvedConfig>> {
        self.slot.lock().await.clone()
    }

    /// Drop the cached resolution; the next access resolves again
    pub async fn invalidate(&self) {
        self.slot.lock().await.take();
    }
}

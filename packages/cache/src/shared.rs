// ABOUTME: Task-safe wrapper around the profile cache
// ABOUTME: Arc<RwLock> sharing so the orchestration layer and readers see one cache

use std::sync::Arc;

use tokio::sync::RwLock;

use tally_core::{Profile, ProfilePatch};

use crate::cache::{
    CacheRead, CacheResult, MutationHandle, ProfileCache, SettleOutcome, Settlement,
};

/// Shared handle to a single process-local [`ProfileCache`].
///
/// Cloning is cheap; all clones observe the same cache. Writes go through
/// the reconciliation methods only.
#[derive(Clone)]
pub struct SharedProfileCache {
    inner: Arc<RwLock<ProfileCache>>,
}

impl SharedProfileCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ProfileCache::new())),
        }
    }

    pub async fn read(&self) -> CacheRead {
        self.inner.read().await.read()
    }

    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.is_loaded()
    }

    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation()
    }

    pub async fn pending_mutations(&self) -> usize {
        self.inner.read().await.pending_mutations()
    }

    pub async fn prime(&self, profile: Profile) {
        self.inner.write().await.prime(profile);
    }

    pub async fn apply_optimistic(&self, patch: &ProfilePatch) -> CacheResult<MutationHandle> {
        self.inner.write().await.apply_optimistic(patch)
    }

    pub async fn settle(&self, handle: MutationHandle, outcome: Settlement) -> SettleOutcome {
        self.inner.write().await.settle(handle, outcome)
    }

    pub async fn invalidate(&self) {
        self.inner.write().await.invalidate();
    }
}

impl Default for SharedProfileCache {
    fn default() -> Self {
        Self::new()
    }
}

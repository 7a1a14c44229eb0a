// ABOUTME: Optimistic profile update orchestration
// ABOUTME: Applies speculative patches, reconciles settlements, and refetches to converge

use std::sync::Arc;

use tracing::{debug, warn};

use tally_cache::{CacheRead, SharedProfileCache, Settlement};
use tally_core::{validate_patch, ErrorReporter, Profile, ProfilePatch};

use crate::api::ProfileApi;
use crate::error::ActionResult;

/// Drives profile reads and optimistic mutations against one shared cache.
///
/// UI-facing callers read snapshots through [`read`](Self::read) and issue
/// mutations here; only this orchestration writes to the cache.
pub struct ProfileActions {
    api: Arc<dyn ProfileApi>,
    cache: SharedProfileCache,
    reporter: Arc<dyn ErrorReporter>,
}

impl ProfileActions {
    pub fn new(
        api: Arc<dyn ProfileApi>,
        cache: SharedProfileCache,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            api,
            cache,
            reporter,
        }
    }

    pub fn cache(&self) -> &SharedProfileCache {
        &self.cache
    }

    /// Current cached snapshot; `NotLoaded` before the first fetch.
    pub async fn read(&self) -> CacheRead {
        self.cache.read().await
    }

    /// Initial query: fetch the profile and prime the cache.
    ///
    /// Errors are left to the caller's page boundary to classify.
    pub async fn load(&self) -> ActionResult<Profile> {
        let profile = self.api.me().await?;
        self.cache.prime(profile.clone()).await;
        Ok(profile)
    }

    /// Toggle the anonymous-display flag with immediate visual feedback.
    pub async fn set_public_anonymous(&self, value: bool) -> ActionResult<Profile> {
        self.update_profile(ProfilePatch::anonymous(value)).await
    }

    /// Run one optimistic mutation to settlement.
    ///
    /// The patch lands in the cache before the request is issued, so the
    /// caller's next read shows the speculative value. On success the
    /// cache takes the authoritative server profile; on failure it falls
    /// back to the pre-patch snapshot unless newer state owns the cache.
    /// Either way a best-effort refetch follows to converge on the server.
    pub async fn update_profile(&self, patch: ProfilePatch) -> ActionResult<Profile> {
        validate_patch(&patch)?;

        let handle = self.cache.apply_optimistic(&patch).await?;

        match self.api.update_profile(&patch).await {
            Ok(server_profile) => {
                self.cache
                    .settle(handle, Settlement::Success(server_profile.clone()))
                    .await;
                self.refetch().await;
                Ok(server_profile)
            }
            Err(err) => {
                warn!("profile update failed: {}", err);
                self.cache.settle(handle, Settlement::Failure).await;
                if !err.is_not_found() {
                    self.reporter.report(&err);
                }
                self.refetch().await;
                Err(err.into())
            }
        }
    }

    /// Best-effort refetch after a settlement; failures only get logged.
    async fn refetch(&self) {
        match self.api.me().await {
            Ok(profile) => self.cache.prime(profile).await,
            Err(err) => debug!("post-settlement refetch failed: {}", err),
        }
    }
}

// ABOUTME: Port over the portal API surface the account controllers need
// ABOUTME: Object-safe so tests can substitute a scripted double for the real client

use async_trait::async_trait;

use tally_client::{ClientResult, PortalClient};
use tally_core::{Profile, ProfilePatch};

/// The slice of the portal API the account controllers consume.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn me(&self) -> ClientResult<Profile>;
    async fn update_profile(&self, patch: &ProfilePatch) -> ClientResult<Profile>;
    async fn delete_account(&self) -> ClientResult<()>;
    async fn clear_linked_accounts(&self) -> ClientResult<u64>;
}

#[async_trait]
impl ProfileApi for PortalClient {
    async fn me(&self) -> ClientResult<Profile> {
        PortalClient::me(self).await
    }

    async fn update_profile(&self, patch: &ProfilePatch) -> ClientResult<Profile> {
        PortalClient::update_profile(self, patch).await
    }

    async fn delete_account(&self) -> ClientResult<()> {
        PortalClient::delete_account(self).await
    }

    async fn clear_linked_accounts(&self) -> ClientResult<u64> {
        PortalClient::clear_linked_accounts(self).await
    }
}

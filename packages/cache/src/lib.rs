// ABOUTME: Optimistic profile cache for the Tally portal client
// ABOUTME: Speculative patches, snapshot rollback, and generation-based staleness detection

pub mod cache;
pub mod shared;

// Re-export commonly used types
pub use cache::{
    CacheError, CacheRead, CacheResult, MutationHandle, ProfileCache, SettleOutcome, Settlement,
};
pub use shared::SharedProfileCache;

// ABOUTME: Core reconciliation logic for the optimistic profile cache
// ABOUTME: Tracks pending mutations with pre-patch snapshots and a monotonic generation counter

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use tally_core::{Profile, ProfilePatch};

pub type CacheResult<T> = Result<T, CacheError>;

#[derive(Debug, Error, PartialEq)]
pub enum CacheError {
    #[error("Cache is not loaded; fetch the profile before patching it")]
    NotLoaded,
}

/// Snapshot returned to readers.
///
/// `NotLoaded` is only observed before the first successful fetch or after
/// an invalidation.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheRead {
    Loaded(Profile),
    NotLoaded,
}

impl CacheRead {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CacheRead::Loaded(_))
    }

    /// The cached profile, if loaded.
    pub fn loaded(self) -> Option<Profile> {
        match self {
            CacheRead::Loaded(profile) => Some(profile),
            CacheRead::NotLoaded => None,
        }
    }
}

/// Handle for one speculative write in flight.
///
/// Deliberately neither `Clone` nor `Copy`: a mutation settles exactly once,
/// and the handle is consumed by [`ProfileCache::settle`].
#[derive(Debug)]
pub struct MutationHandle {
    id: u64,
}

/// Outcome of a mutation as observed from the server.
#[derive(Debug, Clone)]
pub enum Settlement {
    /// The authoritative post-write profile returned by the server.
    Success(Profile),
    /// The mutation failed; the speculative patch must be undone.
    Failure,
}

/// What the cache did with a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The server value was installed as the new authoritative snapshot.
    Reconciled,
    /// The pre-patch snapshot was restored.
    RolledBack,
    /// Newer authoritative state owns the cache; the settlement was dropped.
    Stale,
}

struct PendingMutation {
    snapshot_before_patch: Profile,
    issue_generation: u64,
}

/// Locally cached view of the authenticated user's profile.
///
/// Speculative patches are applied immediately so readers get instant
/// feedback; settlements reconcile the cache against the authoritative
/// server value. The generation counter increments on every authoritative
/// write (prime, successful settlement, invalidation) and is the staleness
/// test for late settlements: a settlement issued before the last
/// authoritative write never regresses the cache.
///
/// Only reconciliation code may hold this mutably; UI-facing callers read
/// snapshots and issue mutations through the orchestration layer.
pub struct ProfileCache {
    profile: Option<Profile>,
    generation: u64,
    next_mutation_id: u64,
    pending: HashMap<u64, PendingMutation>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self {
            profile: None,
            generation: 0,
            next_mutation_id: 1,
            pending: HashMap::new(),
        }
    }

    /// Current cached snapshot. Never blocks.
    pub fn read(&self) -> CacheRead {
        match &self.profile {
            Some(profile) => CacheRead::Loaded(profile.clone()),
            None => CacheRead::NotLoaded,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.profile.is_some()
    }

    /// Current generation, for diagnostics and staleness assertions.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of mutations awaiting settlement.
    pub fn pending_mutations(&self) -> usize {
        self.pending.len()
    }

    /// Install an authoritative snapshot (initial fetch or refetch).
    pub fn prime(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.generation += 1;
        debug!(generation = self.generation, "profile cache primed");
    }

    /// Merge `patch` onto the cached profile immediately and register the
    /// in-flight mutation.
    ///
    /// Any subsequent [`read`](Self::read) observes the patched value. The
    /// returned handle carries the snapshot captured before the merge and
    /// the issue-time generation, for rollback and staleness detection.
    pub fn apply_optimistic(&mut self, patch: &ProfilePatch) -> CacheResult<MutationHandle> {
        let current = self.profile.as_mut().ok_or(CacheError::NotLoaded)?;

        let snapshot_before_patch = current.clone();
        patch.merge_into(current);

        let id = self.next_mutation_id;
        self.next_mutation_id += 1;
        self.pending.insert(
            id,
            PendingMutation {
                snapshot_before_patch,
                issue_generation: self.generation,
            },
        );

        debug!(
            mutation = id,
            generation = self.generation,
            "optimistic patch applied"
        );
        Ok(MutationHandle { id })
    }

    /// Reconcile the cache with a mutation's observed outcome.
    ///
    /// Success replaces the cached profile with the authoritative server
    /// value, discarding the speculative merge. Failure restores the
    /// pre-patch snapshot. Either path is skipped when newer authoritative
    /// state has landed since the mutation was issued ("last write owns the
    /// cache"), or when the mutation was swept away by an invalidation.
    pub fn settle(&mut self, handle: MutationHandle, outcome: Settlement) -> SettleOutcome {
        let Some(pending) = self.pending.remove(&handle.id) else {
            debug!(
                mutation = handle.id,
                "settlement arrived after invalidation; dropped"
            );
            return SettleOutcome::Stale;
        };

        if pending.issue_generation != self.generation {
            debug!(
                mutation = handle.id,
                issued_at = pending.issue_generation,
                generation = self.generation,
                "stale settlement; cache already reflects newer state"
            );
            return SettleOutcome::Stale;
        }

        match outcome {
            Settlement::Success(server_profile) => {
                self.profile = Some(server_profile);
                self.generation += 1;
                debug!(
                    mutation = handle.id,
                    generation = self.generation,
                    "mutation reconciled against server value"
                );
                SettleOutcome::Reconciled
            }
            Settlement::Failure => {
                // Restoring the snapshot does not bump the generation: the
                // snapshot is advisory state that was already current at
                // issue time, not a new authoritative write.
                self.profile = Some(pending.snapshot_before_patch);
                debug!(mutation = handle.id, "mutation failed; snapshot restored");
                SettleOutcome::RolledBack
            }
        }
    }

    /// Discard the cache entirely.
    ///
    /// Used after destructive actions (account deletion, bulk unlink): the
    /// next reader observes `NotLoaded` and must await a fresh fetch, and
    /// every still-in-flight settlement is ignored when it lands.
    pub fn invalidate(&mut self) {
        let swept = self.pending.len();
        self.profile = None;
        self.pending.clear();
        self.generation += 1;
        debug!(
            generation = self.generation,
            swept_mutations = swept,
            "profile cache invalidated"
        );
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new()
    }
}

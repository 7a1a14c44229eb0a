// ABOUTME: Error types for account-action controllers
// ABOUTME: Confirmation-gate transition failures plus propagated client and cache errors

use thiserror::Error;

use tally_cache::CacheError;
use tally_client::ClientError;
use tally_core::ValidationError;

pub type ActionResult<T> = Result<T, ActionError>;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Confirmation is already pending")]
    AlreadyConfirming,

    #[error("No confirmation is pending")]
    NotConfirming,

    #[error("Request is already in flight")]
    AlreadyInFlight,

    #[error("Action has already completed")]
    AlreadyCompleted,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

// ABOUTME: Integration tests for the confirmation-gated destructive account actions
// ABOUTME: Asserts navigation, cache invalidation, and failure recovery semantics

mod common;

use std::sync::Arc;

use mockall::Sequence;
use pretty_assertions::assert_eq;

use tally_account::{AccountActions, ActionError, GateState};
use tally_cache::{CacheRead, SettleOutcome, Settlement, SharedProfileCache};
use tally_client::ClientError;
use tally_core::ProfilePatch;

use common::{profile, MockApi, RecordingNavigator, RecordingReporter};

struct Harness {
    actions: AccountActions,
    cache: SharedProfileCache,
    navigator: Arc<RecordingNavigator>,
    reporter: Arc<RecordingReporter>,
}

async fn harness_with(mock: MockApi) -> Harness {
    let cache = SharedProfileCache::new();
    cache.prime(profile("Casey", false)).await;

    let navigator = Arc::new(RecordingNavigator::default());
    let reporter = Arc::new(RecordingReporter::default());
    let actions = AccountActions::new(
        Arc::new(mock),
        cache.clone(),
        navigator.clone(),
        reporter.clone(),
    );

    Harness {
        actions,
        cache,
        navigator,
        reporter,
    }
}

#[tokio::test]
async fn successful_deletion_navigates_home_exactly_once_and_invalidates() {
    let mut mock = MockApi::new();
    mock.expect_delete_account().times(1).returning(|| Ok(()));

    let h = harness_with(mock).await;

    h.actions.request_delete().unwrap();
    h.actions.confirm_delete().await.unwrap();

    assert_eq!(h.navigator.visited(), vec!["/".to_string()]);
    assert_eq!(h.cache.read().await, CacheRead::NotLoaded);
    assert_eq!(h.actions.delete_state(), GateState::Done);

    // The action cannot be replayed after completion.
    assert!(matches!(
        h.actions.request_delete(),
        Err(ActionError::AlreadyCompleted)
    ));
}

#[tokio::test]
async fn cancelling_the_dialog_has_zero_side_effects() {
    // No expectations: any API call would panic the mock.
    let mock = MockApi::new();
    let h = harness_with(mock).await;

    h.actions.request_delete().unwrap();
    h.actions.cancel_delete().unwrap();

    assert!(h.cache.read().await.is_loaded());
    assert!(h.navigator.visited().is_empty());
    assert_eq!(h.reporter.report_count(), 0);
    assert_eq!(h.actions.delete_state(), GateState::Idle);
}

#[tokio::test]
async fn confirming_without_a_dialog_is_rejected() {
    let mock = MockApi::new();
    let h = harness_with(mock).await;

    let err = h.actions.confirm_delete().await.unwrap_err();

    assert!(matches!(err, ActionError::NotConfirming));
    assert!(h.navigator.visited().is_empty());
}

#[tokio::test]
async fn failed_deletion_leaves_the_profile_untouched_and_allows_retry() {
    let mut mock = MockApi::new();
    let mut seq = Sequence::new();
    mock.expect_delete_account()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Err(ClientError::api(Some(500), None, None)));
    mock.expect_delete_account()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(()));

    let h = harness_with(mock).await;

    h.actions.request_delete().unwrap();
    let err = h.actions.confirm_delete().await.unwrap_err();

    assert!(matches!(err, ActionError::Client(_)));
    assert!(h.cache.read().await.is_loaded());
    assert!(h.navigator.visited().is_empty());
    assert_eq!(h.reporter.report_count(), 1);
    assert_eq!(h.actions.delete_state(), GateState::Idle);

    // Retry succeeds through the same two-step gate.
    h.actions.request_delete().unwrap();
    h.actions.confirm_delete().await.unwrap();
    assert_eq!(h.navigator.visited(), vec!["/".to_string()]);
}

#[tokio::test]
async fn clearing_accounts_navigates_to_the_accounts_page() {
    let mut mock = MockApi::new();
    mock.expect_clear_linked_accounts()
        .times(1)
        .returning(|| Ok(3));

    let h = harness_with(mock).await;

    h.actions.request_clear_accounts().unwrap();
    let deleted = h.actions.confirm_clear_accounts().await.unwrap();

    assert_eq!(deleted, 3);
    assert_eq!(h.navigator.visited(), vec!["/accounts".to_string()]);
    assert_eq!(h.cache.read().await, CacheRead::NotLoaded);
}

#[tokio::test]
async fn the_two_destructive_actions_are_gated_independently() {
    let mut mock = MockApi::new();
    mock.expect_clear_linked_accounts()
        .times(1)
        .returning(|| Ok(0));

    let h = harness_with(mock).await;

    h.actions.request_clear_accounts().unwrap();
    h.actions.confirm_clear_accounts().await.unwrap();

    // Clearing accounts finished, but the deletion gate is still idle.
    assert_eq!(h.actions.clear_accounts_state(), GateState::Done);
    assert_eq!(h.actions.delete_state(), GateState::Idle);
}

#[tokio::test]
async fn a_profile_mutation_in_flight_during_deletion_is_ignored_at_settlement() {
    let mut mock = MockApi::new();
    mock.expect_delete_account().times(1).returning(|| Ok(()));

    let h = harness_with(mock).await;

    // A profile patch is issued, then the user confirms deletion before it
    // settles.
    let handle = h
        .cache
        .apply_optimistic(&ProfilePatch::rename("stray"))
        .await
        .unwrap();

    h.actions.request_delete().unwrap();
    h.actions.confirm_delete().await.unwrap();

    // The late settlement must not resurrect the profile.
    let outcome = h
        .cache
        .settle(handle, Settlement::Success(profile("stray", false)))
        .await;

    assert_eq!(outcome, SettleOutcome::Stale);
    assert_eq!(h.cache.read().await, CacheRead::NotLoaded);
    assert_eq!(h.navigator.visited(), vec!["/".to_string()]);
}

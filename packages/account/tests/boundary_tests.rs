// ABOUTME: Tests for the page-level error boundary classification
// ABOUTME: Not-found is a navigation outcome; everything else is reported and rendered

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use tally_account::{BoundaryOutcome, PageBoundary};
use tally_client::ClientError;

use common::RecordingReporter;

fn boundary() -> (PageBoundary, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    (PageBoundary::new(reporter.clone()), reporter)
}

#[test]
fn not_found_renders_the_not_found_view_without_reporting() {
    let (boundary, reporter) = boundary();

    let outcome = boundary.classify(&ClientError::api(Some(404), None, None));

    assert_eq!(outcome, BoundaryOutcome::NotFound);
    assert_eq!(reporter.report_count(), 0);
}

#[test]
fn classified_errors_carry_their_fields_onto_the_page() {
    let (boundary, reporter) = boundary();

    let err = ClientError::api(
        Some(403),
        Some("FORBIDDEN".to_string()),
        Some("Not allowed".to_string()),
    );
    let outcome = boundary.classify(&err);

    match outcome {
        BoundaryOutcome::ErrorPage(page) => {
            assert_eq!(page.status, 403);
            assert_eq!(page.code, "FORBIDDEN");
            assert_eq!(page.message, "Not allowed");
            assert_eq!(page.escape_path, "/accounts");
        }
        BoundaryOutcome::NotFound => panic!("a 403 must not render the not-found view"),
    }
    assert_eq!(reporter.report_count(), 1);
}

#[test]
fn errors_without_a_status_default_to_500_and_the_generic_code() {
    let (boundary, reporter) = boundary();

    let outcome = boundary.classify(&ClientError::Network("connection reset".to_string()));

    match outcome {
        BoundaryOutcome::ErrorPage(page) => {
            assert_eq!(page.status, 500);
            assert_eq!(page.code, "An error occurred");
            assert_eq!(page.message, ClientError::DEFAULT_MESSAGE);
        }
        BoundaryOutcome::NotFound => panic!("a transport error must not render the not-found view"),
    }
    assert_eq!(reporter.report_count(), 1);
}

#[test]
fn unclassified_runtime_failures_are_reported_and_rendered_generically() {
    let (boundary, reporter) = boundary();

    let outcome = boundary.classify_unexpected(&"poisoned lock in render path");

    match outcome {
        BoundaryOutcome::ErrorPage(page) => {
            assert_eq!(page.status, 500);
            assert_eq!(page.code, "An error occurred");
        }
        BoundaryOutcome::NotFound => panic!("unclassified failures must not render not-found"),
    }
    assert_eq!(reporter.report_count(), 1);
    assert_eq!(
        reporter.reports.lock().unwrap()[0],
        "poisoned lock in render path"
    );
}

#[tokio::test]
async fn guarded_renders_can_be_retried_after_a_failure() {
    let (boundary, reporter) = boundary();
    let attempts = Arc::new(AtomicUsize::new(0));

    let render = {
        let attempts = attempts.clone();
        move || {
            let attempts = attempts.clone();
            async move {
                if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ClientError::api(Some(500), None, None))
                } else {
                    Ok("rendered")
                }
            }
        }
    };

    let first = boundary.guard(render.clone()).await;
    assert!(first.is_err());
    assert_eq!(reporter.report_count(), 1);

    // Retry re-executes the same render and succeeds.
    let second = boundary.guard(render).await;
    assert_eq!(second.unwrap(), "rendered");
    assert_eq!(reporter.report_count(), 1);
}

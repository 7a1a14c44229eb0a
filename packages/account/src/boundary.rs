// ABOUTME: Page-level error boundary for failures outside any handled mutation path
// ABOUTME: Classifies not-found as a navigation outcome; everything else is reported and rendered

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use tally_client::{ClientError, ClientResult};
use tally_core::{ErrorReporter, ERROR_ESCAPE_PATH};

/// What the page renders for an error that escaped all mutation handling.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryOutcome {
    /// Expected absence; render the dedicated not-found view.
    NotFound,
    /// Generic error page with classification and recovery affordances.
    ErrorPage(ErrorPage),
}

/// Rendered classification of an unexpected failure.
///
/// The page offers a retry action (re-running the failed render is safe)
/// and an escape-hatch navigation that always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPage {
    pub status: u16,
    pub code: String,
    pub message: String,
    pub escape_path: &'static str,
}

/// Catches failures at the page boundary.
pub struct PageBoundary {
    reporter: Arc<dyn ErrorReporter>,
}

impl PageBoundary {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { reporter }
    }

    /// Run a fallible render and classify its failure, if any.
    ///
    /// Retry is just calling this again with the same closure.
    pub async fn guard<T, F, Fut>(&self, render: F) -> Result<T, BoundaryOutcome>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        render().await.map_err(|err| self.classify(&err))
    }

    /// Classify an RPC error that reached the page boundary.
    pub fn classify(&self, error: &ClientError) -> BoundaryOutcome {
        if error.is_not_found() {
            debug!("resource not found; rendering not-found view");
            return BoundaryOutcome::NotFound;
        }

        self.reporter.report(error);
        BoundaryOutcome::ErrorPage(ErrorPage {
            status: error.status_or_default(),
            code: error.code_or_default().to_string(),
            message: error.message_or_default().to_string(),
            escape_path: ERROR_ESCAPE_PATH,
        })
    }

    /// Classify a failure that is not an RPC error at all.
    pub fn classify_unexpected(&self, error: &dyn fmt::Display) -> BoundaryOutcome {
        self.reporter.report(error);
        BoundaryOutcome::ErrorPage(ErrorPage {
            status: ClientError::DEFAULT_STATUS,
            code: ClientError::DEFAULT_CODE.to_string(),
            message: ClientError::DEFAULT_MESSAGE.to_string(),
            escape_path: ERROR_ESCAPE_PATH,
        })
    }
}

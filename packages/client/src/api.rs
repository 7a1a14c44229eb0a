//! Request and response models for the Tally portal API

use serde::Deserialize;

/// Error body returned by the portal API
///
/// Both fields are optional; proxies and gateways may return bodies the
/// portal did not author.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Response to clearing all stored linked accounts
#[derive(Debug, Deserialize)]
pub struct ClearAccountsResponse {
    pub deleted: u64,
}

// ABOUTME: Typed RPC client for the Tally portal API
// ABOUTME: Profile queries and mutations plus the portal error classification contract

pub mod api;
pub mod error;
pub mod portal;

// Re-export commonly used types
pub use api::{ApiErrorBody, ClearAccountsResponse};
pub use error::{ClientError, ClientResult, ErrorShape};
pub use portal::PortalClient;

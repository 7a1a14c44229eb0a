// ABOUTME: Account-management controllers for the Tally portal client
// ABOUTME: Optimistic profile updates, confirmation-gated destructive actions, page error boundary

pub mod api;
pub mod boundary;
pub mod dialog;
pub mod error;
pub mod profile;

mod actions;

// Re-export main types
pub use actions::AccountActions;
pub use api::ProfileApi;
pub use boundary::{BoundaryOutcome, ErrorPage, PageBoundary};
pub use dialog::{ConfirmGate, GateState};
pub use error::{ActionError, ActionResult};
pub use profile::ProfileActions;

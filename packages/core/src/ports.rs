// ABOUTME: Injected collaborator ports shared across Tally packages
// ABOUTME: Navigation and error reporting as object-safe traits with a logging fallback

use std::fmt;

use crate::types::UserIdentity;

/// Navigation collaborator, invoked after successful destructive actions.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Error-reporting collaborator (monitoring backend).
///
/// Identity follows the session: set on sign-in, cleared on sign-out.
/// Expected-absence conditions (not found) are never forwarded here.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &dyn fmt::Display);
    fn set_identity(&self, identity: UserIdentity);
    fn clear_identity(&self);
}

/// Reporter that writes to the log instead of a monitoring backend.
///
/// Default wiring for environments without a monitoring DSN configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &dyn fmt::Display) {
        tracing::error!("unhandled failure: {}", error);
    }

    fn set_identity(&self, identity: UserIdentity) {
        tracing::debug!("reporting identity set: {}", identity.id);
    }

    fn clear_identity(&self) {
        tracing::debug!("reporting identity cleared");
    }
}

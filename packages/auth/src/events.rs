// ABOUTME: Session lifecycle events forwarded to the error-reporting collaborator
// ABOUTME: Identity is set on sign-in and cleared on sign-out

use std::sync::Arc;

use tracing::info;

use tally_core::{ErrorReporter, UserIdentity};

use crate::session::SessionUser;

/// Lifecycle callbacks invoked by the session manager.
pub struct AuthEvents {
    reporter: Arc<dyn ErrorReporter>,
}

impl AuthEvents {
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self { reporter }
    }

    pub fn signed_in(&self, user: &SessionUser) {
        info!(user = %user.id, "user signed in");
        self.reporter.set_identity(UserIdentity {
            id: user.id.clone(),
            email: user.email.clone(),
            username: user.name.clone(),
        });
    }

    pub fn signed_out(&self) {
        info!("user signed out");
        self.reporter.clear_identity();
    }
}

// ABOUTME: Destructive account actions behind confirmation gates
// ABOUTME: Account deletion and bulk unlink with navigate-away and cache invalidation

use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use tally_cache::SharedProfileCache;
use tally_core::{ErrorReporter, Navigator, POST_CLEAR_ACCOUNTS_PATH, POST_DELETE_PATH};

use crate::api::ProfileApi;
use crate::dialog::{ConfirmGate, GateState};
use crate::error::ActionResult;

/// The two destructive account actions, each behind its own gate.
///
/// Neither applies an optimistic patch: there is nothing to show
/// speculatively for a deletion mid-flight beyond the disabled control.
/// On success the navigator is told to leave the page and the cache is
/// invalidated; on failure the prior cached profile stays untouched.
pub struct AccountActions {
    api: Arc<dyn ProfileApi>,
    cache: SharedProfileCache,
    navigator: Arc<dyn Navigator>,
    reporter: Arc<dyn ErrorReporter>,
    delete_gate: Mutex<ConfirmGate>,
    clear_gate: Mutex<ConfirmGate>,
}

impl AccountActions {
    pub fn new(
        api: Arc<dyn ProfileApi>,
        cache: SharedProfileCache,
        navigator: Arc<dyn Navigator>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            api,
            cache,
            navigator,
            reporter,
            delete_gate: Mutex::new(ConfirmGate::new()),
            clear_gate: Mutex::new(ConfirmGate::new()),
        }
    }

    // --- account deletion ---

    /// Open the deletion confirmation dialog.
    pub fn request_delete(&self) -> ActionResult<()> {
        self.delete_gate.lock().unwrap().request()
    }

    /// Close the deletion dialog; nothing has been issued.
    pub fn cancel_delete(&self) -> ActionResult<()> {
        self.delete_gate.lock().unwrap().cancel()
    }

    pub fn delete_state(&self) -> GateState {
        self.delete_gate.lock().unwrap().state()
    }

    /// Whether the deletion control should render disabled.
    pub fn is_deleting(&self) -> bool {
        self.delete_gate.lock().unwrap().is_busy()
    }

    /// Confirm the deletion and issue it exactly once.
    ///
    /// Success invalidates all profile state and navigates to the
    /// post-login landing page; any profile mutation still in flight is
    /// ignored when it settles.
    pub async fn confirm_delete(&self) -> ActionResult<()> {
        self.delete_gate.lock().unwrap().confirm()?;
        info!("account deletion confirmed; issuing request");

        match self.api.delete_account().await {
            Ok(()) => {
                self.cache.invalidate().await;
                self.delete_gate.lock().unwrap().finish_success();
                self.navigator.navigate(POST_DELETE_PATH);
                info!("account deleted");
                Ok(())
            }
            Err(err) => {
                warn!("account deletion failed: {}", err);
                if !err.is_not_found() {
                    self.reporter.report(&err);
                }
                self.delete_gate.lock().unwrap().finish_failure();
                Err(err.into())
            }
        }
    }

    // --- clearing stored linked accounts ---

    /// Open the clear-accounts confirmation dialog.
    pub fn request_clear_accounts(&self) -> ActionResult<()> {
        self.clear_gate.lock().unwrap().request()
    }

    /// Close the clear-accounts dialog; nothing has been issued.
    pub fn cancel_clear_accounts(&self) -> ActionResult<()> {
        self.clear_gate.lock().unwrap().cancel()
    }

    pub fn clear_accounts_state(&self) -> GateState {
        self.clear_gate.lock().unwrap().state()
    }

    pub fn is_clearing_accounts(&self) -> bool {
        self.clear_gate.lock().unwrap().is_busy()
    }

    /// Confirm the bulk unlink and issue it exactly once.
    ///
    /// Returns how many stored accounts were removed.
    pub async fn confirm_clear_accounts(&self) -> ActionResult<u64> {
        self.clear_gate.lock().unwrap().confirm()?;
        info!("clearing stored linked accounts");

        match self.api.clear_linked_accounts().await {
            Ok(deleted) => {
                self.cache.invalidate().await;
                self.clear_gate.lock().unwrap().finish_success();
                self.navigator.navigate(POST_CLEAR_ACCOUNTS_PATH);
                info!(deleted, "stored linked accounts cleared");
                Ok(deleted)
            }
            Err(err) => {
                warn!("clearing linked accounts failed: {}", err);
                if !err.is_not_found() {
                    self.reporter.report(&err);
                }
                self.clear_gate.lock().unwrap().finish_failure();
                Err(err.into())
            }
        }
    }
}

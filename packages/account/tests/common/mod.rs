// ABOUTME: Common test doubles for the account controller tests
// ABOUTME: Scripted portal API mock plus recording navigator and reporter fakes

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;

use tally_account::ProfileApi;
use tally_client::ClientResult;
use tally_core::{ErrorReporter, Navigator, Profile, ProfilePatch, UserIdentity};

mock! {
    pub Api {}

    #[async_trait]
    impl ProfileApi for Api {
        async fn me(&self) -> ClientResult<Profile>;
        async fn update_profile(&self, patch: &ProfilePatch) -> ClientResult<Profile>;
        async fn delete_account(&self) -> ClientResult<()>;
        async fn clear_linked_accounts(&self) -> ClientResult<u64>;
    }
}

/// Navigator that records every path it was sent to
#[derive(Default)]
pub struct RecordingNavigator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Reporter that records reported errors and the current identity
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<String>>,
    pub identity: Mutex<Option<UserIdentity>>,
}

impl RecordingReporter {
    pub fn report_count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &dyn fmt::Display) {
        self.reports.lock().unwrap().push(error.to_string());
    }

    fn set_identity(&self, identity: UserIdentity) {
        *self.identity.lock().unwrap() = Some(identity);
    }

    fn clear_identity(&self) {
        *self.identity.lock().unwrap() = None;
    }
}

/// Helper to build a named profile
#[allow(dead_code)]
pub fn profile(name: &str, public_anonymous: bool) -> Profile {
    let mut profile = Profile::new("u1");
    profile.name = Some(name.to_string());
    profile.public_anonymous = public_anonymous;
    profile
}

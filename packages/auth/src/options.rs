// ABOUTME: Declarative auth configuration consumed by the framework session manager
// ABOUTME: Page routes, the OAuth provider binding, and the sign-in gate

use std::env;

use serde::{Deserialize, Serialize};

use tally_core::{LinkedAccount, AUTH_ERROR_PAGE, OAUTH_PROVIDER, SIGN_IN_PAGE};

use crate::error::{AuthError, AuthResult};

/// Routes the session manager redirects to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPages {
    pub sign_in: String,
    pub error: String,
}

impl Default for AuthPages {
    fn default() -> Self {
        Self {
            sign_in: SIGN_IN_PAGE.to_string(),
            error: AUTH_ERROR_PAGE.to_string(),
        }
    }
}

/// OAuth provider binding; credentials come from the environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
}

impl ProviderConfig {
    /// Discord provider configured from `DISCORD_CLIENT_ID` /
    /// `DISCORD_CLIENT_SECRET`.
    pub fn discord_from_env() -> AuthResult<Self> {
        let client_id = env::var("DISCORD_CLIENT_ID")
            .map_err(|_| AuthError::Configuration("DISCORD_CLIENT_ID is not set".to_string()))?;
        let client_secret = env::var("DISCORD_CLIENT_SECRET").map_err(|_| {
            AuthError::Configuration("DISCORD_CLIENT_SECRET is not set".to_string())
        })?;

        Ok(Self {
            provider: OAUTH_PROVIDER.to_string(),
            client_id,
            client_secret,
        })
    }
}

/// Claims delivered by the OAuth provider at sign-in time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthClaims {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

/// The sign-in gate.
///
/// A sign-in is accepted only when the provider handed us an account, that
/// account is the configured OAuth provider, and the provider profile
/// carries an email claim.
pub fn sign_in_allowed(account: Option<&LinkedAccount>, claims: &OAuthClaims) -> bool {
    let provider_matches = matches!(account, Some(account) if account.provider == OAUTH_PROVIDER);
    provider_matches && claims.email.is_some()
}

/// The full declarative configuration handed to the session manager.
#[derive(Debug, Clone)]
pub struct AuthOptions {
    pub pages: AuthPages,
    pub provider: ProviderConfig,
}

impl AuthOptions {
    pub fn new(provider: ProviderConfig) -> Self {
        Self {
            pages: AuthPages::default(),
            provider,
        }
    }

    pub fn with_pages(mut self, pages: AuthPages) -> Self {
        self.pages = pages;
        self
    }
}

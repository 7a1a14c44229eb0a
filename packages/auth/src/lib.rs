// ABOUTME: Tally authentication library binding the OAuth provider to the session store
// ABOUTME: Sign-in gating, session shape merging, and identity forwarding to monitoring

pub mod error;
pub mod events;
pub mod options;
pub mod session;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use events::AuthEvents;
pub use options::{sign_in_allowed, AuthOptions, AuthPages, OAuthClaims, ProviderConfig};
pub use session::{SessionClaims, SessionStore, SessionUser, UserRecord};

// ABOUTME: Core types, traits, and utilities for Tally
// ABOUTME: Foundational package providing shared functionality across all Tally packages

pub mod constants;
pub mod ports;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{LinkedAccount, Profile, ProfilePatch, Role, UserIdentity};

// Re-export constants
pub use constants::{
    AUTH_ERROR_PAGE, ERROR_ESCAPE_PATH, OAUTH_PROVIDER, POST_CLEAR_ACCOUNTS_PATH,
    POST_DELETE_PATH, SIGN_IN_PAGE,
};

// Re-export ports
pub use ports::{ErrorReporter, LogReporter, Navigator};

// Re-export validation
pub use validation::{validate_patch, ValidationError};

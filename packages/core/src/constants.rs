/// Landing page after a successful account deletion
pub const POST_DELETE_PATH: &str = "/";

/// Landing page after clearing all linked accounts
pub const POST_CLEAR_ACCOUNTS_PATH: &str = "/accounts";

/// Escape-hatch destination offered by the page error boundary
pub const ERROR_ESCAPE_PATH: &str = "/accounts";

/// Sign-in page for the auth configuration
pub const SIGN_IN_PAGE: &str = "/dashboard";

/// Error page for the auth configuration
pub const AUTH_ERROR_PAGE: &str = "/";

/// OAuth provider the portal accepts sign-ins from
pub const OAUTH_PROVIDER: &str = "discord";

/// Maximum length of a user-supplied display name
pub const MAX_NAME_LENGTH: usize = 100;

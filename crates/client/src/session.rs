//! Explicit session state for the gateway.

use spendwise_shared::auth::UserInfo;

/// An authenticated session: the bearer token plus the user it belongs to.
///
/// Created by `ApiClient::login`/`register`, discarded by
/// `ApiClient::logout`. Holding the credential here (instead of a global
/// slot) makes the login/logout lifecycle explicit and lets independent
/// clients carry independent sessions.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    /// The authenticated user.
    pub user: UserInfo,
}

impl Session {
    /// Creates a session from a freshly issued token.
    #[must_use]
    pub const fn new(token: String, user: UserInfo) -> Self {
        Self { token, user }
    }

    /// Returns the bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResponse, SessionUser};

/// The client-held proof of authentication: token plus cached identity.
///
/// A non-empty token means the user is treated as authenticated; validity
/// is never checked locally. The server's 401 is the sole authority, and
/// the API client clears this state when it sees one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    /// True until the persisted session has been restored at startup,
    /// so pages do not redirect before the token has had a chance to load.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Adopt a successful login response.
    pub fn establish(&mut self, login: LoginResponse) {
        self.user = Some(SessionUser { user_id: login.user_id, username: login.username });
        self.token = Some(login.token);
        self.loading = false;
    }

    /// Restore a previously persisted session, or settle as logged out.
    pub fn restore(&mut self, stored: Option<(String, Option<SessionUser>)>) {
        if let Some((token, user)) = stored {
            self.token = Some(token);
            self.user = user;
        }
        self.loading = false;
    }

    /// Drop the token and identity. Used on logout and on any 401.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

use super::*;

fn login() -> LoginResponse {
    LoginResponse { token: "jwt-1".to_owned(), user_id: 7, username: "alice1".to_owned() }
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn restore_with_nothing_settles_logged_out() {
    let mut state = SessionState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_adopts_persisted_token_and_identity() {
    let mut state = SessionState::default();
    let user = SessionUser { user_id: 7, username: "alice1".to_owned() };
    state.restore(Some(("jwt-1".to_owned(), Some(user))));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.username(), Some("alice1"));
}

// =============================================================
// Establish and clear
// =============================================================

#[test]
fn establish_stores_token_and_identity() {
    let mut state = SessionState::default();
    state.establish(login());
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("jwt-1"));
    assert_eq!(state.user.as_ref().map(|u| u.user_id), Some(7));
}

#[test]
fn clear_destroys_the_session() {
    let mut state = SessionState::default();
    state.establish(login());
    state.clear();
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn empty_token_does_not_count_as_authenticated() {
    let mut state = SessionState::default();
    state.restore(Some((String::new(), None)));
    assert!(!state.is_authenticated());
}

use super::*;

#[test]
fn should_redirect_unauth_when_signed_out() {
    assert!(should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let state = AuthState::signed_in("ana");
    assert!(!should_redirect_unauth(&state));
    assert!(should_skip_login(&state));
}

#[test]
fn login_is_shown_when_signed_out() {
    assert!(!should_skip_login(&AuthState::default()));
}

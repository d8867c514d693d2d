use std::sync::Arc;

use super::*;
use crate::state::session::SessionStore;
use crate::storage::MemoryStorage;

fn anonymous() -> Session {
    Session::default()
}

fn logged_in(role: Role) -> Session {
    let mut store = SessionStore::load(Arc::new(MemoryStorage::default()));
    store.login("tok".to_owned(), role, "someone".to_owned());
    store.current().clone()
}

// =============================================================
// Route metadata
// =============================================================

#[test]
fn declared_routes_have_expected_access() {
    assert_eq!(access(LOGIN), Access::Public);
    assert_eq!(access(REGISTER), Access::Public);
    assert_eq!(access(ADMIN_HOME), Access::Role(Role::Admin));
    assert_eq!(access(USER_HOME), Access::Role(Role::User));
    assert_eq!(access(PROFILE), Access::Authenticated);
}

#[test]
fn unknown_paths_default_to_public() {
    assert_eq!(access("/about"), Access::Public);
    assert_eq!(access("/"), Access::Public);
}

// =============================================================
// Decision table: public routes
// =============================================================

#[test]
fn anonymous_may_visit_public_pages() {
    assert_eq!(decide(LOGIN, &anonymous()), Verdict::Allow);
    assert_eq!(decide(REGISTER, &anonymous()), Verdict::Allow);
    assert_eq!(decide("/about", &anonymous()), Verdict::Allow);
}

#[test]
fn authenticated_visit_to_entry_page_bounces_home() {
    assert_eq!(
        decide(LOGIN, &logged_in(Role::Admin)),
        Verdict::ToHome(Role::Admin)
    );
    assert_eq!(
        decide(REGISTER, &logged_in(Role::User)),
        Verdict::ToHome(Role::User)
    );
}

#[test]
fn authenticated_visit_to_other_public_page_is_allowed() {
    assert_eq!(decide("/about", &logged_in(Role::User)), Verdict::Allow);
}

// =============================================================
// Decision table: authenticated routes
// =============================================================

#[test]
fn anonymous_is_sent_to_login_from_authenticated_route() {
    assert_eq!(decide(PROFILE, &anonymous()), Verdict::ToLogin);
}

#[test]
fn any_session_may_visit_authenticated_route() {
    assert_eq!(decide(PROFILE, &logged_in(Role::User)), Verdict::Allow);
    assert_eq!(decide(PROFILE, &logged_in(Role::Admin)), Verdict::Allow);
}

// =============================================================
// Decision table: role-gated routes
// =============================================================

#[test]
fn anonymous_is_sent_to_login_from_role_gated_route() {
    assert_eq!(decide(ADMIN_HOME, &anonymous()), Verdict::ToLogin);
    assert_eq!(decide(USER_HOME, &anonymous()), Verdict::ToLogin);
}

#[test]
fn wrong_role_is_sent_to_login() {
    assert_eq!(decide(ADMIN_HOME, &logged_in(Role::User)), Verdict::ToLogin);
    assert_eq!(decide(USER_HOME, &logged_in(Role::Admin)), Verdict::ToLogin);
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(decide(ADMIN_HOME, &logged_in(Role::Admin)), Verdict::Allow);
    assert_eq!(decide(USER_HOME, &logged_in(Role::User)), Verdict::Allow);
}

// =============================================================
// Verdict redirect targets
// =============================================================

#[test]
fn verdict_redirect_targets() {
    assert_eq!(Verdict::Allow.redirect_target(), None);
    assert_eq!(Verdict::ToLogin.redirect_target(), Some(LOGIN));
    assert_eq!(
        Verdict::ToHome(Role::Admin).redirect_target(),
        Some(ADMIN_HOME)
    );
    assert_eq!(
        Verdict::ToHome(Role::User).redirect_target(),
        Some(USER_HOME)
    );
}

//! Route table and navigation guard.
//!
//! Every navigable path declares an [`Access`] requirement. [`decide`] is the
//! pure decision function evaluated before a page renders; [`enforce`]
//! applies its verdict with an in-app navigation. The guard and the request
//! gateway never call each other; they share only the session store.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, Session, SessionStore};

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const ADMIN_HOME: &str = "/admin";
pub const USER_HOME: &str = "/dashboard";
pub const PROFILE: &str = "/profile";

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable with or without a session.
    Public,
    /// Requires any authenticated session.
    Authenticated,
    /// Requires an authenticated session holding this exact role.
    Role(Role),
}

/// Static route metadata. Paths not listed here are public.
const ROUTES: &[(&str, Access)] = &[
    (LOGIN, Access::Public),
    (REGISTER, Access::Public),
    (ADMIN_HOME, Access::Role(Role::Admin)),
    (USER_HOME, Access::Role(Role::User)),
    (PROFILE, Access::Authenticated),
];

/// Look up the declared access requirement for a path.
pub fn access(path: &str) -> Access {
    ROUTES
        .iter()
        .find(|(p, _)| *p == path)
        .map_or(Access::Public, |(_, a)| *a)
}

/// Entry pages bounce already-authenticated visitors to their home page.
fn is_entry_page(path: &str) -> bool {
    path == LOGIN || path == REGISTER
}

/// Guard verdict for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    ToLogin,
    /// Authenticated visit to an entry page: go to the role's home instead.
    ToHome(Role),
}

impl Verdict {
    /// The in-app path this verdict navigates to, if any.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Verdict::Allow => None,
            Verdict::ToLogin => Some(LOGIN),
            Verdict::ToHome(role) => Some(role.home_path()),
        }
    }
}

/// Decide whether a navigation to `path` may complete under `session`.
/// Total and synchronous; evaluated once per navigation attempt.
pub fn decide(path: &str, session: &Session) -> Verdict {
    match access(path) {
        Access::Public => match session.role() {
            Some(role) if is_entry_page(path) => Verdict::ToHome(role),
            _ => Verdict::Allow,
        },
        Access::Authenticated => {
            if session.is_authenticated() {
                Verdict::Allow
            } else {
                Verdict::ToLogin
            }
        }
        Access::Role(required) => {
            if session.role() == Some(required) {
                Verdict::Allow
            } else {
                Verdict::ToLogin
            }
        }
    }
}

/// Apply the guard for `path`, re-running whenever the session changes and
/// navigating away when the verdict is not `Allow`. Called once at the top
/// of every page component.
pub fn enforce(path: &'static str) {
    let store = expect_context::<RwSignal<SessionStore>>();
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(target) = decide(path, store.get().current()).redirect_target() {
            navigate(target, NavigateOptions::default());
        }
    });
}

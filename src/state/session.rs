//! Authentication state and its durable mirror.
//!
//! [`SessionStore`] is the single source of truth for the current session.
//! It is mutated only by [`SessionStore::login`] and [`SessionStore::logout`];
//! everything else holds read access. The three credential fields live in one
//! [`Credentials`] struct behind an `Option`, so a partial session cannot be
//! represented.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::storage::KeyValueStore;

/// Durable storage keys for the persisted session record.
const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USERNAME_KEY: &str = "username";

/// Account role issued by the server at login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Landing page for this role after login or an entry-page bounce.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/dashboard",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The server only ever issues `admin` or `user`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unrecognized role")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(ParseRoleError),
        }
    }
}

/// The three credential fields, present together or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// Client-held authentication state. `None` means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(Option<Credentials>);

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.0.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.0.as_ref().map(|c| c.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.0.as_ref().map(|c| c.role)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.as_ref().map(|c| c.username.as_str())
    }
}

/// Single source of truth for authentication state, mirrored to durable
/// storage. Storage writes are best-effort.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Restore the session from durable storage. Any missing key, or a role
    /// value that does not parse, yields an unauthenticated session.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let session = match (
            storage.get(TOKEN_KEY),
            storage.get(ROLE_KEY),
            storage.get(USERNAME_KEY),
        ) {
            (Some(token), Some(role), Some(username)) => match role.parse::<Role>() {
                Ok(role) => Session(Some(Credentials {
                    token,
                    role,
                    username,
                })),
                Err(ParseRoleError) => Session::default(),
            },
            _ => Session::default(),
        };
        Self { session, storage }
    }

    /// The live session snapshot. Side-effect-free.
    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Replace the session with freshly issued credentials and persist all
    /// three fields. Callers guarantee non-empty values.
    pub fn login(&mut self, token: String, role: Role, username: String) {
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(ROLE_KEY, role.as_str());
        self.storage.set(USERNAME_KEY, &username);
        self.session = Session(Some(Credentials {
            token,
            role,
            username,
        }));
    }

    /// Clear the session in memory and in durable storage. Idempotent.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
        self.storage.remove(USERNAME_KEY);
        self.session = Session::default();
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

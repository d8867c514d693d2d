use std::sync::Arc;

use super::*;
use crate::storage::MemoryStorage;

fn fresh() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::load(storage.clone() as Arc<dyn KeyValueStore>);
    (storage, store)
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_round_trip() {
    assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
    assert_eq!("user".parse::<Role>(), Ok(Role::User));
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::User.to_string(), "user");
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!("superuser".parse::<Role>(), Err(ParseRoleError));
    assert_eq!("".parse::<Role>(), Err(ParseRoleError));
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Admin.home_path(), "/admin");
    assert_eq!(Role::User.home_path(), "/dashboard");
}

// =============================================================
// Session invariant: all three fields present, or none
// =============================================================

#[test]
fn empty_storage_loads_unauthenticated() {
    let (_, store) = fresh();
    let session = store.current();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.role(), None);
    assert_eq!(session.username(), None);
}

#[test]
fn login_sets_all_three_fields() {
    let (_, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::User, "alice".to_owned());
    let session = store.current();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.role(), Some(Role::User));
    assert_eq!(session.username(), Some("alice"));
}

#[test]
fn logout_clears_all_three_fields() {
    let (_, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::Admin, "root".to_owned());
    store.logout();
    let session = store.current();
    assert!(!session.is_authenticated());
    assert_eq!(session.credentials(), None);
}

#[test]
fn login_overwrites_previous_session() {
    let (_, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::User, "alice".to_owned());
    store.login("tok-2".to_owned(), Role::Admin, "root".to_owned());
    let session = store.current();
    assert_eq!(session.token(), Some("tok-2"));
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.username(), Some("root"));
}

// =============================================================
// Durable storage round trip
// =============================================================

#[test]
fn login_persists_to_storage() {
    let (storage, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::User, "alice".to_owned());
    assert_eq!(storage.get("token"), Some("tok-1".to_owned()));
    assert_eq!(storage.get("role"), Some("user".to_owned()));
    assert_eq!(storage.get("username"), Some("alice".to_owned()));
}

#[test]
fn logout_removes_storage_keys() {
    let (storage, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::User, "alice".to_owned());
    store.logout();
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.get("role"), None);
    assert_eq!(storage.get("username"), None);
}

#[test]
fn persisted_session_survives_reload() {
    let (storage, mut store) = fresh();
    store.login("tok-1".to_owned(), Role::Admin, "root".to_owned());

    let reloaded = SessionStore::load(storage);
    let session = reloaded.current();
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.role(), Some(Role::Admin));
    assert_eq!(session.username(), Some("root"));
}

// =============================================================
// Idempotent logout
// =============================================================

#[test]
fn logout_when_logged_out_is_noop() {
    let (storage, mut store) = fresh();
    store.logout();
    store.logout();
    assert!(!store.current().is_authenticated());
    assert_eq!(storage.get("token"), None);
}

#[test]
fn double_logout_matches_single_logout() {
    let (storage_a, mut once) = fresh();
    once.login("tok".to_owned(), Role::User, "alice".to_owned());
    once.logout();

    let (storage_b, mut twice) = fresh();
    twice.login("tok".to_owned(), Role::User, "alice".to_owned());
    twice.logout();
    twice.logout();

    assert_eq!(once.current(), twice.current());
    assert_eq!(storage_a.get("token"), storage_b.get("token"));
    assert_eq!(storage_a.get("role"), storage_b.get("role"));
    assert_eq!(storage_a.get("username"), storage_b.get("username"));
}

// =============================================================
// Partial or corrupt storage never yields a partial session
// =============================================================

#[test]
fn partial_storage_loads_unauthenticated() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set("token", "tok-1");
    storage.set("role", "user");
    // username key missing
    let store = SessionStore::load(storage);
    assert!(!store.current().is_authenticated());
}

#[test]
fn unknown_stored_role_loads_unauthenticated() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set("token", "tok-1");
    storage.set("role", "owner");
    storage.set("username", "alice");
    let store = SessionStore::load(storage);
    assert!(!store.current().is_authenticated());
}

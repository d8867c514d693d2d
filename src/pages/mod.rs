//! Page components, one per routed path.
//!
//! Pages are thin leaves: they run the route guard, read the session, and
//! call the typed API helpers. All access decisions live in `routes`.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod profile;
pub mod register;

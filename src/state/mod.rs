//! Shared client-side state.
//!
//! The session is the only stateful entity: the app root wraps a
//! [`session::SessionStore`] in an `RwSignal` and provides it via context,
//! so pages and guards observe login/logout through the signal.

pub mod session;

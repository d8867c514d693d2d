//! Failure taxonomy for gateway calls.

use thiserror::Error;

/// Errors surfaced to callers of the request gateway.
///
/// `SessionExpired` is raised only after its side effects (logout and the
/// hard redirect to the login page) have run. No variant is ever retried;
/// presentation is left to the page that made the call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// An authenticated call came back 401 away from the login page.
    #[error("session expired, please log in again")]
    SessionExpired,

    /// Any other non-success response; carries the server `msg` if present.
    #[error("{message}")]
    Api { message: String },

    /// The request never completed, or the body was not JSON.
    #[error("network error: {reason}")]
    Network { reason: String },
}

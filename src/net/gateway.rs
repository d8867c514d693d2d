//! Centralized HTTP gateway for the ParkHub API.
//!
//! Every call goes through [`request`]: it injects the bearer token from the
//! session store, serializes the optional JSON body, parses the response, and
//! routes the status through [`classify`]. A 401 on any page other than
//! `/login` means the token expired: the store is logged out and the browser
//! is hard-redirected to the login page before the error is surfaced.
//!
//! The fetch itself is gated behind `#[cfg(feature = "csr")]` since it
//! requires a browser environment; classification is pure and tested
//! natively.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use leptos::prelude::RwSignal;
use serde_json::Value;

use super::error::ApiError;
use crate::state::session::SessionStore;

/// Fixed origin + path prefix for every API call.
pub const API_BASE: &str = "http://127.0.0.1:5000/api";

/// Path of the login page; used by the 401 guard and the expiry redirect.
pub const LOGIN_PATH: &str = "/login";

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// What to do with a response, decided before any side effect runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// 2xx: hand the parsed body to the caller.
    Success,
    /// 401 away from the login page: clear the session and redirect.
    ExpireSession,
    /// Everything else fails with the server message when one was sent.
    Fail(String),
}

/// Classify a response status.
///
/// A 401 received while already on the login page is a failed login attempt,
/// not an expired session. It must not clear the session or redirect, or a
/// bad password would bounce the user through a redirect loop.
pub(crate) fn classify(status: u16, server_msg: Option<&str>, on_login_page: bool) -> Disposition {
    if (200..300).contains(&status) {
        return Disposition::Success;
    }
    if status == 401 && !on_login_page {
        return Disposition::ExpireSession;
    }
    Disposition::Fail(server_msg.unwrap_or("An API error occurred").to_owned())
}

/// Pull the optional `msg` string out of an error body.
pub(crate) fn server_msg(body: &Value) -> Option<&str> {
    body.get("msg").and_then(Value::as_str)
}

/// Perform one API request with auth header injection and centralized 401
/// handling. Returns the parsed JSON body on success.
///
/// # Errors
///
/// [`ApiError::SessionExpired`] after an expiry-triggered logout + redirect,
/// [`ApiError::Api`] for any other non-success response, and
/// [`ApiError::Network`] when the request never completed.
pub async fn request(
    store: RwSignal<SessionStore>,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        use leptos::prelude::{GetUntracked, Update};

        let url = format!("{API_BASE}{endpoint}");
        let mut builder = gloo_net::http::RequestBuilder::new(&url)
            .method(gloo_method(method))
            .header("Content-Type", "application/json");
        if let Some(token) = store.get_untracked().current().token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = match body {
            Some(data) => {
                let payload =
                    serde_json::to_string(data).map_err(|e| network_error(&e.to_string()))?;
                builder.body(payload)
            }
            None => builder.build(),
        }
        .map_err(|e| network_error(&e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| network_error(&e.to_string()))?;
        let data: Value = response
            .json()
            .await
            .map_err(|e| network_error(&e.to_string()))?;

        match classify(response.status(), server_msg(&data), on_login_page()) {
            Disposition::Success => Ok(data),
            Disposition::ExpireSession => {
                store.update(SessionStore::logout);
                redirect_to_login();
                Err(ApiError::SessionExpired)
            }
            Disposition::Fail(message) => Err(ApiError::Api { message }),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, method, endpoint, body);
        Err(ApiError::Network {
            reason: "not available outside the browser".to_owned(),
        })
    }
}

#[cfg(feature = "csr")]
fn gloo_method(method: Method) -> gloo_net::http::Method {
    match method {
        Method::Get => gloo_net::http::Method::GET,
        Method::Post => gloo_net::http::Method::POST,
        Method::Put => gloo_net::http::Method::PUT,
        Method::Delete => gloo_net::http::Method::DELETE,
    }
}

/// Whether the browser is currently showing the login page.
#[cfg(feature = "csr")]
fn on_login_page() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .is_some_and(|path| path == LOGIN_PATH)
}

/// Hard redirect to the login page, dropping all in-memory app state.
#[cfg(feature = "csr")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

#[cfg(feature = "csr")]
fn network_error(reason: &str) -> ApiError {
    log::error!("api request failed: {reason}");
    ApiError::Network {
        reason: reason.to_owned(),
    }
}

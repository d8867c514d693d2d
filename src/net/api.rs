//! Typed endpoint helpers for the ParkHub API.
//!
//! Thin wrappers over [`gateway::request`]: each helper names its endpoint,
//! shapes the JSON body, and deserializes the response. A response that does
//! not match the expected shape is reported as a network-level failure, the
//! same as a body that was not JSON at all.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;
use serde::Deserialize;
use serde_json::{Value, json};

use super::error::ApiError;
use super::gateway::{self, Method};
use crate::state::session::SessionStore;

/// Successful login payload.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub role: String,
    pub username: String,
}

/// Profile details for the logged-in account.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Admin dashboard greeting.
#[derive(Clone, Debug, Deserialize)]
pub struct AdminDashboard {
    pub logged_in_as: String,
    pub message: String,
}

/// One parking lot as listed for users.
#[derive(Clone, Debug, Deserialize)]
pub struct Lot {
    pub id: i64,
    pub location_name: String,
    pub address: String,
    pub pincode: String,
    pub total_spots: i64,
    pub price_per_hour: f64,
    pub available_spots: i64,
}

/// The spot a reservation is attached to.
#[derive(Clone, Debug, Deserialize)]
pub struct Spot {
    pub id: i64,
    pub spot_number: i64,
    pub lot_id: i64,
    pub status: String,
}

/// One reservation, active or historical.
#[derive(Clone, Debug, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub spot_id: i64,
    pub booking_timestamp: Option<String>,
    pub parking_timestamp: Option<String>,
    pub leaving_timestamp: Option<String>,
    pub parking_cost: Option<f64>,
    pub is_active: bool,
    pub spot: Option<Spot>,
    pub lot: Option<Lot>,
}

/// Outcome of a booking or reservation mutation: the server's message plus
/// the affected reservations.
#[derive(Clone, Debug, Deserialize)]
pub struct ReservationOutcome {
    pub msg: String,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

/// `POST /login` — exchange credentials for a token. Works for both roles.
pub async fn login(
    store: RwSignal<SessionStore>,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let body = json!({ "username": username, "password": password });
    let data = gateway::request(store, Method::Post, "/login", Some(&body)).await?;
    decode(data)
}

/// `POST /register` — create a standard user account. Returns the server
/// confirmation message.
pub async fn register(
    store: RwSignal<SessionStore>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    let body = json!({ "username": username, "email": email, "password": password });
    let data = gateway::request(store, Method::Post, "/register", Some(&body)).await?;
    Ok(message_of(&data))
}

/// `GET /profile` — profile of the logged-in account.
pub async fn fetch_profile(store: RwSignal<SessionStore>) -> Result<Profile, ApiError> {
    let data = gateway::request(store, Method::Get, "/profile", None).await?;
    decode(data)
}

/// `GET /admin/dashboard` — admin-only greeting.
pub async fn fetch_admin_dashboard(
    store: RwSignal<SessionStore>,
) -> Result<AdminDashboard, ApiError> {
    let data = gateway::request(store, Method::Get, "/admin/dashboard", None).await?;
    decode(data)
}

/// `GET /user/lots` — all parking lots with availability counts.
pub async fn fetch_lots(store: RwSignal<SessionStore>) -> Result<Vec<Lot>, ApiError> {
    let data = gateway::request(store, Method::Get, "/user/lots", None).await?;
    decode(data)
}

/// `GET /user/reservations` — the caller's reservations, newest first.
pub async fn fetch_reservations(
    store: RwSignal<SessionStore>,
) -> Result<Vec<Reservation>, ApiError> {
    let data = gateway::request(store, Method::Get, "/user/reservations", None).await?;
    decode(data)
}

/// `POST /user/reservations/book` — book spots in a lot.
pub async fn book_spots(
    store: RwSignal<SessionStore>,
    lot_id: i64,
    number_of_spots: i64,
) -> Result<ReservationOutcome, ApiError> {
    let body = json!({ "lot_id": lot_id, "number_of_spots": number_of_spots });
    let data = gateway::request(store, Method::Post, "/user/reservations/book", Some(&body)).await?;
    decode(data)
}

/// `PUT /user/reservations/park` — confirm the vehicle is parked.
pub async fn park_vehicle(
    store: RwSignal<SessionStore>,
    reservation_id: i64,
) -> Result<String, ApiError> {
    let body = json!({ "reservation_id": reservation_id });
    let data = gateway::request(store, Method::Put, "/user/reservations/park", Some(&body)).await?;
    Ok(message_of(&data))
}

/// `PUT /user/reservations/vacate` — vacate the spot (or cancel an unparked
/// booking) and settle the cost.
pub async fn vacate_spot(
    store: RwSignal<SessionStore>,
    reservation_id: i64,
) -> Result<String, ApiError> {
    let body = json!({ "reservation_id": reservation_id });
    let data =
        gateway::request(store, Method::Put, "/user/reservations/vacate", Some(&body)).await?;
    Ok(message_of(&data))
}

fn decode<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|e| ApiError::Network {
        reason: format!("unexpected response shape: {e}"),
    })
}

fn message_of(data: &Value) -> String {
    data.get("msg")
        .and_then(Value::as_str)
        .unwrap_or("Done.")
        .to_owned()
}

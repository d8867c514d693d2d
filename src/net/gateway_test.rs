use super::*;
use serde_json::json;

// =============================================================
// classify
// =============================================================

#[test]
fn success_statuses_pass_through() {
    for status in [200, 201, 204, 299] {
        assert_eq!(classify(status, None, false), Disposition::Success);
        assert_eq!(classify(status, None, true), Disposition::Success);
    }
}

#[test]
fn unauthorized_away_from_login_expires_session() {
    assert_eq!(classify(401, None, false), Disposition::ExpireSession);
    // A server message does not change the expiry decision.
    assert_eq!(
        classify(401, Some("Token has expired"), false),
        Disposition::ExpireSession
    );
}

#[test]
fn unauthorized_on_login_page_is_plain_failure() {
    // A failed login attempt returns 401; it must not trigger the
    // logout-and-redirect path.
    assert_eq!(
        classify(401, Some("Invalid credentials"), true),
        Disposition::Fail("Invalid credentials".to_owned())
    );
}

#[test]
fn other_errors_carry_server_message() {
    assert_eq!(
        classify(403, Some("Admins access required!"), false),
        Disposition::Fail("Admins access required!".to_owned())
    );
    assert_eq!(
        classify(404, Some("Active reservation not found."), false),
        Disposition::Fail("Active reservation not found.".to_owned())
    );
}

#[test]
fn missing_server_message_falls_back_to_generic() {
    assert_eq!(
        classify(500, None, false),
        Disposition::Fail("An API error occurred".to_owned())
    );
}

// =============================================================
// server_msg extraction
// =============================================================

#[test]
fn server_msg_reads_msg_field() {
    let body = json!({"msg": "Lot ID is required"});
    assert_eq!(server_msg(&body), Some("Lot ID is required"));
}

#[test]
fn server_msg_missing_or_non_string_is_none() {
    assert_eq!(server_msg(&json!({"error": "nope"})), None);
    assert_eq!(server_msg(&json!({"msg": 42})), None);
    assert_eq!(server_msg(&json!([1, 2, 3])), None);
}

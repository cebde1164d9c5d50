use super::*;

#[test]
fn from_response_prefers_json_message_field() {
    let err = ApiError::from_response(404, r#"{"message":"area not found","status":404}"#);
    assert_eq!(err, ApiError::Server { status: 404, message: "area not found".to_owned() });
    assert_eq!(err.to_string(), "area not found");
    assert_eq!(err.status(), Some(404));
}

#[test]
fn from_response_falls_back_to_error_field() {
    let err = ApiError::from_response(500, r#"{"error":"Internal Server Error","path":"/x"}"#);
    assert_eq!(err.to_string(), "Internal Server Error");
}

#[test]
fn from_response_uses_plain_text_body() {
    let err = ApiError::from_response(409, "  cage name already taken \n");
    assert_eq!(err.to_string(), "cage name already taken");
}

#[test]
fn from_response_generic_message_for_empty_or_unhelpful_json() {
    assert_eq!(ApiError::from_response(502, "").to_string(), "request failed: 502");
    assert_eq!(ApiError::from_response(400, r#"{"message":"  "}"#).to_string(), "request failed: 400");
}

#[test]
fn network_and_payload_errors_have_no_status() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Payload("eof".to_owned()).status(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}

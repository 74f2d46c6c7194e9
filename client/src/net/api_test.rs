use super::*;

#[test]
fn resource_endpoint_prefixes_api_root() {
    assert_eq!(resource_endpoint("voyage/getAll"), "/api/voyage/getAll");
    assert_eq!(resource_endpoint("/unitType/getAll"), "/api/unitType/getAll");
}

#[test]
fn error_message_from_body_uses_message_field() {
    let body = r#"{"message":"Vessel not found"}"#;
    assert_eq!(error_message_from_body(body, CREATE_FAILED_MESSAGE), "Vessel not found");
}

#[test]
fn error_message_from_body_falls_back_on_missing_message() {
    assert_eq!(error_message_from_body("{}", CREATE_FAILED_MESSAGE), CREATE_FAILED_MESSAGE);
    assert_eq!(error_message_from_body(r#"{"message":""}"#, CREATE_FAILED_MESSAGE), CREATE_FAILED_MESSAGE);
}

#[test]
fn error_message_from_body_falls_back_on_non_json() {
    assert_eq!(error_message_from_body("<html>502</html>", CREATE_FAILED_MESSAGE), CREATE_FAILED_MESSAGE);
    assert_eq!(error_message_from_body("", CREATE_FAILED_MESSAGE), CREATE_FAILED_MESSAGE);
}

#[test]
fn fetch_failed_message_formats_status() {
    assert_eq!(fetch_failed_message("voyage/getAll", 500), "fetching voyage/getAll failed: 500");
}

#[test]
fn api_error_display_is_user_message() {
    let err = ApiError::Status { status: 400, message: "Vessel not found".to_owned() };
    assert_eq!(err.to_string(), "Vessel not found");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "offline");
}

#[test]
fn resources_name_get_all_endpoints() {
    assert_eq!(VOYAGES_RESOURCE, "voyage/getAll");
    assert_eq!(UNIT_TYPES_RESOURCE, "unitType/getAll");
}

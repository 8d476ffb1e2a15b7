use super::*;

#[test]
fn calculate_endpoint_appends_path() {
    assert_eq!(calculate_endpoint("http://localhost:8900"), "http://localhost:8900/calculate");
}

#[test]
fn calculate_endpoint_tolerates_trailing_slash() {
    assert_eq!(calculate_endpoint("https://calc.example.test/api/"), "https://calc.example.test/api/calculate");
}

#[test]
fn api_error_messages_identify_the_hop() {
    assert_eq!(ApiError::Status { status: 502 }.to_string(), "calculate failed: status 502");
    assert_eq!(ApiError::Decode("missing field `data`".into()).to_string(), "response decode failed: missing field `data`");
    assert_eq!(ApiError::Request("offline".into()).to_string(), "request failed: offline");
}

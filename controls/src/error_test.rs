use super::*;

#[test]
fn network_error_display_includes_cause() {
    let err = ControlError::Network("connection reset".into());
    assert_eq!(err.to_string(), "network failure: connection reset");
    assert!(err.is_network());
}

#[test]
fn rejected_error_display_uses_server_reason() {
    let err = ControlError::Rejected(Some("fleet not found".into()));
    assert_eq!(err.to_string(), "rejected by server: fleet not found");
    assert!(!err.is_network());
}

#[test]
fn rejected_error_display_without_reason() {
    let err = ControlError::Rejected(None);
    assert_eq!(err.to_string(), "rejected by server: no reason given");
}

#[test]
fn missing_data_display() {
    let err = ControlError::MissingData("thumbnail".into());
    assert_eq!(err.to_string(), "missing data: thumbnail");
}

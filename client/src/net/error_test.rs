use super::*;

#[test]
fn status_display_includes_detail_when_present() {
    let err = ApiError::Status {
        url: "http://localhost:8081/process".to_owned(),
        status: 400,
        detail: Some("Only PDF files are supported".to_owned()),
    };
    assert_eq!(
        err.to_string(),
        "http://localhost:8081/process responded with status 400: Only PDF files are supported"
    );
    assert_eq!(err.user_message(), "Only PDF files are supported");
}

#[test]
fn status_without_detail_falls_back_to_code() {
    let err = ApiError::Status { url: "u".to_owned(), status: 503, detail: None };
    assert_eq!(err.to_string(), "u responded with status 503");
    assert_eq!(err.user_message(), "The service responded with status 503.");
}

#[test]
fn transport_and_decode_hide_internals_from_users() {
    let transport = ApiError::Transport { url: "u".to_owned(), message: "TypeError: Failed to fetch".to_owned() };
    assert_eq!(transport.user_message(), "The service could not be reached.");
    assert!(transport.to_string().contains("Failed to fetch"));

    let decode = ApiError::Decode { url: "u".to_owned(), message: "missing field".to_owned() };
    assert_eq!(decode.user_message(), "The service returned an unexpected response.");
}

#[test]
fn rejected_passes_message_through() {
    let err = ApiError::Rejected("Only PDF files can be uploaded.".to_owned());
    assert_eq!(err.user_message(), "Only PDF files can be uploaded.");
    assert_eq!(err.to_string(), "Only PDF files can be uploaded.");
}

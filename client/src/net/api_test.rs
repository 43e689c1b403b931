use super::*;

#[test]
fn status_error_drops_blank_detail() {
    assert_eq!(
        status_error("u", 500, Some("   ".to_owned())),
        ApiError::Status { url: "u".to_owned(), status: 500, detail: None }
    );
}

#[test]
fn status_error_keeps_detail() {
    assert_eq!(
        status_error("u", 404, Some("Document not found".to_owned())),
        ApiError::Status { url: "u".to_owned(), status: 404, detail: Some("Document not found".to_owned()) }
    );
}

#[test]
fn transport_records_url_and_message() {
    assert_eq!(
        transport("http://localhost:8083/scan", "refused"),
        ApiError::Transport { url: "http://localhost:8083/scan".to_owned(), message: "refused".to_owned() }
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_outside_browser_are_unavailable() {
    futures::executor::block_on(async {
        assert_eq!(list_documents().await, Err(ApiError::Unavailable));
        assert_eq!(list_rules().await, Err(ApiError::Unavailable));
        assert_eq!(list_violations(&ViolationFilter::default()).await, Err(ApiError::Unavailable));
        assert_eq!(resolve_violation("1", ResolutionTarget::Resolved).await, Err(ApiError::Unavailable));
        assert_eq!(check_health(Service::Rules).await, Err(ApiError::Unavailable));
    });
}

use super::*;

fn doc(id: &str, created_at: &str, status: DocumentStatus) -> Document {
    Document {
        document_id: id.to_owned(),
        filename: format!("{id}.pdf"),
        created_at: created_at.to_owned(),
        processed_at: None,
        file_size: 1024,
        status,
        metadata: None,
        error_message: None,
    }
}

#[test]
fn documents_state_defaults() {
    let s = DocumentsState::default();
    assert!(s.items.is_empty());
    assert!(s.loading);
    assert!(!s.uploading);
    assert!(s.extracting.is_none());
    assert!(s.detail.is_none());
}

#[test]
fn apply_list_sorts_newest_first_and_clears_loading() {
    let mut s = DocumentsState::default();
    s.apply_list(vec![
        doc("old", "2026-01-01T00:00:00", DocumentStatus::Completed),
        doc("new", "2026-02-12T10:45:21.5", DocumentStatus::Pending),
        doc("mid", "2026-01-15T08:00:00+00:00", DocumentStatus::Failed),
    ]);
    let ids: Vec<_> = s.items.iter().map(|d| d.document_id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
    assert!(!s.loading);
}

#[test]
fn apply_list_puts_unparseable_timestamps_last() {
    let mut s = DocumentsState::default();
    s.apply_list(vec![
        doc("bad", "", DocumentStatus::Pending),
        doc("good", "2026-01-01T00:00:00", DocumentStatus::Pending),
    ]);
    assert_eq!(s.items[0].document_id, "good");
    assert_eq!(s.items[1].document_id, "bad");
}

#[test]
fn extraction_only_offered_for_completed_documents() {
    assert!(can_extract(&doc("a", "", DocumentStatus::Completed)));
    for status in [DocumentStatus::Pending, DocumentStatus::Processing, DocumentStatus::Failed, DocumentStatus::Unknown] {
        assert!(!can_extract(&doc("a", "", status)));
    }
}

#[test]
fn validate_upload_accepts_pdf_any_case() {
    assert!(validate_upload("policy.pdf").is_ok());
    assert!(validate_upload("POLICY.PDF").is_ok());
    assert!(validate_upload(" retention v3.Pdf ").is_ok());
}

#[test]
fn validate_upload_rejects_other_types() {
    for name in ["report.docx", "pdf", ".pdf", "notes.pdf.txt", ""] {
        assert_eq!(
            validate_upload(name),
            Err(ApiError::Rejected("Only PDF files can be uploaded.".to_owned())),
            "{name} should be rejected"
        );
    }
}

#[test]
fn validate_upload_handles_multibyte_names() {
    assert!(validate_upload("política.pdf").is_ok());
    assert!(validate_upload("ü").is_err());
}

#[test]
fn close_detail_clears_panel() {
    let mut s = DocumentsState { detail_loading: true, ..DocumentsState::default() };
    s.close_detail();
    assert!(s.detail.is_none());
    assert!(!s.detail_loading);
}

#[test]
fn status_modifiers() {
    assert_eq!(status_modifier(DocumentStatus::Completed), "ok");
    assert_eq!(status_modifier(DocumentStatus::Failed), "error");
}

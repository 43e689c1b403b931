use super::*;

fn local() -> ServiceEndpoints {
    ServiceEndpoints::default()
}

#[test]
fn defaults_point_at_localhost_ports() {
    let e = local();
    assert_eq!(e.base(Service::Documents), "http://localhost:8081");
    assert_eq!(e.base(Service::Rules), "http://localhost:8082");
    assert_eq!(e.base(Service::Scanner), "http://localhost:8083");
}

#[test]
fn new_trims_trailing_slashes() {
    let e = ServiceEndpoints::new("http://docs/", " http://rules// ", "http://scan");
    assert_eq!(e.base(Service::Documents), "http://docs");
    assert_eq!(e.base(Service::Rules), "http://rules");
    assert_eq!(e.rules(), "http://rules/rules");
}

#[test]
fn document_routes() {
    let e = local();
    assert_eq!(e.documents(None), "http://localhost:8081/documents");
    assert_eq!(
        e.documents(Some(DocumentStatus::Completed)),
        "http://localhost:8081/documents?status=completed"
    );
    assert_eq!(e.document("abc"), "http://localhost:8081/documents/abc");
    assert_eq!(e.process(), "http://localhost:8081/process");
    assert_eq!(e.document_folder_scan(), "http://localhost:8081/scan");
}

#[test]
fn rule_routes() {
    let e = local();
    assert_eq!(e.rules(), "http://localhost:8082/rules");
    assert_eq!(e.extract("doc-1"), "http://localhost:8082/extract/doc-1");
}

#[test]
fn scanner_routes() {
    let e = local();
    assert_eq!(e.scan(), "http://localhost:8083/scan");
    assert_eq!(
        e.resolve("42", ResolutionTarget::Resolved),
        "http://localhost:8083/violations/42/resolve?status=resolved"
    );
    assert_eq!(
        e.resolve("42", ResolutionTarget::Ignored),
        "http://localhost:8083/violations/42/resolve?status=ignored"
    );
}

#[test]
fn violations_route_encodes_filters() {
    let e = local();
    assert_eq!(e.violations(&ViolationFilter::default()), "http://localhost:8083/violations");
    let severity_only = ViolationFilter { severity: Some(Severity::High), status: None };
    assert_eq!(e.violations(&severity_only), "http://localhost:8083/violations?severity=high");
    let both = ViolationFilter { severity: Some(Severity::Critical), status: Some(ViolationStatus::Open) };
    assert_eq!(
        e.violations(&both),
        "http://localhost:8083/violations?severity=critical&status=open"
    );
}

#[test]
fn health_route_per_service() {
    let e = local();
    assert_eq!(e.health(Service::Scanner), "http://localhost:8083/health");
    assert_eq!(Service::ALL.len(), 3);
}

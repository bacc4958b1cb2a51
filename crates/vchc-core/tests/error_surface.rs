use vchc_core::errors::{codes, ErrorInfo, ErrorKind, VchcError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("node", "u")
        .with_context("reason", "example")
}

#[test]
fn graph_error_surface() {
    let err = VchcError::Graph(sample_info(codes::DUPLICATE_NODE, "node already exists"));
    assert_eq!(err.info().code, "duplicate-node");
    assert_eq!(err.kind(), ErrorKind::DuplicateNode);
    assert!(err.info().context.contains_key("node"));
}

#[test]
fn component_error_surface() {
    let err = VchcError::Component(sample_info(codes::COMPONENT_NOT_FOUND, "missing"));
    assert_eq!(err.kind(), ErrorKind::ComponentNotFound);
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn session_error_surface() {
    let err = VchcError::Session(sample_info(codes::REDUCTION_NOT_PERFORMED, "not yet"));
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn unknown_codes_classify_as_other() {
    let err = VchcError::Serde(sample_info("S001", "schema mismatch"));
    assert_eq!(err.kind(), ErrorKind::Other);
}

#[test]
fn context_and_hint_render_in_display() {
    let err = VchcError::graph(codes::NODE_NOT_FOUND, "node does not exist")
        .with_context("node", "q")
        .with_hint("add the node before linking it");
    let rendered = err.to_string();
    assert!(rendered.starts_with("graph error: node does not exist (code: node-not-found)"));
    assert!(rendered.contains("node=q"));
    assert!(rendered.contains("hint: add the node before linking it"));
}

#[test]
fn errors_round_trip_json() {
    let err = VchcError::component(codes::COMPONENT_EXISTS, "component already exists")
        .with_context("u", "1")
        .with_context("v", "2");
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Component\""));
    let decoded: VchcError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

use sigscan_core::errors::{ErrorInfo, ScanError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("track_id", "7")
        .with_context("reason", "example")
}

#[test]
fn index_error_surface() {
    let err = ScanError::Index(sample_info("track-not-found", "no such track"));
    assert_eq!(err.info().code, "track-not-found");
    assert!(err.info().context.contains_key("track_id"));
}

#[test]
fn config_error_surface() {
    let err = ScanError::Config(sample_info("bad-threshold", "negative threshold"));
    assert_eq!(err.info().code, "bad-threshold");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn serde_error_surface() {
    let err = ScanError::Serde(sample_info("yaml_deserialize", "schema mismatch"));
    assert_eq!(err.info().code, "yaml_deserialize");
}

#[test]
fn display_includes_hint() {
    let err = ScanError::Index(
        ErrorInfo::new("track-not-found", "no such track").with_hint("rebuild the index"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("track-not-found"));
    assert!(rendered.contains("rebuild the index"));
}

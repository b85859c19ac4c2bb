use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TracemarkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TracemarkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn dimension_mismatch_reports_both_sizes() {
    let err = TracemarkError::dimension_mismatch(Size::new(10, 10), Size::new(10, 20));
    let msg = err.to_string();
    assert!(msg.contains("dimension mismatch:"));
    assert!(msg.contains("10x10"));
    assert!(msg.contains("10x20"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TracemarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

use super::*;

#[test]
fn empty_object_gives_defaults() {
    let opts = SessionOpts::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(opts, SessionOpts::default());
    assert!(!opts.auto_resolve);
    assert!(!opts.show_on_capture);
}

#[test]
fn fields_parse() {
    let opts =
        SessionOpts::from_reader(r#"{ "auto_resolve": true, "show_on_capture": true }"#.as_bytes())
            .unwrap();
    assert!(opts.auto_resolve);
    assert!(opts.show_on_capture);
}

#[test]
fn unknown_field_is_serde_error() {
    let err = SessionOpts::from_reader(r#"{ "tolerance": 3 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, TracemarkError::Serde(_)));
}

#[test]
fn missing_file_is_validation_error() {
    let err = SessionOpts::from_path("target/no_such_opts.json").unwrap_err();
    assert!(err.to_string().contains("no_such_opts.json"));
}

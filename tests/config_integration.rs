use docundo::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};
use docundo::document::{DEFAULT_CAPACITY, shared};
use docundo::undo::UndoManagerFactory;
use docundo::EditError;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".docundorc");
    let content = r#"
# comment
--history-capacity 25

--document-capacity=512

--log-filter docundo=trace
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert_eq!(flags.history_capacity, Some(25));
    assert_eq!(flags.document_capacity, Some(512));
    assert_eq!(flags.log_filter.as_deref(), Some("docundo=trace"));
}

#[test]
fn test_local_flags_override_global_flags() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".docundorc");
    std::fs::write(&global, "--history-capacity 10\n--document-capacity 4096\n").unwrap();
    std::fs::write(&local, "--history-capacity 3\n").unwrap();

    let effective = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(effective.history_capacity, Some(3), "local should override");
    assert_eq!(
        effective.document_capacity,
        Some(4096),
        "global value should be preserved when local does not override"
    );
}

#[test]
fn test_saved_flags_build_a_working_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".docundorc");
    let flags = ConfigFlags {
        history_capacity: Some(2),
        ..ConfigFlags::default()
    };
    save_config_flags(&path, &flags).unwrap();

    let loaded = load_config_flags(&path).unwrap();
    let document = loaded.new_document().unwrap();
    assert_eq!(document.capacity(), DEFAULT_CAPACITY);
    let manager = UndoManagerFactory::new()
        .create_from_flags(shared(document), &loaded)
        .unwrap();
    assert_eq!(manager.capacity(), 2);
}

#[test]
fn test_missing_history_capacity_is_invalid_configuration() {
    let flags = parse_flag_tokens(&["--document-capacity".to_string(), "64".to_string()]);
    let document = shared(flags.new_document().unwrap());
    let err = UndoManagerFactory::new()
        .create_from_flags(document, &flags)
        .unwrap_err();
    assert!(matches!(err, EditError::InvalidConfiguration(_)));
}

#[test]
fn test_loaded_log_filter_installs_subscriber() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".docundorc");
    std::fs::write(&path, "--log-filter docundo=debug\n").unwrap();

    let flags = load_config_flags(&path).unwrap();
    flags.init_tracing().unwrap();
    // A second global subscriber is refused.
    assert!(flags.init_tracing().is_err());
}

use std::path::PathBuf;

use mailedit::config::{ConfigFlags, load_config_flags, parse_flag_tokens, save_config_flags};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".mailedit");
    let content = r#"
# comment
--no-preview

--sidebar-width 30

--log-file=mailedit.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_preview);
    assert_eq!(flags.sidebar_width, Some(30));
    assert_eq!(flags.log_file, Some(PathBuf::from("mailedit.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".mailedit");
    std::fs::write(&path, "--no-preview\n--sidebar-width 20\n--log-file file.log\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "mailedit".to_string(),
        "--sidebar-width".to_string(),
        "40".to_string(),
        "letter.txt".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_preview, "file flags should remain enabled");
    assert_eq!(effective.sidebar_width, Some(40), "cli should override width");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_saved_flags_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mailedit").join("config");
    let cli_args = vec![
        "mailedit".to_string(),
        "--no-preview".to_string(),
        "--save".to_string(),
    ];
    let flags = parse_flag_tokens(&cli_args);
    save_config_flags(&path, &flags).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("# mailedit defaults"));
    assert!(!saved.contains("--save"), "only saveable flags are written");
    assert_eq!(
        load_config_flags(&path).unwrap(),
        ConfigFlags {
            no_preview: true,
            ..ConfigFlags::default()
        }
    );
}

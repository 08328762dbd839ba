// sanitext-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use sanitext_core::config::{merge_options, DecisionOrder, SanitizeOptions};
use sanitext_core::SanitextError;

#[test_log::test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
allow_emoji: true
allow_chars: "éü"
interactive: true
decision_order: utf16
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let options = SanitizeOptions::load_from_file(file.path())?;
    assert!(options.allow_emoji);
    assert!(options.interactive);
    assert_eq!(options.allow_chars, "éü");
    assert_eq!(options.decision_order, Some(DecisionOrder::Utf16));

    let allowed = options.allowed_set();
    assert!(allowed.contains('é'));
    assert!(allowed.contains('\u{1F600}'));
    Ok(())
}

#[test_log::test]
fn test_missing_fields_take_defaults() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allow_chars: \"\\u00B0\"\n")?;

    let options = SanitizeOptions::load_from_file(file.path())?;
    assert_eq!(options.allow_chars, "\u{00B0}");
    assert!(!options.allow_emoji);
    assert!(!options.interactive);
    assert_eq!(options.decision_order, None);
    assert_eq!(options.effective_decision_order(), DecisionOrder::CodePoint);
    Ok(())
}

#[test]
fn test_missing_file_is_read_error() {
    let result = SanitizeOptions::load_from_file("/definitely/not/here/sanitext.yaml");
    assert!(matches!(result, Err(SanitextError::ConfigRead(_, _))));
}

#[test]
fn test_malformed_file_is_parse_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allow_emoji: [not, a, bool]\n")?;

    let result = SanitizeOptions::load_from_file(file.path());
    match result {
        Err(SanitextError::ConfigParse(path, _)) => assert!(path.contains(&*file.path().to_string_lossy())),
        other => panic!("expected parse error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unknown_decision_order_is_rejected() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"decision_order: alphabetical\n")?;
    assert!(SanitizeOptions::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_merge_file_with_cli_overrides() {
    let from_file = SanitizeOptions { allow_chars: "é".into(), ..Default::default() };
    let from_cli = SanitizeOptions { allow_emoji: true, allow_chars: "ñ".into(), ..Default::default() };

    let merged = merge_options(from_file, from_cli);
    let allowed = merged.allowed_set();
    assert!(allowed.contains('é'));
    assert!(allowed.contains('ñ'));
    assert!(allowed.contains('\u{1F600}'));
    assert!(!merged.interactive);
}

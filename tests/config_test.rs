//! Tests for loading game configuration files.

use noughts::{BotKind, GameConfig, GameMode};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
mode = "eve"
start_first = false
bot = "random"
seed = 99
"#,
    );

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.mode(), GameMode::Eve);
    assert!(!*config.start_first());
    assert_eq!(*config.bot(), BotKind::Random);
    assert_eq!(*config.seed(), Some(99));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_unknown_mode_is_rejected() {
    let file = write_config("mode = \"solo\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

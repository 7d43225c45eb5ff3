//! Tests for loading game configuration files.

use negamax_tictactoe::Player;
use negamax_tictactoe_cli::{PlayConfig, PlayerKind};
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
cross = "human"
circle = "computer"
show_free_cells = true
"#,
    );

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(config.kind_for(Player::Cross), PlayerKind::Human);
    assert_eq!(config.kind_for(Player::Circle), PlayerKind::Computer);
    assert!(*config.show_free_cells());
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    assert_eq!(PlayConfig::from_file(file.path()).unwrap(), PlayConfig::default());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("cross = \"human\"\n");
    let config = PlayConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(PlayerKind::Computer), None, false);
    assert_eq!(*config.cross(), PlayerKind::Computer);
    assert_eq!(*config.circle(), PlayerKind::Human);
}

#[test]
fn test_unknown_player_kind_fails() {
    let file = write_config("cross = \"robot\"\n");
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_fails() {
    let err = PlayConfig::from_file("/nonexistent/negamax-tictactoe.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error: "));
}

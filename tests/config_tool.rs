//! Config-tool behavior on a temporary directory tree.

use omniedge::tools::{ClaudeCodeIntegration, ConfigTool, ToolError};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn tool_in(dir: &TempDir) -> (ClaudeCodeIntegration, PathBuf, PathBuf) {
    let settings = dir.path().join(".claude").join("settings.json");
    let backups = dir.path().join(".omniedge").join("backup").join("claude-code");
    (
        ClaudeCodeIntegration::with_paths(settings.clone(), backups.clone()),
        settings,
        backups,
    )
}

fn read_settings(path: &PathBuf) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn second_write_produces_exactly_one_backup() {
    let dir = TempDir::new().unwrap();
    let (tool, settings_path, _) = tool_in(&dir);

    // First write: no prior file, so no backup.
    let first = tool.set_config("https://x", "k", "m").unwrap();
    assert_eq!(first.target_path, settings_path);
    assert!(first.backup_path.is_none());
    assert!(tool.list_backups().unwrap().is_empty());
    assert_eq!(read_settings(&settings_path)["env"]["ANTHROPIC_MODEL"], "m");

    // Second write backs up the file the first one created.
    let second = tool.set_config("https://x", "k", "m").unwrap();
    assert!(second.backup_path.is_some());
    assert_eq!(tool.list_backups().unwrap().len(), 1);
    assert_eq!(read_settings(&settings_path)["env"]["ANTHROPIC_MODEL"], "m");
}

#[test]
fn all_env_keys_are_merged_and_existing_settings_kept() {
    let dir = TempDir::new().unwrap();
    let (tool, settings_path, _) = tool_in(&dir);

    fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
    fs::write(
        &settings_path,
        r#"{"theme": "dark", "env": {"EDITOR": "vim"}}"#,
    )
    .unwrap();

    tool.set_config("https://edge", "sk-1", "omni-1").unwrap();
    let settings = read_settings(&settings_path);

    // Untouched keys survive the merge.
    assert_eq!(settings["theme"], "dark");
    assert_eq!(settings["env"]["EDITOR"], "vim");

    let env = &settings["env"];
    assert_eq!(env["ANTHROPIC_BASE_URL"], "https://edge");
    assert_eq!(env["ANTHROPIC_AUTH_TOKEN"], "sk-1");
    assert_eq!(env["API_TIMEOUT_MS"], "3000000");
    assert_eq!(env["CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC"], 1);
    assert_eq!(env["ANTHROPIC_MODEL"], "omni-1");
    assert_eq!(env["ANTHROPIC_SMALL_FAST_MODEL"], "omni-1");
}

#[test]
fn corrupt_settings_file_is_treated_as_empty_but_still_backed_up() {
    let dir = TempDir::new().unwrap();
    let (tool, settings_path, _) = tool_in(&dir);

    fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
    fs::write(&settings_path, "not json at all").unwrap();

    let result = tool.set_config("https://x", "k", "m").unwrap();
    // The corrupt original is preserved in the backup.
    let backup = result.backup_path.expect("corrupt file should be backed up");
    assert_eq!(fs::read_to_string(backup).unwrap(), "not json at all");
    // The live file is rebuilt from scratch.
    assert_eq!(read_settings(&settings_path)["env"]["ANTHROPIC_MODEL"], "m");
}

#[test]
fn backups_list_in_lexicographic_order() {
    let dir = TempDir::new().unwrap();
    let (tool, _, backup_dir) = tool_in(&dir);

    fs::create_dir_all(&backup_dir).unwrap();
    for stamp in ["20260301120000", "20250101090000", "20251231235959"] {
        fs::write(
            backup_dir.join(format!("settings.json.{}.bak", stamp)),
            "{}",
        )
        .unwrap();
    }

    let backups = tool.list_backups().unwrap();
    let names: Vec<_> = backups
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "settings.json.20250101090000.bak",
            "settings.json.20251231235959.bak",
            "settings.json.20260301120000.bak",
        ]
    );
}

#[test]
fn list_backups_without_backup_dir_is_empty() {
    let dir = TempDir::new().unwrap();
    let (tool, _, _) = tool_in(&dir);
    assert!(tool.list_backups().unwrap().is_empty());
}

#[test]
fn reset_config_restores_backup_bytes() {
    let dir = TempDir::new().unwrap();
    let (tool, settings_path, _) = tool_in(&dir);

    tool.set_config("https://old", "k-old", "model-old").unwrap();
    let result = tool.set_config("https://new", "k-new", "model-new").unwrap();
    let backup = result.backup_path.unwrap();

    assert_eq!(
        read_settings(&settings_path)["env"]["ANTHROPIC_MODEL"],
        "model-new"
    );

    let restored = tool.reset_config(&backup).unwrap();
    assert_eq!(restored, settings_path);
    assert_eq!(
        read_settings(&settings_path)["env"]["ANTHROPIC_MODEL"],
        "model-old"
    );
}

#[test]
fn reset_config_with_missing_backup_fails() {
    let dir = TempDir::new().unwrap();
    let (tool, _, backup_dir) = tool_in(&dir);

    let missing = backup_dir.join("settings.json.19700101000000.bak");
    let err = tool.reset_config(&missing).unwrap_err();
    match err {
        ToolError::BackupNotFound(path) => assert_eq!(path, missing),
        other => panic!("expected BackupNotFound, got {:?}", other),
    }
}

#[test]
fn tool_names_match_the_integration_contract() {
    let dir = TempDir::new().unwrap();
    let (tool, _, _) = tool_in(&dir);
    assert_eq!(tool.primary_name(), "claude-code");
    assert!(tool.aliases().contains(&"claude"));
}

//! Claude Code settings integration.

use crate::tools::{ConfigTool, SetConfigResult, ToolError};
use chrono::Local;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Patches `~/.claude/settings.json` to point Claude Code at an OmniEdge
/// endpoint, keeping timestamped backups under
/// `~/.omniedge/backup/claude-code/`.
pub struct ClaudeCodeIntegration {
    settings_path: PathBuf,
    backup_dir: PathBuf,
}

impl ClaudeCodeIntegration {
    /// Tool rooted at the current user's home directory.
    pub fn new() -> Result<Self, ToolError> {
        let home = dirs::home_dir().ok_or_else(|| {
            ToolError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "home directory not found",
            ))
        })?;
        Ok(Self::with_paths(
            home.join(".claude").join("settings.json"),
            home.join(".omniedge").join("backup").join("claude-code"),
        ))
    }

    /// Tool with explicit paths, for tests and non-standard layouts.
    pub fn with_paths(settings_path: PathBuf, backup_dir: PathBuf) -> Self {
        Self {
            settings_path,
            backup_dir,
        }
    }

    fn create_backup_if_exists(&self) -> Result<Option<PathBuf>, ToolError> {
        if !self.settings_path.exists() {
            return Ok(None);
        }
        let timestamp = Local::now().format("%Y%m%d%H%M%S");
        fs::create_dir_all(&self.backup_dir)?;
        let backup_path = self.backup_dir.join(format!("settings.json.{}.bak", timestamp));
        fs::copy(&self.settings_path, &backup_path)?;
        debug!(backup = %backup_path.display(), "backed up existing settings");
        Ok(Some(backup_path))
    }

    /// Current settings as a JSON object. A missing or unreadable file is
    /// treated as empty settings rather than an error.
    fn read_settings(&self) -> Map<String, Value> {
        let text = match fs::read_to_string(&self.settings_path) {
            Ok(text) => text,
            Err(_) => return Map::new(),
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

impl ConfigTool for ClaudeCodeIntegration {
    fn primary_name(&self) -> &str {
        "claude-code"
    }

    fn aliases(&self) -> &[&str] {
        &["claude-code", "claude", "claude_code"]
    }

    fn set_config(
        &self,
        base_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<SetConfigResult, ToolError> {
        let backup_path = self.create_backup_if_exists()?;

        let mut settings = self.read_settings();
        let mut env = match settings.get("env") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        env.insert("ANTHROPIC_BASE_URL".into(), json!(base_url));
        env.insert("ANTHROPIC_AUTH_TOKEN".into(), json!(api_key));
        env.insert("API_TIMEOUT_MS".into(), json!("3000000"));
        env.insert("CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC".into(), json!(1));
        env.insert("ANTHROPIC_MODEL".into(), json!(model));
        env.insert("ANTHROPIC_SMALL_FAST_MODEL".into(), json!(model));
        settings.insert("env".into(), Value::Object(env));

        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut text = serde_json::to_string_pretty(&Value::Object(settings))?;
        text.push('\n');
        fs::write(&self.settings_path, text)?;

        info!(target_path = %self.settings_path.display(), model, "claude-code settings updated");
        Ok(SetConfigResult {
            target_path: self.settings_path.clone(),
            backup_path,
        })
    }

    fn list_backups(&self) -> Result<Vec<PathBuf>, ToolError> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }
        let mut backups: Vec<PathBuf> = fs::read_dir(&self.backup_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn reset_config(&self, backup_path: &Path) -> Result<PathBuf, ToolError> {
        if !backup_path.exists() {
            return Err(ToolError::BackupNotFound(backup_path.to_path_buf()));
        }
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        // fs::copy carries file permissions along with the bytes.
        fs::copy(backup_path, &self.settings_path)?;
        info!(backup = %backup_path.display(), "claude-code settings restored");
        Ok(self.settings_path.clone())
    }
}

//! Local IDE-assistant configuration tools.
//!
//! A peer utility of the API client, not a consumer of it: each tool patches
//! a settings file on the local machine so an IDE assistant talks to an
//! OmniEdge endpoint.

pub mod claude_code;

pub use claude_code::ClaudeCodeIntegration;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Outcome of [`ConfigTool::set_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetConfigResult {
    /// The live settings file that was written.
    pub target_path: PathBuf,
    /// Backup of the previous settings, when one existed.
    pub backup_path: Option<PathBuf>,
}

/// Failures local to the config tools.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backup file does not exist: {}", .0.display())]
    BackupNotFound(PathBuf),
}

/// Contract every config-tool integration implements.
///
/// New tools are added by implementing this trait against their own settings
/// file layout; callers stay generic over the trait.
pub trait ConfigTool {
    /// Canonical tool name.
    fn primary_name(&self) -> &str;

    /// Accepted aliases, primary name included.
    fn aliases(&self) -> &[&str];

    /// Merge the endpoint configuration into the tool's settings file,
    /// backing up any existing file first.
    fn set_config(
        &self,
        base_url: &str,
        api_key: &str,
        model: &str,
    ) -> Result<SetConfigResult, ToolError>;

    /// Existing backups, lexicographically sorted. With timestamped names
    /// this is also chronological order.
    fn list_backups(&self) -> Result<Vec<PathBuf>, ToolError>;

    /// Overwrite the live settings file with a backup's bytes.
    fn reset_config(&self, backup_path: &Path) -> Result<PathBuf, ToolError>;
}

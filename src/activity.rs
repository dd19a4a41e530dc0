//! Activity log for cart events
//!
//! Writes JSON lines to `<state dir>/marketcart/activity.log`: one entry per
//! persisted mutation, plus an entry whenever a persisted cart could not be
//! read at startup.

use crate::config::{schema::Config, ConfigManager};
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// File-based activity logger that appends JSON lines
#[derive(Debug, Clone)]
pub struct ActivityLog {
    enabled: bool,
    path: PathBuf,
}

impl ActivityLog {
    /// Create a new activity logger from config
    pub fn new(config: &Config) -> Self {
        Self {
            enabled: config.general.activity_log,
            path: ConfigManager::activity_log_path(),
        }
    }

    /// Create an enabled logger writing to an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            enabled: true,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Log an event as a JSON line
    ///
    /// IO failures are reported through tracing and otherwise dropped;
    /// a cart mutation never fails because its activity entry did.
    pub async fn log(&self, event: &str, data: &serde_json::Value) {
        if !self.enabled {
            return;
        }

        let entry = serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "event": event,
            "data": data,
        });

        let mut line = match serde_json::to_string(&entry) {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to serialize activity event: {}", e);
                return;
            }
        };
        line.push('\n');

        if let Err(e) = self.append(&line).await {
            warn!("Failed to write activity log: {}", e);
        }
    }

    async fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_activity_log(dir: &TempDir, enabled: bool) -> ActivityLog {
        ActivityLog {
            enabled,
            path: dir.path().join("activity.log"),
        }
    }

    #[tokio::test]
    async fn writes_json_line() {
        let dir = TempDir::new().unwrap();
        let activity = test_activity_log(&dir, true);

        activity
            .log("cart.add", &serde_json::json!({"id": "a", "change": "added"}))
            .await;

        let content = tokio::fs::read_to_string(&activity.path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(content.trim()).unwrap();

        assert_eq!(parsed["event"], "cart.add");
        assert_eq!(parsed["data"]["id"], "a");
        assert!(parsed["timestamp"].is_string());
    }

    #[tokio::test]
    async fn appends_multiple_lines() {
        let dir = TempDir::new().unwrap();
        let activity = test_activity_log(&dir, true);

        activity.log("cart.increment", &serde_json::json!({})).await;
        activity.log("cart.decrement", &serde_json::json!({})).await;

        let content = tokio::fs::read_to_string(&activity.path).await.unwrap();
        assert_eq!(content.trim().lines().count(), 2);
    }

    #[tokio::test]
    async fn skips_when_disabled() {
        let dir = TempDir::new().unwrap();
        let activity = test_activity_log(&dir, false);

        activity.log("should.not.appear", &serde_json::json!({})).await;

        assert!(!activity.path.exists());
    }
}

//! # Editor Configuration
//!
//! Everything the editor needs besides the product id. Remote endpoints and
//! credentials are not here: they belong to the store implementations that are
//! injected through [`EditorContext`](crate::collaborators::EditorContext).
//!
//! All keys are optional; missing keys take the defaults below.
//!
//! ```toml
//! bucket = "avatars"
//! upload_folder = "products"
//! landing_route = "/"
//! mailbox_capacity = 32
//! block_submit_after_failed_load = false
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Object-storage bucket receiving listing photos.
    pub bucket: String,
    /// Folder prefix of uploaded objects inside the bucket.
    pub upload_folder: String,
    /// Route opened after a successful submission.
    pub landing_route: String,
    /// Queued UI requests before senders wait.
    pub mailbox_capacity: usize,
    /// Reject submissions when the initial load did not fully succeed.
    pub block_submit_after_failed_load: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            bucket: "avatars".to_string(),
            upload_folder: "products".to_string(),
            landing_route: "/".to_string(),
            mailbox_capacity: 32,
            block_submit_after_failed_load: false,
        }
    }
}

impl EditorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.is_empty() {
            return Err(ConfigError::Invalid("bucket must not be empty".into()));
        }
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid("mailbox_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(EditorConfig::from_toml_str("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_document_overrides_some_keys() {
        let config = EditorConfig::from_toml_str(
            r#"
            bucket = "listings"
            block_submit_after_failed_load = true
            "#,
        )
        .unwrap();
        assert_eq!(config.bucket, "listings");
        assert!(config.block_submit_after_failed_load);
        assert_eq!(config.upload_folder, "products");
    }

    #[test]
    fn rejects_unknown_keys_and_zero_capacity() {
        assert!(matches!(
            EditorConfig::from_toml_str("buckets = \"x\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EditorConfig::from_toml_str("mailbox_capacity = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("editor.toml");
        tokio::fs::write(&path, "landing_route = \"/home\"").await.unwrap();
        let config = EditorConfig::from_file(&path).await.unwrap();
        assert_eq!(config.landing_route, "/home");
    }
}

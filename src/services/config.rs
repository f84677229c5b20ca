//! Configuration service for Symlist

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::ConfigError;
use crate::models::config::SymlistConfig;

#[async_trait]
pub trait ConfigService: Send + Sync {
    async fn load(&self, global_only: bool) -> Result<SymlistConfig, ConfigError>;
    fn config_path(&self, global: bool) -> PathBuf;
    async fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError>;
}

pub struct DefaultConfigService {
    root: PathBuf,
}

impl DefaultConfigService {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn global_config_path() -> PathBuf {
        // XDG standard: ~/.config/symlist/config.toml
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("symlist")
            .join("config.toml")
    }

    fn project_config_path(&self) -> PathBuf {
        self.root.join(".symlist").join("config.toml")
    }

    async fn load_from_path(path: &Path) -> Result<Option<SymlistConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(path).await?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    async fn write_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let config = SymlistConfig::default();
        let content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl ConfigService for DefaultConfigService {
    async fn load(&self, global_only: bool) -> Result<SymlistConfig, ConfigError> {
        let global = Self::load_from_path(&Self::global_config_path()).await?;
        if global_only {
            return Ok(global.unwrap_or_default());
        }

        let project = Self::load_from_path(&self.project_config_path()).await?;
        let config = match (global, project) {
            (Some(base), Some(overlay)) => merge_config(base, overlay),
            (base, overlay) => overlay.or(base).unwrap_or_default(),
        };
        apply_env_overrides(config)
    }

    fn config_path(&self, global: bool) -> PathBuf {
        if global {
            Self::global_config_path()
        } else {
            self.project_config_path()
        }
    }

    async fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(global);

        if path.exists() && !force {
            return Err(ConfigError::InvalidValue {
                key: "config".to_string(),
                message: format!(
                    "Config already exists: {}. Use --force to overwrite.",
                    path.display()
                ),
            });
        }

        Self::write_default_config(&path).await?;
        Ok(path)
    }
}

/// Project settings win; exclude globs from both levels apply
fn merge_config(base: SymlistConfig, overlay: SymlistConfig) -> SymlistConfig {
    let mut exclude = base.folder.exclude;
    for pattern in overlay.folder.exclude.iter() {
        if !exclude.contains(pattern) {
            exclude.push(pattern.clone());
        }
    }

    SymlistConfig {
        folder: crate::models::config::FolderConfig {
            exclude,
            ..overlay.folder
        },
        output: overlay.output,
    }
}

fn apply_env_overrides(mut config: SymlistConfig) -> Result<SymlistConfig, ConfigError> {
    if let Ok(val) = std::env::var("SYMLIST_OUTPUT_FORMAT") {
        config.output.format = val;
    }
    if let Ok(val) = std::env::var("SYMLIST_CONCURRENCY") {
        config.folder.concurrency = val.parse().map_err(|_| ConfigError::InvalidValue {
            key: "SYMLIST_CONCURRENCY".to_string(),
            message: format!("expected a positive integer, got '{}'", val),
        })?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_project_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".symlist");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(
            dir.join("config.toml"),
            "[folder]\nconcurrency = 4\nexclude = [\"*.gen.ts\"]\n",
        )
        .unwrap();

        let service = DefaultConfigService::new(temp.path());
        let config = DefaultConfigService::load_from_path(&service.config_path(false))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(config.folder.concurrency, 4);
        assert_eq!(config.folder.exclude, vec!["*.gen.ts".to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[folder\n").unwrap();

        let err = DefaultConfigService::load_from_path(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_config_is_none() {
        let temp = TempDir::new().unwrap();
        let loaded = DefaultConfigService::load_from_path(&temp.path().join("none.toml"))
            .await
            .unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let service = DefaultConfigService::new(temp.path());

        let path = service.init(false, false).await.unwrap();
        assert!(path.ends_with(".symlist/config.toml"));
        assert!(path.exists());

        let err = service.init(false, false).await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(service.init(false, true).await.is_ok());
    }

    #[test]
    fn test_merge_unions_excludes() {
        let mut base = SymlistConfig::default();
        base.folder.exclude = vec!["a/".to_string(), "b/".to_string()];
        base.folder.concurrency = 2;
        let mut overlay = SymlistConfig::default();
        overlay.folder.exclude = vec!["b/".to_string(), "c/".to_string()];

        let merged = merge_config(base, overlay);
        assert_eq!(merged.folder.exclude, vec!["a/", "b/", "c/"]);
        assert_eq!(merged.folder.concurrency, 16);
    }
}

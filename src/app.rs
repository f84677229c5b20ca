//! Application container for Symlist

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::{OutputContext, OutputFormat};
use crate::models::config::SymlistConfig;
use crate::services::config::{ConfigService, DefaultConfigService};
use crate::services::symbols::{SymbolProvider, TreeSitterSymbolProvider};

pub struct App {
    root: PathBuf,
    pub(crate) output: OutputContext,
    pub(crate) provider: Arc<dyn SymbolProvider>,
    pub(crate) config_service: Arc<dyn ConfigService>,
    pub(crate) config: SymlistConfig,
}

impl App {
    /// Build the container for the current directory.
    ///
    /// `format` overrides `output.format` from config; `destination`
    /// redirects outlines to a file.
    pub async fn new(format: Option<&str>, destination: Option<PathBuf>) -> anyhow::Result<Self> {
        let root = std::env::current_dir()?;
        Self::with_root(root, format, destination).await
    }

    pub async fn with_root(
        root: PathBuf,
        format: Option<&str>,
        destination: Option<PathBuf>,
    ) -> anyhow::Result<Self> {
        tracing::debug!("Initializing Symlist at {:?}", root);

        let config_service = Arc::new(DefaultConfigService::new(&root));
        let config = match config_service.load(false).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config: {}", e);
                SymlistConfig::default()
            }
        };

        let format: OutputFormat = format.unwrap_or(config.output.format.as_str()).parse()?;
        let output = OutputContext::new(root.clone())
            .with_format(format)
            .with_destination(destination);

        let provider = Arc::new(TreeSitterSymbolProvider::new()?);

        tracing::info!(
            "Symlist initialized (format: {}, concurrency: {})",
            format,
            config.folder.concurrency
        );

        Ok(Self {
            root,
            output,
            provider,
            config_service,
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &SymlistConfig {
        &self.config
    }
}

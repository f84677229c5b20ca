//! Folder outlines
//!
//! Fans out one fetch (read + symbol lookup) per file, waits for all of
//! them, then renders the survivors as `path`, `---`, outline blocks in
//! enumeration order. A file whose fetch fails or has no provider is
//! left out; nothing is retried. There is no per-file timeout, so one
//! stalled fetch holds up the whole listing.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use futures::stream;

use crate::error::RenderError;
use crate::models::symbol::Symbol;
use crate::services::outline::{SourceLines, render};
use crate::services::symbols::SymbolProvider;

/// Result of one successful per-file fetch
#[derive(Debug, Clone)]
pub struct FileSymbols {
    pub path: PathBuf,
    pub text: String,
    pub symbols: Vec<Symbol>,
}

pub struct FolderOutline<'a> {
    provider: &'a dyn SymbolProvider,
    concurrency: usize,
    max_file_size: u64,
}

impl<'a> FolderOutline<'a> {
    pub fn new(provider: &'a dyn SymbolProvider) -> Self {
        Self {
            provider,
            concurrency: 16,
            max_file_size: u64::MAX,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Fetch every file; output keeps the order of `files`
    pub async fn collect(&self, files: Vec<PathBuf>) -> Vec<FileSymbols> {
        let total = files.len();
        let results: Vec<FileSymbols> = stream::iter(files)
            .map(|path| self.fetch(path))
            .buffered(self.concurrency)
            .filter_map(futures::future::ready)
            .collect()
            .await;

        tracing::debug!("Collected symbols for {}/{} files", results.len(), total);
        results
    }

    async fn fetch(&self, path: PathBuf) -> Option<FileSymbols> {
        if let Ok(meta) = tokio::fs::metadata(&path).await
            && meta.len() > self.max_file_size
        {
            tracing::warn!(
                "Skipping large file ({}MB): {}",
                meta.len() / 1024 / 1024,
                path.display()
            );
            return None;
        }

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", path.display(), e);
                return None;
            }
        };

        match self.provider.document_symbols(&path, &text).await {
            Ok(Some(symbols)) => Some(FileSymbols {
                path,
                text,
                symbols,
            }),
            Ok(None) => {
                tracing::debug!("No symbols for {}", path.display());
                None
            }
            Err(e) => {
                tracing::debug!("Symbol fetch failed {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Render collected files as `relative/path\n---\n{outline}\n` blocks
pub fn render_blocks(root: &Path, files: &[FileSymbols]) -> Result<String, RenderError> {
    let mut out = String::new();
    for file in files {
        out.push_str(&relative_path(root, &file.path));
        out.push_str("\n---\n");
        out.push_str(&render(&file.symbols, &SourceLines::from_text(&file.text))?);
        out.push('\n');
    }
    Ok(out)
}

/// `path` relative to `root` with `/` separators; unchanged when outside `root`
pub fn relative_path(root: &Path, path: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.display().to_string();
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

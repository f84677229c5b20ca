//! Configuration model for Symlist

use serde::{Deserialize, Serialize};

/// Symlist configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SymlistConfig {
    #[serde(default)]
    pub folder: FolderConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Folder listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// Files fetched and parsed at the same time
    #[serde(default = "defaults::concurrency")]
    pub concurrency: usize,

    /// Skip files larger than this (0 = unlimited)
    #[serde(default = "defaults::max_file_size_mb")]
    pub max_file_size_mb: u32,

    #[serde(default)]
    pub include_hidden: bool,

    #[serde(default = "defaults::respect_gitignore")]
    pub respect_gitignore: bool,

    /// Glob patterns (gitignore syntax) excluded from folder listings
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            concurrency: defaults::concurrency(),
            max_file_size_mb: defaults::max_file_size_mb(),
            include_hidden: false,
            respect_gitignore: defaults::respect_gitignore(),
            exclude: Vec::new(),
        }
    }
}

impl FolderConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        if self.max_file_size_mb == 0 {
            u64::MAX
        } else {
            self.max_file_size_mb as u64 * 1024 * 1024
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "defaults::format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: defaults::format(),
        }
    }
}

mod defaults {
    pub fn concurrency() -> usize {
        16
    }
    pub fn max_file_size_mb() -> u32 {
        5
    }
    pub fn respect_gitignore() -> bool {
        true
    }
    pub fn format() -> String {
        "text".to_string()
    }
}

//! File lister with .gitignore integration
//!
//! Uses the `ignore` crate (from ripgrep) for the recursive walk and for
//! gitignore-style exclude patterns.

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// File filter configuration
#[derive(Debug, Clone)]
pub struct FileFilterConfig {
    /// Root directory for relative path resolution
    pub root: PathBuf,
    /// Use .gitignore files for filtering
    pub respect_gitignore: bool,
    /// Use .symlist/ignore file for filtering
    pub respect_symlist_ignore: bool,
    /// Additional exclude patterns (gitignore syntax)
    pub exclude_patterns: Vec<String>,
    /// Hidden files/directories (starting with .)
    pub include_hidden: bool,
}

impl Default for FileFilterConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            respect_gitignore: true,
            respect_symlist_ignore: true,
            exclude_patterns: Vec::new(),
            include_hidden: false,
        }
    }
}

/// File filter with gitignore integration
pub struct FileFilter {
    config: FileFilterConfig,
    symlist_ignore: Option<Gitignore>,
    excludes: Option<Gitignore>,
}

impl FileFilter {
    /// Create a new file filter with the given configuration
    pub fn new(config: FileFilterConfig) -> Self {
        let symlist_ignore = if config.respect_symlist_ignore {
            Self::load_symlist_ignore(&config.root)
        } else {
            None
        };
        let excludes = Self::build_excludes(&config);

        Self {
            config,
            symlist_ignore,
            excludes,
        }
    }

    /// Create a filter that respects .gitignore in the given root
    pub fn with_gitignore(root: impl AsRef<Path>) -> Self {
        Self::new(FileFilterConfig {
            root: root.as_ref().to_path_buf(),
            ..Default::default()
        })
    }

    /// Load .symlist/ignore file
    fn load_symlist_ignore(root: &Path) -> Option<Gitignore> {
        let ignore_path = root.join(".symlist").join("ignore");
        if !ignore_path.exists() {
            return None;
        }

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&ignore_path) {
            tracing::warn!("Failed to parse .symlist/ignore: {}", err);
        }

        builder.build().ok()
    }

    /// Build the matcher for configured exclude globs
    fn build_excludes(config: &FileFilterConfig) -> Option<Gitignore> {
        if config.exclude_patterns.is_empty() {
            return None;
        }

        let mut builder = GitignoreBuilder::new(&config.root);
        for pattern in &config.exclude_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!("Invalid exclude pattern '{}': {}", pattern, e);
            }
        }

        match builder.build() {
            Ok(gitignore) => Some(gitignore),
            Err(e) => {
                tracing::warn!("Failed to build exclude patterns: {}", e);
                None
            }
        }
    }

    /// Check if a path should be ignored
    pub fn is_ignored(&self, path: &Path) -> bool {
        // Matchers are rooted; paths outside the root are never filtered
        let Ok(relative) = path.strip_prefix(&self.config.root) else {
            return false;
        };
        let is_dir = path.is_dir();

        for component in relative.components() {
            if let Component::Normal(name) = component
                && let Some(name_str) = name.to_str()
            {
                if is_default_ignored(name_str) {
                    return true;
                }
                if !self.config.include_hidden && name_str.starts_with('.') {
                    return true;
                }
            }
        }

        for matcher in [&self.symlist_ignore, &self.excludes].into_iter().flatten() {
            match matcher.matched_path_or_any_parents(relative, is_dir) {
                ignore::Match::Ignore(_) => return true,
                ignore::Match::Whitelist(_) => return false,
                ignore::Match::None => {}
            }
        }

        false
    }

    /// Check if a path should be included (inverse of is_ignored)
    pub fn should_include(&self, path: &Path) -> bool {
        !self.is_ignored(path)
    }

    /// Create a WalkBuilder configured with this filter
    pub fn walk_builder(&self) -> WalkBuilder {
        let mut builder = WalkBuilder::new(&self.config.root);

        builder
            .hidden(!self.config.include_hidden)
            .git_ignore(self.config.respect_gitignore)
            .git_global(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .require_git(false)
            .sort_by_file_path(|a, b| a.cmp(b));

        builder
    }

    /// Every file under the root with one of `extensions` (all files when
    /// empty), in path order
    pub fn discover_files(&self, extensions: &[&str]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in self.walk_builder().build().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            if !extensions.is_empty() {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if !extensions.contains(&ext) {
                    continue;
                }
            }

            if self.should_include(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        files
    }
}

fn is_default_ignored(name: &str) -> bool {
    DEFAULT_IGNORE_PATTERNS.iter().any(|pattern| match pattern.strip_prefix('*') {
        Some(suffix) => name.ends_with(suffix),
        None => name == *pattern,
    })
}

/// Directories and files never listed, whatever .gitignore says
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    ".venv",
    "venv",
    "__pycache__",
    // Build outputs
    "target",
    "dist",
    "build",
    "out",
    ".next",
    "coverage",
    ".gradle",
    // Editor swap files
    "*.swp",
    "*.swo",
    // Logs
    "*.log",
    // Symlist
    ".symlist",
];

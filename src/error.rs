//! Error types for Symlist

use std::path::PathBuf;

use thiserror::Error;

use crate::models::symbol::{Language, SymbolKind};

pub type SymlistResult<T> = std::result::Result<T, SymlistError>;

#[derive(Debug, Error)]
pub enum SymlistError {
    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    MissingContext(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SymlistError {
    pub fn missing_context(message: impl Into<String>) -> Self {
        Self::MissingContext(message.into())
    }

    pub fn is_missing_context(&self) -> bool {
        matches!(self, Self::MissingContext(_))
    }
}

/// Contract violations between a symbol provider and the outline renderer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(
        "Symbol '{symbol}' starts at line {line}, but the source only has {available} lines"
    )]
    OutOfRange {
        symbol: String,
        line: u32,
        available: usize,
    },

    #[error("No label for symbol kind {kind} (symbol '{symbol}')")]
    KindLabelMissing { symbol: String, kind: SymbolKind },
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No symbol provider for {0:?}")]
    UnsupportedLanguage(Language),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid document symbols: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProviderError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_symbol() {
        let err = RenderError::OutOfRange {
            symbol: "load".to_string(),
            line: 12,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("'load'"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("3 lines"));
    }

    #[test]
    fn test_kind_label_missing_message() {
        let err = RenderError::KindLabelMissing {
            symbol: "x".to_string(),
            kind: SymbolKind::Other(42),
        };
        assert_eq!(err.to_string(), "No label for symbol kind kind#42 (symbol 'x')");
    }

    #[test]
    fn test_render_error_converts() {
        let err: SymlistError = RenderError::OutOfRange {
            symbol: "a".to_string(),
            line: 1,
            available: 0,
        }
        .into();
        assert!(matches!(err, SymlistError::Render(_)));
        assert!(!err.is_missing_context());
    }

    #[test]
    fn test_missing_context() {
        let err = SymlistError::missing_context("There must be an active file");
        assert!(err.is_missing_context());
        assert_eq!(err.to_string(), "There must be an active file");
    }
}

//! Data models for Symlist
//!
//! Contains core type definitions used throughout the application.

pub mod config;
pub mod symbol;

// Re-export commonly used types
pub use config::SymlistConfig;
pub use symbol::{Language, Symbol, SymbolKind};

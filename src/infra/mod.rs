//! Infrastructure layer for Symlist
//!
//! Tree-sitter symbol tables and the gitignore-aware file lister.

pub mod ast;
pub mod file_filter;

pub use file_filter::{FileFilter, FileFilterConfig};

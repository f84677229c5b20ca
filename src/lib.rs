//! Symlist - symbol outlines for source files and folders
//!
//! Turns a document symbol tree (from tree-sitter, or a saved LSP
//! `textDocument/documentSymbol` result) into a tab-indented plain-text
//! outline with visibility, kind, name and an inferred return type.

pub mod app;
pub mod cli;
pub mod error;
pub mod infra;
pub mod models;
pub mod services;

pub use error::{SymlistError, SymlistResult};

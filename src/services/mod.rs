//! Service layer for Symlist

pub mod config;
pub mod document_symbols;
pub mod folder;
pub mod outline;
pub mod symbols;

pub use config::{ConfigService, DefaultConfigService};
pub use document_symbols::{JsonSymbolProvider, SymbolSource};
pub use folder::{FileSymbols, FolderOutline, render_blocks};
pub use outline::{SourceLines, render};
pub use symbols::{SymbolProvider, TreeSitterSymbolProvider};

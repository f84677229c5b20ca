//! AST infrastructure for Symlist
//!
//! Tree-sitter symbol tables for the 13 supported grammars.

pub mod node_types;

pub use node_types::{
    SymbolNode, find_symbol_node, supported_languages, symbol_nodes,
};

//! Symbol model definitions
//!
//! Core types for representing an outline of code symbols.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named code entity as reported by a symbol provider.
///
/// Symbols form a tree. `children` keeps source order and is never reordered
/// by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Zero-based line where the symbol's identifying token begins
    pub selection_line: u32,
    pub children: Vec<Symbol>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, selection_line: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            selection_line,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Symbol>) -> Self {
        self.children = children;
        self
    }

    /// Total number of symbols in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + Self::count_all(&self.children)
    }

    pub fn count_all(symbols: &[Symbol]) -> usize {
        symbols.iter().map(Symbol::count).sum()
    }
}

/// Symbol classification (aligned with LSP SymbolKind)
///
/// `Other` carries kind numbers outside the LSP table. They have no display
/// label and are rejected by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Package,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    String,
    Number,
    Boolean,
    Array,
    Object,
    Key,
    Null,
    EnumMember,
    Struct,
    Event,
    Operator,
    TypeParameter,
    Other(u32),
}

impl SymbolKind {
    /// Every kind the LSP table defines, in protocol order
    pub const ALL: [SymbolKind; 26] = [
        Self::File,
        Self::Module,
        Self::Namespace,
        Self::Package,
        Self::Class,
        Self::Method,
        Self::Property,
        Self::Field,
        Self::Constructor,
        Self::Enum,
        Self::Interface,
        Self::Function,
        Self::Variable,
        Self::Constant,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Array,
        Self::Object,
        Self::Key,
        Self::Null,
        Self::EnumMember,
        Self::Struct,
        Self::Event,
        Self::Operator,
        Self::TypeParameter,
    ];

    /// Convert from LSP SymbolKind number
    pub fn from_lsp(kind: u32) -> Self {
        match kind {
            1..=26 => Self::ALL[(kind - 1) as usize],
            other => Self::Other(other),
        }
    }

    /// Convert to LSP SymbolKind number
    pub fn to_lsp(&self) -> u32 {
        match self {
            Self::Other(n) => *n,
            known => Self::ALL
                .iter()
                .position(|k| k == known)
                .map(|i| i as u32 + 1)
                .unwrap_or(0),
        }
    }

    /// Kinds that get return-type inference
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function | Self::Method)
    }

    /// Kinds whose nested functions are reported as methods
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::Struct | Self::Interface | Self::Enum | Self::Object
        )
    }
}

impl From<u32> for SymbolKind {
    fn from(kind: u32) -> Self {
        Self::from_lsp(kind)
    }
}

impl From<SymbolKind> for u32 {
    fn from(kind: SymbolKind) -> Self {
        kind.to_lsp()
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(n) => write!(f, "kind#{}", n),
            known => write!(f, "{:?}", known),
        }
    }
}

/// Languages with a tree-sitter symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Cpp,
    Java,
    Kotlin,
    CSharp,
    TypeScript,
    JavaScript,
    Python,
    Ruby,
    PHP,
    Lua,
    Bash,
    Go,

    #[default]
    Unknown,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => Self::Rust,
            "c" | "cpp" | "cc" | "cxx" | "h" | "hpp" | "hxx" => Self::Cpp,
            "java" => Self::Java,
            "kt" | "kts" => Self::Kotlin,
            "cs" => Self::CSharp,
            "ts" | "tsx" | "mts" | "cts" => Self::TypeScript,
            "js" | "jsx" | "mjs" | "cjs" => Self::JavaScript,
            "py" | "pyi" => Self::Python,
            "rb" | "rake" | "gemspec" => Self::Ruby,
            "php" => Self::PHP,
            "lua" => Self::Lua,
            "sh" | "bash" | "zsh" => Self::Bash,
            "go" => Self::Go,
            _ => Self::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }

    /// Get file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Rust => &["rs"],
            Self::Cpp => &["c", "cpp", "cc", "cxx", "h", "hpp", "hxx"],
            Self::Java => &["java"],
            Self::Kotlin => &["kt", "kts"],
            Self::CSharp => &["cs"],
            Self::TypeScript => &["ts", "tsx", "mts", "cts"],
            Self::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Self::Python => &["py", "pyi"],
            Self::Ruby => &["rb", "rake", "gemspec"],
            Self::PHP => &["php"],
            Self::Lua => &["lua"],
            Self::Bash => &["sh", "bash", "zsh"],
            Self::Go => &["go"],
            Self::Unknown => &[],
        }
    }

    /// Get LSP language ID
    pub fn lsp_id(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Cpp => "cpp",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::CSharp => "csharp",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::PHP => "php",
            Self::Lua => "lua",
            Self::Bash => "shellscript",
            Self::Go => "go",
            Self::Unknown => "plaintext",
        }
    }

    /// Get all supported languages (excluding Unknown)
    pub fn all() -> &'static [Self] {
        &[
            Self::Rust,
            Self::Cpp,
            Self::Java,
            Self::Kotlin,
            Self::CSharp,
            Self::TypeScript,
            Self::JavaScript,
            Self::Python,
            Self::Ruby,
            Self::PHP,
            Self::Lua,
            Self::Bash,
            Self::Go,
        ]
    }

    /// Get all supported file extensions
    pub fn all_extensions() -> Vec<&'static str> {
        Self::all()
            .iter()
            .flat_map(|l| l.extensions().iter().copied())
            .collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lsp_id())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" | "rs" => Ok(Self::Rust),
            "cpp" | "c++" | "c" => Ok(Self::Cpp),
            "java" => Ok(Self::Java),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "javascript" | "js" => Ok(Self::JavaScript),
            "python" | "py" => Ok(Self::Python),
            "ruby" | "rb" => Ok(Self::Ruby),
            "php" => Ok(Self::PHP),
            "lua" => Ok(Self::Lua),
            "bash" | "sh" | "shellscript" => Ok(Self::Bash),
            "go" | "golang" => Ok(Self::Go),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_symbol_kind_lsp_conversion() {
        assert_eq!(SymbolKind::from_lsp(5), SymbolKind::Class);
        assert_eq!(SymbolKind::from_lsp(6), SymbolKind::Method);
        assert_eq!(SymbolKind::from_lsp(12), SymbolKind::Function);
        assert_eq!(SymbolKind::from_lsp(26), SymbolKind::TypeParameter);
        assert_eq!(SymbolKind::Function.to_lsp(), 12);
        assert_eq!(SymbolKind::File.to_lsp(), 1);
    }

    #[test]
    fn test_unknown_lsp_kind_is_preserved() {
        assert_eq!(SymbolKind::from_lsp(0), SymbolKind::Other(0));
        assert_eq!(SymbolKind::from_lsp(99), SymbolKind::Other(99));
        assert_eq!(SymbolKind::Other(99).to_lsp(), 99);
    }

    #[test]
    fn test_symbol_kind_serde_as_number() {
        let kind: SymbolKind = serde_json::from_str("8").unwrap();
        assert_eq!(kind, SymbolKind::Field);
        assert_eq!(serde_json::to_string(&SymbolKind::Enum).unwrap(), "10");
    }

    #[test]
    fn test_callable_kinds() {
        assert!(SymbolKind::Function.is_callable());
        assert!(SymbolKind::Method.is_callable());
        assert!(!SymbolKind::Constructor.is_callable());
        assert!(!SymbolKind::Field.is_callable());
    }

    #[test]
    fn test_symbol_count() {
        let tree = Symbol::new("A", SymbolKind::Class, 0).with_children(vec![
            Symbol::new("b", SymbolKind::Method, 1),
            Symbol::new("c", SymbolKind::Field, 2),
        ]);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.count(), 3);
        assert_eq!(Symbol::count_all(&[tree.clone(), tree]), 6);
    }

    #[test]
    fn test_language_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("TSX"), Language::TypeScript);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("md"), Language::Unknown);
        assert_eq!(
            Language::from_path(&PathBuf::from("src/app.kt")),
            Language::Kotlin
        );
        assert_eq!(Language::from_path(&PathBuf::from("Makefile")), Language::Unknown);
    }

    #[test]
    fn test_all_extensions_cover_languages() {
        let exts = Language::all_extensions();
        assert!(exts.contains(&"ts"));
        assert!(exts.contains(&"go"));
        assert!(!exts.contains(&"md"));
    }
}

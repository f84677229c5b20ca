//! Symbol Provider
//!
//! Source of the symbol trees fed to the outline renderer. The built-in
//! provider walks tree-sitter syntax trees; `document_symbols` adds one that
//! replays LSP `textDocument/documentSymbol` output.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use tree_sitter::{Node, Parser};

use crate::error::ProviderError;
use crate::infra::ast::{find_symbol_node, supported_languages};
use crate::models::symbol::{Language, Symbol, SymbolKind};

#[async_trait]
pub trait SymbolProvider: Send + Sync {
    /// Symbols of one file, top level first.
    ///
    /// `Ok(None)` means no provider handles this file.
    async fn document_symbols(
        &self,
        file: &Path,
        content: &str,
    ) -> Result<Option<Vec<Symbol>>, ProviderError>;
}

pub struct TreeSitterSymbolProvider {
    parsers: HashMap<Language, Mutex<Parser>>,
}

impl TreeSitterSymbolProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let mut parsers = HashMap::new();
        for language in supported_languages() {
            parsers.insert(*language, Mutex::new(Self::create_parser(*language)?));
        }
        Ok(Self { parsers })
    }

    fn grammar(language: Language) -> Option<tree_sitter::Language> {
        let grammar: tree_sitter::Language = match language {
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            // TSX is a superset
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::Kotlin => tree_sitter_kotlin_sg::LANGUAGE.into(),
            Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            Language::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Language::Bash => tree_sitter_bash::LANGUAGE.into(),
            Language::Ruby => tree_sitter_ruby::LANGUAGE.into(),
            Language::Lua => tree_sitter_lua::LANGUAGE.into(),
            Language::PHP => tree_sitter_php::LANGUAGE_PHP.into(),
            Language::Unknown => return None,
        };
        Some(grammar)
    }

    fn create_parser(language: Language) -> Result<Parser, ProviderError> {
        let grammar = Self::grammar(language).ok_or(ProviderError::UnsupportedLanguage(language))?;
        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|e| ProviderError::parse(language.lsp_id(), e.to_string()))?;
        Ok(parser)
    }

    /// Parse `content` as `language` and extract its symbol tree
    pub fn extract(
        &self,
        file: &Path,
        content: &str,
        language: Language,
    ) -> Result<Vec<Symbol>, ProviderError> {
        let parser_mutex = self
            .parsers
            .get(&language)
            .ok_or(ProviderError::UnsupportedLanguage(language))?;

        let tree = {
            let mut parser = parser_mutex
                .lock()
                .map_err(|_| ProviderError::parse(file, "Parser lock poisoned"))?;
            parser
                .parse(content, None)
                .ok_or_else(|| ProviderError::parse(file, "Failed to parse file"))?
        };

        let walker = SymbolWalker {
            language,
            source: content.as_bytes(),
        };
        let mut symbols = Vec::new();
        walker.collect(tree.root_node(), None, &mut symbols);
        Ok(symbols)
    }
}

impl Default for TreeSitterSymbolProvider {
    fn default() -> Self {
        Self::new().expect("Failed to create tree-sitter symbol provider")
    }
}

#[async_trait]
impl SymbolProvider for TreeSitterSymbolProvider {
    async fn document_symbols(
        &self,
        file: &Path,
        content: &str,
    ) -> Result<Option<Vec<Symbol>>, ProviderError> {
        let language = Language::from_path(file);
        if !self.parsers.contains_key(&language) {
            tracing::debug!("No symbol provider for {}", file.display());
            return Ok(None);
        }
        self.extract(file, content, language).map(Some)
    }
}

/// Pre-order walk that turns symbol-declaring nodes into `Symbol`s.
///
/// Nodes outside the language table are transparent: their symbol
/// descendants attach to the nearest enclosing symbol.
struct SymbolWalker<'s> {
    language: Language,
    source: &'s [u8],
}

impl SymbolWalker<'_> {
    fn collect(&self, node: Node<'_>, parent: Option<SymbolKind>, out: &mut Vec<Symbol>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match self.symbol_for(child, parent) {
                Some(mut symbol) => {
                    self.collect(child, Some(symbol.kind), &mut symbol.children);
                    out.push(symbol);
                }
                None => self.collect(child, parent, out),
            }
        }
    }

    fn symbol_for(&self, node: Node<'_>, parent: Option<SymbolKind>) -> Option<Symbol> {
        let entry = find_symbol_node(self.language, node.kind())?;
        if entry.requires_body && node.child_by_field_name("body").is_none() {
            return None;
        }

        let (name, line) = match self.name_node(node) {
            Some(name_node) => (
                self.first_line_text(name_node),
                name_node.start_position().row,
            ),
            None => (String::new(), node.start_position().row),
        };

        let kind = match entry.kind {
            SymbolKind::Function if parent.is_some_and(|p| p.is_container()) => SymbolKind::Method,
            SymbolKind::Struct if is_interface_spec(node) => SymbolKind::Interface,
            // JS/TS class constructors
            SymbolKind::Method if node.kind() == "method_definition" && name == "constructor" => {
                SymbolKind::Constructor
            }
            kind => kind,
        };

        let name = if name.is_empty() {
            "<anonymous>".to_string()
        } else {
            name
        };

        Some(Symbol::new(name, kind, line as u32))
    }

    /// Find the identifying token of a declaration node
    fn name_node<'t>(&self, node: Node<'t>) -> Option<Node<'t>> {
        let mut current = node;
        loop {
            if let Some(name) = current.child_by_field_name("name") {
                return Some(name);
            }
            match current.child_by_field_name("declarator") {
                Some(inner) => current = inner,
                None => break,
            }
        }
        if current.id() != node.id() {
            return Some(current);
        }

        if let Some(ty) = node.child_by_field_name("type")
            && node.kind() == "impl_item"
        {
            return Some(ty);
        }

        first_named_descendant(node, |n| n.child_by_field_name("name").is_some())
            .and_then(|n| n.child_by_field_name("name"))
            .or_else(|| first_named_descendant(node, is_identifier_like))
    }

    fn first_line_text(&self, node: Node<'_>) -> String {
        node.utf8_text(self.source)
            .ok()
            .and_then(|t| t.lines().next())
            .map(|t| t.trim().to_string())
            .unwrap_or_default()
    }
}

fn is_identifier_like(node: Node<'_>) -> bool {
    let kind = node.kind();
    kind.ends_with("identifier") || matches!(kind, "name" | "variable_name" | "constant")
}

/// Go `type X interface { .. }`
fn is_interface_spec(node: Node<'_>) -> bool {
    node.kind() == "type_spec"
        && node
            .child_by_field_name("type")
            .is_some_and(|t| t.kind() == "interface_type")
}

/// Declaration bodies hold nested symbols, never the declaration's own name
fn is_body(node: Node<'_>) -> bool {
    let kind = node.kind();
    kind.contains("body") || kind.contains("block") || kind == "declaration_list"
}

fn first_named_descendant<'t>(node: Node<'t>, pred: fn(Node<'t>) -> bool) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if is_body(child) {
            continue;
        }
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = first_named_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::outline::{SourceLines, render};

    fn names(symbols: &[Symbol]) -> Vec<(&str, SymbolKind)> {
        symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect()
    }

    #[test]
    fn test_provider_creation() {
        let provider = TreeSitterSymbolProvider::new();
        assert!(provider.is_ok());
    }

    #[test]
    fn test_rust_symbols() {
        let provider = TreeSitterSymbolProvider::default();
        let code = r#"
pub struct Point {
    x: i32,
}

impl Point {
    pub fn new() -> Self {
        Point { x: 0 }
    }
}

fn main() {}
"#;
        let symbols = provider
            .extract(Path::new("lib.rs"), code, Language::Rust)
            .unwrap();

        assert_eq!(
            names(&symbols),
            vec![
                ("Point", SymbolKind::Struct),
                ("Point", SymbolKind::Object),
                ("main", SymbolKind::Function),
            ]
        );
        assert_eq!(names(&symbols[0].children), vec![("x", SymbolKind::Field)]);
        assert_eq!(names(&symbols[1].children), vec![("new", SymbolKind::Method)]);
        assert_eq!(symbols[0].selection_line, 1);
        assert_eq!(symbols[1].children[0].selection_line, 6);
    }

    #[test]
    fn test_python_methods_nest_under_class() {
        let provider = TreeSitterSymbolProvider::default();
        let code = "class Greeter:\n    def greet(self):\n        pass\n\ndef helper():\n    pass\n";
        let symbols = provider
            .extract(Path::new("g.py"), code, Language::Python)
            .unwrap();

        assert_eq!(
            names(&symbols),
            vec![("Greeter", SymbolKind::Class), ("helper", SymbolKind::Function)]
        );
        assert_eq!(names(&symbols[0].children), vec![("greet", SymbolKind::Method)]);
    }

    #[test]
    fn test_java_field_uses_declarator_name() {
        let provider = TreeSitterSymbolProvider::default();
        let code = "public class Person {\n    private String name;\n    public int getAge() { return 1; }\n}\n";
        let symbols = provider
            .extract(Path::new("Person.java"), code, Language::Java)
            .unwrap();

        assert_eq!(names(&symbols), vec![("Person", SymbolKind::Class)]);
        assert_eq!(
            names(&symbols[0].children),
            vec![("name", SymbolKind::Field), ("getAge", SymbolKind::Method)]
        );
    }

    #[test]
    fn test_go_interface_type() {
        let provider = TreeSitterSymbolProvider::default();
        let code = "package main\n\ntype Reader interface {\n\tRead() int\n}\n\ntype Box struct {\n\tW int\n}\n";
        let symbols = provider
            .extract(Path::new("main.go"), code, Language::Go)
            .unwrap();

        assert_eq!(symbols[0].name, "Reader");
        assert_eq!(symbols[0].kind, SymbolKind::Interface);
        assert_eq!(symbols[1].name, "Box");
        assert_eq!(symbols[1].kind, SymbolKind::Struct);
    }

    #[test]
    fn test_typescript_outline_renders() {
        let provider = TreeSitterSymbolProvider::default();
        let code = "export class Store {\n  private items: string[] = [];\n  public getName(): string {\n    return '';\n  }\n}\n";
        let symbols = provider
            .extract(Path::new("store.ts"), code, Language::TypeScript)
            .unwrap();

        let out = render(&symbols, &SourceLines::from_text(code)).unwrap();
        assert_eq!(
            out,
            "Class Store\n\tprivate Field items\n\tpublic Method getName: string\n"
        );
    }

    #[test]
    fn test_class_constructor_kind() {
        let provider = TreeSitterSymbolProvider::default();
        let code = "class C {\n  constructor() {}\n  async load(): Promise<void> {}\n}\n";
        let symbols = provider
            .extract(Path::new("a.ts"), code, Language::TypeScript)
            .unwrap();

        assert_eq!(
            names(&symbols[0].children),
            vec![
                ("constructor", SymbolKind::Constructor),
                ("load", SymbolKind::Method),
            ]
        );
        let out = render(&symbols, &SourceLines::from_text(code)).unwrap();
        assert_eq!(
            out,
            "Class C\n\tConstructor constructor\n\tMethod load: Promise<void>\n"
        );

        let js = "class Repo {\n  constructor(db) { this.db = db; }\n}\n";
        let symbols = provider
            .extract(Path::new("repo.js"), js, Language::JavaScript)
            .unwrap();
        assert_eq!(
            names(&symbols[0].children),
            vec![("constructor", SymbolKind::Constructor)]
        );
    }

    #[tokio::test]
    async fn test_unsupported_file_is_absent() {
        let provider = TreeSitterSymbolProvider::default();
        let result = provider
            .document_symbols(Path::new("README.md"), "# Title")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_supported_file_without_symbols_is_empty() {
        let provider = TreeSitterSymbolProvider::default();
        let result = provider
            .document_symbols(Path::new("empty.py"), "")
            .await
            .unwrap();
        assert_eq!(result, Some(Vec::new()));
    }
}

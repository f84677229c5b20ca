//! LSP document symbols
//!
//! Decodes `textDocument/documentSymbol` results so symbol trees computed by
//! a language server can be rendered without re-parsing the file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;

use crate::error::ProviderError;
use crate::models::symbol::{Symbol, SymbolKind};
use crate::services::symbols::SymbolProvider;

/// Position within a document (0-indexed, LSP standard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Range within a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Document symbol (hierarchical form)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbol {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub kind: SymbolKind,
    pub range: Range,
    pub selection_range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DocumentSymbol>>,
}

/// Location in a document (LSP wire format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LspLocation {
    pub uri: String,
    /// Range is required by LSP spec but some servers (kotlin-language-server) may omit it
    #[serde(default)]
    pub range: Range,
}

/// Symbol information (flat form, still returned by some servers)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInformation {
    pub name: String,
    pub kind: SymbolKind,
    pub location: LspLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DocumentSymbolResponse {
    Nested(Vec<DocumentSymbol>),
    Flat(Vec<SymbolInformation>),
}

impl From<&DocumentSymbol> for Symbol {
    fn from(doc: &DocumentSymbol) -> Self {
        let children = doc
            .children
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Symbol::from)
            .collect();
        Symbol::new(doc.name.clone(), doc.kind, doc.selection_range.start.line)
            .with_children(children)
    }
}

impl From<&SymbolInformation> for Symbol {
    fn from(info: &SymbolInformation) -> Self {
        Symbol::new(info.name.clone(), info.kind, info.location.range.start.line)
    }
}

impl DocumentSymbolResponse {
    pub fn into_symbols(self) -> Vec<Symbol> {
        match self {
            Self::Nested(symbols) => symbols.iter().map(Symbol::from).collect(),
            Self::Flat(infos) => infos.iter().map(Symbol::from).collect(),
        }
    }
}

/// Parse a documentSymbol result (`null` counts as no symbols)
pub fn parse_document_symbols(json: &str) -> Result<Vec<Symbol>, ProviderError> {
    let response: Option<DocumentSymbolResponse> = serde_json::from_str(json)?;
    Ok(response.map(DocumentSymbolResponse::into_symbols).unwrap_or_default())
}

/// Where a `JsonSymbolProvider` reads its symbols from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolSource {
    File(PathBuf),
    Stdin,
}

impl SymbolSource {
    /// `-` selects stdin
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Provider that replays a saved documentSymbol response for a single file
pub struct JsonSymbolProvider {
    source: SymbolSource,
}

impl JsonSymbolProvider {
    pub fn new(source: SymbolSource) -> Self {
        Self { source }
    }

    async fn read_source(&self) -> Result<String, ProviderError> {
        match &self.source {
            SymbolSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            SymbolSource::Stdin => {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                Ok(buf)
            }
        }
    }
}

#[async_trait]
impl SymbolProvider for JsonSymbolProvider {
    async fn document_symbols(
        &self,
        file: &Path,
        _content: &str,
    ) -> Result<Option<Vec<Symbol>>, ProviderError> {
        tracing::debug!("Reading symbols for {} from {:?}", file.display(), self.source);
        let json = self.read_source().await?;
        parse_document_symbols(&json).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NESTED: &str = r#"[
      {
        "name": "Person",
        "kind": 5,
        "range": {"start": {"line": 0, "character": 0}, "end": {"line": 9, "character": 1}},
        "selectionRange": {"start": {"line": 0, "character": 13}, "end": {"line": 0, "character": 19}},
        "children": [
          {
            "name": "getAge",
            "detail": "() => int",
            "kind": 6,
            "range": {"start": {"line": 2, "character": 2}, "end": {"line": 4, "character": 3}},
            "selectionRange": {"start": {"line": 2, "character": 13}, "end": {"line": 2, "character": 19}}
          }
        ]
      }
    ]"#;

    #[test]
    fn test_parse_nested_symbols() {
        let symbols = parse_document_symbols(NESTED).unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "Person");
        assert_eq!(symbols[0].kind, SymbolKind::Class);
        assert_eq!(symbols[0].selection_line, 0);
        assert_eq!(symbols[0].children[0].name, "getAge");
        assert_eq!(symbols[0].children[0].kind, SymbolKind::Method);
        assert_eq!(symbols[0].children[0].selection_line, 2);
    }

    #[test]
    fn test_parse_flat_symbols() {
        let json = r#"[{
            "name": "main",
            "kind": 12,
            "location": {
                "uri": "file:///tmp/main.go",
                "range": {"start": {"line": 4, "character": 0}, "end": {"line": 6, "character": 1}}
            }
        }]"#;
        let symbols = parse_document_symbols(json).unwrap();
        assert_eq!(symbols, vec![Symbol::new("main", SymbolKind::Function, 4)]);
    }

    #[test]
    fn test_parse_null_and_empty() {
        assert!(parse_document_symbols("null").unwrap().is_empty());
        assert!(parse_document_symbols("[]").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_kind_survives_decoding() {
        let json = r#"[{
            "name": "odd",
            "kind": 255,
            "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}},
            "selectionRange": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 3}}
        }]"#;
        let symbols = parse_document_symbols(json).unwrap();
        assert_eq!(symbols[0].kind, SymbolKind::Other(255));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = parse_document_symbols("{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Json(_)));
    }

    #[test]
    fn test_symbol_source_from_arg() {
        assert_eq!(SymbolSource::from_arg("-"), SymbolSource::Stdin);
        assert_eq!(
            SymbolSource::from_arg("out.json"),
            SymbolSource::File(PathBuf::from("out.json"))
        );
    }

    #[tokio::test]
    async fn test_provider_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("symbols.json");
        std::fs::write(&path, NESTED).unwrap();

        let provider = JsonSymbolProvider::new(SymbolSource::File(path));
        let symbols = provider
            .document_symbols(Path::new("Person.java"), "")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(symbols[0].count(), 2);
    }

    #[tokio::test]
    async fn test_provider_missing_file_is_error() {
        let provider = JsonSymbolProvider::new(SymbolSource::File(PathBuf::from(
            "/nonexistent/symbols.json",
        )));
        let result = provider.document_symbols(Path::new("a.ts"), "").await;
        assert!(matches!(result, Err(ProviderError::Io(_))));
    }
}

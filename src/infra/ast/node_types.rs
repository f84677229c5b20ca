//! Tree-sitter Symbol Node Tables
//!
//! Which syntax nodes of each grammar declare an outline symbol, and the
//! LSP kind they are reported as. Node type names come from each grammar's
//! `src/node-types.json`.

use crate::models::symbol::{Language, SymbolKind};

/// Symbol-declaring node type
#[derive(Debug, Clone, Copy)]
pub struct SymbolNode {
    /// Actual tree-sitter node type
    pub node_type: &'static str,
    pub kind: SymbolKind,
    /// Only a declaration when the node has a `body` field (C/C++ specifiers
    /// double as type references)
    pub requires_body: bool,
}

impl SymbolNode {
    const fn new(node_type: &'static str, kind: SymbolKind) -> Self {
        Self {
            node_type,
            kind,
            requires_body: false,
        }
    }

    const fn with_body(node_type: &'static str, kind: SymbolKind) -> Self {
        Self {
            node_type,
            kind,
            requires_body: true,
        }
    }
}

/// Get the symbol table for a language
pub fn symbol_nodes(language: Language) -> &'static [SymbolNode] {
    match language {
        Language::Python => PYTHON,
        Language::TypeScript => TYPESCRIPT,
        Language::JavaScript => JAVASCRIPT,
        Language::Rust => RUST,
        Language::Go => GO,
        Language::Java => JAVA,
        Language::Kotlin => KOTLIN,
        Language::Cpp => CPP,
        Language::CSharp => CSHARP,
        Language::Bash => BASH,
        Language::Ruby => RUBY,
        Language::Lua => LUA,
        Language::PHP => PHP,
        Language::Unknown => &[],
    }
}

/// Look up the entry for a node type
pub fn find_symbol_node(language: Language, node_type: &str) -> Option<&'static SymbolNode> {
    symbol_nodes(language)
        .iter()
        .find(|n| n.node_type == node_type)
}

/// Get all languages with a symbol table
pub fn supported_languages() -> &'static [Language] {
    Language::all()
}

use SymbolKind as K;

// =============================================================================
// Python - tree-sitter-python/src/node-types.json
// =============================================================================
const PYTHON: &[SymbolNode] = &[
    SymbolNode::new("class_definition", K::Class),
    SymbolNode::new("function_definition", K::Function),
];

// =============================================================================
// TypeScript (TSX grammar) - tree-sitter-typescript/tsx/src/node-types.json
// =============================================================================
const TYPESCRIPT: &[SymbolNode] = &[
    SymbolNode::new("internal_module", K::Namespace),
    SymbolNode::new("module", K::Module),
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("abstract_class_declaration", K::Class),
    SymbolNode::new("interface_declaration", K::Interface),
    SymbolNode::new("enum_declaration", K::Enum),
    SymbolNode::new("enum_assignment", K::EnumMember),
    SymbolNode::new("function_declaration", K::Function),
    SymbolNode::new("generator_function_declaration", K::Function),
    SymbolNode::new("method_definition", K::Method),
    SymbolNode::new("method_signature", K::Method),
    SymbolNode::new("abstract_method_signature", K::Method),
    SymbolNode::new("public_field_definition", K::Field),
    SymbolNode::new("property_signature", K::Property),
    SymbolNode::new("variable_declarator", K::Variable),
];

// =============================================================================
// JavaScript - tree-sitter-javascript/src/node-types.json
// =============================================================================
const JAVASCRIPT: &[SymbolNode] = &[
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("function_declaration", K::Function),
    SymbolNode::new("generator_function_declaration", K::Function),
    SymbolNode::new("method_definition", K::Method),
    SymbolNode::new("field_definition", K::Field),
    SymbolNode::new("variable_declarator", K::Variable),
];

// =============================================================================
// Rust - tree-sitter-rust/src/node-types.json
// =============================================================================
const RUST: &[SymbolNode] = &[
    SymbolNode::new("mod_item", K::Module),
    SymbolNode::new("struct_item", K::Struct),
    SymbolNode::new("union_item", K::Struct),
    SymbolNode::new("enum_item", K::Enum),
    SymbolNode::new("enum_variant", K::EnumMember),
    SymbolNode::new("trait_item", K::Interface),
    SymbolNode::new("impl_item", K::Object),
    SymbolNode::new("function_item", K::Function),
    SymbolNode::new("function_signature_item", K::Function),
    SymbolNode::new("field_declaration", K::Field),
    SymbolNode::new("const_item", K::Constant),
    SymbolNode::new("static_item", K::Variable),
    SymbolNode::new("type_item", K::TypeParameter),
    SymbolNode::new("macro_definition", K::Function),
];

// =============================================================================
// Go - tree-sitter-go/src/node-types.json
// =============================================================================
const GO: &[SymbolNode] = &[
    SymbolNode::new("function_declaration", K::Function),
    SymbolNode::new("method_declaration", K::Method),
    SymbolNode::new("type_spec", K::Struct),
    SymbolNode::new("field_declaration", K::Field),
    SymbolNode::new("method_elem", K::Method),
    SymbolNode::new("method_spec", K::Method),
    SymbolNode::new("const_spec", K::Constant),
    SymbolNode::new("var_spec", K::Variable),
];

// =============================================================================
// Java - tree-sitter-java/src/node-types.json
// =============================================================================
const JAVA: &[SymbolNode] = &[
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("record_declaration", K::Class),
    SymbolNode::new("interface_declaration", K::Interface),
    SymbolNode::new("annotation_type_declaration", K::Interface),
    SymbolNode::new("enum_declaration", K::Enum),
    SymbolNode::new("enum_constant", K::EnumMember),
    SymbolNode::new("constructor_declaration", K::Constructor),
    SymbolNode::new("method_declaration", K::Method),
    SymbolNode::new("field_declaration", K::Field),
];

// =============================================================================
// Kotlin - tree-sitter-kotlin-sg/src/node-types.json
// =============================================================================
const KOTLIN: &[SymbolNode] = &[
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("object_declaration", K::Object),
    SymbolNode::new("function_declaration", K::Function),
    SymbolNode::new("property_declaration", K::Property),
    SymbolNode::new("enum_entry", K::EnumMember),
];

// =============================================================================
// C/C++ - tree-sitter-cpp/src/node-types.json
// =============================================================================
const CPP: &[SymbolNode] = &[
    SymbolNode::new("namespace_definition", K::Namespace),
    SymbolNode::with_body("class_specifier", K::Class),
    SymbolNode::with_body("struct_specifier", K::Struct),
    SymbolNode::with_body("union_specifier", K::Struct),
    SymbolNode::with_body("enum_specifier", K::Enum),
    SymbolNode::new("enumerator", K::EnumMember),
    SymbolNode::new("function_definition", K::Function),
    SymbolNode::new("field_declaration", K::Field),
];

// =============================================================================
// C# - tree-sitter-c-sharp/src/node-types.json
// =============================================================================
const CSHARP: &[SymbolNode] = &[
    SymbolNode::new("namespace_declaration", K::Namespace),
    SymbolNode::new("file_scoped_namespace_declaration", K::Namespace),
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("record_declaration", K::Class),
    SymbolNode::new("struct_declaration", K::Struct),
    SymbolNode::new("interface_declaration", K::Interface),
    SymbolNode::new("enum_declaration", K::Enum),
    SymbolNode::new("enum_member_declaration", K::EnumMember),
    SymbolNode::new("constructor_declaration", K::Constructor),
    SymbolNode::new("method_declaration", K::Method),
    SymbolNode::new("property_declaration", K::Property),
    SymbolNode::new("field_declaration", K::Field),
    SymbolNode::new("event_field_declaration", K::Event),
];

// =============================================================================
// Bash - tree-sitter-bash/src/node-types.json
// =============================================================================
const BASH: &[SymbolNode] = &[SymbolNode::new("function_definition", K::Function)];

// =============================================================================
// Ruby - tree-sitter-ruby/src/node-types.json
// =============================================================================
const RUBY: &[SymbolNode] = &[
    SymbolNode::new("module", K::Module),
    SymbolNode::new("class", K::Class),
    SymbolNode::new("method", K::Method),
    SymbolNode::new("singleton_method", K::Method),
];

// =============================================================================
// Lua - tree-sitter-lua/src/node-types.json
// =============================================================================
const LUA: &[SymbolNode] = &[SymbolNode::new("function_declaration", K::Function)];

// =============================================================================
// PHP - tree-sitter-php/php/src/node-types.json
// =============================================================================
const PHP: &[SymbolNode] = &[
    SymbolNode::new("namespace_definition", K::Namespace),
    SymbolNode::new("class_declaration", K::Class),
    SymbolNode::new("interface_declaration", K::Interface),
    SymbolNode::new("trait_declaration", K::Interface),
    SymbolNode::new("enum_declaration", K::Enum),
    SymbolNode::new("enum_case", K::EnumMember),
    SymbolNode::new("function_definition", K::Function),
    SymbolNode::new("method_declaration", K::Method),
    SymbolNode::new("property_declaration", K::Property),
    SymbolNode::new("const_declaration", K::Constant),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supported_languages_have_tables() {
        for lang in supported_languages() {
            assert!(!symbol_nodes(*lang).is_empty(), "{:?} has no symbol table", lang);
        }
        assert!(symbol_nodes(Language::Unknown).is_empty());
    }

    #[test]
    fn test_find_symbol_node() {
        let node = find_symbol_node(Language::Rust, "impl_item").unwrap();
        assert_eq!(node.kind, SymbolKind::Object);
        assert!(find_symbol_node(Language::Rust, "block").is_none());
    }

    #[test]
    fn test_cpp_specifiers_require_body() {
        let class = find_symbol_node(Language::Cpp, "class_specifier").unwrap();
        assert!(class.requires_body);
        let func = find_symbol_node(Language::Cpp, "function_definition").unwrap();
        assert!(!func.requires_body);
    }

    #[test]
    fn test_no_duplicate_node_types() {
        for lang in supported_languages() {
            let nodes = symbol_nodes(*lang);
            for (i, a) in nodes.iter().enumerate() {
                for b in &nodes[i + 1..] {
                    assert_ne!(a.node_type, b.node_type, "duplicate in {:?}", lang);
                }
            }
        }
    }
}

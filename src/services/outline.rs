//! Outline Renderer
//!
//! Turns a symbol tree plus the source text it was derived from into a
//! tab-indented listing, one line per symbol, in pre-order:
//!
//! ```text
//! public Class Repository
//! 	private Field cache
//! 	public Method load: Future<void>
//! ```
//!
//! Visibility and return types are read back from the raw declaration line.
//! Both are best-effort text heuristics, not semantic analysis.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RenderError;
use crate::models::symbol::{Symbol, SymbolKind};

/// Source text split on `\n`, indexed by zero-based line number
#[derive(Debug, Clone, Default)]
pub struct SourceLines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> SourceLines<'a> {
    pub fn from_text(text: &'a str) -> Self {
        Self {
            lines: text
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect(),
        }
    }

    pub fn get(&self, line: u32) -> Option<&'a str> {
        self.lines.get(line as usize).copied()
    }

    fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<'a> From<Vec<&'a str>> for SourceLines<'a> {
    fn from(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }
}

/// Display label for every LSP symbol kind. `None` only for kinds outside the table.
pub fn kind_label(kind: SymbolKind) -> Option<&'static str> {
    let label = match kind {
        SymbolKind::File => "File",
        SymbolKind::Module => "Module",
        SymbolKind::Namespace => "Namespace",
        SymbolKind::Package => "Package",
        SymbolKind::Class => "Class",
        SymbolKind::Method => "Method",
        SymbolKind::Property => "Property",
        SymbolKind::Field => "Field",
        SymbolKind::Constructor => "Constructor",
        SymbolKind::Enum => "Enum",
        SymbolKind::Interface => "Interface",
        SymbolKind::Function => "Function",
        SymbolKind::Variable => "Variable",
        SymbolKind::Constant => "Constant",
        SymbolKind::String => "String",
        SymbolKind::Number => "Number",
        SymbolKind::Boolean => "Boolean",
        SymbolKind::Array => "Array",
        SymbolKind::Object => "Object",
        SymbolKind::Key => "Key",
        SymbolKind::Null => "Null",
        SymbolKind::EnumMember => "EnumMember",
        SymbolKind::Struct => "Struct",
        SymbolKind::Event => "Event",
        SymbolKind::Operator => "Operator",
        SymbolKind::TypeParameter => "TypeParameter",
        SymbolKind::Other(_) => return None,
    };
    Some(label)
}

static PRIVATE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bprivate\b").expect("valid visibility pattern"));
static PUBLIC_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bpublic\b").expect("valid visibility pattern"));

/// `"private "`, `"public "` or `""`, from whole-word keywords on the declaration line.
/// `private` wins when both appear.
pub fn visibility_label(declaration: &str) -> &'static str {
    if PRIVATE_WORD.is_match(declaration) {
        "private "
    } else if PUBLIC_WORD.is_match(declaration) {
        "public "
    } else {
        ""
    }
}

/// A declaration shape that can carry a return type, and the group holding it
struct ReturnTypePattern {
    regex: Regex,
    group: usize,
}

impl ReturnTypePattern {
    fn new(pattern: &str, group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).expect("valid return type pattern"),
            group,
        }
    }

    fn capture<'t>(&self, line: &'t str) -> Option<&'t str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(self.group))
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
    }
}

/// Letters, digits, `_`, generic brackets and `?`; commas may be followed by spaces.
const TYPE_TOKEN: &str = r"[A-Za-z_][A-Za-z0-9_<>?]*(?:,\s*[A-Za-z0-9_<>?]+)*";
const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// Tried in order; the first accepted capture wins.
static RETURN_TYPE_PATTERNS: LazyLock<Vec<ReturnTypePattern>> = LazyLock::new(|| {
    vec![
        // String name(  /  Future<void> name(
        ReturnTypePattern::new(&format!(r"^\s*({TYPE_TOKEN})\s+{IDENT}\s*\("), 1),
        // Future<T> name(...) async
        ReturnTypePattern::new(
            &format!(r"^\s*({TYPE_TOKEN})\s+{IDENT}\s*\([^)]*\)\s+async"),
            1,
        ),
        // name(...): T {   /   name(...): T;
        ReturnTypePattern::new(
            &format!(r"{IDENT}\s*\([^)]*\)\s*:\s*({TYPE_TOKEN})\s*[{{;]"),
            1,
        ),
        // public T name(
        ReturnTypePattern::new(
            &format!(r"^\s*(?:public|private|protected)?\s*({TYPE_TOKEN})\s+{IDENT}\s*\("),
            1,
        ),
    ]
});

/// Captures that are modifiers, not types. `void` is always a type.
const NOT_A_TYPE: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "const",
    "async",
];

fn is_accepted_type(captured: &str) -> bool {
    let lower = captured.to_lowercase();
    lower == "void" || !NOT_A_TYPE.contains(&lower.as_str())
}

/// Guess the return type written on a function or method declaration line.
pub fn infer_return_type(declaration: &str) -> Option<&str> {
    RETURN_TYPE_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.capture(declaration))
        .find(|captured| is_accepted_type(captured))
}

/// Render a symbol tree as a tab-indented outline.
///
/// Fails without partial output when a symbol points past the end of `lines`
/// or carries a kind with no label.
pub fn render(symbols: &[Symbol], lines: &SourceLines<'_>) -> Result<String, RenderError> {
    let mut out = String::new();
    render_level(symbols, 0, lines, &mut out)?;
    Ok(out)
}

fn render_level(
    symbols: &[Symbol],
    depth: usize,
    lines: &SourceLines<'_>,
    out: &mut String,
) -> Result<(), RenderError> {
    for symbol in symbols {
        out.push_str(&render_line(symbol, depth, lines)?);
        out.push('\n');
        render_level(&symbol.children, depth + 1, lines, out)?;
    }
    Ok(())
}

fn render_line(symbol: &Symbol, depth: usize, lines: &SourceLines<'_>) -> Result<String, RenderError> {
    let declaration = lines
        .get(symbol.selection_line)
        .ok_or_else(|| RenderError::OutOfRange {
            symbol: symbol.name.clone(),
            line: symbol.selection_line,
            available: lines.len(),
        })?;

    let label = kind_label(symbol.kind).ok_or_else(|| RenderError::KindLabelMissing {
        symbol: symbol.name.clone(),
        kind: symbol.kind,
    })?;

    let return_type = if symbol.kind.is_callable() {
        infer_return_type(declaration)
            .map(|t| format!(": {}", t))
            .unwrap_or_default()
    } else {
        String::new()
    };

    Ok(format!(
        "{}{}{} {}{}",
        "\t".repeat(depth),
        visibility_label(declaration),
        label,
        symbol.name,
        return_type
    ))
}

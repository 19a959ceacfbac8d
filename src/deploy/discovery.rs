// ABOUTME: Discovery of named exports in a compiled functions entry point.
// ABOUTME: The ExportDiscovery trait lets a real JS parser replace the textual scanner.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Declaration keyword of a discovered export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Const,
    Let,
    Var,
    Function,
}

impl ExportKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(ExportKind::Const),
            "let" => Some(ExportKind::Let),
            "var" => Some(ExportKind::Var),
            "function" => Some(ExportKind::Function),
            _ => None,
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            ExportKind::Const => "const",
            ExportKind::Let => "let",
            ExportKind::Var => "var",
            ExportKind::Function => "function",
        };
        f.write_str(keyword)
    }
}

/// A named export declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDecl {
    pub kind: ExportKind,
    pub name: String,
}

impl ExportDecl {
    pub fn new(kind: ExportKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Finds the named exports of a JavaScript module, in source order.
pub trait ExportDiscovery: Send + Sync {
    fn discover(&self, source: &str) -> Vec<ExportDecl>;
}

/// Textual scan for `export const|let|var|function NAME`.
///
/// Not a parser: re-exports, default exports, destructured exports and
/// `export { a, b }` lists are not seen.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexExportScanner;

static EXPORT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn export_pattern() -> &'static Regex {
    EXPORT_PATTERN.get_or_init(|| {
        Regex::new(
            r"\bexport\s+(?:async\s+)?(?:(const|let|var)\s+|(function)(?:\s*\*\s*|\s+))([A-Za-z_$][A-Za-z0-9_$]*)",
        )
        .unwrap()
    })
}

impl ExportDiscovery for RegexExportScanner {
    fn discover(&self, source: &str) -> Vec<ExportDecl> {
        export_pattern()
            .captures_iter(source)
            .filter_map(|caps| {
                let keyword = caps.get(1).or_else(|| caps.get(2))?;
                let kind = ExportKind::from_keyword(keyword.as_str())?;
                let name = caps.get(3)?;
                Some(ExportDecl::new(kind, name.as_str()))
            })
            .collect()
    }
}

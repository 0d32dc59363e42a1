//! DSL (Domain Specific Language) parser for scheme descriptions.
//!
//! A line-oriented text format listing raw solver constraints, scheme
//! elements and fit settings.
//!
//! # Grammar Overview
//!
//! ```text
//! document    = { line }
//! line        = comment | directive | statement | empty
//! comment     = ('#' | ';') { any_char }
//! directive   = '.' directive_name number+
//! statement   = keyword number+ [orientation]
//!
//! directive_name = "canvas" | "margin" | "tolerance" | "max_scale"
//! keyword     = "constraint" | "c" | "contact" | "ground" | "resistor" | "node" | "wire"
//! orientation = "horizontal" | "h" | "vertical" | "v"
//! number      = ['-' | '+'] digit* ['.' digit*] [('e'|'E') ['-'|'+'] digit+]
//! ```
//!
//! Commas are accepted as separators, so `wire 0,0 10,0` reads naturally.
//!
//! # Statements
//!
//! | Statement | Description | Syntax |
//! |-----------|-------------|--------|
//! | constraint | `lo <= a*s + dx <= hi` | `constraint <a> <lo> <hi>` |
//! | contact | Terminal | `contact <x> <y>` |
//! | ground | Grounding symbol | `ground <x> <y>` |
//! | resistor | Resistor body | `resistor <x> <y> [orientation]` |
//! | node | Junction dot | `node <x> <y>` |
//! | wire | Polyline | `wire <x> <y> <x> <y> ...` |
//!
//! # Directives
//!
//! | Directive | Description | Syntax |
//! |-----------|-------------|--------|
//! | .canvas | Canvas size in pixels | `.canvas <width> <height>` |
//! | .margin | Blank border in pixels | `.margin <pixels>` |
//! | .tolerance | Verification tolerance | `.tolerance <eps>` |
//! | .max_scale | Cap on the scale | `.max_scale <s>` |
//!
//! # Example
//!
//! ```text
//! # Two resistors in series
//! .canvas 330 240
//!
//! resistor -450 0
//! resistor 450 0
//! wire -200 0 200 0
//! contact -900 0
//! contact 900 0
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::{Document, DEFAULT_CANVAS};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse a scheme description string.
pub fn parse(input: &str) -> Result<Document> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

/// Parse a scheme description file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Document> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::FitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}

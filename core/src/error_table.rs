#![deny(missing_docs)]

//! # Error Table Generator
//!
//! Turns pasted constant declarations such as
//!
//! ```text
//! const cooldownConflictError = 4000
//! const waypointNoAccessError = 4001
//! ```
//!
//! into match arms for a code -> name lookup:
//!
//! ```text
//! 4000 => "cooldownConflictError",
//! 4001 => "waypointNoAccessError",
//! ```
//!
//! Lines that are not declarations are skipped, never rejected.

use crate::error::AppResult;
use crate::sink::{GeneratedStatement, StatementSink};
use regex::Regex;
use std::sync::OnceLock;

/// Fallback arm value used when wrapping the table in a lookup function.
pub const DEFAULT_FALLBACK: &str = "unknownError";

fn declaration_re() -> &'static Regex {
    static DECLARATION_RE: OnceLock<Regex> = OnceLock::new();
    DECLARATION_RE
        .get_or_init(|| Regex::new(r"^const\s+(\w+)\s*=\s*(\d+)").expect("Invalid regex"))
}

/// A `(name, code)` pair taken from one declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDeclaration {
    /// Declared symbol name, untouched.
    pub name: String,
    /// Decimal code exactly as written (digits only).
    pub code: String,
}

impl ConstantDeclaration {
    /// Renders the table entry `<code> => "<name>",`.
    pub fn to_entry(&self) -> GeneratedStatement {
        GeneratedStatement::new(format!("{} => \"{}\",", self.code, self.name))
    }
}

/// Result of scanning pasted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTable {
    /// Declarations in input order.
    pub entries: Vec<ConstantDeclaration>,
    /// Non-blank lines that did not match, in input order.
    pub skipped: Vec<String>,
}

/// Parses one line. Surrounding whitespace is ignored; anything after the code is too.
pub fn parse_declaration(line: &str) -> Option<ConstantDeclaration> {
    let caps = declaration_re().captures(line.trim())?;
    Some(ConstantDeclaration {
        name: caps[1].to_string(),
        code: caps[2].to_string(),
    })
}

/// Extracts every declaration from `text`, preserving line order.
///
/// Empty or entirely malformed input produces an empty table.
pub fn generate_error_table(text: &str) -> ErrorTable {
    let mut table = ErrorTable::default();
    for line in text.lines() {
        match parse_declaration(line) {
            Some(decl) => table.entries.push(decl),
            None if line.trim().is_empty() => {}
            None => {
                tracing::debug!("Skipping line {:?}", line);
                table.skipped.push(line.to_string());
            }
        }
    }
    if !table.skipped.is_empty() {
        tracing::info!(
            "{} line(s) did not look like `const <name> = <code>` and were skipped",
            table.skipped.len()
        );
    }
    table
}

impl ErrorTable {
    /// Entry statements, one per declaration.
    pub fn statements(&self) -> Vec<GeneratedStatement> {
        self.entries.iter().map(ConstantDeclaration::to_entry).collect()
    }

    /// Wraps the entries in a lookup function:
    ///
    /// ```text
    /// fn get_error_name(code: i32) -> &'static str {
    ///     match code {
    ///         4000 => "cooldownConflictError",
    ///         _ => "unknownError",
    ///     }
    /// }
    /// ```
    pub fn wrapped(&self, fn_name: &str, fallback: &str) -> Vec<GeneratedStatement> {
        let mut out = Vec::with_capacity(self.entries.len() + 5);
        out.push(GeneratedStatement::new(format!(
            "fn {}(code: i32) -> &'static str {{",
            fn_name
        )));
        out.push(GeneratedStatement::new("    match code {"));
        out.extend(
            self.entries
                .iter()
                .map(|d| GeneratedStatement::new(format!("        {}", d.to_entry()))),
        );
        out.push(GeneratedStatement::new(format!(
            "        _ => \"{}\",",
            fallback
        )));
        out.push(GeneratedStatement::new("    }"));
        out.push(GeneratedStatement::new("}"));
        out
    }
}

/// Sends `statements` through `sink` and returns how many were written.
pub fn write_statements(
    statements: &[GeneratedStatement],
    sink: &mut dyn StatementSink,
) -> AppResult<usize> {
    sink.begin()?;
    for stmt in statements {
        sink.emit(stmt)?;
    }
    sink.finish()?;
    Ok(statements.len())
}

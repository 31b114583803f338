#![deny(missing_docs)]

//! # Devgen Core
//!
//! Generators for source snippets that are pasted or written into a separately
//! maintained codebase:
//!
//! - schema deserialization test registrations, one per example file;
//! - error-code lookup entries, one per pasted constant declaration.

/// Shared error types.
pub mod error;

/// Title -> identifier transform.
pub mod naming;

/// Statement sinks (stdout stream, target file).
pub mod sink;


/// Error-code table generator.
pub mod error_table;

/// Config file and setting resolution.
pub mod config;

pub use config::{FileConfig, Overrides, SchemaTestSettings};
pub use error::{AppError, AppResult};
pub use error_table::{
    generate_error_table, parse_declaration, write_statements, ConstantDeclaration, ErrorTable,
};
pub use naming::{is_degenerate, to_identifier};
pub use schema_tests::{
    generate_schema_tests, scan_artifacts, ArtifactEntry, GenerationReport, TestTemplate,
};
pub use sink::{FileSink, GeneratedStatement, StatementSink, WriterSink};

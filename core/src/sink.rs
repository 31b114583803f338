#![deny(missing_docs)]

//! # Output Sinks
//!
//! Destinations for generated statements. Generators only talk to
//! [`StatementSink`], so streaming to stdout and rewriting a target file
//! share one code path.

use crate::error::AppResult;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One line of emitted code following a fixed template.
///
/// Never parsed back; the text is exactly what gets written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStatement(String);

impl GeneratedStatement {
    /// Wraps an already rendered line (no trailing newline).
    pub fn new(line: impl Into<String>) -> Self {
        Self(line.into())
    }

    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A destination for generated statements.
pub trait StatementSink {
    /// Called once before the first statement.
    fn begin(&mut self) -> AppResult<()> {
        Ok(())
    }

    /// Accepts one statement, in emission order.
    fn emit(&mut self, statement: &GeneratedStatement) -> AppResult<()>;

    /// Called once after the last statement. Output is complete after this returns.
    fn finish(&mut self) -> AppResult<()>;
}

/// Streams statements to any writer, one per line, no header.
///
/// Used for stdout mode.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> StatementSink for WriterSink<W> {
    fn emit(&mut self, statement: &GeneratedStatement) -> AppResult<()> {
        writeln!(self.writer, "{}", statement)?;
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Replaces a target file with a preserved prefix followed by the statements.
///
/// Layout: `<prefix>\n\n<statement>\n<statement>\n...`. Prior content is discarded,
/// so rerunning against an unchanged input is byte-identical.
pub struct FileSink {
    target: PathBuf,
    prefix: String,
    lines: Vec<GeneratedStatement>,
}

impl FileSink {
    /// Creates a sink that will overwrite `target` on `finish`.
    pub fn new(target: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prefix: prefix.into(),
            lines: Vec::new(),
        }
    }

    /// Path that will be overwritten.
    pub fn target(&self) -> &Path {
        &self.target
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.lines.len() * 96);
        out.push_str(&self.prefix);
        out.push_str("\n\n");
        for line in &self.lines {
            out.push_str(line.as_str());
            out.push('\n');
        }
        out
    }
}

impl StatementSink for FileSink {
    fn begin(&mut self) -> AppResult<()> {
        self.lines.clear();
        Ok(())
    }

    fn emit(&mut self, statement: &GeneratedStatement) -> AppResult<()> {
        self.lines.push(statement.clone());
        Ok(())
    }

    fn finish(&mut self) -> AppResult<()> {
        fs::write(&self.target, self.render())?;
        tracing::info!(
            "Wrote {} statement(s) to {:?}",
            self.lines.len(),
            self.target
        );
        Ok(())
    }
}

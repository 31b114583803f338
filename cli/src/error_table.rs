#![deny(missing_docs)]

//! # Error Table Command
//!
//! Reads pasted `const <name> = <code>` lines and prints lookup entries.

use devgen_core::error_table::{generate_error_table, write_statements, DEFAULT_FALLBACK};
use devgen_core::sink::WriterSink;
use devgen_core::AppResult;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Arguments for the error-table command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ErrorTableArgs {
    /// Read declarations from this file instead of stdin.
    #[clap(long, env = "DEVGEN_ERROR_INPUT")]
    pub input: Option<PathBuf>,

    /// Wrap the entries in `fn <NAME>(code: i32) -> &'static str { match code { .. } }`.
    #[clap(long, value_name = "NAME")]
    pub wrap: Option<String>,

    /// Value returned by the catch-all arm when wrapping.
    #[clap(long, default_value = DEFAULT_FALLBACK, requires = "wrap")]
    pub fallback: String,
}

/// Executes the error table generation.
///
/// Input is read to completion before anything is printed.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `stdin` - Source of pasted text when no `--input` is given.
/// * `stdout` - Destination of the generated entries.
pub fn execute(args: &ErrorTableArgs, mut stdin: impl Read, stdout: impl Write) -> AppResult<()> {
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            eprintln!("please copy-paste the error codes");
            eprintln!("and close stdin when you're done");
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    let table = generate_error_table(&text);
    let statements = match &args.wrap {
        Some(fn_name) => table.wrapped(fn_name, &args.fallback),
        None => table.statements(),
    };

    let mut sink = WriterSink::new(stdout);
    let written = write_statements(&statements, &mut sink)?;
    tracing::info!(
        "Emitted {} line(s) for {} declaration(s)",
        written,
        table.entries.len()
    );

    Ok(())
}

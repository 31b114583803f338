#![deny(missing_docs)]

//! # Devgen CLI
//!
//! Development-time snippet generators.
//!
//! Supported Commands:
//! - `schema-tests`: One deserialization test per example payload file.
//! - `error-table`: Code -> name lookup entries from pasted constant declarations.

use clap::{Parser, Subcommand};
use devgen_core::config::DEFAULT_CONFIG_FILE;
use devgen_core::AppResult;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod error_table;
mod test_gen;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Snippet generators for schema tests and error tables")]
struct Cli {
    /// YAML file with schema-tests defaults. Ignored if absent.
    #[clap(long, global = true, env = "DEVGEN_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a deserialization test per example file.
    SchemaTests(test_gen::SchemaTestsArgs),
    /// Generate error-code table entries from pasted declarations.
    ErrorTable(error_table::ErrorTableArgs),
}

/// Logs go to stderr so stdout stays pasteable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::SchemaTests(args) => {
            test_gen::execute(args, &cli.config, io::stdout().lock())?;
        }
        Commands::ErrorTable(args) => {
            error_table::execute(args, io::stdin().lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_schema_tests_flags() {
        let cli = Cli::try_parse_from([
            "devgen",
            "schema-tests",
            "--schema-dir",
            "fixtures",
            "--macro",
            "register_test",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::SchemaTests(args) => {
                assert_eq!(args.schema_dir, Some(PathBuf::from("fixtures")));
                assert_eq!(args.macro_name.as_deref(), Some("register_test"));
            }
            _ => panic!("expected schema-tests"),
        }
    }

    #[test]
    fn test_fallback_requires_wrap() {
        let res = Cli::try_parse_from(["devgen", "error-table", "--fallback", "x"]);
        assert!(res.is_err());
    }
}

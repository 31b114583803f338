#![deny(missing_docs)]

//! # Schema Tests Command
//!
//! Emits a deserialization test registration for every example file in the
//! schema directory, either to stdout or into a target test module.

use devgen_core::config::{FileConfig, Overrides, SchemaTestSettings};
use devgen_core::schema_tests::{generate_schema_tests, GenerationReport};
use devgen_core::sink::{FileSink, StatementSink, WriterSink};
use devgen_core::AppResult;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the schema-tests command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SchemaTestsArgs {
    /// Directory of example payloads [default: schema-examples].
    #[clap(long, env = "DEVGEN_SCHEMA_DIR")]
    pub schema_dir: Option<PathBuf>,

    /// Test module to overwrite (e.g. `src/tests/schema.rs`). Prints to stdout if omitted.
    #[clap(long, env = "DEVGEN_TARGET")]
    pub target: Option<PathBuf>,

    /// Module path the example types live in [default: schemas].
    #[clap(long, env = "DEVGEN_NAMESPACE")]
    pub namespace: Option<String>,

    /// Macro invocation used per test [default: json_deserialize_test!].
    #[clap(long = "macro", env = "DEVGEN_MACRO")]
    pub macro_name: Option<String>,

    /// Extension of example files [default: json].
    #[clap(long, env = "DEVGEN_EXTENSION")]
    pub extension: Option<String>,

    /// File whose contents are written above the generated tests instead of the built-in prefix.
    #[clap(long, env = "DEVGEN_PREFIX_FILE")]
    pub prefix_file: Option<PathBuf>,
}

impl SchemaTestsArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            schema_dir: self.schema_dir.clone(),
            target: self.target.clone(),
            namespace: self.namespace.clone(),
            macro_name: self.macro_name.clone(),
            extension: self.extension.clone(),
            prefix_file: self.prefix_file.clone(),
        }
    }
}

/// Executes the schema test generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `config_path` - YAML config consulted for anything not given on the command line.
/// * `stdout` - Destination when no target file is configured.
pub fn execute(args: &SchemaTestsArgs, config_path: &Path, stdout: impl Write) -> AppResult<()> {
    let file_config = FileConfig::load_optional(config_path)?;
    let settings = SchemaTestSettings::resolve(file_config, args.overrides());

    tracing::info!("Scanning {:?} for *.{}", settings.schema_dir, settings.extension);

    let report = match &settings.target {
        Some(target) => {
            let mut sink = FileSink::new(target, settings.prefix()?);
            run(&settings, &mut sink)?
        }
        None => run(&settings, &mut WriterSink::new(stdout))?,
    };

    if !report.degenerate.is_empty() {
        tracing::warn!(
            "{} file name(s) produced degenerate identifiers: {:?}",
            report.degenerate.len(),
            report.degenerate
        );
    }

    if let Some(target) = &settings.target {
        eprintln!(
            "Generated {} schema test(s) at {:?}",
            report.statements, target
        );
    }

    Ok(())
}

fn run(settings: &SchemaTestSettings, sink: &mut dyn StatementSink) -> AppResult<GenerationReport> {
    generate_schema_tests(
        &settings.schema_dir,
        &settings.template,
        &settings.extension,
        sink,
    )
}

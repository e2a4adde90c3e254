//! doxjson — convert Doxygen XML for a C API into a cross-referenced JSON model.
//!
//! `doxjson build/documentation/xml docs/api.json`
//!
//! One pass: select compound XML files, fold every compound into the
//! collections, key them, write one JSON document. Any error aborts the
//! run before the output file exists.

mod assemble;
mod config;
mod error;
mod loader;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use config::{ExtractConfig, TypeKeys, DEFAULT_EXPORT_MARKER};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "doxjson",
    version,
    about = "Convert Doxygen XML documentation of a C API into JSON"
)]
struct Cli {
    /// Directory containing Doxygen XML compound files
    input: PathBuf,

    /// Output JSON file, or `-` for stdout
    output: PathBuf,

    /// Visibility macro stripped from return and parameter types.
    /// Pass an empty string to keep types untouched.
    #[arg(long, default_value = DEFAULT_EXPORT_MARKER, value_parser = config::validate_marker)]
    export_marker: String,

    /// Key structures, enumerations and types by documentation id or by name
    #[arg(long, value_enum, default_value_t = TypeKeys::Id)]
    type_keys: TypeKeys,

    /// Filename glob selecting input files. Repeatable; replaces the
    /// default list (files, groups, structs, enums, classes).
    #[arg(long = "include", value_name = "GLOB")]
    include: Vec<String>,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `-` output on stdout stays clean.
    let default_level = match cli.verbose {
        0 => "doxjson=info",
        1 => "doxjson=debug",
        _ => "doxjson=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = ExtractConfig::new(
        cli.include.clone(),
        Some(cli.export_marker.as_str()),
        cli.type_keys,
    )?;

    let paths = loader::discover(&cli.input, &config.include).with_context(|| {
        format!("failed to list input directory: {}", cli.input.display())
    })?;
    info!(count = paths.len(), dir = %cli.input.display(), "loading documentation XML");

    let mut extractor = parser::Extractor::new(&config);
    for path in &paths {
        let source = loader::read(path)?;
        let doc = loader::parse(&source)?;
        extractor
            .extract(&doc)
            .with_context(|| format!("failed to extract {}", path.display()))?;
    }

    let set = assemble::assemble(extractor.finish(), config.type_keys);
    info!(
        files = set.files.len(),
        modules = set.modules.len(),
        functions = set.functions.len(),
        structures = set.structures.len(),
        enumerations = set.enumerations.len(),
        "writing {}",
        cli.output.display()
    );

    render::write_output(&set, &cli.output, !cli.compact)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    Ok(())
}

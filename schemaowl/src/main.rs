//! Command-line interface for JSON Schema to ontology conversion

use std::fs;
use std::io::{Read as _, Write as _};
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use schemaowl::{convert, serializer, RdfFormat, Result};

/// Convert JSON Schema documents to equivalent Web Ontologies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// RDF output serialization format (turtle or ntriples)
    #[arg(long, default_value = "turtle")]
    rdf_format: RdfFormat,

    /// Name of the root schema, used to derive ontology identifiers
    #[arg(long)]
    name: String,

    /// Input file path, or '-' for standard input
    input: String,

    /// Output file path, or '-' for standard output
    output: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = read_input(&cli.input)?;
    let schema = serde_json::from_str(&input)?;
    let graph = convert(&schema, &cli.name)?;
    let rendered = serializer::serialize(&graph, cli.rdf_format)?;
    write_output(&cli.output, &rendered)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: &str, rendered: &str) -> Result<()> {
    if path == "-" {
        std::io::stdout().write_all(rendered.as_bytes())?;
    } else {
        fs::write(path, rendered)?;
    }
    Ok(())
}

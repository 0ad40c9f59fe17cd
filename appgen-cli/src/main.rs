//! appgen CLI - class generator for application XML exports
//!
//! Reads an exported application document, applies the optional override
//! file and writes one class per object to a file or stdout.

use anyhow::{Context, Result};
use appgen_codegen::{Generator, WriterOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "appgen")]
#[command(author, version, about = "Generate classes from an application XML export", long_about = None)]
struct Cli {
    /// Path to the application XML export
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the object-manager override file
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Namespace for the generated classes
    #[arg(long)]
    namespace: Option<String>,

    /// Base class for ordinary objects
    #[arg(long)]
    base_class: Option<String>,

    /// Base class for objects using the object-manager model
    #[arg(long)]
    om_base_class: Option<String>,

    /// Class holding the field GUID constants
    #[arg(long)]
    guid_class: Option<String>,
}

impl Cli {
    fn writer_options(&self) -> WriterOptions {
        let mut options = WriterOptions::default();
        if let Some(namespace) = &self.namespace {
            options = options.with_namespace(namespace);
        }
        if let Some(base_class) = &self.base_class {
            options = options.with_base_class(base_class);
        }
        if let Some(om_base_class) = &self.om_base_class {
            options = options.with_om_base_class(om_base_class);
        }
        if let Some(guid_class) = &self.guid_class {
            options = options.with_guid_class(guid_class);
        }
        options
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let xml = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let app = appgen_schema::parse_application(&xml, cli.overrides.as_deref())
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;
    tracing::info!(
        "Loaded application '{}': {} objects, {} tabs, {} scripts",
        app.name,
        app.objects.len(),
        app.tabs.len(),
        app.scripts.len()
    );

    let options = cli.writer_options();
    let text = Generator::new(&app, &options)
        .generate()
        .context("Failed to generate classes")?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", text.len(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

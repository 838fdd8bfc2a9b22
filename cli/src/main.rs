//! gospelwise-export - export a book plan to PDF or Word
//!
//! Reads a project JSON file, runs one export and writes the artifact into
//! an output directory. Exits with status 1 when the export fails.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use export_engine::{DirectorySaver, ExportFormat, ExportOutcome, ExportSettings, Exporter};
use project_model::{Author, Project};

#[derive(Parser)]
#[command(name = "gospelwise-export")]
#[command(version)]
#[command(about = "Export a GospelWise book plan to PDF or Word", long_about = None)]
struct Cli {
    /// Project JSON file
    #[arg(value_name = "PROJECT_JSON")]
    project: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: Format,

    /// Author name printed on the cover
    #[arg(short, long)]
    author: Option<String>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Export settings JSON file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    #[value(alias = "docx")]
    Word,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Pdf => ExportFormat::Pdf,
            Format::Word => ExportFormat::Word,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<ExportOutcome> {
    let project = Project::load(&cli.project)
        .with_context(|| format!("Failed to read project from {}", cli.project.display()))?;

    let settings = match &cli.config {
        Some(path) => ExportSettings::load(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?,
        None => ExportSettings::default(),
    };

    let author = cli.author.map(Author::new).unwrap_or_default();
    let exporter = Exporter::new(DirectorySaver::new(&cli.out), settings);

    tracing::debug!(project = %cli.project.display(), out = %cli.out.display(), "starting export");
    Ok(exporter.export(&project, &author, cli.format.into()).await)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(ExportOutcome::Success { filename }) => {
            println!("{}", filename);
            ExitCode::SUCCESS
        }
        Ok(ExportOutcome::Error { message }) => {
            eprintln!("Export failed: {}", message);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

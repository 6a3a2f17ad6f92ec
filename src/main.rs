use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use docdex::boundary;
use docdex::docs::LanguageRegistry;
use docdex::service::DocdexService;

/// Offline documentation index cache and local file browser for editor
/// integrations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom cache directory path (defaults to a docdex dir in the system
    /// temp area)
    #[arg(long, env = "DOCDEX_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// JSON file mapping language tags to index URLs, replacing the builtin
    /// set
    #[arg(long)]
    languages: Option<PathBuf>,

    /// Append diagnostics to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Operation name (GetIndices, GetPath, GetFiles, OpenFile, WriteFile)
    operation: String,

    /// Ordered string arguments for the operation
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(args.log_file.as_deref())?;

    let registry = match &args.languages {
        Some(path) => LanguageRegistry::from_path(path)?,
        None => LanguageRegistry::builtin(),
    };

    let service = DocdexService::new(args.cache_dir, registry)?;

    match boundary::dispatch(&service, &args.operation, &args.args) {
        Ok(value) => {
            println!("{}", serde_json::to_string(&value)?);
            Ok(())
        }
        Err(err) => {
            tracing::error!(operation = %args.operation, error = %err, "operation failed");
            Err(err.into())
        }
    }
}

/// Initialize the process-wide diagnostic sink exactly once, writing either
/// to an append-only log file or to stderr so stdout stays reserved for
/// operation results.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .init();
        }
    }

    Ok(())
}

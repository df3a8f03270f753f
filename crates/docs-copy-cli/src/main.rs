use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use docs_copy_core::{copy_docs, CopyError, CopyOutcome, CopyRequest, ExitCode};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Copy generated Go documentation to the docs repository",
    long_about = None
)]
struct Cli {
    /// Root directory of the fish-audio-go SDK
    #[arg(value_name = "SDK_ROOT", value_parser = sdk_root_dir)]
    sdk_root: PathBuf,

    /// Root directory of the docs repository
    #[arg(value_name = "DOCS_ROOT", value_parser = docs_root_dir)]
    docs_root: PathBuf,
}

fn sdk_root_dir(value: &str) -> Result<PathBuf, String> {
    existing_dir("SDK root", value)
}

fn docs_root_dir(value: &str) -> Result<PathBuf, String> {
    existing_dir("Docs root", value)
}

fn existing_dir(label: &str, value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else if path.exists() {
        Err(format!("{label} is not a directory: {value}"))
    } else {
        Err(format!("{label} directory does not exist: {value}"))
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(exit) => std::process::ExitCode::from(exit as u8),
        Err(err) => {
            eprintln!("copy-docs error: {err}");
            std::process::ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let request = CopyRequest::new(cli.sdk_root, cli.docs_root);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match copy_docs(&request, &mut handle)? {
        CopyOutcome::Copied { .. } => {}
        CopyOutcome::SourceMissing { source } => {
            eprintln!(
                "Error: {} does not exist. Run gomarkdoc first.",
                source.display()
            );
        }
    }

    Ok(ExitCode::Success)
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if let Some(copy_err) = err.downcast_ref::<CopyError>() {
        return copy_err.exit_code();
    }
    ExitCode::Io
}

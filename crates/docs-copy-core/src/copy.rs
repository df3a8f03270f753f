use std::io::{self, Write};
use std::path::PathBuf;

use docs_copy_config::CopyConfig;
use tracing::{debug, info};

use crate::error::{CopyError, CopyResult};
use crate::fs::{read_document, write_document};
use crate::transform::{transform, TransformStats};

pub const COMPLETION_MESSAGE: &str = "Documentation copy completed successfully!";

#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub sdk_root: PathBuf,
    pub docs_root: PathBuf,
    pub config: CopyConfig,
}

impl CopyRequest {
    pub fn new(sdk_root: impl Into<PathBuf>, docs_root: impl Into<PathBuf>) -> Self {
        CopyRequest {
            sdk_root: sdk_root.into(),
            docs_root: docs_root.into(),
            config: CopyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CopyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn source_path(&self) -> PathBuf {
        self.sdk_root.join(&self.config.source)
    }

    pub fn destination_path(&self) -> PathBuf {
        self.docs_root.join(&self.config.destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        stats: TransformStats,
    },
    /// The generator has not run yet; nothing was written.
    SourceMissing { source: PathBuf },
}

/// Copies the generated reference into the docs tree.
///
/// Progress lines go to `progress` as each step starts. A missing source file
/// is an outcome, not an error.
pub fn copy_docs<W: Write>(request: &CopyRequest, progress: &mut W) -> CopyResult<CopyOutcome> {
    let source = request.source_path();
    let destination = request.destination_path();
    debug!(
        source = %source.display(),
        destination = %destination.display(),
        "resolved copy paths"
    );

    if !source.exists() {
        info!(source = %source.display(), "generated reference not found, skipping");
        return Ok(CopyOutcome::SourceMissing { source });
    }

    report(progress, &format!("Reading {}", source.display()))?;
    let content = read_document(&source)?;

    let transformed = transform(&content, &request.config.frontmatter);
    debug!(
        comments_removed = transformed.stats.comments_removed,
        index_sections_removed = transformed.stats.index_sections_removed,
        bytes = transformed.content.len(),
        "transformed reference"
    );

    report(progress, &format!("Writing to {}", destination.display()))?;
    write_document(&destination, &transformed.content)?;

    report(progress, COMPLETION_MESSAGE)?;
    info!(destination = %destination.display(), "documentation copied");

    Ok(CopyOutcome::Copied {
        source,
        destination,
        stats: transformed.stats,
    })
}

fn report<W: Write>(progress: &mut W, line: &str) -> CopyResult<()> {
    match writeln!(progress, "{line}").and_then(|_| progress.flush()) {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(source) => Err(CopyError::Report { source }),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reports_each_step() {
        let sdk = tempdir().unwrap();
        let docs = tempdir().unwrap();
        fs::create_dir_all(sdk.path().join("build/docs")).unwrap();
        fs::write(sdk.path().join("build/docs/fishaudio.md"), "# fishaudio\n").unwrap();

        let request = CopyRequest::new(sdk.path(), docs.path());
        let mut progress = Vec::new();
        copy_docs(&request, &mut progress).unwrap();

        let expected = format!(
            "Reading {}\nWriting to {}\n{}\n",
            request.source_path().display(),
            request.destination_path().display(),
            COMPLETION_MESSAGE
        );
        assert_eq!(String::from_utf8(progress).unwrap(), expected);
    }

    #[test]
    fn missing_source_writes_nothing() {
        let sdk = tempdir().unwrap();
        let docs = tempdir().unwrap();

        let request = CopyRequest::new(sdk.path(), docs.path());
        let mut progress = Vec::new();
        let outcome = copy_docs(&request, &mut progress).unwrap();

        assert_eq!(
            outcome,
            CopyOutcome::SourceMissing {
                source: sdk.path().join("build/docs/fishaudio.md")
            }
        );
        assert!(progress.is_empty());
        assert!(!docs.path().join("api-reference").exists());
    }
}

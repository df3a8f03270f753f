use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Io = 1,
    InvalidArguments = 2,
}

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to report progress: {source}")]
    Report { source: io::Error },
}

impl CopyError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Read { .. }
            | Self::CreateDir { .. }
            | Self::Write { .. }
            | Self::Report { .. } => ExitCode::Io,
        }
    }
}

pub type CopyResult<T> = Result<T, CopyError>;

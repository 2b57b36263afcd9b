use std::fmt;
use std::path::Path;

use nbrcheck_recon::VertexId;

#[derive(Debug)]
pub enum IoError {
    /// Input file does not exist.
    NotFound { path: String },
    /// Input file exists but could not be read.
    Read { path: String, message: String },
    /// Malformed line (wrong token count, non-numeric field, duplicate id).
    Parse { path: String, line: usize, message: String },
    /// A neighbor list or focus refers to a vertex with no particle record.
    UnknownVertex { context: String, vertex: VertexId },
    /// Output file could not be written.
    Write { path: String, message: String },
}

impl IoError {
    pub(crate) fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn from_read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path: path.display().to_string() }
        } else {
            Self::Read {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        }
    }

    pub(crate) fn write(path: &Path, message: impl fmt::Display) -> Self {
        Self::Write {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{path}: file not found"),
            Self::Read { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Parse { path, line, message } => write!(f, "{path}:{line}: {message}"),
            Self::UnknownVertex { context, vertex } => {
                write!(f, "{context}: vertex {vertex} has no particle record")
            }
            Self::Write { path, message } => write!(f, "cannot write {path}: {message}"),
        }
    }
}

impl std::error::Error for IoError {}

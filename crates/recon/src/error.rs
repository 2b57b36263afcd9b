use std::fmt;

use crate::model::VertexId;

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty label, duplicate label, etc.).
    ConfigValidation(String),
    /// The two datasets were produced with different global parameters.
    ParameterMismatch {
        field: &'static str,
        left: String,
        right: String,
    },
    /// Neighbor entries that are not mirrored, rejected by `require_symmetric`.
    AsymmetricRelation {
        label: String,
        count: usize,
        first: (VertexId, VertexId),
    },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::ParameterMismatch { field, left, right } => {
                write!(f, "dataset parameters differ: {field} is {left} on the left, {right} on the right")
            }
            Self::AsymmetricRelation { label, count, first } => write!(
                f,
                "'{label}': {count} asymmetric neighbor entr{} (first: {} lists {} but not the reverse)",
                if *count == 1 { "y" } else { "ies" },
                first.0,
                first.1,
            ),
        }
    }
}

impl std::error::Error for ReconError {}

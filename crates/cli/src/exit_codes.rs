//! CLI Exit Code Registry
//!
//! Single source of truth for `nbrcheck` exit codes. Scripts that run the
//! simulation and then `nbrcheck compare` rely on them.
//!
//! | Code | Meaning                                                    |
//! |------|------------------------------------------------------------|
//! | 0    | Success; `compare` found both neighbor lists identical     |
//! | 1    | `compare` found links reported by only one method          |
//! | 2    | Usage error (bad args, invalid config)                     |
//! | 3    | Input file missing or unreadable                           |
//! | 4    | Malformed input file                                       |
//! | 5    | Datasets built with different `N`, `L` or `M`              |
//! | 6    | One-sided neighbor entries rejected by `require_symmetric` |
//! | 7    | Output file could not be written                           |

use nbrcheck_io::IoError;
use nbrcheck_recon::ReconError;

/// Success - command completed, and for `compare` the lists agree.
pub const EXIT_SUCCESS: u8 = 0;

/// Links differ between the two methods.
/// Like `diff(1)`, exit 1 means "inputs differ."
pub const EXIT_DIFFERENCES: u8 = 1;

/// Usage error - bad arguments, invalid compare config.
pub const EXIT_USAGE: u8 = 2;

/// An input file does not exist or cannot be read.
pub const EXIT_INPUT_MISSING: u8 = 3;

/// An input file has a malformed line or refers to an unknown particle.
pub const EXIT_INPUT_PARSE: u8 = 4;

/// The two datasets disagree on `N`, `L` or `M`; no comparison is made.
pub const EXIT_PARAMS_MISMATCH: u8 = 5;

/// `require_symmetric` is set and a neighbor list has one-sided entries.
pub const EXIT_ASYMMETRIC: u8 = 6;

/// Writing JSON, CSV or scene output failed.
pub const EXIT_OUTPUT: u8 = 7;

/// Map a file error to its exit code.
pub fn io_exit_code(err: &IoError) -> u8 {
    match err {
        IoError::NotFound { .. } | IoError::Read { .. } => EXIT_INPUT_MISSING,
        IoError::Parse { .. } | IoError::UnknownVertex { .. } => EXIT_INPUT_PARSE,
        IoError::Write { .. } => EXIT_OUTPUT,
    }
}

/// Map an engine error to its exit code.
pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_USAGE,
        ReconError::ParameterMismatch { .. } => EXIT_PARAMS_MISMATCH,
        ReconError::AsymmetricRelation { .. } => EXIT_ASYMMETRIC,
    }
}

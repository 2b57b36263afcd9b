// nbrcheck CLI - compare and inspect neighbor lists written by the
// cell-index / brute-force particle simulation.

mod compare;
mod exit_codes;
mod logging;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use nbrcheck_io::{Dataset, IoError};
use nbrcheck_recon::{asymmetric_entries, canonicalize, self_loops, ReconError, VertexId};

use exit_codes::{io_exit_code, recon_exit_code, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "nbrcheck")]
#[command(about = "Compare neighbor lists produced by two neighbor-finding methods")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify links as shared, left-only or right-only
    #[command(after_help = "\
Without CONFIG, reads particles<LABEL>.txt and neighbors<LABEL>.txt from --dir.

Examples:
  nbrcheck compare
  nbrcheck compare --dir out/ --left CIM --right bruteForce --json
  nbrcheck compare cim-vs-bf.toml --links-csv links.csv --scene scene.json")]
    Compare {
        /// Path to a .toml compare config
        config: Option<PathBuf>,

        /// Directory holding the simulation output (ignored with CONFIG)
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Label of the first method (ignored with CONFIG)
        #[arg(long, default_value = "CIM")]
        left: String,

        /// Label of the second method (ignored with CONFIG)
        #[arg(long, default_value = "bruteForce")]
        right: String,

        /// Output JSON to stdout instead of only the human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write classified links as CSV (a,b,class)
        #[arg(long)]
        links_csv: Option<PathBuf>,

        /// Write a plot-ready scene description (JSON)
        #[arg(long)]
        scene: Option<PathBuf>,
    },

    /// Pick a focus particle and export its neighborhood scene
    #[command(after_help = "\
Prints the focus particle id to stdout.

Examples:
  nbrcheck view
  nbrcheck view --label bruteForce --focus 17 --scene view.json
  nbrcheck view --particles p.txt --neighbors n.txt --seed 7")]
    View {
        /// Directory holding the simulation output
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Method label used to derive file names
        #[arg(long, default_value = "CIM")]
        label: String,

        /// Particle file (overrides --dir/--label)
        #[arg(long)]
        particles: Option<PathBuf>,

        /// Neighbor file (overrides --dir/--label)
        #[arg(long)]
        neighbors: Option<PathBuf>,

        /// Focus particle id (random when omitted)
        #[arg(long)]
        focus: Option<VertexId>,

        /// Seed for the random focus choice
        #[arg(long, env = "NBRCHECK_SEED")]
        seed: Option<u64>,

        /// Write the scene description (JSON) to file
        #[arg(long)]
        scene: Option<PathBuf>,
    },

    /// Check one particle/neighbor file pair and report its shape
    #[command(after_help = "\
Examples:
  nbrcheck validate --particles particlesCIM.txt --neighbors neighborsCIM.txt
  nbrcheck validate --particles p.txt --neighbors n.txt --strict")]
    Validate {
        #[arg(long)]
        particles: PathBuf,

        #[arg(long)]
        neighbors: PathBuf,

        /// Fail when a neighbor entry is not mirrored
        #[arg(long)]
        strict: bool,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("NBRCHECK_COMMIT"), ")",
        "\nengine:  nbrcheck-recon ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("NBRCHECK_TARGET"),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Compare { config, dir, left, right, json, output, links_csv, scene } => {
            compare::cmd_compare(compare::CompareArgs {
                config,
                dir,
                left,
                right,
                json,
                output,
                links_csv,
                scene,
            })
        }
        Commands::View { dir, label, particles, neighbors, focus, seed, scene } => {
            view::cmd_view(view::ViewArgs { dir, label, particles, neighbors, focus, seed, scene })
        }
        Commands::Validate { particles, neighbors, strict } => {
            cmd_validate(particles, neighbors, strict)
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<IoError> for CliError {
    fn from(err: IoError) -> Self {
        let hint = match &err {
            IoError::NotFound { .. } => Some("run the simulation first to produce its output files".to_string()),
            _ => None,
        };
        Self { code: io_exit_code(&err), message: err.to_string(), hint }
    }
}

impl From<ReconError> for CliError {
    fn from(err: ReconError) -> Self {
        let hint = match &err {
            ReconError::ParameterMismatch { .. } => {
                Some("both runs must use the same N, L and M to be comparable".to_string())
            }
            _ => None,
        };
        Self { code: recon_exit_code(&err), message: err.to_string(), hint }
    }
}

// ============================================================================
// validate
// ============================================================================

fn cmd_validate(particles: PathBuf, neighbors: PathBuf, strict: bool) -> Result<(), CliError> {
    let label = neighbors
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    let dataset = Dataset::load(&label, &particles, &neighbors)?;

    let pairs = canonicalize(&dataset.relation);
    let asymmetric = asymmetric_entries(&dataset.relation);
    let loops = self_loops(&dataset.relation);

    eprintln!(
        "valid: {} ({}), {} neighbor entries, {} links, {} one-sided, {} self-loop(s)",
        label,
        dataset.params(),
        dataset.relation.entry_count(),
        pairs.len(),
        asymmetric.len(),
        loops.len(),
    );

    let unlisted = dataset.params().vertex_count.saturating_sub(dataset.relation.vertex_count());
    if unlisted > 0 {
        log::warn!("{unlisted} particle(s) have no line in {}", neighbors.display());
    }

    if strict {
        if let Some(&first) = asymmetric.first() {
            return Err(ReconError::AsymmetricRelation { label, count: asymmetric.len(), first }.into());
        }
    }

    Ok(())
}

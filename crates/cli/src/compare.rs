//! `nbrcheck compare`: classify the links of two neighbor lists.

use std::path::{Path, PathBuf};

use nbrcheck_io::links::write_links_csv_file;
use nbrcheck_io::scene::compare_scene;
use nbrcheck_io::Dataset;
use nbrcheck_recon::config::SourceConfig;
use nbrcheck_recon::{CompareConfig, ReconInput, ReconResult};

use crate::exit_codes::{EXIT_DIFFERENCES, EXIT_INPUT_MISSING, EXIT_OUTPUT};
use crate::CliError;

/// Vertices listed individually in the human summary.
const MAX_LISTED_VERTICES: usize = 10;

pub struct CompareArgs {
    pub config: Option<PathBuf>,
    pub dir: PathBuf,
    pub left: String,
    pub right: String,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub links_csv: Option<PathBuf>,
    pub scene: Option<PathBuf>,
}

pub fn cmd_compare(args: CompareArgs) -> Result<(), CliError> {
    let (config, base_dir) = match &args.config {
        Some(path) => {
            let config_str = std::fs::read_to_string(path).map_err(|e| {
                CliError::new(EXIT_INPUT_MISSING, format!("cannot read config {}: {e}", path.display()))
            })?;
            let config = CompareConfig::from_toml(&config_str)?;
            // Resolve file paths relative to config file's directory
            let base = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
            (config, base)
        }
        None => (CompareConfig::conventional(&args.left, &args.right)?, args.dir.clone()),
    };

    let left = load_source(&base_dir, &config.left)?;
    let right = load_source(&base_dir, &config.right)?;

    // Links from both sides are placed with left coordinates.
    nbrcheck_recon::ensure_same_params(&left.params(), &right.params())?;
    left.ensure_covers(&right)?;

    let input = ReconInput { left: left.source(), right: right.source() };
    let result = nbrcheck_recon::run(&config, &input)?;

    // Flags win over the config's [output] table.
    let from_config = |p: &Option<String>| p.as_ref().map(|p| base_dir.join(p));
    let output = args.output.clone().or_else(|| from_config(&config.output.json));
    let links_csv = args.links_csv.clone().or_else(|| from_config(&config.output.links_csv));
    let scene_path = args.scene.clone().or_else(|| from_config(&config.output.scene));

    // Everything is rendered before the first file is written.
    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::new(EXIT_OUTPUT, format!("JSON serialization error: {e}")))?;
    let scene = match scene_path {
        Some(_) => Some(compare_scene(&left, &right.label, &result.links)?),
        None => None,
    };

    if let Some(ref path) = output {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::new(EXIT_OUTPUT, format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(ref path) = links_csv {
        write_links_csv_file(path, &result.links)?;
        eprintln!("wrote {}", path.display());
    }

    if let (Some(path), Some(scene)) = (&scene_path, &scene) {
        scene.write_json(path)?;
        eprintln!("wrote {}", path.display());
    }

    if args.json {
        println!("{json_str}");
    }

    print_summary(&result);

    if !result.summary.identical {
        return Err(CliError::new(EXIT_DIFFERENCES, "neighbor lists differ"));
    }

    Ok(())
}

fn load_source(base_dir: &Path, source: &SourceConfig) -> Result<Dataset, CliError> {
    let particles = base_dir.join(&source.particles);
    let neighbors = base_dir.join(&source.neighbors);
    Dataset::load(&source.label, &particles, &neighbors).map_err(|e| {
        CliError::from(e).with_hint(format!(
            "'{}' expects {} and {}",
            source.label,
            particles.display(),
            neighbors.display()
        ))
    })
}

// Human summary to stderr
fn print_summary(result: &ReconResult) {
    let s = &result.summary;
    let (l, r) = (&result.meta.left_label, &result.meta.right_label);

    eprintln!(
        "{} vs {} ({}): {} links, {} shared, {} only {}, {} only {}",
        l,
        r,
        result.meta.params,
        s.common + s.only_left + s.only_right,
        s.common,
        s.only_left,
        l,
        s.only_right,
        r,
    );

    for side in [&s.left, &s.right] {
        if side.asymmetric_entries > 0 || side.self_loops > 0 {
            eprintln!(
                "  {}: {} one-sided entr(ies), {} self-loop(s)",
                side.label, side.asymmetric_entries, side.self_loops
            );
        }
    }

    for diff in result.vertex_diffs.iter().take(MAX_LISTED_VERTICES) {
        eprintln!(
            "  particle {}: only {} {:?}, only {} {:?}",
            diff.vertex, l, diff.only_left, r, diff.only_right
        );
    }
    if result.vertex_diffs.len() > MAX_LISTED_VERTICES {
        eprintln!("  ... and {} more particle(s)", result.vertex_diffs.len() - MAX_LISTED_VERTICES);
    }

    if s.identical {
        eprintln!("both methods report the same neighbors");
    }
}

//! `nbrcheck view`: one dataset around a focus particle.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use nbrcheck_io::scene::{view_scene, ParticleRole};
use nbrcheck_io::Dataset;
use nbrcheck_recon::config::SourceConfig;
use nbrcheck_recon::VertexId;

use crate::CliError;

pub struct ViewArgs {
    pub dir: PathBuf,
    pub label: String,
    pub particles: Option<PathBuf>,
    pub neighbors: Option<PathBuf>,
    pub focus: Option<VertexId>,
    pub seed: Option<u64>,
    pub scene: Option<PathBuf>,
}

pub fn cmd_view(args: ViewArgs) -> Result<(), CliError> {
    let names = SourceConfig::conventional(&args.label);
    let particles = args.particles.unwrap_or_else(|| args.dir.join(&names.particles));
    let neighbors = args.neighbors.unwrap_or_else(|| args.dir.join(&names.neighbors));

    let dataset = Dataset::load(&args.label, &particles, &neighbors)?;

    let focus = match args.focus {
        Some(id) => id,
        None => {
            let picked = match args.seed {
                Some(seed) => pick_focus(&dataset, &mut StdRng::seed_from_u64(seed)),
                None => pick_focus(&dataset, &mut rand::thread_rng()),
            };
            picked.ok_or_else(|| CliError::usage(format!("'{}' has no particles to focus on", args.label)))?
        }
    };

    let scene = view_scene(&dataset, focus)?;
    println!("{focus}");

    let neighbor_count = scene.particles.iter().filter(|p| p.role == ParticleRole::Neighbor).count();
    eprintln!(
        "particle {}: {} neighbor(s); {} link(s) in '{}'",
        focus,
        neighbor_count,
        scene.links.len(),
        dataset.label
    );

    if let Some(ref path) = args.scene {
        scene.write_json(path)?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

/// Uniform choice among the dataset's particle ids.
fn pick_focus<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> Option<VertexId> {
    dataset.particles.particles.keys().copied().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbrcheck_io::neighbors::parse_neighbors;
    use nbrcheck_io::particles::parse_particles;
    use std::path::Path;

    fn dataset(particles: &str) -> Dataset {
        let p = parse_particles(Path::new("p.txt"), particles).unwrap();
        let n = parse_neighbors(Path::new("n.txt"), "").unwrap();
        Dataset::new("CIM", p, n, Path::new("n.txt")).unwrap()
    }

    #[test]
    fn seeded_choice_is_repeatable() {
        let ds = dataset("3 10.0 2\n4 1.0 1.0 0.1\n8 2.0 2.0 0.1\n15 3.0 3.0 0.1\n");
        let a = pick_focus(&ds, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = pick_focus(&ds, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
        assert!([4, 8, 15].contains(&a));
    }

    #[test]
    fn empty_dataset_has_no_focus() {
        let ds = dataset("0 10.0 2\n");
        assert_eq!(pick_focus(&ds, &mut StdRng::seed_from_u64(0)), None);
    }
}

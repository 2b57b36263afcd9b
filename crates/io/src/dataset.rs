use std::path::Path;

use nbrcheck_recon::{AdjacencyRelation, DatasetParams, Source};

use crate::error::IoError;
use crate::neighbors::read_neighbors;
use crate::particles::{read_particles, ParticleFile};

/// One simulation run: particles plus the neighbor list one method produced.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub label: String,
    pub particles: ParticleFile,
    pub relation: AdjacencyRelation,
}

impl Dataset {
    /// Read both files. Fails on the first missing or malformed file, and
    /// when the neighbor list names a vertex with no particle record.
    pub fn load(label: &str, particles_path: &Path, neighbors_path: &Path) -> Result<Self, IoError> {
        let particles = read_particles(particles_path)?;
        let relation = read_neighbors(neighbors_path)?;
        let dataset = Self::new(label, particles, relation, neighbors_path)?;
        log::info!(
            "loaded '{}': {} particles, {} neighbor entries",
            dataset.label,
            dataset.particles.particles.len(),
            dataset.relation.entry_count()
        );
        Ok(dataset)
    }

    /// Assemble a dataset from parsed parts. `neighbors_path` names the
    /// neighbor file in errors.
    pub fn new(
        label: &str,
        particles: ParticleFile,
        relation: AdjacencyRelation,
        neighbors_path: &Path,
    ) -> Result<Self, IoError> {
        for (vertex, neighbors) in relation.iter() {
            for &v in std::iter::once(&vertex).chain(neighbors) {
                if !particles.contains(v) {
                    return Err(IoError::UnknownVertex {
                        context: neighbors_path.display().to_string(),
                        vertex: v,
                    });
                }
            }
        }

        Ok(Self {
            label: label.to_string(),
            particles,
            relation,
        })
    }

    /// Fail unless every vertex named in `other`'s neighbor list has a
    /// particle record here, so `other`'s links can be placed with this
    /// dataset's coordinates.
    pub fn ensure_covers(&self, other: &Dataset) -> Result<(), IoError> {
        let missing = other
            .relation
            .iter()
            .flat_map(|(vertex, neighbors)| std::iter::once(vertex).chain(neighbors.iter().copied()))
            .find(|&v| !self.particles.contains(v));
        match missing {
            Some(vertex) => Err(IoError::UnknownVertex {
                context: format!("'{}' links placed with '{}' particles", other.label, self.label),
                vertex,
            }),
            None => Ok(()),
        }
    }

    pub fn params(&self) -> DatasetParams {
        self.particles.params
    }

    /// Engine input for this dataset.
    pub fn source(&self) -> Source {
        Source {
            label: self.label.clone(),
            params: self.params(),
            relation: self.relation.clone(),
        }
    }
}

//! Plot-ready scene descriptions.
//!
//! A scene is data for an external plotting layer: domain size, cell grid
//! lines, particles with a role, and link segments with endpoints resolved
//! to coordinates. Styling is left to the consumer.

use std::collections::BTreeSet;
use std::path::Path;

use nbrcheck_recon::{canonicalize, DatasetParams, LinkClass, Reconciliation, UnorderedPair, VertexId};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::IoError;
use crate::particles::{Particle, ParticleFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleRole {
    Focus,
    Neighbor,
    Other,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneParticle {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub role: ParticleRole,
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneLink {
    pub a: VertexId,
    pub b: VertexId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<LinkClass>,
    pub from: [f64; 2],
    pub to: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub title: String,
    pub side_length: f64,
    /// Cell boundaries, shared by both axes.
    pub grid_lines: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<VertexId>,
    pub particles: Vec<SceneParticle>,
    pub links: Vec<SceneLink>,
}

impl Scene {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), IoError> {
        let json = self.to_json().map_err(|e| IoError::write(path, e))?;
        std::fs::write(path, json).map_err(|e| IoError::write(path, e))
    }
}

/// Positions `i * L / M` for `i` in `0..=M`.
pub fn grid_lines(params: &DatasetParams) -> Vec<f64> {
    let cell = params.cell_size();
    (0..=params.grid_cells).map(|i| f64::from(i) * cell).collect()
}

/// Scene of a comparison. Every link is placed with `base` coordinates.
pub fn compare_scene(base: &Dataset, other_label: &str, recon: &Reconciliation) -> Result<Scene, IoError> {
    let params = base.params();
    let links = recon
        .links()
        .into_iter()
        .map(|(pair, class)| segment(&base.particles, &base.label, pair, Some(class)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scene {
        title: format!(
            "{} vs {} (N={}, M={}x{})",
            base.label, other_label, params.vertex_count, params.grid_cells, params.grid_cells
        ),
        side_length: params.side_length,
        grid_lines: grid_lines(&params),
        focus: None,
        particles: base
            .particles
            .particles
            .values()
            .map(|p| scene_particle(p, ParticleRole::Other))
            .collect(),
        links,
    })
}

/// Scene of one dataset around a focus particle.
///
/// Neighbors of the focus follow the symmetric reading of the relation, so a
/// one-sided entry in either direction marks the particle as a neighbor.
pub fn view_scene(dataset: &Dataset, focus: VertexId) -> Result<Scene, IoError> {
    if !dataset.particles.contains(focus) {
        return Err(IoError::UnknownVertex {
            context: format!("focus for '{}'", dataset.label),
            vertex: focus,
        });
    }

    let neighbors: BTreeSet<VertexId> = canonicalize(&dataset.relation)
        .iter()
        .filter_map(|p| p.other(focus))
        .collect();

    let particles = dataset
        .particles
        .particles
        .values()
        .map(|p| {
            let role = if p.id == focus {
                ParticleRole::Focus
            } else if neighbors.contains(&p.id) {
                ParticleRole::Neighbor
            } else {
                ParticleRole::Other
            };
            scene_particle(p, role)
        })
        .collect();

    // Each link once, walking vertices and then neighbors in id order.
    let mut drawn: BTreeSet<UnorderedPair> = BTreeSet::new();
    let mut links = Vec::new();
    for (v, ns) in dataset.relation.iter() {
        for &n in ns {
            let Some(pair) = UnorderedPair::new(v, n) else {
                continue;
            };
            if drawn.insert(pair) {
                links.push(segment(&dataset.particles, &dataset.label, pair, None)?);
            }
        }
    }

    let params = dataset.params();
    Ok(Scene {
        title: format!(
            "'{}' neighbors of particle {} (N={}, M={}x{})",
            dataset.label, focus, params.vertex_count, params.grid_cells, params.grid_cells
        ),
        side_length: params.side_length,
        grid_lines: grid_lines(&params),
        focus: Some(focus),
        particles,
        links,
    })
}

fn scene_particle(p: &Particle, role: ParticleRole) -> SceneParticle {
    SceneParticle {
        id: p.id,
        x: p.x,
        y: p.y,
        radius: p.radius,
        role,
    }
}

fn segment(
    particles: &ParticleFile,
    label: &str,
    pair: UnorderedPair,
    class: Option<LinkClass>,
) -> Result<SceneLink, IoError> {
    let locate = |v: VertexId| {
        particles.get(v).map(|p| [p.x, p.y]).ok_or_else(|| IoError::UnknownVertex {
            context: format!("link {pair} in '{label}'"),
            vertex: v,
        })
    };
    Ok(SceneLink {
        a: pair.lo(),
        b: pair.hi(),
        class,
        from: locate(pair.lo())?,
        to: locate(pair.hi())?,
    })
}

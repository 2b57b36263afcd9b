// Particle file: header `N L M`, then one `id x y radius` line per particle.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use nbrcheck_recon::{DatasetParams, VertexId};
use serde::Serialize;

use crate::error::IoError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub id: VertexId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleFile {
    pub params: DatasetParams,
    pub particles: BTreeMap<VertexId, Particle>,
}

impl ParticleFile {
    pub fn get(&self, id: VertexId) -> Option<&Particle> {
        self.particles.get(&id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.particles.contains_key(&id)
    }
}

pub fn read_particles(path: &Path) -> Result<ParticleFile, IoError> {
    let content = std::fs::read_to_string(path).map_err(|e| IoError::from_read(path, e))?;
    parse_particles(path, &content)
}

/// Parse particle file content. `path` is only used in error messages.
pub fn parse_particles(path: &Path, content: &str) -> Result<ParticleFile, IoError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| IoError::parse(path, 1, "missing header `N L M`"))?;
    let params = parse_header(path, header_line, header)?;

    let mut particles = BTreeMap::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(IoError::parse(
                path,
                line_no,
                format!("expected `id x y radius`, found {} field(s)", fields.len()),
            ));
        }

        let particle = Particle {
            id: field(path, line_no, "id", fields[0])?,
            x: field(path, line_no, "x", fields[1])?,
            y: field(path, line_no, "y", fields[2])?,
            radius: field(path, line_no, "radius", fields[3])?,
        };

        if particles.insert(particle.id, particle).is_some() {
            return Err(IoError::parse(
                path,
                line_no,
                format!("duplicate particle id {}", particle.id),
            ));
        }
    }

    if particles.len() != params.vertex_count {
        return Err(IoError::parse(
            path,
            header_line,
            format!(
                "header declares N={} but the file has {} particle record(s)",
                params.vertex_count,
                particles.len()
            ),
        ));
    }

    log::debug!("{}: {} particles ({})", path.display(), particles.len(), params);
    Ok(ParticleFile { params, particles })
}

fn parse_header(path: &Path, line_no: usize, line: &str) -> Result<DatasetParams, IoError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(IoError::parse(
            path,
            line_no,
            format!("expected header `N L M`, found {} field(s)", fields.len()),
        ));
    }

    let params = DatasetParams {
        vertex_count: field(path, line_no, "N", fields[0])?,
        side_length: field(path, line_no, "L", fields[1])?,
        grid_cells: field(path, line_no, "M", fields[2])?,
    };

    if !(params.side_length.is_finite() && params.side_length > 0.0) {
        return Err(IoError::parse(path, line_no, format!("L must be positive, got {}", fields[1])));
    }
    if params.grid_cells == 0 {
        return Err(IoError::parse(path, line_no, "M must be at least 1"));
    }

    Ok(params)
}

pub(crate) fn field<T: FromStr>(path: &Path, line_no: usize, name: &str, raw: &str) -> Result<T, IoError> {
    raw.parse()
        .map_err(|_| IoError::parse(path, line_no, format!("invalid {name} '{raw}'")))
}

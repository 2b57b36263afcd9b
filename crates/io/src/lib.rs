// File I/O for simulation output: particle and neighbor readers,
// link CSV and scene export.

pub mod dataset;
pub mod error;
pub mod links;
pub mod neighbors;
pub mod particles;
pub mod scene;

pub use dataset::Dataset;
pub use error::IoError;
pub use particles::{Particle, ParticleFile};
pub use scene::Scene;

//! `nbrcheck-recon`: neighbor-pair reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded adjacency relations, returns
//! classified links. No CLI or IO dependencies.

pub mod canonical;
pub mod config;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod model;
pub mod params;
pub mod reconcile;

pub use canonical::{asymmetric_entries, canonicalize, canonicalize_as_relation, self_loops};
pub use config::CompareConfig;
pub use engine::run;
pub use error::ReconError;
pub use model::{
    AdjacencyRelation, DatasetParams, LinkClass, PairSet, ReconInput, ReconResult, Source,
    UnorderedPair, VertexId,
};
pub use params::ensure_same_params;
pub use reconcile::{reconcile, vertex_differences, Reconciliation, VertexDiff};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::reconcile::{Reconciliation, VertexDiff};

/// Particle identifier, unique within one dataset.
pub type VertexId = u32;

// ---------------------------------------------------------------------------
// Pairs
// ---------------------------------------------------------------------------

/// Two distinct vertices, always stored as `(min, max)`.
///
/// `(a, b)` and `(b, a)` build the same value, so derived `Eq`/`Ord`/`Hash`
/// treat the pair as unordered. Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UnorderedPair(VertexId, VertexId);

impl UnorderedPair {
    /// Canonical pair for `a` and `b`, or `None` for a self-loop.
    pub fn new(a: VertexId, b: VertexId) -> Option<Self> {
        use std::cmp::Ordering;
        match a.cmp(&b) {
            Ordering::Less => Some(Self(a, b)),
            Ordering::Greater => Some(Self(b, a)),
            Ordering::Equal => None,
        }
    }

    pub fn lo(&self) -> VertexId {
        self.0
    }

    pub fn hi(&self) -> VertexId {
        self.1
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if v == self.0 {
            Some(self.1)
        } else if v == self.1 {
            Some(self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for UnorderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Set of canonical pairs. No duplicates and no self-pairs by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PairSet(BTreeSet<UnorderedPair>);

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, pair: &UnorderedPair) -> bool {
        self.0.contains(pair)
    }

    /// Pairs in ascending `(lo, hi)` order.
    pub fn iter(&self) -> impl Iterator<Item = &UnorderedPair> + '_ {
        self.0.iter()
    }

    pub fn intersection(&self, other: &PairSet) -> PairSet {
        self.0.intersection(&other.0).copied().collect()
    }

    pub fn difference(&self, other: &PairSet) -> PairSet {
        self.0.difference(&other.0).copied().collect()
    }

    pub fn union(&self, other: &PairSet) -> PairSet {
        self.0.union(&other.0).copied().collect()
    }

    pub fn is_disjoint(&self, other: &PairSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Every vertex that appears as an endpoint.
    pub fn vertices(&self) -> BTreeSet<VertexId> {
        self.0.iter().flat_map(|p| [p.lo(), p.hi()]).collect()
    }
}

impl FromIterator<UnorderedPair> for PairSet {
    fn from_iter<T: IntoIterator<Item = UnorderedPair>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PairSet {
    type Item = UnorderedPair;
    type IntoIter = std::collections::btree_set::IntoIter<UnorderedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PairSet {
    type Item = &'a UnorderedPair;
    type IntoIter = std::collections::btree_set::Iter<'a, UnorderedPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Adjacency
// ---------------------------------------------------------------------------

/// Vertex → neighbor set, as loaded from a neighbor file.
///
/// The relation is symmetric in meaning but not necessarily in storage:
/// `b ∈ N(a)` counts as a link even when `a ∉ N(b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyRelation(BTreeMap<VertexId, BTreeSet<VertexId>>);

impl AdjacencyRelation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor list of `vertex`, returning the previous one if any.
    pub fn insert(
        &mut self,
        vertex: VertexId,
        neighbors: impl IntoIterator<Item = VertexId>,
    ) -> Option<BTreeSet<VertexId>> {
        self.0.insert(vertex, neighbors.into_iter().collect())
    }

    pub fn neighbors(&self, vertex: VertexId) -> Option<&BTreeSet<VertexId>> {
        self.0.get(&vertex)
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.0.contains_key(&vertex)
    }

    /// Number of vertices with an entry (including empty ones).
    pub fn vertex_count(&self) -> usize {
        self.0.len()
    }

    /// Number of stored directed `(vertex, neighbor)` entries.
    pub fn entry_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &BTreeSet<VertexId>)> + '_ {
        self.0.iter().map(|(v, ns)| (*v, ns))
    }
}

impl<I> FromIterator<(VertexId, I)> for AdjacencyRelation
where
    I: IntoIterator<Item = VertexId>,
{
    fn from_iter<T: IntoIterator<Item = (VertexId, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(v, ns)| (v, ns.into_iter().collect()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Dataset parameters
// ---------------------------------------------------------------------------

/// Global parameters from a particle file header (`N L M`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetParams {
    /// `N`
    pub vertex_count: usize,
    /// `L`
    pub side_length: f64,
    /// `M`, cells per axis.
    pub grid_cells: u32,
}

impl DatasetParams {
    pub fn cell_size(&self) -> f64 {
        self.side_length / f64::from(self.grid_cells)
    }
}

impl fmt::Display for DatasetParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={}, L={}, M={}x{}",
            self.vertex_count, self.side_length, self.grid_cells, self.grid_cells
        )
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One side of a comparison: a labelled neighbor list with its parameters.
#[derive(Debug, Clone)]
pub struct Source {
    pub label: String,
    pub params: DatasetParams,
    pub relation: AdjacencyRelation,
}

pub struct ReconInput {
    pub left: Source,
    pub right: Source,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkClass {
    Common,
    OnlyLeft,
    OnlyRight,
}

impl LinkClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::OnlyLeft => "only_left",
            Self::OnlyRight => "only_right",
        }
    }
}

impl fmt::Display for LinkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SideSummary {
    pub label: String,
    pub vertices: usize,
    pub pairs: usize,
    pub asymmetric_entries: usize,
    pub self_loops: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub left: SideSummary,
    pub right: SideSummary,
    pub common: usize,
    pub only_left: usize,
    pub only_right: usize,
    pub vertices_with_differences: usize,
    pub identical: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub config_name: String,
    pub left_label: String,
    pub right_label: String,
    pub params: DatasetParams,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconResult {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub links: Reconciliation,
    pub vertex_diffs: Vec<VertexDiff>,
}

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{AdjacencyRelation, PairSet, UnorderedPair, VertexId};

/// Collapse a relation into its canonical pair set.
///
/// Each `(v, n)` entry becomes `(min(v, n), max(v, n))`, so reciprocal and
/// one-sided entries yield the same pair. Self-loops are dropped.
pub fn canonicalize(relation: &AdjacencyRelation) -> PairSet {
    relation
        .iter()
        .flat_map(|(v, neighbors)| neighbors.iter().filter_map(move |&n| UnorderedPair::new(v, n)))
        .collect()
}

/// Expand a pair set back into a fully mirrored relation.
///
/// Only vertices that appear in some pair get an entry.
pub fn canonicalize_as_relation(pairs: &PairSet) -> AdjacencyRelation {
    let mut mirrored: BTreeMap<VertexId, BTreeSet<VertexId>> = BTreeMap::new();
    for pair in pairs {
        mirrored.entry(pair.lo()).or_default().insert(pair.hi());
        mirrored.entry(pair.hi()).or_default().insert(pair.lo());
    }
    mirrored.into_iter().collect()
}

/// Directed entries `(v, n)` whose reverse `(n, v)` is not stored.
///
/// Sorted by `v`, then `n`. Self-loops are not reported here.
pub fn asymmetric_entries(relation: &AdjacencyRelation) -> Vec<(VertexId, VertexId)> {
    relation
        .iter()
        .flat_map(|(v, neighbors)| neighbors.iter().map(move |&n| (v, n)))
        .filter(|&(v, n)| v != n)
        .filter(|&(v, n)| !relation.neighbors(n).is_some_and(|back| back.contains(&v)))
        .collect()
}

/// Vertices that list themselves as a neighbor.
pub fn self_loops(relation: &AdjacencyRelation) -> Vec<VertexId> {
    relation
        .iter()
        .filter(|(v, neighbors)| neighbors.contains(v))
        .map(|(v, _)| v)
        .collect()
}

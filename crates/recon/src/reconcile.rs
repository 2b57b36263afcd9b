use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::model::{LinkClass, PairSet, UnorderedPair, VertexId};

/// Links of two pair sets split into shared and one-sided.
///
/// The three sets are pairwise disjoint and together cover `left ∪ right`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub common: PairSet,
    pub only_left: PairSet,
    pub only_right: PairSet,
}

impl Reconciliation {
    /// `left ∪ right`, rebuilt from the three classes.
    pub fn union(&self) -> PairSet {
        self.common.union(&self.only_left).union(&self.only_right)
    }

    pub fn is_identical(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }

    pub fn classify(&self, pair: &UnorderedPair) -> Option<LinkClass> {
        if self.common.contains(pair) {
            Some(LinkClass::Common)
        } else if self.only_left.contains(pair) {
            Some(LinkClass::OnlyLeft)
        } else if self.only_right.contains(pair) {
            Some(LinkClass::OnlyRight)
        } else {
            None
        }
    }

    /// Every link with its class, ordered by pair.
    pub fn links(&self) -> Vec<(UnorderedPair, LinkClass)> {
        let mut out: Vec<(UnorderedPair, LinkClass)> = self
            .common
            .iter()
            .map(|p| (*p, LinkClass::Common))
            .chain(self.only_left.iter().map(|p| (*p, LinkClass::OnlyLeft)))
            .chain(self.only_right.iter().map(|p| (*p, LinkClass::OnlyRight)))
            .collect();
        out.sort();
        out
    }

    /// The same reconciliation seen from the other side.
    pub fn swapped(self) -> Self {
        Self {
            common: self.common,
            only_left: self.only_right,
            only_right: self.only_left,
        }
    }
}

/// Intersection and both relative complements of `left` and `right`.
pub fn reconcile(left: &PairSet, right: &PairSet) -> Reconciliation {
    Reconciliation {
        common: left.intersection(right),
        only_left: left.difference(right),
        only_right: right.difference(left),
    }
}

// ---------------------------------------------------------------------------
// Per-vertex view
// ---------------------------------------------------------------------------

/// Neighbors of one vertex that only one side reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexDiff {
    pub vertex: VertexId,
    pub only_left: Vec<VertexId>,
    pub only_right: Vec<VertexId>,
}

/// One entry per vertex touched by a one-sided link, ascending by vertex.
pub fn vertex_differences(recon: &Reconciliation) -> Vec<VertexDiff> {
    let mut by_vertex: BTreeMap<VertexId, (BTreeSet<VertexId>, BTreeSet<VertexId>)> =
        BTreeMap::new();

    for p in &recon.only_left {
        by_vertex.entry(p.lo()).or_default().0.insert(p.hi());
        by_vertex.entry(p.hi()).or_default().0.insert(p.lo());
    }
    for p in &recon.only_right {
        by_vertex.entry(p.lo()).or_default().1.insert(p.hi());
        by_vertex.entry(p.hi()).or_default().1.insert(p.lo());
    }

    by_vertex
        .into_iter()
        .map(|(vertex, (left, right))| VertexDiff {
            vertex,
            only_left: left.into_iter().collect(),
            only_right: right.into_iter().collect(),
        })
        .collect()
}

use crate::canonical::{asymmetric_entries, self_loops};
use crate::model::{PairSet, ReconSummary, SideSummary, Source};
use crate::reconcile::{Reconciliation, VertexDiff};

/// Per-side counts for one source and its canonical pairs.
pub fn side_summary(source: &Source, pairs: &PairSet) -> SideSummary {
    SideSummary {
        label: source.label.clone(),
        vertices: source.relation.vertex_count(),
        pairs: pairs.len(),
        asymmetric_entries: asymmetric_entries(&source.relation).len(),
        self_loops: self_loops(&source.relation).len(),
    }
}

/// Compute summary statistics from a reconciliation.
pub fn compute_summary(
    left: SideSummary,
    right: SideSummary,
    recon: &Reconciliation,
    diffs: &[VertexDiff],
) -> ReconSummary {
    ReconSummary {
        left,
        right,
        common: recon.common.len(),
        only_left: recon.only_left.len(),
        only_right: recon.only_right.len(),
        vertices_with_differences: diffs.len(),
        identical: recon.is_identical(),
    }
}

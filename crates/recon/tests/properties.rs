// Property-based tests for pair canonicalization and reconciliation.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::collections::BTreeSet;

use nbrcheck_recon::{
    canonicalize, canonicalize_as_relation, reconcile, vertex_differences, AdjacencyRelation,
    PairSet, UnorderedPair, VertexId,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Relation over a small id space so that overlaps, reciprocal entries and
/// self-loops all show up often.
fn arb_relation(max_id: VertexId) -> impl Strategy<Value = AdjacencyRelation> {
    prop::collection::btree_map(
        0..max_id,
        prop::collection::vec(0..max_id, 0..6),
        0..(max_id as usize / 2),
    )
    .prop_map(|m| m.into_iter().collect::<AdjacencyRelation>())
}

fn arb_pair_set(max_id: VertexId) -> impl Strategy<Value = PairSet> {
    prop::collection::vec((0..max_id, 0..max_id), 0..40)
        .prop_map(|raw| {
            raw.into_iter()
                .filter_map(|(a, b)| UnorderedPair::new(a, b))
                .collect::<PairSet>()
        })
}

// ---------------------------------------------------------------------------
// Canonicalization
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn canonical_pairs_are_sorted_and_distinct(relation in arb_relation(24)) {
        let pairs = canonicalize(&relation);
        let listed: Vec<&UnorderedPair> = pairs.iter().collect();
        let unique: BTreeSet<&UnorderedPair> = listed.iter().copied().collect();

        prop_assert_eq!(listed.len(), unique.len(), "duplicate pair emitted");
        for p in &pairs {
            prop_assert!(p.lo() < p.hi(), "pair {} is not canonical", p);
        }
    }

    #[test]
    fn every_entry_is_represented(relation in arb_relation(24)) {
        let pairs = canonicalize(&relation);
        for (v, neighbors) in relation.iter() {
            for &n in neighbors {
                if let Some(p) = UnorderedPair::new(v, n) {
                    prop_assert!(pairs.contains(&p), "entry ({}, {}) lost", v, n);
                }
            }
        }
        prop_assert!(pairs.len() <= relation.entry_count());
    }

    #[test]
    fn canonicalization_is_idempotent(pairs in arb_pair_set(30)) {
        let once = canonicalize(&canonicalize_as_relation(&pairs));
        prop_assert_eq!(&once, &pairs);
        let twice = canonicalize(&canonicalize_as_relation(&once));
        prop_assert_eq!(twice, once);
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]
    #[test]
    fn classes_partition_the_union(a in arb_pair_set(20), b in arb_pair_set(20)) {
        let r = reconcile(&a, &b);

        prop_assert!(r.common.is_disjoint(&r.only_left));
        prop_assert!(r.common.is_disjoint(&r.only_right));
        prop_assert!(r.only_left.is_disjoint(&r.only_right));
        prop_assert_eq!(r.union(), a.union(&b));
        prop_assert_eq!(r.common.len() + r.only_left.len(), a.len());
        prop_assert_eq!(r.common.len() + r.only_right.len(), b.len());
        prop_assert_eq!(r.links().len(), a.union(&b).len());
    }

    #[test]
    fn swapping_sides_swaps_only_sets(a in arb_pair_set(20), b in arb_pair_set(20)) {
        let ab = reconcile(&a, &b);
        let ba = reconcile(&b, &a);

        prop_assert_eq!(&ab.common, &ba.common);
        prop_assert_eq!(&ab.only_left, &ba.only_right);
        prop_assert_eq!(&ab.only_right, &ba.only_left);
    }

    #[test]
    fn self_reconcile_is_identical(a in arb_pair_set(20)) {
        let r = reconcile(&a, &a);
        prop_assert!(r.is_identical());
        prop_assert_eq!(&r.common, &a);
        prop_assert!(vertex_differences(&r).is_empty());
    }

    #[test]
    fn vertex_differences_mirror_one_sided_pairs(a in arb_pair_set(20), b in arb_pair_set(20)) {
        let r = reconcile(&a, &b);
        let diffs = vertex_differences(&r);

        let left_entries: usize = diffs.iter().map(|d| d.only_left.len()).sum();
        let right_entries: usize = diffs.iter().map(|d| d.only_right.len()).sum();
        prop_assert_eq!(left_entries, 2 * r.only_left.len());
        prop_assert_eq!(right_entries, 2 * r.only_right.len());

        for d in &diffs {
            prop_assert!(!d.only_left.is_empty() || !d.only_right.is_empty());
        }
    }
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn cim_vs_brute_force_example() {
    let a: AdjacencyRelation = [(1, vec![2, 3]), (2, vec![1]), (3, vec![1])].into_iter().collect();
    let b: AdjacencyRelation = [(1, vec![2]), (2, vec![1]), (3, vec![])].into_iter().collect();

    let pa = canonicalize(&a);
    let pb = canonicalize(&b);
    let p12 = UnorderedPair::new(1, 2).unwrap();
    let p13 = UnorderedPair::new(1, 3).unwrap();
    assert_eq!(pa, [p12, p13].into_iter().collect::<PairSet>());
    assert_eq!(pb, [p12].into_iter().collect::<PairSet>());

    let r = reconcile(&pa, &pb);
    assert_eq!(r.common, [p12].into_iter().collect::<PairSet>());
    assert_eq!(r.only_left, [p13].into_iter().collect::<PairSet>());
    assert!(r.only_right.is_empty());
}

#[test]
fn empty_relations_reconcile_to_nothing() {
    let empty = canonicalize(&AdjacencyRelation::new());
    let r = reconcile(&empty, &empty);
    assert!(r.common.is_empty() && r.only_left.is_empty() && r.only_right.is_empty());
}

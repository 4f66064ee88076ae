use halo_motif::{
    count_patterns, intersect_into, CountConfig, CsrGraph, OverflowPolicy, RootList, ScratchBuffer,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn sorted_set() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::btree_set(0u32..200, 0..60).prop_map(|s| s.into_iter().collect())
}

fn edge_list() -> impl Strategy<Value = (usize, Vec<(u32, u32)>)> {
    (2usize..40).prop_flat_map(|n| {
        let id = 0..n as u32;
        (
            Just(n),
            proptest::collection::vec((id.clone(), id), 0..n * 4),
        )
    })
}

proptest! {
    #[test]
    fn intersection_is_prefix_of_true_intersection(
        a in sorted_set(),
        b in sorted_set(),
        capacity in 0usize..40,
    ) {
        let left: BTreeSet<u32> = a.iter().copied().collect();
        let right: BTreeSet<u32> = b.iter().copied().collect();
        let truth: Vec<u32> = left.intersection(&right).copied().collect();

        let mut dst = ScratchBuffer::with_capacity(capacity);
        let n = intersect_into(&a, &b, &mut dst, OverflowPolicy::Truncate).unwrap();

        let expected = &truth[..truth.len().min(capacity)];
        prop_assert_eq!(n, expected.len());
        prop_assert_eq!(dst.as_slice(), expected);
        prop_assert_eq!(dst.truncated(), truth.len() > capacity);

        let strict = intersect_into(&a, &b, &mut dst, OverflowPolicy::Fail);
        prop_assert_eq!(strict.is_err(), truth.len() > capacity);
    }

    #[test]
    fn intersection_is_symmetric(a in sorted_set(), b in sorted_set()) {
        let mut ab = ScratchBuffer::with_capacity(64);
        let mut ba = ScratchBuffer::with_capacity(64);
        intersect_into(&a, &b, &mut ab, OverflowPolicy::Truncate).unwrap();
        intersect_into(&b, &a, &mut ba, OverflowPolicy::Truncate).unwrap();
        prop_assert_eq!(ab.as_slice(), ba.as_slice());
    }

    #[test]
    fn parallel_partitioning_preserves_counts(
        (n, edges) in edge_list(),
        workers in 1usize..6,
        threshold in 0usize..12,
    ) {
        let g = CsrGraph::from_edges(n, &edges).unwrap();
        let roots = RootList::by_degree(&g);
        let base = CountConfig::default().with_scratch_capacity(64);

        let single = count_patterns(&g, &roots, &base.clone().with_workers(1).with_degree_threshold(usize::MAX)).unwrap();
        let pooled = count_patterns(&g, &roots, &base.with_workers(workers).with_degree_threshold(threshold)).unwrap();

        prop_assert_eq!(&pooled.counts, &single.counts);
        prop_assert_eq!(pooled.edges_processed, (g.edge_count() / 2) as u64);
        let expected_cooperative = roots
            .as_slice()
            .iter()
            .take_while(|&&r| g.degree(r) >= threshold)
            .count();
        prop_assert_eq!(pooled.cooperative_roots, expected_cooperative);
    }
}

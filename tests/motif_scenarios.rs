use halo_motif::{
    count_patterns, CountConfig, CsrGraph, GhostToken, PatternCounter, OverflowPolicy, RootList,
    Scheduler,
};

fn complete(n: u32) -> CsrGraph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    CsrGraph::from_edges(n as usize, &edges).unwrap()
}

/// Deterministic pseudo-random graph with a few dense hubs.
fn skewed_graph(n: u32, seed: u64) -> CsrGraph {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as u32
    };
    let mut edges = Vec::new();
    for u in 0..n {
        let fanout = if u % 7 == 0 { n / 2 } else { 3 };
        for _ in 0..fanout {
            edges.push((u, next() % n));
        }
    }
    CsrGraph::from_edges(n as usize, &edges).unwrap()
}

fn brute_force(g: &CsrGraph, anchor: u32) -> u64 {
    let mut total = 0;
    for &p in g.neighbors(anchor).iter().filter(|&&p| p < anchor) {
        for &t in g.neighbors(anchor) {
            if !g.has_edge(p, t) {
                continue;
            }
            for &s in g.neighbors(anchor) {
                if g.has_edge(p, s) && g.has_edge(t, s) {
                    total += 1;
                }
            }
        }
    }
    total
}

fn cfg(workers: usize, threshold: usize) -> CountConfig {
    CountConfig::default()
        .with_workers(workers)
        .with_degree_threshold(threshold)
        .with_scratch_capacity(1024)
}

#[test]
fn triangle_scenario() {
    let g = complete(3);
    let roots = RootList::from_vec(&g, vec![2]).unwrap();
    for threshold in [0, usize::MAX] {
        let report = count_patterns(&g, &roots, &cfg(4, threshold)).unwrap();
        assert_eq!(report.counts, vec![0]);
        assert_eq!(report.edges_processed, 2);
    }
}

#[test]
fn k4_scenario() {
    let g = complete(4);
    let roots = RootList::from_vec(&g, vec![3]).unwrap();
    for threshold in [0, 3, 4] {
        let report = count_patterns(&g, &roots, &cfg(3, threshold)).unwrap();
        assert_eq!(report.counts, vec![6]);
    }
}

#[test]
fn threshold_boundary_is_cooperative() {
    let g = complete(4);
    let roots = RootList::from_vec(&g, vec![3]).unwrap();
    assert_eq!(g.degree(3), 3);

    let at = count_patterns(&g, &roots, &cfg(2, 3)).unwrap();
    assert_eq!(at.cooperative_roots, 1);
    let above = count_patterns(&g, &roots, &cfg(2, 4)).unwrap();
    assert_eq!(above.cooperative_roots, 0);
}

#[test]
fn matches_brute_force() {
    let g = skewed_graph(60, 7);
    let roots = RootList::by_degree(&g);
    let report = count_patterns(&g, &roots, &cfg(4, 20)).unwrap();
    assert!(report.cooperative_roots > 0);
    assert!(report.cooperative_roots < roots.len());
    for (i, &root) in roots.as_slice().iter().enumerate() {
        assert_eq!(report.counts[i], brute_force(&g, root), "root {root}");
    }
}

#[test]
fn phase_equivalence() {
    let g = skewed_graph(120, 42);
    let roots = RootList::by_degree(&g);

    let single = count_patterns(&g, &roots, &cfg(1, usize::MAX)).unwrap();
    assert_eq!(single.cooperative_roots, 0);

    for workers in [2, 3, 8] {
        let all_cooperative = count_patterns(&g, &roots, &cfg(workers, 0)).unwrap();
        assert_eq!(all_cooperative.cooperative_roots, roots.len());
        assert_eq!(all_cooperative.counts, single.counts, "workers {workers}");

        let mixed = count_patterns(&g, &roots, &cfg(workers, 30)).unwrap();
        assert_eq!(mixed.counts, single.counts, "workers {workers}");
        assert_eq!(mixed.edges_processed, single.edges_processed);
    }
}

#[test]
fn every_edge_processed_once() {
    let g = skewed_graph(80, 3);
    let roots = RootList::by_degree(&g);
    let report = count_patterns(&g, &roots, &cfg(5, 25)).unwrap();
    assert_eq!(report.edges_processed, (g.edge_count() / 2) as u64);
}

#[test]
fn idempotent_runs() {
    let g = skewed_graph(100, 11);
    let roots = RootList::by_degree(&g);
    let scheduler = Scheduler::new(cfg(6, 20));
    let first = scheduler.run(&g, &roots).unwrap();
    let second = scheduler.run(&g, &roots).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scheduler_total_matches_single_counter() {
    let g = skewed_graph(50, 99);
    let roots = RootList::by_degree(&g);
    let report = count_patterns(&g, &roots, &cfg(4, 10)).unwrap();

    let mut counter = PatternCounter::new(1024, OverflowPolicy::Fail);
    let expected: u64 = roots
        .as_slice()
        .iter()
        .map(|&r| counter.count_anchor(&g, r).unwrap())
        .sum();
    assert_eq!(report.total(), expected);
}

#[test]
fn runs_inside_an_outer_token_scope() {
    // A caller that already holds a token can still start runs; each run brands its own state.
    GhostToken::new(|outer| {
        assert!(outer.is_valid());
        let g = complete(5);
        let roots = RootList::by_degree(&g);
        let report = count_patterns(&g, &roots, &cfg(2, 4)).unwrap();
        assert_eq!(report.total(), 60);
    });
}

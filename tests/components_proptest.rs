use core::ops::ControlFlow;

use halfedge::graph::ops::{arcs, copy_graph, create_edge, ensure_vertex};
use halfedge::{
    discover_components, sibling, ArenaResources, ComponentDiscovery, GhostToken, PoolResources,
    ResourceManager, VertexIdx, VertexList,
};
use petgraph::unionfind::UnionFind;
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (0usize..40).prop_flat_map(|n| {
        let edges = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            proptest::collection::vec((0..n, 0..n), 0..60).boxed()
        };
        (Just(n), edges)
    })
}

fn build<'brand, R: ResourceManager<'brand>>(
    res: &mut R,
    n: usize,
    edges: &[(usize, usize)],
) -> (VertexList<'brand>, Vec<VertexIdx<'brand>>) {
    let mut list = VertexList::new();
    let handles: Vec<_> = (0..n)
        .map(|vid| ensure_vertex(res, &mut list, vid).unwrap())
        .collect();
    for &(a, b) in edges {
        create_edge(res, handles[a], handles[b]).unwrap();
    }
    (list, handles)
}

/// Representative vids in discovery order: the smallest vid of each class,
/// ascending, since vertices sit on the list in vid order.
fn oracle_reps(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut uf = UnionFind::new(n);
    for &(a, b) in edges {
        uf.union(a, b);
    }
    let mut seen = vec![false; n];
    let mut reps = Vec::new();
    for x in 0..n {
        let root = uf.find(x);
        if !seen[root] {
            seen[root] = true;
            reps.push(x);
        }
    }
    reps
}

proptest! {
    #[test]
    fn test_components_match_union_find((n, edges) in graph_strategy()) {
        let expected = oracle_reps(n, &edges);

        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let (list, _) = build(&mut res, n, &edges);

            let mut reps = Vec::new();
            let mut engine = ComponentDiscovery::new();
            let count = engine.run(&res, &list, |v| {
                reps.push(res.vertex(v).vid());
                ControlFlow::Continue(())
            });

            assert_eq!(count, expected.len());
            assert_eq!(reps, expected);
            assert_eq!(engine.component_sizes().iter().sum::<usize>(), n);
        });
    }

    #[test]
    fn test_rerun_reports_same_sequence((n, edges) in graph_strategy()) {
        GhostToken::new(|token| {
            let mut res = ArenaResources::new(&token);
            let (list, _) = build(&mut res, n, &edges);

            let run = || {
                let mut reps = Vec::new();
                let count = discover_components(&res, &list, |v| {
                    reps.push(v);
                    ControlFlow::Continue(())
                });
                (count, reps)
            };
            assert_eq!(run(), run());
        });
    }

    #[test]
    fn test_cancel_touches_only_first_component((n, edges) in graph_strategy()) {
        prop_assume!(n > 0);
        let mut uf = UnionFind::new(n);
        for &(a, b) in &edges {
            uf.union(a, b);
        }

        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let (list, handles) = build(&mut res, n, &edges);

            let mut engine = ComponentDiscovery::new();
            let count = engine.run(&res, &list, |_| ControlFlow::Break(()));
            assert_eq!(count, 1);

            for (vid, &v) in handles.iter().enumerate() {
                if !uf.equiv(0, vid) {
                    assert!(engine.mark(v).is_unvisited());
                }
            }
        });
    }

    #[test]
    fn test_sibling_is_an_involution((n, edges) in graph_strategy()) {
        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let (list, _) = build(&mut res, n, &edges);

            for v in list.iter(&res) {
                for a in arcs(&res, v) {
                    let s = sibling(&res, a);
                    assert_ne!(s, a);
                    assert_eq!(sibling(&res, s), a);
                    assert_eq!(res.arc(s).target(), v);
                }
            }
        });
    }

    #[test]
    fn test_copy_has_same_components((n, edges) in graph_strategy()) {
        let expected = oracle_reps(n, &edges);

        GhostToken::new(|src_token| {
            let mut src = PoolResources::new(&src_token);
            let (list, _) = build(&mut src, n, &edges);

            GhostToken::new(|dst_token| {
                let mut dst = ArenaResources::new(&dst_token);
                let mut copy = VertexList::new();
                copy_graph(&src, &list, &mut dst, &mut copy).unwrap();

                let mut reps = Vec::new();
                discover_components(&dst, &copy, |v| {
                    reps.push(dst.vertex(v).vid());
                    ControlFlow::Continue(())
                });
                assert_eq!(reps, expected);
                assert_eq!(dst.edge_count(), edges.len());
            });
        });
    }
}

use core::ops::ControlFlow;

use halfedge::graph::ops::{
    copy_graph, ensure_edge, ensure_vertex, find_edge_by_vid, release_graph, remove_edge,
};
use halfedge::{
    discover_components, AllocConfig, AllocContext, AllocError, ArcIdx, EdgePair, GhostToken,
    HalfEdge, PoolResources, ResourceManager, Vertex, VertexIdx, VertexList,
};

/// A manager that delegates to a pool and tallies every request.
struct CountingResources<'brand> {
    inner: PoolResources<'brand>,
    vertex_allocs: usize,
    vertex_releases: usize,
    edge_allocs: usize,
    edge_releases: usize,
}

impl<'brand> CountingResources<'brand> {
    fn new(token: &GhostToken<'brand>) -> Self {
        Self {
            inner: PoolResources::new(token),
            vertex_allocs: 0,
            vertex_releases: 0,
            edge_allocs: 0,
            edge_releases: 0,
        }
    }
}

impl<'brand> ResourceManager<'brand> for CountingResources<'brand> {
    fn alloc_vertex(&mut self) -> Result<VertexIdx<'brand>, AllocError> {
        self.vertex_allocs += 1;
        self.inner.alloc_vertex()
    }

    fn release_vertex(&mut self, v: VertexIdx<'brand>) {
        self.vertex_releases += 1;
        self.inner.release_vertex(v);
    }

    fn alloc_edge(
        &mut self,
        u: VertexIdx<'brand>,
        v: VertexIdx<'brand>,
    ) -> Result<EdgePair<'brand>, AllocError> {
        self.edge_allocs += 1;
        self.inner.alloc_edge(u, v)
    }

    fn release_edge(&mut self, arc: ArcIdx<'brand>) {
        self.edge_releases += 1;
        self.inner.release_edge(arc);
    }

    fn vertex(&self, v: VertexIdx<'brand>) -> &Vertex<'brand> {
        self.inner.vertex(v)
    }

    fn vertex_mut(&mut self, v: VertexIdx<'brand>) -> &mut Vertex<'brand> {
        self.inner.vertex_mut(v)
    }

    fn arc(&self, a: ArcIdx<'brand>) -> &HalfEdge<'brand> {
        self.inner.arc(a)
    }

    fn arc_mut(&mut self, a: ArcIdx<'brand>) -> &mut HalfEdge<'brand> {
        self.inner.arc_mut(a)
    }

    fn vertex_slot_bound(&self) -> usize {
        self.inner.vertex_slot_bound()
    }

    fn arc_slot_bound(&self) -> usize {
        self.inner.arc_slot_bound()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}

#[test]
fn test_helpers_route_through_injected_manager() {
    GhostToken::new(|token| {
        let mut res = CountingResources::new(&token);
        let mut list = VertexList::new();
        for (a, b) in [(1, 2), (2, 3), (1, 2), (4, 4)] {
            ensure_edge(&mut res, &mut list, a, b).unwrap();
        }
        assert_eq!(res.vertex_allocs, 4);
        assert_eq!(res.edge_allocs, 3);

        let count = discover_components(&res, &list, |_| ControlFlow::Continue(()));
        assert_eq!(count, 2);
        // Discovery neither allocates nor releases.
        assert_eq!(res.vertex_allocs, 4);
        assert_eq!(res.edge_allocs, 3);

        let one = ensure_vertex(&mut res, &mut list, 1).unwrap();
        let two = ensure_vertex(&mut res, &mut list, 2).unwrap();
        assert!(remove_edge(&mut res, two, one));
        assert_eq!(res.edge_releases, 1);

        release_graph(&mut res, &mut list);
        assert_eq!(res.vertex_releases, 4);
        assert_eq!(res.edge_releases, 3);
        assert_eq!(res.vertex_count(), 0);
        assert_eq!(res.edge_count(), 0);
    });
}

#[test]
fn test_bounded_config_signals_exhaustion() {
    let config = AllocConfig::from_json(r#"{ "max_vertices": 2, "max_arcs": 2 }"#).unwrap();
    GhostToken::new(|token| {
        let mut res = PoolResources::with_config(&token, config);
        let mut list = VertexList::new();
        ensure_edge(&mut res, &mut list, 0, 1).unwrap();

        let err = ensure_edge(&mut res, &mut list, 1, 0).map(|_| ());
        assert_eq!(err, Ok(()), "existing edge needs no allocation");

        let err = ensure_vertex(&mut res, &mut list, 2).unwrap_err();
        assert_eq!(
            err,
            AllocError::Exhausted {
                context: AllocContext::Vertex,
                limit: 2
            }
        );

        let zero = ensure_vertex(&mut res, &mut list, 0).unwrap();
        let one = ensure_vertex(&mut res, &mut list, 1).unwrap();
        let err = halfedge::graph::ops::create_edge(&mut res, zero, one).unwrap_err();
        assert_eq!(err.context(), AllocContext::Arc);
        assert_eq!(list.len(&res), 2);
        assert_eq!(res.edge_count(), 1);
    });
}

#[test]
fn test_released_pair_slots_are_reused() {
    GhostToken::new(|token| {
        let mut res = PoolResources::new(&token);
        let mut list = VertexList::new();
        ensure_edge(&mut res, &mut list, 1, 2).unwrap();
        let before = res.arc_slot_bound();

        let one = ensure_vertex(&mut res, &mut list, 1).unwrap();
        let two = ensure_vertex(&mut res, &mut list, 2).unwrap();
        assert!(remove_edge(&mut res, one, two));
        assert!(find_edge_by_vid(&res, &list, 1, 2).is_none());

        ensure_edge(&mut res, &mut list, 2, 1).unwrap();
        assert_eq!(res.arc_slot_bound(), before);
    });
}

#[test]
fn test_copy_into_custom_manager() {
    GhostToken::new(|src_token| {
        let mut src = PoolResources::new(&src_token);
        let mut list = VertexList::new();
        for (a, b) in [(1, 2), (3, 4), (4, 5)] {
            ensure_edge(&mut src, &mut list, a, b).unwrap();
        }

        GhostToken::new(|dst_token| {
            let mut dst = CountingResources::new(&dst_token);
            let mut copy = VertexList::new();
            copy_graph(&src, &list, &mut dst, &mut copy).unwrap();
            assert_eq!(dst.vertex_allocs, 5);
            assert_eq!(dst.edge_allocs, 3);
            assert!(find_edge_by_vid(&dst, &copy, 5, 4).is_some());
            assert!(find_edge_by_vid(&dst, &copy, 1, 5).is_none());
        });
    });
}

//! Resource managers: injected allocation strategy for vertices and edges.
//!
//! Every operation that creates or destroys graph storage takes a
//! [`ResourceManager`]. Traversals only read through it. Swapping the storage
//! strategy (free-list pool, bump arena, or a caller's own implementation)
//! therefore never touches algorithm code.
//!
//! [`GraphResources`] is the stock manager: an opaque pair of allocation
//! contexts, one [`SlotAlloc`] for vertex records and one for arcs.

use super::edge::{ArcIdx, EdgePair, HalfEdge};
use super::vertex::{Vertex, VertexIdx};
use crate::alloc::{SlotAlloc, SlotArena, SlotPool};
use crate::config::AllocConfig;
use crate::error::{AllocContext, AllocError};
use crate::token::{Brand, GhostToken};

/// Allocation and storage access for one branded graph scope.
///
/// # Contract
/// - `alloc_vertex` returns a vertex with an empty adjacency list, no list
///   link and identity zero.
/// - `alloc_edge(u, v)` returns two unlinked arcs, `forward` pointing at `v`
///   and `reverse` pointing at `u`, each recorded as the other's sibling.
///   The pairing must hold until the pair is released.
/// - `release_edge(a)` releases `a` and its sibling together.
/// - Accessors panic on a handle that does not name live storage.
pub trait ResourceManager<'brand> {
    /// Allocates an empty vertex.
    ///
    /// # Errors
    /// Returns [`AllocError`] if the vertex context is exhausted.
    fn alloc_vertex(&mut self) -> Result<VertexIdx<'brand>, AllocError>;

    /// Returns a vertex's storage. Its arcs must already be released.
    fn release_vertex(&mut self, v: VertexIdx<'brand>);

    /// Allocates a sibling pair of arcs between `u` and `v`.
    ///
    /// # Errors
    /// Returns [`AllocError`] if the arc context cannot hold two more arcs.
    /// Nothing is allocated in that case.
    fn alloc_edge(
        &mut self,
        u: VertexIdx<'brand>,
        v: VertexIdx<'brand>,
    ) -> Result<EdgePair<'brand>, AllocError>;

    /// Returns the storage of `arc` and its sibling. Both must already be
    /// unlinked from their adjacency lists.
    fn release_edge(&mut self, arc: ArcIdx<'brand>);

    /// Shared access to a vertex.
    fn vertex(&self, v: VertexIdx<'brand>) -> &Vertex<'brand>;

    /// Mutable access to a vertex.
    fn vertex_mut(&mut self, v: VertexIdx<'brand>) -> &mut Vertex<'brand>;

    /// Shared access to an arc.
    fn arc(&self, a: ArcIdx<'brand>) -> &HalfEdge<'brand>;

    /// Mutable access to an arc.
    fn arc_mut(&mut self, a: ArcIdx<'brand>) -> &mut HalfEdge<'brand>;

    /// One past the highest vertex slot index handed out so far.
    fn vertex_slot_bound(&self) -> usize;

    /// One past the highest arc slot index handed out so far.
    fn arc_slot_bound(&self) -> usize;

    /// Live vertices.
    fn vertex_count(&self) -> usize;

    /// Live edge pairs.
    fn edge_count(&self) -> usize;
}

/// The stock resource manager over a vertex context `VA` and arc context `EA`.
#[derive(Debug, Clone)]
pub struct GraphResources<'brand, VA, EA> {
    vertices: VA,
    arcs: EA,
    _brand: Brand<'brand>,
}

/// Manager reusing released slots through free lists.
pub type PoolResources<'brand> =
    GraphResources<'brand, SlotPool<Vertex<'brand>>, SlotPool<HalfEdge<'brand>>>;

/// Manager bump-allocating slots; storage returns on [`GraphResources::reset`].
pub type ArenaResources<'brand> =
    GraphResources<'brand, SlotArena<Vertex<'brand>>, SlotArena<HalfEdge<'brand>>>;

impl<'brand, VA, EA> GraphResources<'brand, VA, EA>
where
    VA: SlotAlloc<Vertex<'brand>>,
    EA: SlotAlloc<HalfEdge<'brand>>,
{
    /// Creates an unbounded manager branded by `token`.
    pub fn new(token: &GhostToken<'brand>) -> Self {
        Self::with_config(token, AllocConfig::default())
    }

    /// Creates a manager sized and capped by `config`.
    pub fn with_config(_token: &GhostToken<'brand>, config: AllocConfig) -> Self {
        Self {
            vertices: VA::with_limits(
                AllocContext::Vertex,
                config.vertex_capacity,
                config.max_vertices,
            ),
            arcs: EA::with_limits(AllocContext::Arc, config.arc_capacity, config.max_arcs),
            _brand: Brand::new(),
        }
    }

    /// The vertex allocation context.
    pub fn vertex_context(&self) -> &VA {
        &self.vertices
    }

    /// The arc allocation context.
    pub fn arc_context(&self) -> &EA {
        &self.arcs
    }
}

impl<'brand> ArenaResources<'brand> {
    /// Drops all storage and rewinds both arenas. Every handle is invalidated.
    pub fn reset(&mut self) {
        self.vertices.reset();
        self.arcs.reset();
    }
}

#[cold]
#[inline(never)]
fn stale_handle(kind: AllocContext, index: usize) -> ! {
    panic!("{kind} handle {index} does not name live storage")
}

impl<'brand, VA, EA> ResourceManager<'brand> for GraphResources<'brand, VA, EA>
where
    VA: SlotAlloc<Vertex<'brand>>,
    EA: SlotAlloc<HalfEdge<'brand>>,
{
    fn alloc_vertex(&mut self) -> Result<VertexIdx<'brand>, AllocError> {
        self.vertices.alloc(Vertex::new()).map(VertexIdx::new)
    }

    fn release_vertex(&mut self, v: VertexIdx<'brand>) {
        if self.vertices.release(v.index()).is_none() {
            stale_handle(AllocContext::Vertex, v.index());
        }
    }

    fn alloc_edge(
        &mut self,
        u: VertexIdx<'brand>,
        v: VertexIdx<'brand>,
    ) -> Result<EdgePair<'brand>, AllocError> {
        self.arcs.ensure_room(2)?;
        // The forward arc's sibling is patched once the reverse slot is known.
        let forward = ArcIdx::new(self.arcs.alloc(HalfEdge::new(v, ArcIdx::new(usize::MAX)))?);
        let reverse = match self.arcs.alloc(HalfEdge::new(u, forward)) {
            Ok(idx) => ArcIdx::new(idx),
            Err(err) => {
                self.arcs.release(forward.index());
                return Err(err);
            }
        };
        self.arc_mut(forward).sibling = reverse;
        Ok(EdgePair { forward, reverse })
    }

    fn release_edge(&mut self, arc: ArcIdx<'brand>) {
        let sibling = self.arc(arc).sibling;
        self.arcs.release(arc.index());
        if sibling != arc {
            self.arcs.release(sibling.index());
        }
    }

    #[inline]
    fn vertex(&self, v: VertexIdx<'brand>) -> &Vertex<'brand> {
        match self.vertices.get(v.index()) {
            Some(vertex) => vertex,
            None => stale_handle(AllocContext::Vertex, v.index()),
        }
    }

    #[inline]
    fn vertex_mut(&mut self, v: VertexIdx<'brand>) -> &mut Vertex<'brand> {
        match self.vertices.get_mut(v.index()) {
            Some(vertex) => vertex,
            None => stale_handle(AllocContext::Vertex, v.index()),
        }
    }

    #[inline]
    fn arc(&self, a: ArcIdx<'brand>) -> &HalfEdge<'brand> {
        match self.arcs.get(a.index()) {
            Some(arc) => arc,
            None => stale_handle(AllocContext::Arc, a.index()),
        }
    }

    #[inline]
    fn arc_mut(&mut self, a: ArcIdx<'brand>) -> &mut HalfEdge<'brand> {
        match self.arcs.get_mut(a.index()) {
            Some(arc) => arc,
            None => stale_handle(AllocContext::Arc, a.index()),
        }
    }

    fn vertex_slot_bound(&self) -> usize {
        self.vertices.slot_bound()
    }

    fn arc_slot_bound(&self) -> usize {
        self.arcs.slot_bound()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.arcs.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::sibling;

    #[test]
    fn test_alloc_edge_pairs_siblings() {
        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let u = res.alloc_vertex().unwrap();
            let v = res.alloc_vertex().unwrap();
            let pair = res.alloc_edge(u, v).unwrap();

            assert_eq!(sibling(&res, pair.forward), pair.reverse);
            assert_eq!(sibling(&res, pair.reverse), pair.forward);
            assert_eq!(res.arc(pair.forward).target(), v);
            assert_eq!(res.arc(pair.reverse).target(), u);
            assert!(res.arc(pair.forward).next().is_none());
            assert_eq!(res.edge_count(), 1);
        });
    }

    #[test]
    fn test_alloc_edge_exhaustion_allocates_nothing() {
        GhostToken::new(|token| {
            let config = AllocConfig::default().bounded(4, 1);
            let mut res = ArenaResources::with_config(&token, config);
            let u = res.alloc_vertex().unwrap();
            let v = res.alloc_vertex().unwrap();
            res.alloc_edge(u, v).unwrap();

            let err = res.alloc_edge(v, u).unwrap_err();
            assert_eq!(err.context(), AllocContext::Arc);
            assert_eq!(res.arc_slot_bound(), 2);
            assert_eq!(res.edge_count(), 1);
        });
    }

    #[test]
    fn test_release_edge_frees_both_arcs() {
        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let u = res.alloc_vertex().unwrap();
            let v = res.alloc_vertex().unwrap();
            let pair = res.alloc_edge(u, v).unwrap();
            res.release_edge(pair.reverse);
            assert_eq!(res.edge_count(), 0);
            assert_eq!(res.arc_context().free_slots(), 2);

            // Reused slots come back paired again.
            let again = res.alloc_edge(v, u).unwrap();
            assert_eq!(sibling(&res, again.forward), again.reverse);
        });
    }

    #[test]
    #[should_panic(expected = "does not name live storage")]
    fn test_stale_vertex_handle_panics() {
        GhostToken::new(|token| {
            let mut res = PoolResources::new(&token);
            let v = res.alloc_vertex().unwrap();
            res.release_vertex(v);
            let _ = res.vertex(v);
        });
    }

    #[test]
    fn test_arena_reset_rewinds() {
        GhostToken::new(|token| {
            let mut res = ArenaResources::new(&token);
            let u = res.alloc_vertex().unwrap();
            res.alloc_edge(u, u).unwrap();
            res.reset();
            assert_eq!(res.vertex_count(), 0);
            assert_eq!(res.vertex_slot_bound(), 0);
            assert_eq!(res.alloc_vertex().unwrap().index(), 0);
        });
    }
}

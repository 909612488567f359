//! Construction and lookup helpers over a resource manager.
//!
//! Every helper that creates or destroys storage goes through the supplied
//! [`ResourceManager`], so the same code runs over pools, arenas or a caller's
//! own manager. Lookups scan linearly and return `None` for "not found";
//! allocation failure is an `Err` and never leaves a placeholder behind.
//!
//! # Performance
//! - `create_vertex`, `create_edge`: O(1)
//! - `find_vertex`, `ensure_vertex`: O(V)
//! - `find_edge`: O(deg u)
//! - `find_edge_by_vid`, `ensure_edge`: O(V + deg)
//! - `remove_edge`: O(deg u + deg v)
//! - `copy_graph`, `release_graph`: O(V + E)

use super::edge::{ArcIdx, Arcs, EdgePair};
use super::resources::ResourceManager;
use super::vertex::{VertexIdx, VertexList};
use crate::error::AllocError;

/// Allocates a vertex with identity `vid`. The vertex is not linked into any list.
///
/// # Errors
/// Returns [`AllocError`] if the vertex context is exhausted.
pub fn create_vertex<'brand, R>(res: &mut R, vid: usize) -> Result<VertexIdx<'brand>, AllocError>
where
    R: ResourceManager<'brand> + ?Sized,
{
    let v = res.alloc_vertex()?;
    res.vertex_mut(v).vid = vid;
    Ok(v)
}

/// Returns the first vertex on `list` whose identity is `vid`.
pub fn find_vertex<'brand, R>(res: &R, list: &VertexList<'brand>, vid: usize) -> Option<VertexIdx<'brand>>
where
    R: ResourceManager<'brand> + ?Sized,
{
    list.iter(res).find(|&v| res.vertex(v).vid == vid)
}

/// Connects `u` and `v` with a new edge pair.
///
/// The forward arc (pointing at `v`) becomes the head of `u`'s adjacency list
/// and the reverse arc (pointing at `u`) the head of `v`'s. A self-loop puts
/// both arcs on `u`'s list.
///
/// # Errors
/// Returns [`AllocError`] if the arc context cannot hold the pair; neither
/// adjacency list is touched in that case.
pub fn create_edge<'brand, R>(
    res: &mut R,
    u: VertexIdx<'brand>,
    v: VertexIdx<'brand>,
) -> Result<EdgePair<'brand>, AllocError>
where
    R: ResourceManager<'brand> + ?Sized,
{
    let pair = res.alloc_edge(u, v)?;
    push_arc(res, u, pair.forward);
    push_arc(res, v, pair.reverse);
    Ok(pair)
}

#[inline]
fn push_arc<'brand, R>(res: &mut R, owner: VertexIdx<'brand>, arc: ArcIdx<'brand>)
where
    R: ResourceManager<'brand> + ?Sized,
{
    let head = res.vertex(owner).arcs;
    res.arc_mut(arc).next = head;
    res.vertex_mut(owner).arcs = Some(arc);
}

/// Iterates the arcs leaving `v`, most recently added first.
pub fn arcs<'a, 'brand, R>(res: &'a R, v: VertexIdx<'brand>) -> Arcs<'a, 'brand, R>
where
    R: ResourceManager<'brand> + ?Sized,
{
    Arcs::new(res, res.vertex(v).arcs)
}

/// Number of arcs leaving `v`. A self-loop counts twice.
pub fn degree<'brand, R>(res: &R, v: VertexIdx<'brand>) -> usize
where
    R: ResourceManager<'brand> + ?Sized,
{
    arcs(res, v).count()
}

/// Returns the first arc on `u`'s adjacency list pointing at `v`.
pub fn find_edge<'brand, R>(res: &R, u: VertexIdx<'brand>, v: VertexIdx<'brand>) -> Option<ArcIdx<'brand>>
where
    R: ResourceManager<'brand> + ?Sized,
{
    arcs(res, u).find(|&a| res.arc(a).target == v)
}

/// Looks up the arc from the vertex identified by `vid_a` to the one
/// identified by `vid_b`.
pub fn find_edge_by_vid<'brand, R>(
    res: &R,
    list: &VertexList<'brand>,
    vid_a: usize,
    vid_b: usize,
) -> Option<ArcIdx<'brand>>
where
    R: ResourceManager<'brand> + ?Sized,
{
    let u = find_vertex(res, list, vid_a)?;
    arcs(res, u).find(|&a| res.vertex(res.arc(a).target).vid == vid_b)
}

/// Returns the vertex identified by `vid`, creating it at the tail of `list`
/// if it is not there yet.
///
/// # Errors
/// Returns [`AllocError`] if the vertex has to be created and cannot be.
pub fn ensure_vertex<'brand, R>(
    res: &mut R,
    list: &mut VertexList<'brand>,
    vid: usize,
) -> Result<VertexIdx<'brand>, AllocError>
where
    R: ResourceManager<'brand> + ?Sized,
{
    let mut tail = None;
    for v in list.iter(&*res) {
        if res.vertex(v).vid == vid {
            return Ok(v);
        }
        tail = Some(v);
    }
    let v = create_vertex(res, vid)?;
    list.link_after(res, tail, v);
    Ok(v)
}

/// Returns the arc from `vid_a` to `vid_b`, creating either vertex and the
/// edge as needed.
///
/// # Errors
/// Returns [`AllocError`] if any missing piece cannot be allocated. Vertices
/// created before the failure stay on the list.
pub fn ensure_edge<'brand, R>(
    res: &mut R,
    list: &mut VertexList<'brand>,
    vid_a: usize,
    vid_b: usize,
) -> Result<ArcIdx<'brand>, AllocError>
where
    R: ResourceManager<'brand> + ?Sized,
{
    let u = ensure_vertex(res, list, vid_a)?;
    let v = ensure_vertex(res, list, vid_b)?;
    if let Some(a) = find_edge(&*res, u, v) {
        return Ok(a);
    }
    Ok(create_edge(res, u, v)?.forward)
}

/// Unlinks `arc` from `owner`'s adjacency list. Returns false if absent.
fn unlink_arc<'brand, R>(res: &mut R, owner: VertexIdx<'brand>, arc: ArcIdx<'brand>) -> bool
where
    R: ResourceManager<'brand> + ?Sized,
{
    let after = res.arc(arc).next;
    if res.vertex(owner).arcs == Some(arc) {
        res.vertex_mut(owner).arcs = after;
        return true;
    }
    let Some(prev) = arcs(&*res, owner).find(|&a| res.arc(a).next == Some(arc)) else {
        return false;
    };
    res.arc_mut(prev).next = after;
    true
}

/// Removes one edge between `u` and `v` and releases its pair.
///
/// Returns false if `u` has no arc to `v`.
pub fn remove_edge<'brand, R>(res: &mut R, u: VertexIdx<'brand>, v: VertexIdx<'brand>) -> bool
where
    R: ResourceManager<'brand> + ?Sized,
{
    let Some(arc) = find_edge(&*res, u, v) else {
        return false;
    };
    let sibling = res.arc(arc).sibling;
    unlink_arc(res, u, arc);
    unlink_arc(res, v, sibling);
    res.release_edge(arc);
    true
}

/// Releases every edge pair and vertex reachable through `list`, leaving it empty.
///
/// Each pair is released once, from whichever of its arcs sits in the lower slot.
pub fn release_graph<'brand, R>(res: &mut R, list: &mut VertexList<'brand>)
where
    R: ResourceManager<'brand> + ?Sized,
{
    let mut pairs = Vec::new();
    for v in list.iter(&*res) {
        pairs.extend(arcs(&*res, v).filter(|&a| a.index() < res.arc(a).sibling.index()));
    }
    for arc in pairs {
        res.release_edge(arc);
    }

    let mut cursor = list.head();
    while let Some(v) = cursor {
        cursor = res.vertex(v).next;
        res.release_vertex(v);
    }
    list.clear();
}

/// Deep-copies the graph on `src_list` into `dst`, appending the copies to
/// `dst_list`.
///
/// Identities, list order and adjacency order are preserved. The destination
/// may use a different brand and allocation strategy from the source.
///
/// # Errors
/// Returns [`AllocError`] if `dst` runs out of storage. Everything allocated
/// for the partial copy is released again and `dst_list` is left as it was.
pub fn copy_graph<'src, 'dst, S, D>(
    src: &S,
    src_list: &VertexList<'src>,
    dst: &mut D,
    dst_list: &mut VertexList<'dst>,
) -> Result<(), AllocError>
where
    S: ResourceManager<'src> + ?Sized,
    D: ResourceManager<'dst> + ?Sized,
{
    let anchor = dst_list.tail(&*dst);
    let mut copy = GraphCopy {
        vertices: vec![None; src.vertex_slot_bound()],
        arcs: vec![None; src.arc_slot_bound()],
        created: Vec::new(),
    };

    match copy.fill(src, src_list, dst, dst_list, anchor) {
        Ok(()) => Ok(()),
        Err(err) => {
            copy.rollback(dst, dst_list, anchor);
            Err(err)
        }
    }
}

/// Source-slot to destination-handle maps for one `copy_graph` call.
struct GraphCopy<'dst> {
    vertices: Vec<Option<VertexIdx<'dst>>>,
    arcs: Vec<Option<ArcIdx<'dst>>>,
    created: Vec<VertexIdx<'dst>>,
}

impl<'dst> GraphCopy<'dst> {
    fn fill<'src, S, D>(
        &mut self,
        src: &S,
        src_list: &VertexList<'src>,
        dst: &mut D,
        dst_list: &mut VertexList<'dst>,
        anchor: Option<VertexIdx<'dst>>,
    ) -> Result<(), AllocError>
    where
        S: ResourceManager<'src> + ?Sized,
        D: ResourceManager<'dst> + ?Sized,
    {
        let mut tail = anchor;
        for v in src_list.iter(src) {
            let copy = create_vertex(dst, src.vertex(v).vid)?;
            dst_list.link_after(dst, tail, copy);
            self.created.push(copy);
            self.vertices[v.index()] = Some(copy);
            tail = Some(copy);
        }

        // Allocate each pair once; arcs are linked afterwards so adjacency
        // order matches the source exactly.
        for v in src_list.iter(src) {
            for a in arcs(src, v) {
                if self.arcs[a.index()].is_some() {
                    continue;
                }
                let arc = src.arc(a);
                let (Some(owner), Some(target)) =
                    (self.vertices[v.index()], self.vertices[arc.target.index()])
                else {
                    continue;
                };
                let pair = dst.alloc_edge(owner, target)?;
                self.arcs[a.index()] = Some(pair.forward);
                self.arcs[arc.sibling.index()] = Some(pair.reverse);
            }
        }

        for v in src_list.iter(src) {
            let Some(owner) = self.vertices[v.index()] else {
                continue;
            };
            let head = src.vertex(v).arcs.and_then(|a| self.arcs[a.index()]);
            dst.vertex_mut(owner).arcs = head;
            for a in arcs(src, v) {
                let Some(copy) = self.arcs[a.index()] else {
                    continue;
                };
                let next = src.arc(a).next.and_then(|n| self.arcs[n.index()]);
                dst.arc_mut(copy).next = next;
            }
        }
        Ok(())
    }

    fn rollback<D>(&self, dst: &mut D, dst_list: &mut VertexList<'dst>, anchor: Option<VertexIdx<'dst>>)
    where
        D: ResourceManager<'dst> + ?Sized,
    {
        // Pairs were recorded under both arcs; read every sibling before
        // releasing anything.
        let pairs: Vec<_> = self
            .arcs
            .iter()
            .flatten()
            .copied()
            .filter(|&a| a.index() < dst.arc(a).sibling.index())
            .collect();
        for arc in pairs {
            dst.release_edge(arc);
        }
        for &v in &self.created {
            dst.release_vertex(v);
        }
        match anchor {
            Some(tail) => dst.vertex_mut(tail).next = None,
            None => dst_list.clear(),
        }
    }
}

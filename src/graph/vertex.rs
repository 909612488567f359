//! Vertices and the caller-owned vertex list.
//!
//! A vertex record holds the head of its adjacency list, the link to the next
//! vertex in the enclosing list, and its numeric identity (`vid`). The list
//! itself is just a head handle owned by the caller; the links live in the
//! vertex records inside the resource manager's storage.

use super::edge::ArcIdx;
use super::resources::ResourceManager;
use crate::token::Brand;

/// A strongly-typed handle to a vertex slot in a branded graph scope.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIdx<'brand>(usize, Brand<'brand>);

impl<'brand> VertexIdx<'brand> {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx, Brand::new())
    }

    /// Slot index inside the vertex context.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Vertex record.
#[derive(Debug, Clone, Default)]
pub struct Vertex<'brand> {
    pub(crate) arcs: Option<ArcIdx<'brand>>,
    pub(crate) next: Option<VertexIdx<'brand>>,
    pub(crate) vid: usize,
}

impl<'brand> Vertex<'brand> {
    /// Fresh storage: empty adjacency list, unlinked, identity zero.
    pub const fn new() -> Self {
        Self {
            arcs: None,
            next: None,
            vid: 0,
        }
    }

    /// Numeric identity.
    #[inline]
    pub fn vid(&self) -> usize {
        self.vid
    }

    /// Head of the adjacency list.
    #[inline]
    pub fn first_arc(&self) -> Option<ArcIdx<'brand>> {
        self.arcs
    }

    /// Next vertex in the enclosing list.
    #[inline]
    pub fn next(&self) -> Option<VertexIdx<'brand>> {
        self.next
    }

    /// Returns true if no arcs leave this vertex.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.arcs.is_none()
    }
}

/// Head of a singly linked, caller-owned list of vertices.
///
/// The list owns nothing: it names the first vertex, and each vertex names
/// its successor. Lists are cheap to copy around but only meaningful against
/// the manager whose storage holds the linked vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexList<'brand> {
    head: Option<VertexIdx<'brand>>,
}

impl<'brand> VertexList<'brand> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// First vertex, if any.
    #[inline]
    pub fn head(&self) -> Option<VertexIdx<'brand>> {
        self.head
    }

    /// Returns true if the list has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Links `v` in front of the current head.
    ///
    /// `v` must not already be on a list.
    pub fn push_front<R>(&mut self, res: &mut R, v: VertexIdx<'brand>)
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        res.vertex_mut(v).next = self.head;
        self.head = Some(v);
    }

    /// Links `v` after the last vertex. O(n).
    ///
    /// `v` must not already be on a list.
    pub fn push_back<R>(&mut self, res: &mut R, v: VertexIdx<'brand>)
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        let tail = self.tail(&*res);
        self.link_after(res, tail, v);
    }

    /// Last vertex, if any. O(n).
    pub fn tail<R>(&self, res: &R) -> Option<VertexIdx<'brand>>
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        self.iter(res).last()
    }

    /// Links `v` after `prev`, or as the head when `prev` is `None`.
    pub(crate) fn link_after<R>(
        &mut self,
        res: &mut R,
        prev: Option<VertexIdx<'brand>>,
        v: VertexIdx<'brand>,
    ) where
        R: ResourceManager<'brand> + ?Sized,
    {
        match prev {
            Some(p) => {
                let after = res.vertex(p).next;
                res.vertex_mut(v).next = after;
                res.vertex_mut(p).next = Some(v);
            }
            None => self.push_front(res, v),
        }
    }

    /// Forgets every vertex without touching storage.
    pub(crate) fn clear(&mut self) {
        self.head = None;
    }

    /// Iterates the list in link order.
    pub fn iter<'a, R>(&self, res: &'a R) -> Vertices<'a, 'brand, R>
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        Vertices {
            res,
            cursor: self.head,
        }
    }

    /// Number of vertices on the list. O(n).
    pub fn len<R>(&self, res: &R) -> usize
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        self.iter(res).count()
    }
}

/// Iterator over a [`VertexList`].
pub struct Vertices<'a, 'brand, R: ?Sized> {
    res: &'a R,
    cursor: Option<VertexIdx<'brand>>,
}

impl<'a, 'brand, R> Iterator for Vertices<'a, 'brand, R>
where
    R: ResourceManager<'brand> + ?Sized,
{
    type Item = VertexIdx<'brand>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let v = self.cursor?;
        self.cursor = self.res.vertex(v).next;
        Some(v)
    }
}

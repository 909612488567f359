//! Paired half-edges.
//!
//! One undirected connection is stored as two arcs allocated together. Each
//! arc points at the neighbouring vertex, links to the next arc in its owner's
//! adjacency list, and stores its sibling: the companion arc running the other
//! way. The sibling is written once, when the manager allocates the pair, so
//! `sibling(sibling(a)) == a` holds for as long as the pair stays allocated.
//!
//! ```text
//!   u.arcs -> [forward: target v, sibling = reverse] -> ...
//!   v.arcs -> [reverse: target u, sibling = forward] -> ...
//! ```

use super::resources::ResourceManager;
use super::vertex::VertexIdx;
use crate::token::Brand;

/// A strongly-typed handle to an arc slot in a branded graph scope.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcIdx<'brand>(usize, Brand<'brand>);

impl<'brand> ArcIdx<'brand> {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx, Brand::new())
    }

    /// Slot index inside the arc context.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One direction of a connection.
#[derive(Debug, Clone)]
pub struct HalfEdge<'brand> {
    pub(crate) target: VertexIdx<'brand>,
    pub(crate) next: Option<ArcIdx<'brand>>,
    pub(crate) sibling: ArcIdx<'brand>,
}

impl<'brand> HalfEdge<'brand> {
    /// Unlinked arc pointing at `target`, paired with `sibling`.
    #[inline]
    pub(crate) fn new(target: VertexIdx<'brand>, sibling: ArcIdx<'brand>) -> Self {
        Self {
            target,
            next: None,
            sibling,
        }
    }

    /// The neighbouring vertex this arc points at.
    #[inline]
    pub fn target(&self) -> VertexIdx<'brand> {
        self.target
    }

    /// Next arc in the owner's adjacency list.
    #[inline]
    pub fn next(&self) -> Option<ArcIdx<'brand>> {
        self.next
    }

    /// The companion arc of this arc's pair.
    #[inline]
    pub fn sibling(&self) -> ArcIdx<'brand> {
        self.sibling
    }
}

/// The two arcs of one undirected connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgePair<'brand> {
    /// Arc owned by the first endpoint, pointing at the second.
    pub forward: ArcIdx<'brand>,
    /// Arc owned by the second endpoint, pointing at the first.
    pub reverse: ArcIdx<'brand>,
}

impl<'brand> EdgePair<'brand> {
    /// Returns the arc of the pair that is not `arc`.
    ///
    /// `arc` must be one of the two.
    #[inline]
    pub fn other(&self, arc: ArcIdx<'brand>) -> ArcIdx<'brand> {
        if arc == self.forward {
            self.reverse
        } else {
            self.forward
        }
    }
}

/// Returns the sibling of `arc` in O(1).
///
/// # Panics
/// Panics if `arc` does not name a live arc in `res`.
#[inline]
pub fn sibling<'brand, R>(res: &R, arc: ArcIdx<'brand>) -> ArcIdx<'brand>
where
    R: ResourceManager<'brand> + ?Sized,
{
    res.arc(arc).sibling
}

/// Returns the vertex `arc` points at.
///
/// # Panics
/// Panics if `arc` does not name a live arc in `res`.
#[inline]
pub fn target<'brand, R>(res: &R, arc: ArcIdx<'brand>) -> VertexIdx<'brand>
where
    R: ResourceManager<'brand> + ?Sized,
{
    res.arc(arc).target
}

/// Iterator over one vertex's adjacency list, head first.
pub struct Arcs<'a, 'brand, R: ?Sized> {
    res: &'a R,
    cursor: Option<ArcIdx<'brand>>,
}

impl<'a, 'brand, R> Arcs<'a, 'brand, R>
where
    R: ResourceManager<'brand> + ?Sized,
{
    pub(crate) fn new(res: &'a R, head: Option<ArcIdx<'brand>>) -> Self {
        Self { res, cursor: head }
    }
}

impl<'a, 'brand, R> Iterator for Arcs<'a, 'brand, R>
where
    R: ResourceManager<'brand> + ?Sized,
{
    type Item = ArcIdx<'brand>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.cursor?;
        self.cursor = self.res.arc(a).next;
        Some(a)
    }
}

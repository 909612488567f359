//! `GhostToken` - the scope brand for graph storage.
//!
//! A `GhostToken<'brand>` is a zero-sized value that only exists inside the
//! closure passed to [`GhostToken::new`]. Each call introduces a fresh,
//! invariant `'brand` lifetime, and every handle produced by storage created
//! from that token (`VertexIdx<'brand>`, `ArcIdx<'brand>`) carries it.
//!
//! ## Core invariant (separation)
//!
//! Two calls to `GhostToken::new` can never unify their brands, so a vertex
//! handle minted by one graph scope cannot be looked up in the storage of
//! another. Inside a single scope several managers may share a brand; the
//! "handle belongs to this storage" precondition is then the caller's to keep.

use core::marker::PhantomData;

/// Marker that is invariant in `'brand`.
///
/// Handles embed it so the compiler cannot shrink one graph scope's brand
/// into another's.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brand<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl<'brand> Brand<'brand> {
    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// A zero-sized token naming one branded graph scope.
///
/// The token is intentionally **not** `Copy`/`Clone`: storage constructors
/// borrow it to pick up the brand, and the brand cannot be forged outside of
/// [`GhostToken::new`].
#[derive(Debug)]
pub struct GhostToken<'brand>(Brand<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use halfedge::{GhostToken, PoolResources, VertexList};
    /// use halfedge::graph::ops::ensure_vertex;
    ///
    /// let count = GhostToken::new(|token| {
    ///     let mut res = PoolResources::new(&token);
    ///     let mut list = VertexList::new();
    ///     ensure_vertex(&mut res, &mut list, 7).unwrap();
    ///     list.len(&res)
    /// });
    /// assert_eq!(count, 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(Brand::new()))
    }

    /// Returns the brand marker carried by this token.
    #[inline(always)]
    pub const fn brand(&self) -> Brand<'brand> {
        Brand::new()
    }
}

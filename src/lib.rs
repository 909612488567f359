//! # `halfedge` - Paired Half-Edge Graphs
//!
//! A small graph toolkit built around three pieces:
//!
//! - **Paired half-edges**: one undirected connection is two arcs allocated
//!   together. Each arc records its sibling when the pair is allocated, so the
//!   opposite direction of any arc is one lookup away.
//! - **Injected storage**: every allocating operation takes a
//!   [`ResourceManager`]. The stock [`GraphResources`] pairs two slot
//!   allocators (free-list [`SlotPool`] or bump [`SlotArena`]) and can be
//!   capped through [`AllocConfig`]; exhaustion surfaces as [`AllocError`].
//! - **Stack-based component discovery**: [`ComponentDiscovery`] partitions a
//!   vertex list into connected components without recursion, reporting one
//!   representative per component through a cancellable callback.
//!
//! ## Branding
//!
//! Handles carry the `'brand` of the [`GhostToken`] scope that created their
//! storage. Handles from one scope cannot be handed to storage from another,
//! and [`graph::ops::copy_graph`] moves a graph between brands.
//!
//! ## Example
//!
//! ```rust
//! use core::ops::ControlFlow;
//! use halfedge::{ComponentDiscovery, GhostToken, PoolResources, VertexList};
//! use halfedge::graph::ops::ensure_edge;
//!
//! GhostToken::new(|token| {
//!     let mut res = PoolResources::new(&token);
//!     let mut list = VertexList::new();
//!     ensure_edge(&mut res, &mut list, 1, 2).unwrap();
//!     ensure_edge(&mut res, &mut list, 3, 4).unwrap();
//!
//!     let mut engine = ComponentDiscovery::new();
//!     let count = engine.run(&res, &list, |_| ControlFlow::Continue(()));
//!     assert_eq!(count, 2);
//!     assert_eq!(engine.component_sizes(), &[2, 2]);
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod graph;
pub mod token;

pub use alloc::{SlotAlloc, SlotArena, SlotPool};
pub use config::AllocConfig;
pub use error::{AllocContext, AllocError};
pub use graph::{
    discover_components, sibling, ArcIdx, ArenaResources, ComponentDiscovery, EdgePair,
    GraphResources, HalfEdge, Mark, PoolResources, ResourceManager, Vertex, VertexIdx, VertexList,
};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);

    // Handles are a bare slot index.
    assert!(mem::size_of::<VertexIdx<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<ArcIdx<'static>>() == mem::size_of::<usize>());

    // An arc is target + next link + sibling; no per-arc back-pointer beyond
    // the sibling slot.
    assert!(mem::size_of::<HalfEdge<'static>>() <= mem::size_of::<usize>() * 4);
};

//! Connected-component discovery by iterative depth-first search.
//!
//! [`ComponentDiscovery`] walks a [`VertexList`] in link order and partitions
//! its vertices into connected components, treating every arc pair as one
//! undirected connection. One representative per component (the first vertex
//! of the component met in list order) is reported through a callback, in
//! discovery order.
//!
//! # Run state
//!
//! Visited marks and the traversal stack belong to the engine, not to the
//! vertices: each run starts from a fresh mark table sized to the manager's
//! vertex slots, and the depth-first walk keeps an explicit stack of adjacency
//! cursors. Nothing on the vertex records is written, so the same storage can
//! be traversed by independent engines one after another.
//!
//! # Cancellation
//!
//! The callback returns [`ControlFlow`]. `Break` is honoured once per
//! component, at the moment it is reported: a singleton stops the run
//! immediately, and a larger component stops before its interior is walked.
//! The count returned always includes the component whose report cancelled.
//!
//! # Performance
//! - Time: O(V + E)
//! - Space: O(V) for marks plus O(depth) for the stack; no recursion.

use core::num::NonZeroUsize;
use core::ops::ControlFlow;

use super::edge::ArcIdx;
use super::resources::ResourceManager;
use super::vertex::{VertexIdx, VertexList};

/// Per-run state of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    /// Not reached by this run.
    #[default]
    Unvisited,
    /// Reported as a component of its own because it has no arcs.
    Singleton {
        /// Component index, counting from zero in discovery order.
        component: usize,
    },
    /// Reached by the depth-first walk.
    Walked {
        /// Component index, counting from zero in discovery order.
        component: usize,
        /// Discovery order across the whole run, starting at one.
        order: NonZeroUsize,
    },
}

impl Mark {
    /// Returns true if this run has not reached the vertex.
    #[inline]
    pub fn is_unvisited(self) -> bool {
        matches!(self, Mark::Unvisited)
    }

    /// Component index, if the vertex was reached.
    #[inline]
    pub fn component(self) -> Option<usize> {
        match self {
            Mark::Unvisited => None,
            Mark::Singleton { component } | Mark::Walked { component, .. } => Some(component),
        }
    }

    /// Discovery order, for vertices reached by the depth-first walk.
    #[inline]
    pub fn order(self) -> Option<NonZeroUsize> {
        match self {
            Mark::Walked { order, .. } => Some(order),
            _ => None,
        }
    }
}

/// Reusable component-discovery engine.
///
/// Buffers survive between runs to avoid reallocating; their contents do not.
/// Inspection methods describe the most recent run only.
#[derive(Debug, Clone, Default)]
pub struct ComponentDiscovery<'brand> {
    marks: Vec<Mark>,
    /// Adjacency cursor of every vertex on the current walk path, root first.
    stack: Vec<Option<ArcIdx<'brand>>>,
    sizes: Vec<usize>,
    order: usize,
    cancelled: bool,
}

impl<'brand> ComponentDiscovery<'brand> {
    /// Creates an engine with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers the components of `list`, calling `report` once per
    /// component with its representative. Returns the number of components
    /// found, including the one whose report returned `Break`.
    ///
    /// The traversal is not reentrant: `report` cannot reach back into this
    /// engine while the run is active.
    pub fn run<R, F>(&mut self, res: &R, list: &VertexList<'brand>, mut report: F) -> usize
    where
        R: ResourceManager<'brand> + ?Sized,
        F: FnMut(VertexIdx<'brand>) -> ControlFlow<()>,
    {
        self.reset(res.vertex_slot_bound());

        let mut cursor = list.head();
        while let Some(v) = cursor {
            let vertex = res.vertex(v);
            cursor = vertex.next;

            if !self.marks[v.index()].is_unvisited() {
                continue;
            }

            let component = self.sizes.len();
            self.sizes.push(1);

            if vertex.is_isolated() {
                self.marks[v.index()] = Mark::Singleton { component };
                #[cfg(feature = "tracing")]
                tracing::trace!(component, vertex = v.index(), "singleton component");
                if report(v).is_break() {
                    return self.finish(true);
                }
                continue;
            }

            self.visit(v, component);
            #[cfg(feature = "tracing")]
            tracing::trace!(component, root = v.index(), "component root");
            if report(v).is_break() {
                return self.finish(true);
            }
            self.walk(res, vertex.arcs, component);
        }

        self.finish(false)
    }

    fn reset(&mut self, slots: usize) {
        self.marks.clear();
        self.marks.resize(slots, Mark::Unvisited);
        self.stack.clear();
        self.sizes.clear();
        self.order = 0;
        self.cancelled = false;
    }

    #[inline]
    fn visit(&mut self, v: VertexIdx<'brand>, component: usize) {
        self.order += 1;
        let order = NonZeroUsize::new(self.order).unwrap_or(NonZeroUsize::MIN);
        self.marks[v.index()] = Mark::Walked { component, order };
    }

    /// Depth-first walk of the component whose root's adjacency list starts at `first`.
    fn walk<R>(&mut self, res: &R, first: Option<ArcIdx<'brand>>, component: usize)
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        self.stack.push(first);
        while let Some(top) = self.stack.last_mut() {
            let Some(a) = *top else {
                // Adjacency exhausted: resume the parent where it left off.
                self.stack.pop();
                continue;
            };
            let arc = res.arc(a);
            *top = arc.next;

            let w = arc.target;
            if self.marks[w.index()].is_unvisited() {
                self.visit(w, component);
                self.sizes[component] += 1;
                self.stack.push(res.vertex(w).arcs);
            }
        }
    }

    fn finish(&mut self, cancelled: bool) -> usize {
        self.cancelled = cancelled;
        self.stack.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            components = self.sizes.len(),
            visited = self.order,
            cancelled,
            "component discovery finished"
        );
        self.sizes.len()
    }

    /// Per-run state of `v`. Vertices unknown to the last run are unvisited.
    #[inline]
    pub fn mark(&self, v: VertexIdx<'brand>) -> Mark {
        self.marks.get(v.index()).copied().unwrap_or_default()
    }

    /// Discovery order of `v`, if the last run walked it.
    pub fn discovery_order(&self, v: VertexIdx<'brand>) -> Option<NonZeroUsize> {
        self.mark(v).order()
    }

    /// Component index of `v`, if the last run reached it.
    pub fn component_of(&self, v: VertexIdx<'brand>) -> Option<usize> {
        self.mark(v).component()
    }

    /// Vertex count of each component found by the last run, in discovery order.
    ///
    /// A component whose report cancelled the run counts only its representative.
    pub fn component_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of components found by the last run.
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true if the last run was stopped by its callback.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Members of `component` in list order.
    pub fn members<'a, R>(
        &'a self,
        res: &'a R,
        list: &VertexList<'brand>,
        component: usize,
    ) -> impl Iterator<Item = VertexIdx<'brand>> + 'a
    where
        R: ResourceManager<'brand> + ?Sized,
    {
        list.iter(res)
            .filter(move |&v| self.component_of(v) == Some(component))
    }
}

/// One-shot component discovery. See [`ComponentDiscovery::run`].
///
/// # Example
///
/// ```rust
/// use core::ops::ControlFlow;
/// use halfedge::{discover_components, GhostToken, PoolResources, ResourceManager, VertexList};
/// use halfedge::graph::ops::{ensure_edge, ensure_vertex};
///
/// GhostToken::new(|token| {
///     let mut res = PoolResources::new(&token);
///     let mut list = VertexList::new();
///     ensure_edge(&mut res, &mut list, 1, 2).unwrap();
///     ensure_vertex(&mut res, &mut list, 3).unwrap();
///
///     let mut reps = Vec::new();
///     let count = discover_components(&res, &list, |v| {
///         reps.push(res.vertex(v).vid());
///         ControlFlow::Continue(())
///     });
///     assert_eq!(count, 2);
///     assert_eq!(reps, vec![1, 3]);
/// });
/// ```
pub fn discover_components<'brand, R, F>(res: &R, list: &VertexList<'brand>, report: F) -> usize
where
    R: ResourceManager<'brand> + ?Sized,
    F: FnMut(VertexIdx<'brand>) -> ControlFlow<()>,
{
    ComponentDiscovery::new().run(res, list, report)
}

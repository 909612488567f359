//! Paired half-edge graphs and the algorithms that run over them.
//!
//! Graph storage is organized in layers:
//! - `edge` / `vertex`: the records and their branded handles
//! - `resources`: the injected allocation strategy that owns all records
//! - `ops`: construction, lookup, copy and teardown helpers
//! - `components`: stack-based connected-component discovery

pub mod components;
pub mod edge;
pub mod ops;
pub mod resources;
pub mod vertex;

// Re-export commonly used types from submodules
pub use components::{discover_components, ComponentDiscovery, Mark};
pub use edge::{sibling, ArcIdx, Arcs, EdgePair, HalfEdge};
pub use resources::{ArenaResources, GraphResources, PoolResources, ResourceManager};
pub use vertex::{Vertex, VertexIdx, VertexList, Vertices};

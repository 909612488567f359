//! Allocation settings for graph resource managers.
//!
//! An [`AllocConfig`] sizes the two allocation contexts (vertices and arcs)
//! up front and optionally caps them. Caps are how a bounded manager reports
//! out-of-memory: allocation past the cap yields
//! [`AllocError::Exhausted`](crate::AllocError::Exhausted).

use serde::{Deserialize, Serialize};

/// Capacities and limits for the vertex and arc contexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocConfig {
    /// Initial vertex slots reserved.
    pub vertex_capacity: usize,
    /// Initial arc slots reserved. Each edge pair uses two.
    pub arc_capacity: usize,
    /// Maximum live-or-tombstoned vertex slots, `None` for unbounded.
    pub max_vertices: Option<usize>,
    /// Maximum arc slots, `None` for unbounded.
    pub max_arcs: Option<usize>,
}

impl Default for AllocConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 16,
            arc_capacity: 32,
            max_vertices: None,
            max_arcs: None,
        }
    }
}

impl AllocConfig {
    /// Config reserving room for `vertices` vertices and `edges` edge pairs.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertex_capacity: vertices,
            arc_capacity: edges.saturating_mul(2),
            ..Self::default()
        }
    }

    /// Caps both contexts: at most `vertices` vertex slots and `edges` pairs.
    #[must_use]
    pub fn bounded(mut self, vertices: usize, edges: usize) -> Self {
        self.max_vertices = Some(vertices);
        self.max_arcs = Some(edges.saturating_mul(2));
        self
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_json_partial() {
        let cfg = AllocConfig::from_json(r#"{ "max_vertices": 4 }"#).unwrap();
        assert_eq!(cfg.max_vertices, Some(4));
        assert_eq!(cfg.max_arcs, None);
        assert_eq!(cfg.vertex_capacity, AllocConfig::default().vertex_capacity);
    }

    #[test]
    fn test_config_bounded_counts_arcs_per_pair() {
        let cfg = AllocConfig::with_capacity(10, 5).bounded(3, 2);
        assert_eq!(cfg.arc_capacity, 10);
        assert_eq!(cfg.max_vertices, Some(3));
        assert_eq!(cfg.max_arcs, Some(4));
    }

    #[test]
    fn test_config_rejects_bad_json() {
        assert!(AllocConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let cfg = AllocConfig::with_capacity(2, 2).bounded(8, 8);
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(AllocConfig::from_json(&text).unwrap(), cfg);
    }
}

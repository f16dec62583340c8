//! Graph-level statistics derived from the adjacency spectra.

use serde::Serialize;

use crate::constants::EPSILON;
use crate::graph::ReasoningGraph;
use crate::spectral::von_neumann_entropy;

/// Every graph-level metric at one point in a session, bundled for
/// one-call reporting.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetricsSnapshot {
    pub nodes: usize,
    pub edges: usize,
    pub structural_entropy: f64,
    pub semantic_entropy: f64,
    pub discovery: f64,
    pub surprising_fraction: f64,
    pub reward: f64,
}

impl ReasoningGraph {
    /// Spectral entropy of the structural adjacency matrix.
    pub fn structural_entropy(&mut self) -> f64 {
        von_neumann_entropy(self.structural_adjacency())
    }

    /// Spectral entropy of the semantic adjacency matrix.
    pub fn semantic_entropy(&mut self) -> f64 {
        von_neumann_entropy(self.semantic_adjacency())
    }

    /// Critical discovery parameter: the normalized difference between
    /// structural and semantic entropy. A vanishing entropy sum (e.g. a
    /// single-node graph) resolves to 0 rather than blowing up.
    pub fn critical_discovery_parameter(&mut self) -> f64 {
        let s_struct = self.structural_entropy();
        let s_sem = self.semantic_entropy();

        if (s_struct + s_sem).abs() < EPSILON {
            return 0.0;
        }
        (s_struct - s_sem) / (s_struct + s_sem)
    }

    /// Fraction of edges flagged surprising at insertion. 0 without
    /// edges.
    pub fn surprising_edge_fraction(&self) -> f64 {
        if self.edges().is_empty() {
            return 0.0;
        }
        let surprising = self.edges().iter().filter(|e| e.surprising).count();
        surprising as f64 / self.edges().len() as f64
    }

    /// Bundle all metrics and the shaped reward for the current state.
    pub fn snapshot(&mut self) -> MetricsSnapshot {
        MetricsSnapshot {
            nodes: self.node_count(),
            edges: self.edge_count(),
            structural_entropy: self.structural_entropy(),
            semantic_entropy: self.semantic_entropy(),
            discovery: self.critical_discovery_parameter(),
            surprising_fraction: self.surprising_edge_fraction(),
            reward: self.compute_reward(),
        }
    }
}

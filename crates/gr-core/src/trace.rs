//! Serde wire format for reasoning-session traces.
//!
//! A trace is one JSON object per line, tagged by `op`. Drivers replay
//! events against a graph in order; the engine puts no constraint on how
//! the events were extracted upstream. File and stream handling stay
//! with the caller.

use serde::{Deserialize, Serialize};

use crate::graph::ReasoningGraph;
use crate::reward::RewardParams;

fn default_weight() -> f64 {
    1.0
}

/// One step of a recorded reasoning session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Append a concept node.
    AddNode { content: String, embedding: Vec<f64> },
    /// Connect two existing nodes. Weight defaults to 1.0.
    AddEdge {
        source: usize,
        target: usize,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    /// Overwrite a node's embedding in place.
    UpdateEmbedding { id: usize, embedding: Vec<f64> },
    /// Swap in a whole new reward-parameter group.
    SetParams { params: RewardParams },
}

/// Apply one event to a graph.
pub fn apply_event(graph: &mut ReasoningGraph, event: TraceEvent) {
    match event {
        TraceEvent::AddNode { content, embedding } => {
            graph.add_node(&content, embedding);
        }
        TraceEvent::AddEdge {
            source,
            target,
            weight,
        } => graph.add_edge(source, target, weight),
        TraceEvent::UpdateEmbedding { id, embedding } => graph.update_embedding(id, embedding),
        TraceEvent::SetParams { params } => graph.set_reward_params(params),
    }
}

/// Parse one trace line.
pub fn parse_event(line: &str) -> Result<TraceEvent, serde_json::Error> {
    serde_json::from_str(line)
}

/// Serialize one event as a single trace line.
pub fn event_to_line(event: &TraceEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

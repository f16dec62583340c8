//! Graph reasoning reward engine.
//!
//! Builds a reasoning graph incrementally from concept embeddings,
//! measures spectral (Von Neumann) entropy over its structural and
//! semantic adjacency matrices, and shapes the resulting statistics into
//! a scalar reward for an external fine-tuning loop.
//!
//! Zero I/O: pure math engine with no opinions about transport or
//! persistence. Embeddings arrive as opaque numeric vectors; the reward
//! leaves as one `f64` per query. A session owns its graphs through
//! [`GraphRegistry`] and is single-threaded by design; concurrent
//! training workers each hold their own registry.

pub mod constants;
pub mod graph;
pub mod matrix;
pub mod metrics;
pub mod registry;
pub mod reward;
pub mod similarity;
pub mod spectral;
pub mod trace;

pub use constants::{EPSILON, SURPRISE_THRESHOLD};
pub use graph::{ConceptNode, ReasoningGraph, RelationEdge};
pub use matrix::SquareMatrix;
pub use metrics::MetricsSnapshot;
pub use registry::{GraphHandle, GraphRegistry, RegistryError};
pub use reward::{RewardParams, shaped_reward};
pub use similarity::cosine_similarity;
pub use spectral::{
    normalized_laplacian, spectral_entropy, symmetric_eigenvalues, von_neumann_entropy,
};
pub use trace::{TraceEvent, apply_event, event_to_line, parse_event};

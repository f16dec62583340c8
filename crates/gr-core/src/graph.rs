use crate::constants::SURPRISE_THRESHOLD;
use crate::matrix::SquareMatrix;
use crate::reward::RewardParams;
use crate::similarity::cosine_similarity;

/// A concept extracted from model output, with its embedding.
///
/// Ids are assigned sequentially in insertion order and never reused.
#[derive(Clone, Debug)]
pub struct ConceptNode {
    pub id: usize,
    pub content: String,
    pub embedding: Vec<f64>,
}

/// A relation between two concepts.
///
/// `surprising` is fixed at insertion time from the endpoint embeddings
/// as they were at that moment; later embedding updates do not revisit
/// it.
#[derive(Clone, Copy, Debug)]
pub struct RelationEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub surprising: bool,
}

/// Reasoning graph with lazily rebuilt adjacency matrices.
///
/// Nodes and edges only accumulate during a session; there is no
/// deletion. Structural adjacency holds explicit edge weights (the most
/// recent weight wins when a pair is connected twice); semantic
/// adjacency holds pairwise embedding similarity rescaled from [-1, 1]
/// to [0, 1], with a diagonal of exactly 1. Every mutation marks the
/// matrices dirty and every read rebuilds first, so callers always see
/// matrices consistent with the current node and edge lists.
#[derive(Clone, Debug)]
pub struct ReasoningGraph {
    nodes: Vec<ConceptNode>,
    edges: Vec<RelationEdge>,
    params: RewardParams,
    structural: SquareMatrix,
    semantic: SquareMatrix,
    matrices_dirty: bool,
}

impl ReasoningGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            params: RewardParams::default(),
            structural: SquareMatrix::zeros(0),
            semantic: SquareMatrix::zeros(0),
            matrices_dirty: false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: usize) -> Option<&ConceptNode> {
        self.nodes.get(id)
    }

    pub fn edges(&self) -> &[RelationEdge] {
        &self.edges
    }

    /// Append a concept node and return its id. Never fails.
    pub fn add_node(&mut self, content: &str, embedding: Vec<f64>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(ConceptNode {
            id,
            content: content.to_string(),
            embedding,
        });
        self.matrices_dirty = true;
        id
    }

    /// Connect two existing nodes.
    ///
    /// Unknown endpoints make the call a silent no-op; that is the
    /// documented contract, not a failure signal. The surprise flag is
    /// computed here, once, from the endpoint embeddings.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        if source >= self.nodes.len() || target >= self.nodes.len() {
            return;
        }

        let sim = cosine_similarity(
            &self.nodes[source].embedding,
            &self.nodes[target].embedding,
        );

        self.edges.push(RelationEdge {
            source,
            target,
            weight,
            surprising: sim < SURPRISE_THRESHOLD,
        });
        self.matrices_dirty = true;
    }

    /// Overwrite one node's embedding in place.
    ///
    /// Marks the matrices stale; existing edges keep the surprise flags
    /// they were born with. Unknown ids are a silent no-op.
    pub fn update_embedding(&mut self, id: usize, embedding: Vec<f64>) {
        if id >= self.nodes.len() {
            return;
        }
        self.nodes[id].embedding = embedding;
        self.matrices_dirty = true;
    }

    /// Structural adjacency (explicit edge weights), rebuilt if stale.
    pub fn structural_adjacency(&mut self) -> &SquareMatrix {
        self.ensure_matrices();
        &self.structural
    }

    /// Semantic adjacency (rescaled pairwise similarity), rebuilt if stale.
    pub fn semantic_adjacency(&mut self) -> &SquareMatrix {
        self.ensure_matrices();
        &self.semantic
    }

    /// Replace all reward parameters at once, never one at a time, so a
    /// reward evaluation can never mix old and new targets.
    pub fn set_reward_params(&mut self, params: RewardParams) {
        self.params = params;
    }

    pub fn reward_params(&self) -> &RewardParams {
        &self.params
    }

    fn ensure_matrices(&mut self) {
        if self.matrices_dirty {
            self.rebuild_matrices();
        }
    }

    /// Re-derive both matrices from the current node and edge lists.
    /// Idempotent: identical graph content always yields identical
    /// matrices.
    fn rebuild_matrices(&mut self) {
        let n = self.nodes.len();

        let mut structural = SquareMatrix::zeros(n);
        for edge in &self.edges {
            // Last writer wins for repeated pairs
            structural.set_symmetric(edge.source, edge.target, edge.weight);
        }

        let mut semantic = SquareMatrix::zeros(n);
        for i in 0..n {
            semantic.set(i, i, 1.0);
            for j in (i + 1)..n {
                let sim =
                    cosine_similarity(&self.nodes[i].embedding, &self.nodes[j].embedding);
                semantic.set_symmetric(i, j, (sim + 1.0) / 2.0);
            }
        }

        self.structural = structural;
        self.semantic = semantic;
        self.matrices_dirty = false;
    }
}

impl Default for ReasoningGraph {
    fn default() -> Self {
        Self::new()
    }
}

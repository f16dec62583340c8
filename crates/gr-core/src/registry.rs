//! Session-owned registry of reasoning graphs.
//!
//! The training loop addresses graphs through copyable handles instead of
//! references or raw pointers. Each slot carries a generation counter;
//! destroying a graph bumps it, so handles to dead graphs are detected
//! rather than silently aliasing a reused slot.

use std::fmt;

use crate::graph::ReasoningGraph;
use crate::metrics::MetricsSnapshot;
use crate::reward::RewardParams;

/// Opaque handle to a graph owned by a [`GraphRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphHandle {
    index: u32,
    generation: u32,
}

/// Graph resource errors.
///
/// This is the only failure the engine surfaces; everything else
/// resolves to neutral values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The handle does not refer to a live graph, or no further graph
    /// can be allocated.
    Unavailable,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Unavailable => write!(f, "graph resource unavailable"),
        }
    }
}

impl std::error::Error for RegistryError {}

pub type Result<T> = std::result::Result<T, RegistryError>;

struct Slot {
    generation: u32,
    graph: Option<ReasoningGraph>,
}

/// Arena of independently owned reasoning graphs.
#[derive(Default)]
pub struct GraphRegistry {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live graphs.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.graph.is_some()).count()
    }

    /// Allocate a fresh graph and hand back its handle.
    pub fn create_graph(&mut self) -> Result<GraphHandle> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.graph = Some(ReasoningGraph::new());
            return Ok(GraphHandle {
                index: index as u32,
                generation: slot.generation,
            });
        }

        let index = self.slots.len();
        if index > u32::MAX as usize {
            return Err(RegistryError::Unavailable);
        }
        self.slots.push(Slot {
            generation: 0,
            graph: Some(ReasoningGraph::new()),
        });
        Ok(GraphHandle {
            index: index as u32,
            generation: 0,
        })
    }

    /// Drop a graph and invalidate its handle. The slot is reused for
    /// later creations under a new generation.
    pub fn destroy_graph(&mut self, handle: GraphHandle) -> Result<()> {
        let index = handle.index as usize;
        match self.slots.get_mut(index) {
            Some(slot) if slot.generation == handle.generation && slot.graph.is_some() => {
                slot.graph = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
                Ok(())
            }
            _ => Err(RegistryError::Unavailable),
        }
    }

    pub fn get(&self, handle: GraphHandle) -> Result<&ReasoningGraph> {
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => {
                slot.graph.as_ref().ok_or(RegistryError::Unavailable)
            }
            _ => Err(RegistryError::Unavailable),
        }
    }

    pub fn get_mut(&mut self, handle: GraphHandle) -> Result<&mut ReasoningGraph> {
        match self.slots.get_mut(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation => {
                slot.graph.as_mut().ok_or(RegistryError::Unavailable)
            }
            _ => Err(RegistryError::Unavailable),
        }
    }

    // Pass-through session operations, so the training loop never holds
    // references into the arena across its own steps.

    pub fn add_node(
        &mut self,
        handle: GraphHandle,
        content: &str,
        embedding: Vec<f64>,
    ) -> Result<usize> {
        Ok(self.get_mut(handle)?.add_node(content, embedding))
    }

    pub fn add_edge(
        &mut self,
        handle: GraphHandle,
        source: usize,
        target: usize,
        weight: f64,
    ) -> Result<()> {
        self.get_mut(handle)?.add_edge(source, target, weight);
        Ok(())
    }

    pub fn set_reward_params(&mut self, handle: GraphHandle, params: RewardParams) -> Result<()> {
        self.get_mut(handle)?.set_reward_params(params);
        Ok(())
    }

    pub fn compute_reward(&mut self, handle: GraphHandle) -> Result<f64> {
        Ok(self.get_mut(handle)?.compute_reward())
    }

    pub fn snapshot(&mut self, handle: GraphHandle) -> Result<MetricsSnapshot> {
        Ok(self.get_mut(handle)?.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_use() {
        let mut registry = GraphRegistry::new();
        let handle = registry.create_graph().unwrap();

        let id = registry.add_node(handle, "concept", vec![1.0, 0.0]).unwrap();
        assert_eq!(id, 0);
        assert_eq!(registry.get(handle).unwrap().node_count(), 1);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_destroy_invalidates_handle() {
        let mut registry = GraphRegistry::new();
        let handle = registry.create_graph().unwrap();
        registry.destroy_graph(handle).unwrap();

        assert_eq!(registry.destroy_graph(handle), Err(RegistryError::Unavailable));
        assert!(registry.get(handle).is_err());
        assert_eq!(
            registry.add_node(handle, "late", vec![1.0]),
            Err(RegistryError::Unavailable)
        );
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_slot_reuse_gets_new_generation() {
        let mut registry = GraphRegistry::new();
        let old = registry.create_graph().unwrap();
        registry.destroy_graph(old).unwrap();

        let fresh = registry.create_graph().unwrap();
        assert_ne!(old, fresh);

        // Old handle must not alias the recycled slot
        registry.add_node(fresh, "fresh", vec![1.0]).unwrap();
        assert!(registry.get(old).is_err());
        assert_eq!(registry.get(fresh).unwrap().node_count(), 1);
    }

    #[test]
    fn test_graphs_are_independent() {
        let mut registry = GraphRegistry::new();
        let first = registry.create_graph().unwrap();
        let second = registry.create_graph().unwrap();

        registry.add_node(first, "only-in-first", vec![1.0]).unwrap();
        assert_eq!(registry.get(first).unwrap().node_count(), 1);
        assert_eq!(registry.get(second).unwrap().node_count(), 0);
    }

    #[test]
    fn test_reward_through_handle() {
        let mut registry = GraphRegistry::new();
        let handle = registry.create_graph().unwrap();
        registry.add_node(handle, "a", vec![1.0, 0.0]).unwrap();
        registry.add_node(handle, "b", vec![0.0, 1.0]).unwrap();
        registry.add_edge(handle, 0, 1, 1.0).unwrap();

        let reward = registry.compute_reward(handle).unwrap();
        let snapshot = registry.snapshot(handle).unwrap();
        assert_eq!(reward.to_bits(), snapshot.reward.to_bits());
        assert_eq!(snapshot.edges, 1);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RegistryError::Unavailable.to_string(),
            "graph resource unavailable"
        );
    }
}

//! Graph builder for assembling corpus graphs
//!
//! The `CorpusGraphBuilder` collects nodes and containment edges, then
//! computes the section index and freezes everything into an immutable
//! `CorpusGraph` via `build()`.

use super::graph::{CorpusGraph, CorpusGraphInner, CorpusNode};
use petgraph::stable_graph::NodeIndex;
use versemap_api::{CorpusEdge, CorpusError, CorpusResult, NodeId, NodeKind};

/// Mutable graph builder
#[derive(Default)]
pub struct CorpusGraphBuilder {
    inner: CorpusGraphInner,
}

impl CorpusGraphBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. A node whose id is already present is left untouched.
    pub fn add_node(&mut self, node: CorpusNode) -> NodeIndex {
        if let Some(&idx) = self.inner.id_index.get(&node.id) {
            idx
        } else {
            let id = node.id;
            let idx = self.inner.topology.add_node(node);
            self.inner.id_index.insert(id, idx);
            idx
        }
    }

    /// Add an edge between two nodes
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: CorpusEdge) {
        let already_exists = self
            .inner
            .topology
            .edges_connecting(from, to)
            .any(|e| e.weight().edge_type == edge.edge_type);

        if !already_exists {
            self.inner.topology.add_edge(from, to, edge);
        }
    }

    /// Record that `container` contains `member`, both given by id.
    pub fn contain(&mut self, container: NodeId, member: NodeId) -> CorpusResult<()> {
        let from = self.index_of(container)?;
        let to = self.index_of(member)?;
        self.add_edge(from, to, CorpusEdge::contains());
        Ok(())
    }

    fn index_of(&self, id: NodeId) -> CorpusResult<NodeIndex> {
        self.inner
            .id_index
            .get(&id)
            .copied()
            .ok_or(CorpusError::UnknownNode(id))
    }

    /// Index book, chapter and verse nodes by their section and freeze.
    ///
    /// Section nodes whose coordinates cannot be resolved are simply left out
    /// of the index.
    pub fn build(mut self) -> CorpusGraph {
        let sectioned: Vec<NodeIndex> = self
            .inner
            .topology
            .node_indices()
            .filter(|&idx| {
                matches!(
                    self.inner.topology[idx].kind,
                    NodeKind::Book | NodeKind::Chapter | NodeKind::Verse
                )
            })
            .collect();

        for idx in sectioned {
            match self.inner.section_of(idx) {
                Ok(section) => {
                    self.inner.section_index.entry(section).or_insert(idx);
                }
                Err(e) => tracing::debug!("Section node not indexed: {}", e),
            }
        }

        CorpusGraph::from_inner(self.inner)
    }
}

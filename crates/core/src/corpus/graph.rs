//! Arc-wrapped immutable corpus graph
//!
//! `CorpusGraph` holds the annotated corpus as a containment DAG: books
//! contain chapters, chapters contain verses, and verses, clauses and phrases
//! contain words. A word is usually reachable along several paths (through
//! its phrase, its clause and its verse). Cloning only bumps a reference
//! counter.

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;
use versemap_api::{
    CorpusAdapter, CorpusEdge, CorpusError, CorpusResult, EdgeType, Feature, NodeId, NodeKind,
    Section,
};

/// A single annotated unit of the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub features: HashMap<Feature, String>,
}

impl CorpusNode {
    pub fn new(id: u64, kind: NodeKind) -> Self {
        Self {
            id: NodeId(id),
            kind,
            features: HashMap::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature, value: impl Into<String>) -> Self {
        self.features.insert(feature, value.into());
        self
    }

    pub fn feature(&self, feature: Feature) -> Option<&str> {
        self.features.get(&feature).map(String::as_str)
    }
}

/// Immutable corpus graph (cheap to clone via Arc)
#[derive(Clone)]
pub struct CorpusGraph {
    inner: Arc<CorpusGraphInner>,
}

/// Internal data structure (shared via Arc)
#[derive(Clone, Default)]
pub struct CorpusGraphInner {
    pub topology: StableDiGraph<CorpusNode, CorpusEdge>,

    /// NodeId -> NodeIndex mapping for fast lookup
    pub id_index: HashMap<NodeId, NodeIndex>,

    /// Book / chapter / verse references -> section node
    pub section_index: HashMap<Section, NodeIndex>,
}

impl CorpusGraph {
    pub(crate) fn from_inner(inner: CorpusGraphInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    // ---- Read-only accessors ----

    pub fn find_node(&self, id: NodeId) -> Option<NodeIndex> {
        self.inner.id_index.get(&id).copied()
    }

    pub fn get_node(&self, id: NodeId) -> Option<&CorpusNode> {
        self.find_node(id)
            .and_then(|idx| self.inner.topology.node_weight(idx))
    }

    pub fn node_count(&self) -> usize {
        self.inner.topology.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.topology.edge_count()
    }

    fn index_of(&self, id: NodeId) -> CorpusResult<NodeIndex> {
        self.find_node(id).ok_or(CorpusError::UnknownNode(id))
    }
}

impl CorpusGraphInner {
    fn contained(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.topology
            .edges_directed(idx, direction)
            .filter(|e| e.weight().edge_type == EdgeType::Contains)
            .map(move |e| match direction {
                Direction::Outgoing => e.target(),
                Direction::Incoming => e.source(),
            })
    }

    /// Nearest node of `kind` among `idx` and its containers, breadth first.
    fn enclosing(&self, idx: NodeIndex, kind: &NodeKind) -> Option<NodeIndex> {
        let mut queue = VecDeque::from([idx]);
        let mut seen = HashSet::from([idx]);
        while let Some(current) = queue.pop_front() {
            if self.topology[current].kind == *kind {
                return Some(current);
            }
            for parent in self.contained(current, Direction::Incoming) {
                if seen.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }
        None
    }

    /// Value of a section feature, read from the enclosing node of `kind`, or
    /// from the node itself when no such container exists.
    fn section_value(&self, idx: NodeIndex, kind: &NodeKind, feature: Feature) -> Option<&str> {
        self.enclosing(idx, kind)
            .and_then(|holder| self.topology[holder].feature(feature))
            .or_else(|| self.topology[idx].feature(feature))
    }

    pub(crate) fn section_of(&self, idx: NodeIndex) -> CorpusResult<Section> {
        let id = self.topology[idx].id;
        let book = self
            .section_value(idx, &NodeKind::Book, Feature::Book)
            .ok_or(CorpusError::MissingSection(id))?
            .to_string();
        let number = |kind: NodeKind, feature: Feature| -> CorpusResult<Option<u32>> {
            match self.section_value(idx, &kind, feature) {
                None => Ok(None),
                Some(raw) => raw
                    .trim()
                    .parse::<u32>()
                    .map(Some)
                    .map_err(|_| CorpusError::MissingSection(id)),
            }
        };
        let chapter = number(NodeKind::Chapter, Feature::Chapter)?;
        let verse = match chapter {
            Some(_) => number(NodeKind::Verse, Feature::Verse)?,
            None => None,
        };
        Ok(Section {
            book,
            chapter,
            verse,
        })
    }
}

impl CorpusAdapter for CorpusGraph {
    fn node_for_section(&self, section: &Section) -> Option<NodeId> {
        self.inner
            .section_index
            .get(section)
            .map(|&idx| self.inner.topology[idx].id)
    }

    fn descendants(&self, node: NodeId, kind: &NodeKind) -> CorpusResult<Vec<NodeId>> {
        let start = self.index_of(node)?;
        let inner = &self.inner;

        let mut found = BTreeSet::new();
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            for child in inner.contained(current, Direction::Outgoing) {
                if seen.insert(child) {
                    let data = &inner.topology[child];
                    if data.kind == *kind {
                        found.insert(data.id);
                    }
                    stack.push(child);
                }
            }
        }

        // Ids ascend in text order within a kind
        Ok(found.into_iter().collect())
    }

    fn section_from_node(&self, node: NodeId) -> CorpusResult<Section> {
        let idx = self.index_of(node)?;
        self.inner.section_of(idx)
    }

    fn feature_value(&self, feature: Feature, node: NodeId) -> Option<String> {
        self.get_node(node)
            .and_then(|n| n.feature(feature))
            .map(str::to_string)
    }
}

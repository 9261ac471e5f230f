use crate::error::CorpusResult;
use crate::models::{Feature, NodeId, NodeKind, Section};

/// Read-only access to an annotated corpus.
///
/// Implementations are loaded once and passed by reference into the
/// extractor; nothing here mutates the corpus.
pub trait CorpusAdapter {
    /// Resolve a book, chapter or verse reference to its node.
    fn node_for_section(&self, section: &Section) -> Option<NodeId>;

    /// All nodes of `kind` contained in `node`, in corpus-native order.
    fn descendants(&self, node: NodeId, kind: &NodeKind) -> CorpusResult<Vec<NodeId>>;

    /// The section a node belongs to.
    fn section_from_node(&self, node: NodeId) -> CorpusResult<Section>;

    /// Value of `feature` on `node`, `None` when the node does not carry it.
    fn feature_value(&self, feature: Feature, node: NodeId) -> Option<String>;
}

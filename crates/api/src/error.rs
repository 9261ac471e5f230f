use crate::models::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus unavailable: {0}")]
    Unavailable(String),
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Node {0} has no complete section (book, chapter, verse)")]
    MissingSection(NodeId),
}

pub type CorpusResult<T> = std::result::Result<T, CorpusError>;

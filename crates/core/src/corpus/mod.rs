pub mod builder;
pub mod graph;
pub mod snapshot;

pub use builder::CorpusGraphBuilder;
pub use graph::{CorpusGraph, CorpusNode};
pub use snapshot::CorpusSnapshot;

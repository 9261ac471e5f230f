//! JSON corpus snapshots
//!
//! A snapshot declares which features it carries, lists every node with its
//! kind and feature values, and lists containment as `[container, member]`
//! pairs:
//!
//! ```json
//! {
//!   "source": "BHSA TF 2021",
//!   "features": ["book", "chapter", "verse", "gloss"],
//!   "nodes": [
//!     { "id": 1, "kind": "word", "features": { "gloss": "in" } },
//!     { "id": 500, "kind": "verse", "features": { "verse": "1" } }
//!   ],
//!   "containment": [[500, 1]]
//! }
//! ```

use super::builder::CorpusGraphBuilder;
use super::graph::{CorpusGraph, CorpusNode};
use crate::error::{Result, VersemapError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use versemap_api::{Feature, NodeId, NodeKind};

/// File looked up when the corpus location is a directory.
pub const SNAPSHOT_FILE: &str = "corpus.json";

/// Features locating a node in its book; loaded regardless of the request.
pub const SECTION_FEATURES: [Feature; 3] = [Feature::Book, Feature::Chapter, Feature::Verse];

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CorpusSnapshot {
    #[serde(default)]
    pub source: Option<String>,
    pub features: Vec<String>,
    pub nodes: Vec<SnapshotNode>,
    #[serde(default)]
    pub containment: Vec<(NodeId, NodeId)>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SnapshotNode {
    pub id: NodeId,
    pub kind: String,
    #[serde(default)]
    pub features: BTreeMap<String, String>,
}

fn snapshot_path(location: &Path) -> PathBuf {
    if location.is_dir() {
        location.join(SNAPSHOT_FILE)
    } else {
        location.to_path_buf()
    }
}

impl CorpusSnapshot {
    pub fn read(location: &Path) -> Result<Self> {
        let path = snapshot_path(location);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            VersemapError::CorpusUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            VersemapError::CorpusUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Build a graph carrying the requested features.
    ///
    /// Book, chapter and verse are always kept so sections resolve whatever
    /// subset was requested. Every kept feature must be declared by the
    /// snapshot.
    pub fn into_graph(self, features: &[Feature]) -> Result<CorpusGraph> {
        let mut kept = SECTION_FEATURES.to_vec();
        kept.extend(features.iter().copied().filter(|f| !SECTION_FEATURES.contains(f)));

        if let Some(missing) = kept
            .iter()
            .find(|f| !self.features.iter().any(|declared| declared == f.name()))
        {
            return Err(VersemapError::CorpusUnavailable(format!(
                "feature `{}` is not present in the corpus",
                missing
            )));
        }

        let mut builder = CorpusGraphBuilder::new();
        for node in self.nodes {
            let mut data = CorpusNode::new(node.id.get(), NodeKind::from(node.kind.as_str()));
            for feature in &kept {
                if let Some(value) = node.features.get(feature.name()) {
                    data = data.with_feature(*feature, value.clone());
                }
            }
            builder.add_node(data);
        }

        for (container, member) in self.containment {
            builder.contain(container, member).map_err(|e| {
                VersemapError::CorpusUnavailable(format!("broken containment edge: {}", e))
            })?;
        }

        Ok(builder.build())
    }
}

impl CorpusGraph {
    /// Load a corpus snapshot from a file, or from `corpus.json` inside a
    /// directory, keeping `features` plus the section features on the nodes.
    pub fn load(location: &Path, features: &[Feature]) -> Result<CorpusGraph> {
        let snapshot = CorpusSnapshot::read(location)?;
        tracing::info!(
            "Loaded corpus snapshot {} ({} nodes, source: {})",
            location.display(),
            snapshot.nodes.len(),
            snapshot.source.as_deref().unwrap_or("unknown")
        );
        snapshot.into_graph(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versemap_api::{CorpusAdapter, Section};

    fn write_snapshot(dir: &Path, value: serde_json::Value) {
        std::fs::write(dir.join(SNAPSHOT_FILE), value.to_string()).unwrap();
    }

    fn ruth_snapshot() -> serde_json::Value {
        serde_json::json!({
            "source": "test",
            "features": ["book", "chapter", "verse", "gloss", "g_word_utf8"],
            "nodes": [
                {
                    "id": 1,
                    "kind": "word",
                    "features": { "gloss": "in", "g_word_utf8": "וַֽיְהִי" }
                },
                { "id": 10, "kind": "book", "features": { "book": "Ruth" } },
                { "id": 11, "kind": "chapter", "features": { "chapter": "1" } },
                { "id": 12, "kind": "verse", "features": { "verse": "1" } }
            ],
            "containment": [[10, 11], [11, 12], [12, 1]]
        })
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), ruth_snapshot());

        let features = [Feature::Book, Feature::Chapter, Feature::Verse, Feature::Gloss];
        let graph = CorpusGraph::load(dir.path(), &features).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.node_for_section(&Section::verse("Ruth", 1, 1)), Some(NodeId(12)));
        assert_eq!(graph.feature_value(Feature::Gloss, NodeId(1)).as_deref(), Some("in"));
        // Declared but not requested
        assert_eq!(graph.feature_value(Feature::GWordUtf8, NodeId(1)), None);
    }

    #[test]
    fn test_section_features_kept_for_subset() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), ruth_snapshot());

        let graph = CorpusGraph::load(dir.path(), &[Feature::Gloss]).unwrap();
        assert_eq!(graph.node_for_section(&Section::book("Ruth")), Some(NodeId(10)));
        assert_eq!(
            graph.section_from_node(NodeId(1)).unwrap(),
            Section::verse("Ruth", 1, 1)
        );
        assert_eq!(graph.feature_value(Feature::Book, NodeId(10)).as_deref(), Some("Ruth"));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = CorpusGraph::load(&dir.path().join("nope.json"), &Feature::ALL).err().unwrap();
        assert!(matches!(err, VersemapError::CorpusUnavailable(_)));
    }

    #[test]
    fn test_undeclared_feature_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(dir.path(), ruth_snapshot());

        let err = CorpusGraph::load(dir.path(), &[Feature::Gloss, Feature::PrsPs]).err().unwrap();
        match err {
            VersemapError::CorpusUnavailable(msg) => assert!(msg.contains("prs_ps")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_edge_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut snapshot = ruth_snapshot();
        snapshot["containment"] = serde_json::json!([[12, 99]]);
        write_snapshot(dir.path(), snapshot);

        let err = CorpusGraph::load(dir.path(), &[Feature::Book]).err().unwrap();
        assert!(matches!(err, VersemapError::CorpusUnavailable(_)));
    }
}

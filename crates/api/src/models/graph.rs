use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle of a corpus node.
///
/// Within one kind, ids ascend in text order, so sorting by id yields the
/// corpus-native (canonical) order.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Book,
    Chapter,
    Verse,
    Clause,
    Phrase,
    Word,
    // Extension
    Custom(String),
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "book" => NodeKind::Book,
            "chapter" => NodeKind::Chapter,
            "verse" => NodeKind::Verse,
            "clause" => NodeKind::Clause,
            "phrase" => NodeKind::Phrase,
            "word" => NodeKind::Word,
            _ => NodeKind::Custom(s.to_string()),
        }
    }
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Book => "book",
            NodeKind::Chapter => "chapter",
            NodeKind::Verse => "verse",
            NodeKind::Clause => "clause",
            NodeKind::Phrase => "phrase",
            NodeKind::Word => "word",
            NodeKind::Custom(s) => s,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub enum EdgeType {
    // Structural relationships
    Contains,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct CorpusEdge {
    pub edge_type: EdgeType,
}

impl CorpusEdge {
    pub fn new(edge_type: EdgeType) -> Self {
        Self { edge_type }
    }

    pub fn contains() -> Self {
        Self::new(EdgeType::Contains)
    }
}

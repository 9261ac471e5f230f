#![allow(dead_code)]

use std::collections::HashMap;
use versemap_api::{
    CorpusAdapter, CorpusError, CorpusResult, Feature, NodeId, NodeKind, Section,
};
use versemap_core::corpus::{CorpusGraph, CorpusGraphBuilder, CorpusNode};

/// Hand-wired adapter: every lookup is a table entry.
#[derive(Default)]
pub struct StubCorpus {
    pub books: HashMap<String, NodeId>,
    pub sections: HashMap<NodeId, Section>,
    pub contents: HashMap<(NodeId, String), Vec<NodeId>>,
    pub features: HashMap<(Feature, NodeId), String>,
}

impl StubCorpus {
    pub fn contain(&mut self, node: u64, kind: NodeKind, members: &[u64]) {
        self.contents.insert(
            (NodeId(node), kind.to_string()),
            members.iter().copied().map(NodeId).collect(),
        );
    }

    pub fn set(&mut self, feature: Feature, node: u64, value: &str) {
        self.features.insert((feature, NodeId(node)), value.to_string());
    }
}

impl CorpusAdapter for StubCorpus {
    fn node_for_section(&self, section: &Section) -> Option<NodeId> {
        self.books.get(&section.book).copied()
    }

    fn descendants(&self, node: NodeId, kind: &NodeKind) -> CorpusResult<Vec<NodeId>> {
        Ok(self
            .contents
            .get(&(node, kind.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    fn section_from_node(&self, node: NodeId) -> CorpusResult<Section> {
        self.sections
            .get(&node)
            .cloned()
            .ok_or(CorpusError::UnknownNode(node))
    }

    fn feature_value(&self, feature: Feature, node: NodeId) -> Option<String> {
        self.features.get(&(feature, node)).cloned()
    }
}

pub const ELIMELECH: u64 = 1;
pub const DIED: u64 = 2;
pub const VERSE: u64 = 100;
pub const CLAUSE: u64 = 200;
pub const PHRASE: u64 = 300;

/// Ruth 1:1 reduced to two words, one clause over both and one phrase over
/// the first word. The first word carries no pronominal suffix.
pub fn ruth_stub() -> StubCorpus {
    let mut stub = StubCorpus::default();
    stub.books.insert("Ruth".to_string(), NodeId(10));
    stub.sections.insert(NodeId(VERSE), Section::verse("Ruth", 1, 1));

    stub.contain(10, NodeKind::Verse, &[VERSE]);
    stub.contain(VERSE, NodeKind::Word, &[ELIMELECH, DIED]);
    stub.contain(VERSE, NodeKind::Clause, &[CLAUSE]);
    stub.contain(VERSE, NodeKind::Phrase, &[PHRASE]);
    stub.contain(CLAUSE, NodeKind::Word, &[ELIMELECH, DIED]);
    stub.contain(CLAUSE, NodeKind::Phrase, &[PHRASE]);
    stub.contain(PHRASE, NodeKind::Word, &[ELIMELECH]);

    stub.set(Feature::GWordUtf8, ELIMELECH, "אֱלִימֶ֥לֶךְ");
    stub.set(Feature::GWord, ELIMELECH, "ʾᵉlîmˈeleḵ");
    stub.set(Feature::Gloss, ELIMELECH, "Elimelech");
    stub.set(Feature::Sp, ELIMELECH, "nmpr");
    stub.set(Feature::GWordUtf8, DIED, "וַיָּ֥מָת");
    stub.set(Feature::Gloss, DIED, "he died");
    stub.set(Feature::Sp, DIED, "verb");
    stub.set(Feature::Prs, DIED, "absent");
    stub.set(Feature::Typ, CLAUSE, "Way0");
    stub.set(Feature::Function, PHRASE, "Subj");
    stub.set(Feature::Typ, PHRASE, "PP");
    stub
}

/// Two chapters of a small book as a real graph. Words are shared between
/// verse, clause and phrase containers as in a full corpus; chapter 2 verse 1
/// has no syntax nodes at all.
///
/// Layout (node ids):
/// - book 1000 > chapter 1001 > verses 1100 (1:1), 1101 (1:2)
/// - book 1000 > chapter 1002 > verse 1102 (2:1)
/// - 1:1 words 1..=4, clause 1200 [1..=4] with phrases 1300 [1,2], 1301 [3,4]
/// - 1:2 words 5..=6, clauses 1201 [5], 1202 [6], phrase 1302 [5,6]
/// - 2:1 words 7..=8
pub fn small_book() -> CorpusGraph {
    let mut builder = CorpusGraphBuilder::new();
    builder.add_node(CorpusNode::new(1000, NodeKind::Book).with_feature(Feature::Book, "Jonah"));
    builder.add_node(CorpusNode::new(1001, NodeKind::Chapter).with_feature(Feature::Chapter, "1"));
    builder.add_node(CorpusNode::new(1002, NodeKind::Chapter).with_feature(Feature::Chapter, "2"));
    for (id, verse) in [(1100, "1"), (1101, "2"), (1102, "1")] {
        builder.add_node(CorpusNode::new(id, NodeKind::Verse).with_feature(Feature::Verse, verse));
    }
    for id in 1..=8 {
        builder.add_node(
            CorpusNode::new(id, NodeKind::Word)
                .with_feature(Feature::Gloss, format!("gloss {}", id))
                .with_feature(Feature::Language, "Hebrew"),
        );
    }
    for id in [1200, 1201, 1202] {
        builder.add_node(CorpusNode::new(id, NodeKind::Clause).with_feature(Feature::Typ, "xQtX"));
    }
    for id in [1300, 1301, 1302] {
        builder.add_node(
            CorpusNode::new(id, NodeKind::Phrase).with_feature(Feature::Function, "Pred"),
        );
    }

    let containment: &[(u64, &[u64])] = &[
        (1000, &[1001, 1002]),
        (1001, &[1100, 1101]),
        (1002, &[1102]),
        (1100, &[1, 2, 3, 4, 1200]),
        (1200, &[1300, 1301, 1, 2, 3, 4]),
        (1300, &[1, 2]),
        (1301, &[3, 4]),
        (1101, &[5, 6, 1201, 1202, 1302]),
        (1201, &[5]),
        (1202, &[6]),
        (1302, &[5, 6]),
        (1102, &[7, 8]),
    ];
    for (container, members) in containment {
        for member in *members {
            builder
                .contain(NodeId(*container), NodeId(*member))
                .expect("fixture nodes exist");
        }
    }
    builder.build()
}

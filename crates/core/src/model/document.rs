//! Verse-indexed output document
//!
//! Field names and nesting here are the persisted format consumed downstream;
//! renaming a field changes the output contract. Absent feature values are
//! `None` and serialize as `null`, so every entry always carries its full
//! attribute set.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use versemap_api::{Feature, NodeId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct Document {
    pub meta: Meta,
    pub book: String,
    /// Chapter number -> chapter, in visiting order
    pub chapters: IndexMap<String, ChapterEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct Meta {
    pub source: String,
    pub book: String,
    pub features: Vec<Feature>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ChapterEntry {
    /// Verse number -> verse, in visiting order
    pub verses: IndexMap<String, VerseEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct VerseEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    pub words: Vec<WordEntry>,
    pub clauses: Vec<ClauseEntry>,
    pub phrases: Vec<PhraseEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct WordEntry {
    pub id: NodeId,
    /// 1-based position within the verse
    pub index: usize,
    pub hebrew: Option<String>,
    pub translit: Option<String>,
    pub consonants: Option<String>,
    pub lexeme: Option<String>,
    #[serde(rename = "lexemeTranslit")]
    pub lexeme_translit: Option<String>,
    #[serde(rename = "lexemeHebrew")]
    pub lexeme_hebrew: Option<String>,
    pub gloss: Option<String>,
    pub lang: Option<String>,
    pub sp: Option<String>,
    pub vt: Option<String>,
    pub vs: Option<String>,
    pub ps: Option<String>,
    pub gn: Option<String>,
    pub nu: Option<String>,
    pub prs: Option<String>,
    pub prs_ps: Option<String>,
    pub prs_gn: Option<String>,
    pub prs_nu: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct ClauseEntry {
    pub id: NodeId,
    pub typ: Option<String>,
    pub rela: Option<String>,
    #[serde(rename = "wordIds")]
    pub word_ids: Vec<NodeId>,
    #[serde(rename = "phraseIds")]
    pub phrase_ids: Vec<NodeId>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, JsonSchema)]
pub struct PhraseEntry {
    pub id: NodeId,
    pub function: Option<String>,
    pub typ: Option<String>,
    pub rela: Option<String>,
    #[serde(rename = "wordIds")]
    pub word_ids: Vec<NodeId>,
}

impl Document {
    pub fn new(source: impl Into<String>, book: impl Into<String>, features: Vec<Feature>) -> Self {
        let book = book.into();
        Self {
            meta: Meta {
                source: source.into(),
                book: book.clone(),
                features,
            },
            book,
            chapters: IndexMap::new(),
        }
    }

    pub fn verse(&self, chapter: &str, verse: &str) -> Option<&VerseEntry> {
        self.chapters.get(chapter)?.verses.get(verse)
    }

    pub fn verses(&self) -> impl Iterator<Item = &VerseEntry> {
        self.chapters.values().flat_map(|c| c.verses.values())
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.values().map(|c| c.verses.len()).sum()
    }

    pub fn word_count(&self) -> usize {
        self.verses().map(|v| v.words.len()).sum()
    }
}

impl VerseEntry {
    pub fn contains_word(&self, id: NodeId) -> bool {
        self.words.iter().any(|w| w.id == id)
    }
}

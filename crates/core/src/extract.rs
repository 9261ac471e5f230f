//! Book extraction
//!
//! Walks book -> verses -> (words, clauses, phrases) through a
//! [`CorpusAdapter`] and assembles the verse-indexed [`Document`]. The
//! adapter's enumeration order is authoritative and never re-sorted.

use crate::error::{Result, VersemapError};
use crate::model::{ChapterEntry, ClauseEntry, Document, PhraseEntry, VerseEntry, WordEntry};
use tracing::{debug, info, warn};
use versemap_api::{CorpusAdapter, CorpusError, Feature, NodeId, NodeKind, Section};

/// What to extract and how to label it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractRequest {
    pub book: String,
    pub source: String,
    pub features: Vec<Feature>,
}

impl ExtractRequest {
    pub fn new(book: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            source: source.into(),
            features: Feature::ALL.to_vec(),
        }
    }
}

pub struct Extractor<'a, A: CorpusAdapter + ?Sized> {
    adapter: &'a A,
}

impl<'a, A: CorpusAdapter + ?Sized> Extractor<'a, A> {
    pub fn new(adapter: &'a A) -> Self {
        Self { adapter }
    }

    pub fn extract(&self, request: &ExtractRequest) -> Result<Document> {
        let book_node = self
            .adapter
            .node_for_section(&Section::book(request.book.as_str()))
            .ok_or_else(|| {
                VersemapError::CorpusUnavailable(format!("book `{}` not found", request.book))
            })?;

        let verses = self.adapter.descendants(book_node, &NodeKind::Verse)?;
        if verses.is_empty() {
            return Err(VersemapError::CorpusUnavailable(format!(
                "book `{}` has no verses",
                request.book
            )));
        }
        info!("Extracting {} verses of {}", verses.len(), request.book);

        let mut document = Document::new(
            request.source.as_str(),
            request.book.as_str(),
            request.features.clone(),
        );

        for verse_node in verses {
            let section = self.adapter.section_from_node(verse_node)?;
            let (chapter, verse) = match (section.chapter, section.verse) {
                (Some(c), Some(v)) => (c, v),
                _ => return Err(CorpusError::MissingSection(verse_node).into()),
            };

            let entry = self.verse_entry(verse_node, &section)?;
            let verses = &mut document
                .chapters
                .entry(chapter.to_string())
                .or_insert_with(ChapterEntry::default)
                .verses;

            // Later occurrence wins, keeping the first one's position
            if verses.insert(verse.to_string(), entry).is_some() {
                warn!("Duplicate verse {}, earlier entry replaced", section);
            }
        }

        info!(
            "Extracted {} chapters, {} verses, {} words",
            document.chapters.len(),
            document.verse_count(),
            document.word_count()
        );
        Ok(document)
    }

    fn verse_entry(&self, verse_node: NodeId, section: &Section) -> Result<VerseEntry> {
        let words = self
            .adapter
            .descendants(verse_node, &NodeKind::Word)?
            .into_iter()
            .enumerate()
            .map(|(i, w)| self.word_entry(w, i + 1))
            .collect::<Vec<_>>();

        let clauses = self
            .adapter
            .descendants(verse_node, &NodeKind::Clause)?
            .into_iter()
            .map(|c| self.clause_entry(c))
            .collect::<Result<Vec<_>>>()?;

        let phrases = self
            .adapter
            .descendants(verse_node, &NodeKind::Phrase)?
            .into_iter()
            .map(|p| self.phrase_entry(p))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "{}: {} words, {} clauses, {} phrases",
            section,
            words.len(),
            clauses.len(),
            phrases.len()
        );

        Ok(VerseEntry {
            reference: section.to_string(),
            words,
            clauses,
            phrases,
        })
    }

    fn feature(&self, feature: Feature, node: NodeId) -> Option<String> {
        self.adapter.feature_value(feature, node)
    }

    fn word_entry(&self, w: NodeId, index: usize) -> WordEntry {
        WordEntry {
            id: w,
            index,
            hebrew: self.feature(Feature::GWordUtf8, w),
            translit: self.feature(Feature::GWord, w),
            consonants: self.feature(Feature::GConsUtf8, w),
            lexeme: self.feature(Feature::Lex, w),
            lexeme_translit: self.feature(Feature::GLex, w),
            lexeme_hebrew: self.feature(Feature::GLexUtf8, w),
            gloss: self.feature(Feature::Gloss, w),
            lang: self.feature(Feature::Language, w),
            sp: self.feature(Feature::Sp, w),
            vt: self.feature(Feature::Vt, w),
            vs: self.feature(Feature::Vs, w),
            ps: self.feature(Feature::Ps, w),
            gn: self.feature(Feature::Gn, w),
            nu: self.feature(Feature::Nu, w),
            prs: self.feature(Feature::Prs, w),
            prs_ps: self.feature(Feature::PrsPs, w),
            prs_gn: self.feature(Feature::PrsGn, w),
            prs_nu: self.feature(Feature::PrsNu, w),
        }
    }

    fn clause_entry(&self, c: NodeId) -> Result<ClauseEntry> {
        Ok(ClauseEntry {
            id: c,
            typ: self.feature(Feature::Typ, c),
            rela: self.feature(Feature::Rela, c),
            word_ids: self.adapter.descendants(c, &NodeKind::Word)?,
            phrase_ids: self.adapter.descendants(c, &NodeKind::Phrase)?,
        })
    }

    fn phrase_entry(&self, p: NodeId) -> Result<PhraseEntry> {
        Ok(PhraseEntry {
            id: p,
            function: self.feature(Feature::Function, p),
            typ: self.feature(Feature::Typ, p),
            rela: self.feature(Feature::Rela, p),
            word_ids: self.adapter.descendants(p, &NodeKind::Word)?,
        })
    }
}

/// Extract one book from `adapter`.
pub fn extract<A>(adapter: &A, request: &ExtractRequest) -> Result<Document>
where
    A: CorpusAdapter + ?Sized,
{
    Extractor::new(adapter).extract(request)
}

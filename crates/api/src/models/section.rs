use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A (book, chapter, verse) reference. Chapter and verse are absent for
/// coarser sections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct Section {
    pub book: String,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
}

impl Section {
    pub fn book(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter: None,
            verse: None,
        }
    }

    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: None,
        }
    }

    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter: Some(chapter),
            verse: Some(verse),
        }
    }
}

/// Renders as `<book> <chapter>:<verse>`, dropping missing parts.
impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.book)?;
        if let Some(chapter) = self.chapter {
            write!(f, " {}", chapter)?;
            if let Some(verse) = self.verse {
                write!(f, ":{}", verse)?;
            }
        }
        Ok(())
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Node features known to the extractor.
///
/// Each variant serializes as the feature's name in the corpus database, which
/// is also the key used for lookups against a [`crate::CorpusAdapter`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum Feature {
    // Section
    #[serde(rename = "book")]
    Book,
    #[serde(rename = "chapter")]
    Chapter,
    #[serde(rename = "verse")]
    Verse,
    // Surface and lexeme forms
    #[serde(rename = "g_word")]
    GWord,
    #[serde(rename = "g_word_utf8")]
    GWordUtf8,
    #[serde(rename = "g_lex")]
    GLex,
    #[serde(rename = "g_lex_utf8")]
    GLexUtf8,
    #[serde(rename = "g_cons")]
    GCons,
    #[serde(rename = "g_cons_utf8")]
    GConsUtf8,
    #[serde(rename = "lex")]
    Lex,
    // Morphology
    #[serde(rename = "sp")]
    Sp,
    #[serde(rename = "vt")]
    Vt,
    #[serde(rename = "vs")]
    Vs,
    #[serde(rename = "ps")]
    Ps,
    #[serde(rename = "gn")]
    Gn,
    #[serde(rename = "nu")]
    Nu,
    // Pronominal suffix
    #[serde(rename = "prs")]
    Prs,
    #[serde(rename = "prs_ps")]
    PrsPs,
    #[serde(rename = "prs_gn")]
    PrsGn,
    #[serde(rename = "prs_nu")]
    PrsNu,
    // Lexical
    #[serde(rename = "gloss")]
    Gloss,
    #[serde(rename = "language")]
    Language,
    // Syntax
    #[serde(rename = "typ")]
    Typ,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "rela")]
    Rela,
}

impl Feature {
    /// Every feature, in the order recorded in an extraction's metadata.
    pub const ALL: [Feature; 25] = [
        Feature::Book,
        Feature::Chapter,
        Feature::Verse,
        Feature::GWord,
        Feature::GWordUtf8,
        Feature::GLex,
        Feature::GLexUtf8,
        Feature::GCons,
        Feature::GConsUtf8,
        Feature::Lex,
        Feature::Sp,
        Feature::Vt,
        Feature::Vs,
        Feature::Ps,
        Feature::Gn,
        Feature::Nu,
        Feature::Prs,
        Feature::PrsPs,
        Feature::PrsGn,
        Feature::PrsNu,
        Feature::Gloss,
        Feature::Language,
        Feature::Typ,
        Feature::Function,
        Feature::Rela,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Book => "book",
            Feature::Chapter => "chapter",
            Feature::Verse => "verse",
            Feature::GWord => "g_word",
            Feature::GWordUtf8 => "g_word_utf8",
            Feature::GLex => "g_lex",
            Feature::GLexUtf8 => "g_lex_utf8",
            Feature::GCons => "g_cons",
            Feature::GConsUtf8 => "g_cons_utf8",
            Feature::Lex => "lex",
            Feature::Sp => "sp",
            Feature::Vt => "vt",
            Feature::Vs => "vs",
            Feature::Ps => "ps",
            Feature::Gn => "gn",
            Feature::Nu => "nu",
            Feature::Prs => "prs",
            Feature::PrsPs => "prs_ps",
            Feature::PrsGn => "prs_gn",
            Feature::PrsNu => "prs_nu",
            Feature::Gloss => "gloss",
            Feature::Language => "language",
            Feature::Typ => "typ",
            Feature::Function => "function",
            Feature::Rela => "rela",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl FromStr for Feature {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

use crate::error::{Result, VersemapError};
use crate::extract::ExtractRequest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use versemap_api::Feature;

pub const DEFAULT_CORPUS_DIR: &str = "bhsa/tf/2021";
pub const DEFAULT_SOURCE: &str = "BHSA TF 2021";
pub const DEFAULT_BOOK: &str = "Ruth";
pub const DEFAULT_OUTPUT: &str = "src/data/ruth_bhsa.json";

/// Everything a single extraction run needs.
///
/// Missing keys in a config file fall back to the defaults above.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExtractConfig {
    pub corpus: PathBuf,
    pub source: String,
    pub book: String,
    pub features: Vec<Feature>,
    pub output: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from(DEFAULT_CORPUS_DIR),
            source: DEFAULT_SOURCE.to_string(),
            book: DEFAULT_BOOK.to_string(),
            features: Feature::ALL.to_vec(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ExtractConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(VersemapError::from)
    }

    pub fn request(&self) -> ExtractRequest {
        ExtractRequest {
            book: self.book.clone(),
            source: self.source.clone(),
            features: self.features.clone(),
        }
    }
}

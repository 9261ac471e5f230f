use std::path::PathBuf;
use tracing::info;
use versemap_core::config::ExtractConfig;
use versemap_core::pipeline;

/// Command-line values layered over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub corpus: Option<PathBuf>,
    pub book: Option<String>,
    pub source: Option<String>,
    pub output: Option<PathBuf>,
}

impl Overrides {
    pub fn resolve(self) -> versemap_core::Result<ExtractConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractConfig::from_file(path)?,
            None => ExtractConfig::default(),
        };
        if let Some(corpus) = self.corpus {
            config.corpus = corpus;
        }
        if let Some(book) = self.book {
            config.book = book;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        Ok(config)
    }
}

pub fn run(overrides: Overrides) -> Result<(), Box<dyn std::error::Error>> {
    let config = overrides.resolve()?;

    info!("Extracting {} from {}...", config.book, config.corpus.display());
    let document = pipeline::run(&config)?;

    info!("Extraction complete!");
    info!("Chapters: {}", document.chapters.len());
    info!("Verses: {}", document.verse_count());
    info!("Words: {}", document.word_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Overrides {
            book: Some("Jonah".to_string()),
            output: Some(PathBuf::from("jonah.json")),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(config.book, "Jonah");
        assert_eq!(config.output, PathBuf::from("jonah.json"));
        assert_eq!(config.source, ExtractConfig::default().source);
    }
}

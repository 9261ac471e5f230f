use crate::config::ExtractConfig;
use crate::corpus::CorpusGraph;
use crate::error::Result;
use crate::extract::extract;
use crate::model::Document;
use crate::output::write_document;
use tracing::info;

/// Load the corpus, extract the configured book and write it out.
///
/// Nothing is written unless the whole extraction succeeded.
pub fn run(config: &ExtractConfig) -> Result<Document> {
    info!("Loading corpus from {}...", config.corpus.display());
    let corpus = CorpusGraph::load(&config.corpus, &config.features)?;

    let document = extract(&corpus, &config.request())?;
    write_document(&document, &config.output)?;
    Ok(document)
}

mod extract;
mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "versemap",
    version,
    about = "Extract one book of an annotated corpus into a verse-indexed JSON document",
    long_about = "versemap walks the containment graph of an annotated corpus (books, chapters, \
                  verses, clauses, phrases, words) and writes a single book as a chapter -> verse \
                  document carrying word morphology and clause/phrase cross-references."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a book and write the document
    #[command(
        long_about = "Loads the corpus snapshot, extracts the book and writes the document. \
                      Unset options fall back to the config file, then to the built-in defaults \
                      (Ruth from BHSA TF 2021 into src/data/ruth_bhsa.json)."
    )]
    Extract {
        /// JSON config file with any of: corpus, source, book, features, output
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Corpus snapshot file, or a directory containing corpus.json
        #[arg(long, value_name = "PATH")]
        corpus: Option<PathBuf>,

        /// Book to extract
        #[arg(long)]
        book: Option<String>,

        /// Source label recorded in the document metadata
        #[arg(long)]
        source: Option<String>,

        /// Output file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the JSON Schema of the output document
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match cli.command {
        Commands::Extract { .. } => "extract",
        Commands::Schema => "schema",
    };
    let _guard = versemap_core::logging::init_logging(component, true)?;

    match cli.command {
        Commands::Extract {
            config,
            corpus,
            book,
            source,
            output,
        } => extract::run(extract::Overrides {
            config,
            corpus,
            book,
            source,
            output,
        }),
        Commands::Schema => schema::run(),
    }
}

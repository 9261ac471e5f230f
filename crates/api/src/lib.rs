pub mod adapter;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use adapter::CorpusAdapter;
pub use error::{CorpusError, CorpusResult};
pub use models::*;

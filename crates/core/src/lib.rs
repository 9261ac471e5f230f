pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;

pub use error::{Result, VersemapError};
pub use extract::{ExtractRequest, Extractor, extract};

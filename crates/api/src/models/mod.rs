pub mod feature;
pub mod graph;
pub mod section;

pub use feature::*;
pub use graph::*;
pub use section::*;

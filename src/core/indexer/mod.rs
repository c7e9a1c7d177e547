//! Document reindexing.
//!
//! - **walker**: finds `.doc`/`.pdf` files, keyed by lower-cased name
//! - **normalizer**: flattens extracted markup into index text
//! - **pipeline**: wipe, then extract/normalize/add per file

pub mod normalizer;
pub mod pipeline;
pub mod walker;

pub use normalizer::normalize;
pub use pipeline::ReindexPipeline;
pub use walker::DocumentWalker;

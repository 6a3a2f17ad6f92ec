//! # Docs Module
//!
//! Documentation index retrieval for a chosen language.
//!
//! ## Key Components
//!
//! - [`resolver`] - Cache-first resolution orchestrating storage and fetching
//! - [`fetcher`] - Remote fetching over blocking HTTP, behind a trait seam
//! - [`registry`] - Closed lookup table from language tag to index URL
//! - [`types`] - The index data model shared by cache and remote decoding

pub mod fetcher;
pub mod registry;
pub mod resolver;
pub mod types;

pub use registry::LanguageRegistry;
pub use resolver::IndexResolver;
pub use types::{Index, IndexEntry};

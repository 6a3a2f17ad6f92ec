//! # Cache Module
//!
//! On-disk caching of documentation indices, one record per language.

pub mod storage;

pub use storage::CacheStorage;

//! Core service wiring the resolver, tree builder, and file helpers together.

use anyhow::Result as AnyResult;
use std::path::{Path, PathBuf};

use crate::cache::storage::CacheStorage;
use crate::docs::fetcher::{HttpFetcher, IndexFetcher};
use crate::docs::registry::LanguageRegistry;
use crate::docs::resolver::IndexResolver;
use crate::docs::types::Index;
use crate::error::Result;
use crate::files;
use crate::tree::{DirTree, TreeBuilder};

/// Stateless facade over the core operations.
///
/// Every call resolves independently; the only state shared between calls is
/// the on-disk cache.
#[derive(Debug)]
pub struct DocdexService<F = HttpFetcher> {
    resolver: IndexResolver<F>,
    tree: TreeBuilder,
}

impl DocdexService<HttpFetcher> {
    /// Create the production service.
    pub fn new(cache_dir: Option<PathBuf>, registry: LanguageRegistry) -> AnyResult<Self> {
        let storage = CacheStorage::new(cache_dir)?;
        Ok(Self::with_fetcher(storage, registry, HttpFetcher::new()))
    }
}

impl<F: IndexFetcher> DocdexService<F> {
    /// Create a service with an explicit fetcher implementation.
    pub fn with_fetcher(storage: CacheStorage, registry: LanguageRegistry, fetcher: F) -> Self {
        Self {
            resolver: IndexResolver::with_fetcher(storage, registry, fetcher),
            tree: TreeBuilder::new(),
        }
    }

    /// Documentation index for a language, cache-first.
    pub fn get_indices(&self, language: &str) -> Result<Index> {
        self.resolver.resolve(language)
    }

    /// Raw document body for an entry locator.
    pub fn get_path(&self, locator: &str) -> Result<String> {
        self.resolver.fetch_document(locator)
    }

    /// Directory tree rooted at `dir`; listing failures are tolerated and
    /// logged, never surfaced.
    pub fn get_files(&self, dir: &Path) -> DirTree {
        self.tree.build(dir)
    }

    /// Full text content of a file.
    pub fn open_file(&self, path: &Path) -> Result<String> {
        files::open_file(path)
    }

    /// Overwrite a file with the given content.
    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        files::write_file(path, content)
    }
}

//! Cache-first resolution of documentation indices.

use std::path::PathBuf;

use crate::cache::storage::CacheStorage;
use crate::docs::fetcher::{HttpFetcher, IndexFetcher};
use crate::docs::registry::LanguageRegistry;
use crate::docs::types::Index;
use crate::error::{DocdexError, Result};

/// Resolves a language tag to its documentation index.
///
/// Resolution is cache-first: an existing record is authoritative, even when
/// corrupt (a decode failure surfaces to the caller rather than triggering a
/// re-fetch). Only when no record exists does the resolver consult the
/// language registry and fetch the index remotely, then write the record back
/// on a best-effort basis. Each call performs at most one network round trip.
#[derive(Debug)]
pub struct IndexResolver<F = HttpFetcher> {
    storage: CacheStorage,
    registry: LanguageRegistry,
    fetcher: F,
}

impl IndexResolver<HttpFetcher> {
    /// Create a resolver backed by the blocking HTTP fetcher.
    pub fn new(storage: CacheStorage, registry: LanguageRegistry) -> Self {
        Self::with_fetcher(storage, registry, HttpFetcher::new())
    }
}

impl<F: IndexFetcher> IndexResolver<F> {
    /// Create a resolver with an explicit fetcher implementation.
    pub fn with_fetcher(storage: CacheStorage, registry: LanguageRegistry, fetcher: F) -> Self {
        Self {
            storage,
            registry,
            fetcher,
        }
    }

    /// Resolve the documentation index for `language`.
    pub fn resolve(&self, language: &str) -> Result<Index> {
        if self.storage.has_index(language) {
            let index = self.storage.read_index(language)?;
            tracing::info!(
                language,
                path = %self.storage.index_path(language).display(),
                "loaded index from cache"
            );
            return Ok(index);
        }

        let url = self
            .registry
            .index_url(language)
            .ok_or_else(|| DocdexError::unsupported_language(language))?;

        let index = self.fetcher.fetch_index(url)?;

        // Write-back failures never fail the call; the caller already holds
        // a valid index.
        match self.storage.write_index(language, &index) {
            Ok(()) => tracing::info!(
                language,
                path = %self.storage.index_path(language).display(),
                "cached index"
            ),
            Err(err) => tracing::warn!(language, error = %err, "failed to cache index"),
        }

        Ok(index)
    }

    /// Fetch a single document given its relative locator.
    pub fn fetch_document(&self, locator: &str) -> Result<String> {
        let url = LanguageRegistry::document_url(locator);
        self.fetcher.fetch_document(&url)
    }

    /// Path of the cache record backing `language`
    pub fn cache_path(&self, language: &str) -> PathBuf {
        self.storage.index_path(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::types::IndexEntry;
    use std::collections::BTreeMap;
    use std::fs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Fetcher that serves a fixed index and counts fetches.
    struct MockFetcher {
        index: Index,
        fetches: AtomicUsize,
    }

    impl MockFetcher {
        fn new(index: Index) -> Self {
            Self {
                index,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl IndexFetcher for MockFetcher {
        fn fetch_index(&self, _url: &str) -> Result<Index> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.index.clone())
        }

        fn fetch_document(&self, url: &str) -> Result<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(format!("document at {url}"))
        }
    }

    fn sample_index() -> Index {
        Index {
            entries: vec![
                IndexEntry {
                    name: "Array".to_string(),
                    path: "global_objects/array".to_string(),
                    kind: "class".to_string(),
                },
                IndexEntry {
                    name: "Array.of".to_string(),
                    path: "global_objects/array/of".to_string(),
                    kind: "function".to_string(),
                },
            ],
        }
    }

    fn resolver_in(dir: &TempDir) -> IndexResolver<MockFetcher> {
        let storage = CacheStorage::new(Some(dir.path().to_path_buf())).unwrap();
        IndexResolver::with_fetcher(
            storage,
            LanguageRegistry::builtin(),
            MockFetcher::new(sample_index()),
        )
    }

    #[test]
    fn test_first_call_fetches_and_caches_second_call_hits_cache() {
        let dir = TempDir::new().unwrap();
        let resolver = resolver_in(&dir);

        let first = resolver.resolve("js").unwrap();
        assert_eq!(resolver.fetcher.fetch_count(), 1);
        assert!(resolver.cache_path("js").exists());

        let second = resolver.resolve("js").unwrap();
        assert_eq!(resolver.fetcher.fetch_count(), 1, "second call must not fetch");
        assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn test_unsupported_language_fails_without_fetching() {
        let dir = TempDir::new().unwrap();
        let resolver = resolver_in(&dir);

        let err = resolver.resolve("cobol").unwrap_err();
        assert!(matches!(err, DocdexError::UnsupportedLanguage { .. }));
        assert_eq!(resolver.fetcher.fetch_count(), 0);
    }

    #[test]
    fn test_corrupt_cache_is_terminal_and_skips_network() {
        let dir = TempDir::new().unwrap();
        let resolver = resolver_in(&dir);

        fs::write(resolver.cache_path("py"), "not json at all").unwrap();

        let err = resolver.resolve("py").unwrap_err();
        assert!(matches!(err, DocdexError::CacheDecode { .. }));
        assert_eq!(resolver.fetcher.fetch_count(), 0);
    }

    #[test]
    fn test_cached_record_from_unknown_language_still_resolves() {
        // cache presence short-circuits the registry lookup entirely
        let dir = TempDir::new().unwrap();
        let resolver = resolver_in(&dir);

        let storage = CacheStorage::new(Some(dir.path().to_path_buf())).unwrap();
        storage.write_index("zig", &sample_index()).unwrap();

        let index = resolver.resolve("zig").unwrap();
        assert_eq!(index, sample_index());
        assert_eq!(resolver.fetcher.fetch_count(), 0);
    }

    #[test]
    fn test_fetch_document_resolves_locator_against_base() {
        let dir = TempDir::new().unwrap();
        let resolver = resolver_in(&dir);

        let body = resolver.fetch_document("rust/std/vec").unwrap();
        assert_eq!(
            body,
            "document at https://documents.devdocs.io/rust/std/vec"
        );
    }

    #[test]
    fn test_concurrent_resolution_leaves_a_decodable_record() {
        let dir = TempDir::new().unwrap();
        let resolver = Arc::new(resolver_in(&dir));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                std::thread::spawn(move || resolver.resolve("lua").unwrap())
            })
            .collect();

        for handle in handles {
            let index = handle.join().unwrap();
            assert_eq!(index, sample_index());
        }

        // last writer wins, but the record is never torn
        let storage = CacheStorage::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(storage.read_index("lua").unwrap(), sample_index());
    }

    #[test]
    fn test_registry_from_map_drives_resolution() {
        let dir = TempDir::new().unwrap();
        let storage = CacheStorage::new(Some(dir.path().to_path_buf())).unwrap();
        let registry = LanguageRegistry::from_map(BTreeMap::from([(
            "go".to_string(),
            "https://example.com/go/index.json".to_string(),
        )]));
        let resolver =
            IndexResolver::with_fetcher(storage, registry, MockFetcher::new(sample_index()));

        assert!(resolver.resolve("go").is_ok());
        assert!(matches!(
            resolver.resolve("js").err(),
            Some(DocdexError::UnsupportedLanguage { .. })
        ));
    }
}

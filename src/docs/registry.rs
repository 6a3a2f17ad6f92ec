//! Language registry mapping language tags to documentation index URLs.
//!
//! The mapping is a closed lookup table rather than branching logic so that
//! deployments can extend it from a JSON file without code changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Base URL under which devdocs serves individual documents.
pub const DOCUMENTS_BASE_URL: &str = "https://documents.devdocs.io";

/// Lookup table from language tag to documentation index URL.
///
/// Tags are matched case-insensitively; they are normalized to lowercase on
/// construction and on lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, String>,
}

impl LanguageRegistry {
    /// The builtin language set of the reference deployment.
    pub fn builtin() -> Self {
        let languages = [
            ("js", "https://documents.devdocs.io/javascript/index.json"),
            ("cpp", "https://documents.devdocs.io/cpp/index.json"),
            ("c", "https://documents.devdocs.io/c/index.json"),
            ("py", "https://documents.devdocs.io/python~3.12/index.json"),
            ("rs", "https://documents.devdocs.io/rust/index.json"),
            ("lua", "https://documents.devdocs.io/lua/index.json"),
        ]
        .into_iter()
        .map(|(tag, url)| (tag.to_string(), url.to_string()))
        .collect();

        Self { languages }
    }

    /// Build a registry from an explicit tag → URL mapping.
    pub fn from_map(languages: BTreeMap<String, String>) -> Self {
        let languages = languages
            .into_iter()
            .map(|(tag, url)| (tag.to_ascii_lowercase(), url))
            .collect();
        Self { languages }
    }

    /// Load a registry from a JSON file containing a tag → URL object,
    /// replacing the builtin set.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read language registry: {}", path.display()))?;
        let languages: BTreeMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse language registry: {}", path.display()))?;
        Ok(Self::from_map(languages))
    }

    /// Look up the index URL for a language tag, case-insensitively.
    pub fn index_url(&self, language: &str) -> Option<&str> {
        self.languages
            .get(&language.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Resolve an entry's relative locator against the documents base URL.
    pub fn document_url(locator: &str) -> String {
        format!("{}/{}", DOCUMENTS_BASE_URL, locator.trim_start_matches('/'))
    }

    /// Registered language tags, in sorted order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

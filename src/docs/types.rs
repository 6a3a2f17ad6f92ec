//! Data model for documentation indices.

use serde::{Deserialize, Serialize};

/// One documentation item: a display name, the relative locator used to
/// fetch the full document, and a category tag such as `function` or `class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Ordered collection of documentation entries for one language.
///
/// Entry order is whatever the cache or remote source delivered; entries are
/// never deduplicated, sorted, or mutated after decoding. The on-disk cache
/// record uses exactly this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub entries: Vec<IndexEntry>,
}

impl Index {
    /// Number of entries in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_field_name() {
        let entry = IndexEntry {
            name: "Array.prototype.map".to_string(),
            path: "global_objects/array/map".to_string(),
            kind: "Array".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "Array");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_index_preserves_order_and_ignores_unknown_fields() {
        // devdocs index documents carry a sibling "types" array the core
        // does not consume
        let raw = r#"{
            "entries": [
                {"name": "b", "path": "b", "type": "t"},
                {"name": "a", "path": "a", "type": "t"}
            ],
            "types": [{"name": "t", "count": 2}]
        }"#;
        let index: Index = serde_json::from_str(raw).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries[0].name, "b");
        assert_eq!(index.entries[1].name, "a");
    }
}

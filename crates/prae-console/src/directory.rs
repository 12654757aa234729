//! The link directory: an insertion-ordered, case-insensitive mapping from
//! short keys to link records.
//!
//! Built once at session start from an external source enumeration and
//! never mutated afterward. Keys are lower-cased exactly once, at
//! construction and at lookup, so case-insensitivity holds by construction
//! rather than at individual call sites.

use prae_types::link::LinkRecord;

/// One element of the source enumeration the directory is built from.
///
/// Sources expose a key and, when one could be discovered, a link. Elements
/// missing either are skipped by the builder.
#[derive(Debug, Clone)]
pub struct SourceEntry {
    pub key: String,
    pub link: Option<LinkRecord>,
}

/// The key -> link mapping consulted by `open`, `copy`, and `repos`.
#[derive(Debug, Default)]
pub struct Directory {
    // Small by nature (a handful of shortcuts), so a vector doubles as
    // both the lookup table and the iteration order.
    entries: Vec<(String, LinkRecord)>,
}

impl Directory {
    /// Build a directory from a source enumeration.
    ///
    /// Entries with an empty key or no discoverable link are silently
    /// skipped. Keys are lower-cased. When two entries normalize to the
    /// same key, the later one wins the record while the earlier one keeps
    /// the insertion position (overwrite-in-place).
    pub fn build(sources: impl IntoIterator<Item = SourceEntry>) -> Self {
        let mut entries: Vec<(String, LinkRecord)> = Vec::new();
        for source in sources {
            let key = source.key.to_lowercase();
            if key.is_empty() {
                continue;
            }
            let Some(link) = source.link else {
                continue;
            };
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = link,
                None => entries.push((key, link)),
            }
        }
        Self { entries }
    }

    /// Look up a key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&LinkRecord> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, record)| record)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkRecord)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

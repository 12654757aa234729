//! Link configuration: the directory source for the terminal front end.
//!
//! A TOML file of `[[links]]` entries. Entries without a URL have no
//! discoverable link and end up skipped by the directory builder.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use prae_console::SourceEntry;
use prae_types::error::Result;
use prae_types::link::LinkRecord;

/// Top-level link configuration.
#[derive(Debug, Default, Deserialize)]
pub struct PraeConfig {
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

/// One configured link shortcut.
#[derive(Debug, Default, Deserialize)]
pub struct LinkEntry {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl PraeConfig {
    /// Load and parse a links file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// Convert configured entries into directory source entries.
    pub fn source_entries(self) -> Vec<SourceEntry> {
        self.links
            .into_iter()
            .map(|entry| SourceEntry {
                key: entry.key,
                link: if entry.url.is_empty() {
                    None
                } else {
                    Some(LinkRecord {
                        title: entry.title,
                        url: entry.url,
                    })
                },
            })
            .collect()
    }
}

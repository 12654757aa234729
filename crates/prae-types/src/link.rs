//! Link records: the values the console's directory maps keys to.

use serde::{Deserialize, Serialize};

/// One named link: a human-readable title and the URL it points at.
///
/// Immutable once constructed; owned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
}

impl LinkRecord {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

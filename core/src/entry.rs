//! Dictionary entry as served by the word lookup service.

use serde::{Deserialize, Serialize};

/// One dictionary record for a headword.
///
/// The engine only inspects [`Entry::headword`]; everything else is payload
/// for whatever renders the results. Fields the service omits fall back to
/// their defaults, fields it adds are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub id: u64,
    /// Simplified form; this is the headword the entry was looked up by.
    pub simplified: String,
    pub traditional: String,
    /// Numbered pinyin, e.g. `wo3 men5`.
    pub pinyin_num: String,
    /// Tone-marked pinyin, e.g. `wǒ men`.
    pub pinyin_accent: String,
    pub pinyin_clean: String,
    pub pinyin_no_spaces: String,
    pub also_written: String,
    pub classifiers: String,
    /// Semicolon separated glosses.
    pub definitions: String,
    /// Corpus frequency as reported by the service.
    pub frequency: u64,
}

impl Entry {
    /// Minimal entry carrying only a headword and definitions.
    pub fn new(simplified: impl Into<String>, definitions: impl Into<String>) -> Self {
        Self {
            simplified: simplified.into(),
            definitions: definitions.into(),
            ..Self::default()
        }
    }

    pub fn headword(&self) -> &str {
        &self.simplified
    }

    /// Individual glosses, trimmed, empty pieces dropped.
    pub fn glosses(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

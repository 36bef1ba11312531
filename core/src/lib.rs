//! zidian-core
//!
//! Resolution engine for a segmentation-driven dictionary lookup. Free-form
//! text is reduced to target-script characters, split into candidate tokens
//! by a pluggable [`Segmenter`], and each token is resolved against a
//! session cache and a pluggable [`LookupService`]. Groupings the service does
//! not know are resolved character by character instead.
//!
//! Public API:
//! - `ScriptFilter` - Target-script character extraction
//! - `Segmenter` - Segmentation boundary (`CharSegmenter`, `WordListSegmenter`)
//! - `LookupService` - Remote lookup boundary and its `LookupError`
//! - `ResolutionCache` - Write-once token → entries cache
//! - `UsageHistory` - Per-token search counts
//! - `ResolutionEngine` - Search, resolve and cache getters over a `SessionState`
//! - `Config` - Configuration
use serde::{Deserialize, Serialize};

pub mod filter;
pub use filter::ScriptFilter;

pub mod entry;
pub use entry::Entry;

pub mod cache;
pub use cache::ResolutionCache;

pub mod history;
pub use history::UsageHistory;

pub mod trie;
pub use trie::WordTrie;

pub mod segmenter;
pub use segmenter::{CharSegmenter, Segmenter, WordListSegmenter};

pub mod lookup;
pub use lookup::{LookupError, LookupService};

pub mod session;
pub use session::{ActiveResults, SessionState};

pub mod engine;
pub use engine::{ResolutionEngine, SearchReport};

/// Engine configuration.
///
/// Front ends embed this (flattened) in their own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Do not recount tokens while a search string is being extended or
    /// shortened by live typing. A search that does not continue the
    /// previous one always counts.
    pub guard_incremental_history: bool,

    /// Inclusive code point range of the target script.
    pub script_start: u32,
    pub script_end: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guard_incremental_history: true,
            script_start: filter::CJK_START,
            script_end: filter::CJK_END,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn script_filter(&self) -> ScriptFilter {
        ScriptFilter::new(self.script_start, self.script_end)
    }
}

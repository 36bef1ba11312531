use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Client configuration that extends the engine `Config` from core.
///
/// This configuration includes:
/// - All engine options from `zidian_core::Config` (flattened via serde)
/// - Location of the word service and its endpoints
/// - Request timeout
/// - Optional word list for the segmenter
///
/// # Example
///
/// ```rust
/// use zidian::ClientConfig;
///
/// let config = ClientConfig::from_toml_str("base_url = \"http://dict.local:9000\"").unwrap();
/// assert_eq!(config.base_url, "http://dict.local:9000");
/// assert!(config.base().guard_incremental_history);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Engine configuration (history guard, target script range)
    #[serde(flatten)]
    pub base: zidian_core::Config,

    /// Root URL of the word service, without trailing slash
    pub base_url: String,

    /// Path under `base_url` for word lookups; the token is appended
    pub words_path: String,

    /// Path under `base_url` for single-character records
    pub characters_path: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Word list used to group characters into words before lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base: zidian_core::Config::default(),
            base_url: "http://localhost:8000".to_string(),
            words_path: "/words/simplified".to_string(),
            characters_path: "/characters/simplified".to_string(),
            timeout_ms: 2000,
            words_file: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Get a reference to the engine config
    pub fn base(&self) -> &zidian_core::Config {
        &self.base
    }

    /// Get a mutable reference to the engine config
    pub fn base_mut(&mut self) -> &mut zidian_core::Config {
        &mut self.base
    }
}

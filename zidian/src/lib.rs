//! zidian crate root
//!
//! Chinese dictionary lookup backed by a remote word service. This crate
//! supplies the HTTP lookup service and client configuration, and wires them
//! into the `zidian-core` resolution engine.
//!
//! Public API exported here:
//! - `HttpLookup` from `remote`
//! - `ClientConfig` from `config`
//! - `Session` and `open_session` for a ready-to-use engine

pub mod config;
pub mod remote;

pub use config::ClientConfig;
pub use remote::HttpLookup;

// Convenience re-exports for common types used by callers.
pub use zidian_core::{
    CharSegmenter, Entry, LookupError, LookupService, ResolutionEngine, SearchReport, Segmenter,
    WordListSegmenter,
};

/// Engine over the configured segmenter and the HTTP word service.
pub type Session = ResolutionEngine<Box<dyn Segmenter>, HttpLookup>;

/// Segmenter for `config`: word-list maximum matching when a word file is
/// configured, one token per character otherwise.
pub fn load_segmenter(config: &ClientConfig) -> std::io::Result<Box<dyn Segmenter>> {
    match &config.words_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(Box::new(WordListSegmenter::from_word_list(&content)))
        }
        None => Ok(Box::new(CharSegmenter)),
    }
}

/// Build a session from configuration.
pub fn open_session(config: &ClientConfig) -> Result<Session, Box<dyn std::error::Error>> {
    let segmenter = load_segmenter(config)?;
    let lookup = HttpLookup::new(config)?;
    Ok(ResolutionEngine::with_config(segmenter, lookup, config.base()))
}

//! HTTP access to the word service.
//!
//! The service exposes two read-only endpoints:
//! - `GET {base_url}/words/simplified/{word}` → JSON array of entries
//! - `GET {base_url}/characters/simplified/{char}` → JSON character record
//!
//! A 404 or an empty array means the word is not a headword. Any other
//! failure (connection, timeout, non-success status, bad body) is reported as
//! a [`LookupError`] and never retried here.
//!
//! Uses `reqwest` blocking client for simplicity - no async runtime needed!

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::debug;
use zidian_core::{Entry, LookupError, LookupService};

use crate::config::ClientConfig;

/// Blocking HTTP client for the word service.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: Client,
    base_url: String,
    words_path: String,
    characters_path: String,
}

impl HttpLookup {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            words_path: config.words_path.clone(),
            characters_path: config.characters_path.clone(),
        })
    }

    /// URL for a word lookup; the token is percent-encoded.
    pub fn word_url(&self, token: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.words_path,
            urlencoding::encode(token)
        )
    }

    /// URL for a character record.
    pub fn character_url(&self, ch: char) -> String {
        let mut buf = [0u8; 4];
        format!(
            "{}{}/{}",
            self.base_url,
            self.characters_path,
            urlencoding::encode(ch.encode_utf8(&mut buf))
        )
    }

    /// Fetch the character record for `ch` (stroke data, radicals, ...).
    ///
    /// `Ok(None)` when the service has no record for it.
    pub fn character(&self, ch: char) -> Result<Option<serde_json::Value>, LookupError> {
        let token = ch.to_string();
        let Some(response) = self.get(&self.character_url(ch), &token)? else {
            return Ok(None);
        };
        response
            .json::<serde_json::Value>()
            .map(Some)
            .map_err(|e| LookupError::Decode {
                token,
                message: e.to_string(),
            })
    }

    /// GET `url`; `Ok(None)` on 404.
    fn get(&self, url: &str, token: &str) -> Result<Option<Response>, LookupError> {
        debug!(url, "requesting");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| LookupError::Transport {
                token: token.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                token: token.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(Some(response))
    }
}

impl LookupService for HttpLookup {
    fn lookup(&self, token: &str) -> Result<Vec<Entry>, LookupError> {
        let Some(response) = self.get(&self.word_url(token), token)? else {
            return Ok(vec![]);
        };
        response
            .json::<Vec<Entry>>()
            .map_err(|e| LookupError::Decode {
                token: token.to_string(),
                message: e.to_string(),
            })
    }
}

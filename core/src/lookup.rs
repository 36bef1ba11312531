//! The lookup service boundary.
//!
//! A lookup either returns entries (possibly none, which means the token is
//! not a headword) or fails. Failing is a transport concern and is kept
//! distinct from "not found" so the engine can fall back on the latter and
//! skip on the former.

use crate::entry::Entry;

/// Error returned by a [`LookupService`] when the request itself failed.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a response (connect, timeout, I/O).
    #[error("transport error looking up '{token}': {source}")]
    Transport {
        token: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service answered with a non-success status other than 404.
    #[error("lookup of '{token}' failed with status {status}")]
    Status { token: String, status: u16 },

    /// The response body was not a list of entries.
    #[error("malformed response for '{token}': {message}")]
    Decode { token: String, message: String },
}

impl LookupError {
    /// The token whose lookup failed.
    pub fn token(&self) -> &str {
        match self {
            LookupError::Transport { token, .. }
            | LookupError::Status { token, .. }
            | LookupError::Decode { token, .. } => token,
        }
    }
}

/// Resolves one token to its dictionary entries.
///
/// `Ok(vec![])` means "not found". Implementations own their timeout and
/// retry policy; the engine never retries.
pub trait LookupService {
    fn lookup(&self, token: &str) -> Result<Vec<Entry>, LookupError>;
}

impl<L: LookupService + ?Sized> LookupService for &L {
    fn lookup(&self, token: &str) -> Result<Vec<Entry>, LookupError> {
        (**self).lookup(token)
    }
}

impl<L: LookupService + ?Sized> LookupService for Box<L> {
    fn lookup(&self, token: &str) -> Result<Vec<Entry>, LookupError> {
        (**self).lookup(token)
    }
}

//! Lookup session state.
//!
//! `SessionState` holds everything one browsing session accumulates: the
//! current search string and its segmentation, the resolution cache, the set
//! of tokens in view and the usage history. Callers get read access only;
//! every mutation goes through [`crate::ResolutionEngine`].

use ahash::AHashSet;

use crate::cache::ResolutionCache;
use crate::entry::Entry;
use crate::history::UsageHistory;

/// Tokens with confirmed entries for the latest search, in the order they
/// were resolved (left to right, failed groupings expanded in place).
#[derive(Debug, Default, Clone)]
pub struct ActiveResults {
    order: Vec<String>,
    members: AHashSet<String>,
}

impl ActiveResults {
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` if the token was not already present.
    fn insert(&mut self, token: &str) -> bool {
        if self.members.insert(token.to_string()) {
            self.order.push(token.to_string());
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

#[derive(Debug, Default, Clone)]
pub struct SessionState {
    search_string: String,
    segmentation: Vec<String>,
    cache: ResolutionCache,
    active: ActiveResults,
    history: UsageHistory,
    /// Tokens already counted in the current typing run.
    counted: AHashSet<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filtered text of the latest search.
    pub fn search_string(&self) -> &str {
        &self.search_string
    }

    /// Tokens the segmenter produced for the latest search.
    pub fn segmentation(&self) -> &[String] {
        &self.segmentation
    }

    /// Token at `index` in the latest segmentation.
    pub fn segment_at(&self, index: usize) -> Option<&str> {
        self.segmentation.get(index).map(String::as_str)
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn active(&self) -> &ActiveResults {
        &self.active
    }

    pub fn history(&self) -> &UsageHistory {
        &self.history
    }

    /// Active tokens paired with their cached entries.
    pub fn active_entries(&self) -> impl Iterator<Item = (&str, &[Entry])> {
        self.active
            .iter()
            .map(move |token| (token, self.cache.get(token)))
    }

    /// Start a new top-level search over `filtered`.
    ///
    /// When `continues_run` is false the history guard is reset, making every
    /// token eligible to be counted again.
    pub(crate) fn begin_search(&mut self, filtered: String, continues_run: bool) {
        self.active.clear();
        if !continues_run {
            self.counted.clear();
        }
        self.search_string = filtered;
        self.segmentation.clear();
    }

    pub(crate) fn set_segmentation(&mut self, tokens: Vec<String>) {
        self.segmentation = tokens;
    }

    pub(crate) fn cache_mut(&mut self) -> &mut ResolutionCache {
        &mut self.cache
    }

    /// Mark `token` as resolved for the current search and bump its history
    /// count if it was neither active yet nor counted earlier in this run.
    ///
    /// Returns whether the history was incremented.
    pub(crate) fn mark_resolved(&mut self, token: &str) -> bool {
        debug_assert!(self.cache.has(token), "active token must be cached");
        let newly_active = self.active.insert(token);
        if newly_active && self.counted.insert(token.to_string()) {
            self.history.record(token);
            true
        } else {
            false
        }
    }
}

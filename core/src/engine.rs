// core/src/engine.rs
//
// Resolution engine: filters and segments search text, then resolves each
// token against the session cache and the lookup service, falling back to
// single characters when a grouping is not a headword.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::entry::Entry;
use crate::filter::ScriptFilter;
use crate::lookup::{LookupError, LookupService};
use crate::segmenter::Segmenter;
use crate::session::SessionState;
use crate::Config;

/// Deepest level a work item can reach: segmentation tokens sit at 0, the
/// characters of a not-found grouping at 1.
pub const MAX_DEPTH: usize = 1;

/// What happened while resolving one batch of tokens.
///
/// This is how lookup failures reach the caller: a failed token is left out
/// of the active results and its error is collected here.
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Tokens sent to the lookup service, in call order.
    pub lookups: Vec<String>,
    /// Tokens answered from the cache.
    pub cache_hits: usize,
    /// Multi-character tokens that were not found and got split.
    pub decomposed: Vec<String>,
    /// Single characters the service did not know.
    pub not_found: Vec<String>,
    /// Lookups that failed outright.
    pub failures: Vec<LookupError>,
    /// Deepest work item processed.
    pub max_depth: usize,
}

impl SearchReport {
    pub fn lookup_count(&self) -> usize {
        self.lookups.len()
    }

    /// True when no lookup failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct WorkItem {
    token: String,
    depth: usize,
}

/// Cache-backed dictionary resolution over a pluggable segmenter and lookup
/// service.
///
/// The engine owns the [`SessionState`]; all operations that change it take
/// `&mut self`, so overlapping searches need an outer lock (e.g.
/// `Mutex<ResolutionEngine<_, _>>`) and can never interleave their updates.
pub struct ResolutionEngine<S, L> {
    segmenter: S,
    service: L,
    filter: ScriptFilter,
    guard_incremental: bool,
    state: SessionState,
}

impl<S: Segmenter, L: LookupService> ResolutionEngine<S, L> {
    /// Engine with default configuration.
    pub fn new(segmenter: S, service: L) -> Self {
        Self::with_config(segmenter, service, &Config::default())
    }

    pub fn with_config(segmenter: S, service: L, config: &Config) -> Self {
        Self {
            segmenter,
            service,
            filter: config.script_filter(),
            guard_incremental: config.guard_incremental_history,
            state: SessionState::new(),
        }
    }

    /// Run a top-level search over free-form text.
    ///
    /// Never fails: text without target-script characters leaves an empty
    /// segmentation and an empty result set. Lookup failures are returned in
    /// the report.
    pub fn search(&mut self, raw: &str) -> SearchReport {
        let filtered = self.filter.filter(raw);
        let continues_run = self.guard_incremental
            && Self::continues(self.state.search_string(), &filtered);
        self.state.begin_search(filtered, continues_run);

        let tokens = self.segmenter.segment(self.state.search_string());
        debug!(
            search = self.state.search_string(),
            tokens = tokens.len(),
            continues_run,
            "segmented search string"
        );
        self.state.set_segmentation(tokens.clone());

        let report = self.resolve(tokens);
        info!(
            search = self.state.search_string(),
            active = self.state.active().len(),
            lookups = report.lookup_count(),
            cache_hits = report.cache_hits,
            failures = report.failures.len(),
            "search resolved"
        );
        report
    }

    /// Resolve `tokens` in order into the current result set.
    ///
    /// A token that is cached becomes active immediately. Otherwise the
    /// service is asked; a non-empty answer is cached and made active, an
    /// empty answer for a multi-character token queues its characters right
    /// behind it, and a failure skips the token.
    pub fn resolve<I, T>(&mut self, tokens: I) -> SearchReport
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut queue: VecDeque<WorkItem> = tokens
            .into_iter()
            .map(|t| WorkItem {
                token: t.into(),
                depth: 0,
            })
            .collect();
        let mut report = SearchReport::default();

        while let Some(WorkItem { token, depth }) = queue.pop_front() {
            if token.is_empty() {
                continue;
            }
            debug_assert!(depth <= MAX_DEPTH);
            report.max_depth = report.max_depth.max(depth);

            if self.state.cache().has(&token) {
                self.state.cache_mut().record_hit();
                report.cache_hits += 1;
                debug!(token = token.as_str(), "cache hit");
                self.state.mark_resolved(&token);
                continue;
            }

            self.state.cache_mut().record_miss();
            report.lookups.push(token.clone());
            match self.service.lookup(&token) {
                Ok(entries) if !entries.is_empty() => {
                    debug!(token = token.as_str(), entries = entries.len(), "fetched");
                    self.state.cache_mut().put(token.as_str(), entries);
                    self.state.mark_resolved(&token);
                }
                Ok(_) => {
                    if token.chars().nth(1).is_some() {
                        debug!(token = token.as_str(), "not found, splitting into characters");
                        for ch in token.chars().rev() {
                            queue.push_front(WorkItem {
                                token: ch.to_string(),
                                depth: depth + 1,
                            });
                        }
                        report.decomposed.push(token);
                    } else {
                        debug!(token = token.as_str(), "character not found");
                        report.not_found.push(token);
                    }
                }
                Err(err) => {
                    warn!(token = token.as_str(), error = %err, "lookup failed, skipping token");
                    report.failures.push(err);
                }
            }
        }

        report
    }

    /// Cached entries for `token`, without side effects.
    pub fn lookup(&self, token: &str) -> Option<&[Entry]> {
        self.state.cache().try_get(token)
    }

    /// Entry `position` of a cached token.
    ///
    /// # Panics
    /// If the token is not cached or `position` is out of range.
    pub fn lookup_at(&self, token: &str, position: usize) -> &Entry {
        let entries = self.state.cache().get(token);
        match entries.get(position) {
            Some(entry) => entry,
            None => panic!(
                "position {position} out of range for '{token}' ({} entries)",
                entries.len()
            ),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn search_string(&self) -> &str {
        self.state.search_string()
    }

    pub fn segmentation(&self) -> &[String] {
        self.state.segmentation()
    }

    pub fn active(&self) -> &crate::session::ActiveResults {
        self.state.active()
    }

    pub fn history(&self) -> &crate::history::UsageHistory {
        self.state.history()
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    pub fn service(&self) -> &L {
        &self.service
    }

    /// Whether `next` continues the typing run that produced `previous`:
    /// one extends or shortens the other.
    fn continues(previous: &str, next: &str) -> bool {
        !previous.is_empty()
            && !next.is_empty()
            && (next.starts_with(previous) || previous.starts_with(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::CharSegmenter;
    use std::cell::RefCell;

    struct Scripted {
        known: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl LookupService for Scripted {
        fn lookup(&self, token: &str) -> Result<Vec<Entry>, LookupError> {
            self.calls.borrow_mut().push(token.to_string());
            if self.known.iter().any(|k| *k == token) {
                Ok(vec![Entry::new(token, "gloss")])
            } else {
                Ok(vec![])
            }
        }
    }

    fn engine(known: Vec<&'static str>) -> ResolutionEngine<CharSegmenter, Scripted> {
        ResolutionEngine::new(
            CharSegmenter,
            Scripted {
                known,
                calls: RefCell::new(vec![]),
            },
        )
    }

    #[test]
    fn test_continues() {
        type E = ResolutionEngine<CharSegmenter, Scripted>;
        assert!(E::continues("你好", "你好世界"));
        assert!(E::continues("你好世界", "你好"));
        assert!(E::continues("你好", "你好"));
        assert!(!E::continues("", "你好"));
        assert!(!E::continues("你好", "世界"));
        assert!(!E::continues("你好", ""));
    }

    #[test]
    fn test_single_character_not_found_is_dropped() {
        let mut e = engine(vec!["我"]);
        let report = e.search("我龘");
        assert_eq!(report.not_found, vec!["龘"]);
        assert!(report.decomposed.is_empty());
        assert_eq!(e.active().iter().collect::<Vec<_>>(), vec!["我"]);
    }

    #[test]
    fn test_resolve_adds_to_current_results() {
        let mut e = engine(vec!["我", "是"]);
        e.search("我");
        let report = e.resolve(["是"]);
        assert_eq!(report.lookup_count(), 1);
        assert_eq!(e.active().iter().collect::<Vec<_>>(), vec!["我", "是"]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_lookup_at_out_of_range_panics() {
        let mut e = engine(vec!["我"]);
        e.search("我");
        let _ = e.lookup_at("我", 3);
    }

    #[test]
    fn test_disabled_guard_counts_every_search() {
        let config = Config {
            guard_incremental_history: false,
            ..Config::default()
        };
        let mut e = ResolutionEngine::with_config(
            CharSegmenter,
            Scripted {
                known: vec!["你"],
                calls: RefCell::new(vec![]),
            },
            &config,
        );
        e.search("你");
        e.search("你");
        assert_eq!(e.history().count("你"), 2);
    }
}

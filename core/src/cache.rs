//! Process-local resolution cache.
//!
//! Maps a token to the entries the lookup service returned for it. A token
//! is only ever stored with a non-empty entry list; "not found" results are
//! never cached, so the same grouping is asked about again on a later search.
//! There is no eviction: the cache lives as long as the session.

use ahash::AHashMap;

use crate::entry::Entry;

#[derive(Debug, Default, Clone)]
pub struct ResolutionCache {
    entries: AHashMap<String, Vec<Entry>>,
    hits: usize,
    misses: usize,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Entries for a cached token.
    ///
    /// # Panics
    /// If `token` is not cached. Check with [`ResolutionCache::has`] or use
    /// [`ResolutionCache::try_get`].
    pub fn get(&self, token: &str) -> &[Entry] {
        match self.entries.get(token) {
            Some(entries) => entries,
            None => panic!("token '{token}' is not in the resolution cache"),
        }
    }

    pub fn try_get(&self, token: &str) -> Option<&[Entry]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// Store entries for `token`. Last write wins.
    ///
    /// Returns `false` and stores nothing when `entries` is empty.
    pub fn put(&mut self, token: impl Into<String>, entries: Vec<Entry>) -> bool {
        if entries.is_empty() {
            return false;
        }
        self.entries.insert(token.into(), entries);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached tokens, in no particular order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// (hits, misses) observed while resolving tokens.
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// Hit rate as a percentage, `None` before the first probe.
    pub fn hit_rate(&self) -> Option<f32> {
        let total = self.hits + self.misses;
        if total == 0 {
            None
        } else {
            Some((self.hits as f32 / total as f32) * 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut cache = ResolutionCache::new();
        assert!(!cache.has("我们"));

        assert!(cache.put("我们", vec![Entry::new("我们", "we; us")]));
        assert!(cache.has("我们"));
        assert_eq!(cache.get("我们")[0].definitions, "we; us");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_empty_list_not_stored() {
        let mut cache = ResolutionCache::new();
        assert!(!cache.put("是谁", vec![]));
        assert!(!cache.has("是谁"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_overwrite_last_write_wins() {
        let mut cache = ResolutionCache::new();
        cache.put("是", vec![Entry::new("是", "is")]);
        cache.put(
            "是",
            vec![Entry::new("是", "is; are"), Entry::new("是", "variant")],
        );
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("是").len(), 2);
        assert_eq!(cache.get("是")[0].definitions, "is; are");
    }

    #[test]
    fn test_get_is_reference_stable() {
        let mut cache = ResolutionCache::new();
        cache.put("朋友", vec![Entry::new("朋友", "friend")]);
        let a = cache.get("朋友").as_ptr();
        let b = cache.get("朋友").as_ptr();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    #[should_panic(expected = "not in the resolution cache")]
    fn test_get_uncached_panics() {
        let cache = ResolutionCache::new();
        let _ = cache.get("谁");
    }

    #[test]
    fn test_hit_rate() {
        let mut cache = ResolutionCache::new();
        assert_eq!(cache.hit_rate(), None);

        cache.record_miss();
        cache.record_hit();
        assert_eq!(cache.stats(), (1, 1));
        let rate = cache.hit_rate().unwrap();
        assert!((rate - 50.0).abs() < 0.01);
    }
}

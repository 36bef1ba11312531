//! Per-token usage history.
//!
//! Counts how many searches resolved each token. Counts only grow, and the
//! history remembers the order in which tokens were first seen so that a
//! history view lists them the way the user met them.
use ahash::AHashMap;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct UsageHistory {
    counts: AHashMap<String, u64>,
    order: Vec<String>,
}

impl UsageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `token` by one.
    pub(crate) fn record(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count = count.saturating_add(1),
            None => {
                self.counts.insert(token.to_string(), 1);
                self.order.push(token.to_string());
            }
        }
    }

    /// Count for `token`, 0 if never recorded.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(move |t| (t.as_str(), self.counts[t.as_str()]))
    }

    /// Pairs sorted by count descending; ties keep first-seen order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Owned copy of the counts, for export or tests.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut h = UsageHistory::new();
        assert_eq!(h.count("说"), 0);

        h.record("说");
        h.record("说");
        h.record("再见");
        assert_eq!(h.count("说"), 2);
        assert_eq!(h.count("再见"), 1);
        assert_eq!(h.total(), 3);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_iter_first_seen_order() {
        let mut h = UsageHistory::new();
        for t in ["我们", "说", "再见", "说", "我们", "说"] {
            h.record(t);
        }
        let pairs: Vec<_> = h.iter().collect();
        assert_eq!(pairs, vec![("我们", 2), ("说", 3), ("再见", 1)]);
    }

    #[test]
    fn test_sorted_by_count() {
        let mut h = UsageHistory::new();
        for t in ["我们", "说", "再见", "说", "再见", "说"] {
            h.record(t);
        }
        let sorted = h.sorted_by_count();
        assert_eq!(sorted, vec![("说", 3), ("再见", 2), ("我们", 1)]);
    }

    #[test]
    fn test_snapshot() {
        let mut h = UsageHistory::new();
        h.record("你好");
        let snap = h.snapshot();
        assert_eq!(snap.get("你好"), Some(&1));
        assert_eq!(snap.len(), 1);
    }
}

/// Character trie over known words, used by the word-list segmenter.
use ahash::AHashMap;

/// A prefix tree keyed by `char`.
///
/// Each node that terminates a known word is marked; the segmenter walks the
/// trie from a position in the input and keeps the longest marked node it
/// passes through.
///
/// # Example
/// ```
/// use zidian_core::trie::WordTrie;
///
/// let mut trie = WordTrie::new();
/// trie.insert("你好");
/// trie.insert("你");
///
/// assert!(trie.contains("你好"));
/// assert!(!trie.contains("好"));
///
/// let input: Vec<char> = "你好吗".chars().collect();
/// assert_eq!(trie.longest_match(&input, 0), Some(2));
/// assert_eq!(trie.longest_match(&input, 2), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct WordTrie {
    children: AHashMap<char, WordTrie>,
    terminal: bool,
}

impl WordTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Empty strings are ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = self;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.terminal = true;
    }

    /// Whether `word` was inserted as a complete word (not just a prefix).
    pub fn contains(&self, word: &str) -> bool {
        let mut node = self;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal && !word.is_empty()
    }

    /// Walk from `start` and return the exclusive end index of the longest
    /// known word beginning there.
    pub fn longest_match(&self, input: &[char], start: usize) -> Option<usize> {
        let mut best = None;
        let mut node = self;
        for (idx, ch) in input.iter().enumerate().skip(start) {
            match node.children.get(ch) {
                Some(child) => {
                    node = child;
                    if node.terminal {
                        best = Some(idx + 1);
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = WordTrie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

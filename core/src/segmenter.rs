// core/src/segmenter.rs
//
// Segmentation boundary and two stock segmenters. Neither knows anything
// about a particular script: they split on characters or on a caller
// supplied word list.

use crate::trie::WordTrie;

/// Splits filtered text into ordered candidate tokens.
///
/// Implementations are best effort: they may produce groupings that are not
/// dictionary headwords. The engine handles that by falling back to single
/// characters, so a segmenter does not need to be conservative.
pub trait Segmenter {
    /// Tokens in reading order. Concatenated, they must reproduce `text`.
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, text: &str) -> Vec<String> {
        (**self).segment(text)
    }
}

/// Every character is its own token.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharSegmenter;

impl Segmenter for CharSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.chars().map(String::from).collect()
    }
}

/// Forward maximum matching over a list of known words.
///
/// At each position the longest known word is taken; a character that starts
/// no known word becomes a single-character token.
///
/// # Example
/// ```
/// use zidian_core::{Segmenter, WordListSegmenter};
///
/// let seg = WordListSegmenter::from_words(["我们", "你们", "朋友"]);
/// assert_eq!(seg.segment("我们是你们的朋友"), vec!["我们", "是", "你们", "的", "朋友"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct WordListSegmenter {
    trie: WordTrie,
}

impl WordListSegmenter {
    pub fn new(trie: WordTrie) -> Self {
        Self { trie }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(words.into_iter().collect())
    }

    /// Parse a word list: one word per line, first whitespace-separated field
    /// only (so frequency-annotated lists work), `#` starts a comment line.
    pub fn from_word_list(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .filter_map(|l| l.split_whitespace().next());
        Self::from_words(words)
    }

    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }
}

impl Segmenter for WordListSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < chars.len() {
            let end = self.trie.longest_match(&chars, pos).unwrap_or(pos + 1);
            tokens.push(chars[pos..end].iter().collect());
            pos = end;
        }
        tokens
    }
}

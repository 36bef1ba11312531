//! Target-script character filtering.
//!
//! Search input arrives as free-form text (mixed with Latin, digits,
//! punctuation). Only characters inside the target Unicode block take part
//! in segmentation and lookup.

/// First code point of the CJK Unified Ideographs block matched by default.
pub const CJK_START: u32 = 0x4E00;
/// Last code point (inclusive) matched by default.
pub const CJK_END: u32 = 0x9FA5;

/// Keeps characters whose code point lies in `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptFilter {
    start: u32,
    end: u32,
}

impl ScriptFilter {
    /// Filter for an arbitrary inclusive code point range.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Filter for the common CJK ideographs.
    pub fn cjk() -> Self {
        Self::new(CJK_START, CJK_END)
    }

    /// Whether `ch` belongs to the target script.
    pub fn matches(&self, ch: char) -> bool {
        (self.start..=self.end).contains(&(ch as u32))
    }

    /// Return the target-script subsequence of `text`, in order.
    pub fn filter(&self, text: &str) -> String {
        text.chars().filter(|&ch| self.matches(ch)).collect()
    }
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self::cjk()
    }
}

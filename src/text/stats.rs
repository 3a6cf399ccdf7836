//! Word, character, sentence, paragraph and line counts.
//!
//! Every function is total: empty input yields zero counts.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Average reading speed used by [`estimate_reading_time`].
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Sentence terminators (a run counts once: `"Wait..."` is one sentence).
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// One blank line or more, whitespace-only lines included.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Aggregate statistics for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub reading_time_minutes: usize,
}

impl TextMetrics {
    /// Compute all metrics using the given reading speed.
    pub fn from_text(text: &str, words_per_minute: usize) -> Self {
        let words = count_words(text);
        Self {
            words,
            characters: count_characters(text),
            characters_no_spaces: count_characters_no_spaces(text),
            sentences: count_sentences(text),
            paragraphs: count_paragraphs(text),
            lines: count_lines(text),
            reading_time_minutes: estimate_reading_time_with(words, words_per_minute),
        }
    }

    /// Reading time as shown to users (`"< 1 min"`, `"3 min"`).
    pub fn reading_time_label(&self) -> String {
        format_reading_time(self.reading_time_minutes)
    }
}

/// Number of whitespace-separated tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters, whitespace included.
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Number of characters after removing all whitespace.
pub fn count_characters_no_spaces(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Number of sentences delimited by `.`, `!` or `?`.
///
/// Trailing text without a terminator counts as a sentence.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Number of non-empty blocks separated by blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}

/// Number of lines (`\n`, `\r\n` and `\r` all break lines).
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    LINE_BREAK.split(text).count()
}

/// Minutes needed to read `word_count` words at 200 words per minute.
#[inline]
pub fn estimate_reading_time(word_count: usize) -> usize {
    estimate_reading_time_with(word_count, DEFAULT_WORDS_PER_MINUTE)
}

/// Minutes needed to read `word_count` words, rounded up.
///
/// A rate of zero falls back to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn estimate_reading_time_with(word_count: usize, words_per_minute: usize) -> usize {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    word_count.div_ceil(wpm)
}

/// Format a reading time for display.
pub fn format_reading_time(minutes: usize) -> String {
    if minutes == 0 {
        "< 1 min".to_string()
    } else {
        format!("{minutes} min")
    }
}

//! Case conversion between text and identifier grammars.
//!
//! Identifier styles (camel, Pascal, snake, kebab) share one tokenizer:
//! any run of non-alphanumeric characters separates words, and inside a
//! run a lower (or digit)→upper transition starts a new word (`helloWorld` →
//! `hello`, `World`). An acronym followed by a capitalized word splits
//! before its last capital (`XMLHttp` → `XML`, `Http`).

use serde::{Deserialize, Serialize};

/// Available case conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CaseKind {
    /// UPPERCASE
    Upper,
    /// lowercase
    Lower,
    /// Title Case
    Title,
    /// Sentence case.
    Sentence,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
}

impl CaseKind {
    pub const ALL: [Self; 8] = [
        Self::Upper,
        Self::Lower,
        Self::Title,
        Self::Sentence,
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
    ];

    /// Human readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upper => "Uppercase",
            Self::Lower => "Lowercase",
            Self::Title => "Title Case",
            Self::Sentence => "Sentence case",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::Kebab => "kebab-case",
        }
    }

    /// Apply this conversion to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => to_upper_case(text),
            Self::Lower => to_lower_case(text),
            Self::Title => to_title_case(text),
            Self::Sentence => to_sentence_case(text),
            Self::Camel => to_camel_case(text),
            Self::Pascal => to_pascal_case(text),
            Self::Snake => to_snake_case(text),
            Self::Kebab => to_kebab_case(text),
        }
    }
}

/// Run every conversion over `text`, in [`CaseKind::ALL`] order.
pub fn convert_all(text: &str) -> Vec<(CaseKind, String)> {
    CaseKind::ALL
        .iter()
        .map(|&kind| (kind, kind.apply(text)))
        .collect()
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Capitalize the first letter of every whitespace-separated word.
///
/// Leading punctuation is kept (`"(hello"` → `"(Hello"`), whitespace is
/// preserved as-is.
pub fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start && c.is_alphanumeric() {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Capitalize the first letter after each `.` and lowercase the rest.
pub fn to_sentence_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut capitalize = true;
    for c in text.chars() {
        if c == '.' {
            capitalize = true;
            out.push(c);
        } else if capitalize && c.is_alphanumeric() {
            capitalize = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

pub fn to_camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in split_words(text).into_iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

pub fn to_pascal_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in split_words(text) {
        push_capitalized(&mut out, word);
    }
    out
}

pub fn to_snake_case(text: &str) -> String {
    join_lower(text, "_")
}

pub fn to_kebab_case(text: &str) -> String {
    join_lower(text, "-")
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Split text into identifier words.
fn split_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    for run in text.split(|c: char| !c.is_alphanumeric()) {
        if !run.is_empty() {
            split_case_boundaries(run, &mut words);
        }
    }
    words
}

/// Split an alphanumeric run on lower/digit→upper and acronym→word transitions.
fn split_case_boundaries<'a>(run: &'a str, words: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = run.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let cur = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && cur.is_uppercase();
        let acronym_end = prev.is_uppercase()
            && cur.is_uppercase()
            && next.is_some_and(char::is_lowercase);

        if lower_to_upper || acronym_end {
            let at = chars[i].0;
            words.push(&run[start..at]);
            start = at;
        }
    }
    words.push(&run[start..]);
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

fn join_lower(text: &str, separator: &str) -> String {
    split_words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_lower() {
        assert_eq!(to_upper_case("hello world"), "HELLO WORLD");
        assert_eq!(to_upper_case("Hello World"), "HELLO WORLD");
        assert_eq!(to_upper_case(""), "");
        assert_eq!(to_lower_case("HELLO WORLD"), "hello world");
        assert_eq!(to_lower_case("Hello World"), "hello world");
        assert_eq!(to_lower_case(""), "");
        assert_eq!(to_upper_case("straße"), "STRASSE");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("hello world"), "Hello World");
        assert_eq!(to_title_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(to_title_case("  spaced\tout  "), "  Spaced\tOut  ");
        assert_eq!(to_title_case("(hello) world"), "(Hello) World");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            to_sentence_case("hello world. this is a test."),
            "Hello world. This is a test."
        );
        assert_eq!(to_sentence_case("HELLO"), "Hello");
        assert_eq!(to_sentence_case(""), "");
        assert_eq!(to_sentence_case("ONE.TWO"), "One.Two");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("Hello World"), "helloWorld");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("hello_world_again"), "helloWorldAgain");
        assert_eq!(to_camel_case("  --leading and trailing--  "), "leadingAndTrailing");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("hello world"), "hello_world");
        assert_eq!(to_snake_case("Hello World"), "hello_world");
        assert_eq!(to_snake_case("helloWorld"), "hello_world");
        assert_eq!(to_snake_case("__already__snake__"), "already_snake");
        assert_eq!(to_snake_case("XMLHttpRequest"), "xml_http_request");
        assert_eq!(to_snake_case("version 2 release"), "version_2_release");
        assert_eq!(to_snake_case("version2Release"), "version2_release");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("hello world"), "hello-world");
        assert_eq!(to_kebab_case("Hello World"), "hello-world");
        assert_eq!(to_kebab_case("helloWorld"), "hello-world");
        assert_eq!(to_kebab_case("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("helloWorld"), vec!["hello", "World"]);
        assert_eq!(split_words("parseHTMLString"), vec!["parse", "HTML", "String"]);
        assert_eq!(split_words("ALLCAPS"), vec!["ALLCAPS"]);
        assert_eq!(split_words("html5Parser"), vec!["html5", "Parser"]);
        assert_eq!(split_words("utf8"), vec!["utf8"]);
        assert_eq!(split_words("a-b_c d"), vec!["a", "b", "c", "d"]);
        assert!(split_words("--- ___").is_empty());
    }

    #[test]
    fn test_case_kind_apply() {
        assert_eq!(CaseKind::Camel.apply("hello world"), "helloWorld");
        assert_eq!(CaseKind::Snake.apply("helloWorld"), "hello_world");
        assert_eq!(CaseKind::Kebab.apply("Hello World"), "hello-world");
    }

    #[test]
    fn test_convert_all_covers_every_kind() {
        let results = convert_all("hello world");
        assert_eq!(results.len(), CaseKind::ALL.len());
        for (kind, (got_kind, value)) in CaseKind::ALL.iter().zip(&results) {
            assert_eq!(kind, got_kind);
            assert_eq!(*value, kind.apply("hello world"));
        }
    }

    #[test]
    fn test_case_kind_serde_names() {
        let json = serde_json::to_string(&CaseKind::Pascal).unwrap();
        assert_eq!(json, "\"pascal\"");
        let kind: CaseKind = serde_json::from_str("\"kebab\"").unwrap();
        assert_eq!(kind, CaseKind::Kebab);
    }
}

//! Pluralization for CLI summaries.

/// `"s"` unless `n == 1`.
#[inline]
pub const fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "image")` -> `"3 images"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

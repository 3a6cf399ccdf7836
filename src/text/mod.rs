//! Text utilities.
//!
//! # Modules
//!
//! - [`stats`]: word/character/sentence/paragraph counts and reading time
//! - [`case`]: case conversion (upper, title, camel, snake, ...)

pub mod case;
pub mod stats;

pub use case::{CaseKind, convert_all};
pub use stats::{TextMetrics, estimate_reading_time, format_reading_time};

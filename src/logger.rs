//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `success` / `failure` one-line result markers
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! Everything goes to stderr; stdout is reserved for tool output so that
//! results can be piped.
//!
//! # Example
//!
//! ```ignore
//! log!("image"; "processing {} files", count);
//!
//! let progress = ProgressLine::new(&[("compress", 3)]);
//! progress.inc("compress");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Set while a progress line occupies the last terminal row
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    write_line(&format!("{prefix} {message}"));
}

/// Print a success marker line (✓, green).
pub fn success(message: &str) {
    write_line(&format!("{} {message}", "✓".green()));
}

/// Print a failure marker line (✗, red) with optional detail.
pub fn failure(summary: &str, detail: &str) {
    let message = if detail.is_empty() {
        summary.to_string()
    } else {
        format!("{summary}\n{detail}")
    };
    write_line(&format!("{} {message}", "✗".red()));
}

/// Write a line, keeping an active progress line at the bottom.
fn write_line(line: &str) {
    let mut err = stderr().lock();

    if PROGRESS_ACTIVE.load(Ordering::SeqCst) {
        execute!(err, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    }
    writeln!(err, "{line}").ok();
    err.flush().ok();
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "image" => prefix.bright_blue().bold().to_string(),
        "done" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[image] compress(2/5)`
///
/// Counters update in place on the same line. Uses `try_lock` to avoid
/// blocking workers: if display is busy, the refresh is skipped.
pub struct ProgressLine {
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        PROGRESS_ACTIVE.store(true, Ordering::SeqCst);

        let progress = Self {
            counters,
            lock: Mutex::new(()),
        };
        progress.display(false);
        progress
    }

    /// Increment the counter with the given name.
    pub fn inc(&self, name: &str) {
        let Some(counter) = self.counters.iter().find(|c| c.name == name) else {
            return;
        };
        counter.current.fetch_add(1, Ordering::Relaxed);
        if self.lock.try_lock().is_some() {
            self.display(false);
        }
    }

    /// Render counters as `name(current/total)` separated by spaces.
    fn render(&self) -> String {
        self.counters
            .iter()
            .map(|c| format!("{}({}/{})", c.name, c.current.load(Ordering::Relaxed), c.total))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn display(&self, newline: bool) {
        let prefix = colorize_prefix("image", "image");
        let line = self.render();

        let mut err = stderr().lock();
        execute!(err, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        if newline {
            writeln!(err, "{prefix} {line}").ok();
        } else {
            write!(err, "{prefix} {line}").ok();
        }
        err.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);
        {
            let _guard = self.lock.lock();
            self.display(true);
        }
        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::SeqCst);

        let mut err = stderr().lock();
        execute!(err, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        err.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_progress_render_skips_empty_counters() {
        let progress = ProgressLine::new(&[("compress", 3), ("resize", 0)]);
        assert_eq!(progress.render(), "compress(0/3)");

        progress.inc("compress");
        progress.inc("compress");
        progress.inc("unknown");
        assert_eq!(progress.render(), "compress(2/3)");
        progress.finish();
    }

    #[test]
    fn test_prefix_contains_module() {
        let prefix = colorize_prefix("Image", "image");
        assert!(prefix.contains("[Image]"));
    }
}

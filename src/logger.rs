//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only shows with `--verbose`
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! # Example
//!
//! ```ignore
//! // Simple logging
//! log!("generate"; "wrote {} files", count);
//!
//! // Progress line for a render run
//! let progress = ProgressLine::new(&[("png", 21), ("ico", 1)]);
//! progress.inc("png");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{IsTerminal, Write, stderr, stdout},
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

/// Whether a progress line currently owns the last terminal row
static BAR_ACTIVE: AtomicBool = AtomicBool::new(false);

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
///
/// `error` and `warning` lines go to stderr so that a header and the
/// ` - item` lines printed after it with `eprintln!` stay together.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let stream = stream_for(&module_lower);
    let prefix = colorize_prefix(module, &module_lower, stream);

    // Keep the progress line below the log output
    if BAR_ACTIVE.load(Ordering::SeqCst) {
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }

    match stream {
        Stream::Stderr => {
            let mut stderr = stderr().lock();
            writeln!(stderr, "{prefix} {message}").ok();
            stderr.flush().ok();
        }
        _ => {
            let mut stdout = stdout().lock();
            writeln!(stdout, "{prefix} {message}").ok();
            stdout.flush().ok();
        }
    }
}

/// Diagnostics go to stderr, everything else to stdout.
fn stream_for(module_lower: &str) -> Stream {
    match module_lower {
        "error" | "warning" => Stream::Stderr,
        _ => Stream::Stdout,
    }
}

/// Apply color to a module prefix based on module type.
///
/// Honors `--color` and whether `stream` is a terminal.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str, stream: Stream) -> String {
    let style = match module_lower {
        "generate" => Style::new().bright_blue().bold(),
        "error" => Style::new().bright_red().bold(),
        "warning" => Style::new().yellow().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    format!("[{module}]")
        .if_supports_color(stream, |prefix| prefix.style(style))
        .to_string()
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[render] png(12/21) ico(0/1) svg(0/1)`
///
/// All counters update in place on the same line.
pub struct ProgressLine {
    counters: Vec<Counter>,
    lock: Mutex<()>,
    /// In-place redraws only when stdout is a terminal
    interactive: bool,
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
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|(name, total)| Counter {
                name,
                total: *total,
                current: AtomicUsize::new(0),
            })
            .collect();

        let interactive = stdout().is_terminal();
        BAR_ACTIVE.store(interactive, Ordering::SeqCst);

        let progress = Self {
            counters,
            lock: Mutex::new(()),
            interactive,
        };
        progress.display();
        progress
    }

    /// Increment the counter with the given name.
    #[inline]
    pub fn inc(&self, name: &str) {
        if let Some(counter) = self.counters.iter().find(|c| c.name == name) {
            counter.current.fetch_add(1, Ordering::Relaxed);
            if self.lock.try_lock().is_some() {
                self.display();
            }
        }
    }

    /// Current value of the named counter, `None` for unknown names.
    #[cfg(test)]
    pub fn current(&self, name: &str) -> Option<usize> {
        self.counters
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.current.load(Ordering::Relaxed))
    }

    fn render_line(&self) -> String {
        self.counters
            .iter()
            .map(|c| {
                let current = c.current.load(Ordering::Relaxed);
                format!("{}({}/{})", c.name, current, c.total)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Display the current progress line (overwrites the current line).
    fn display(&self) {
        if !self.interactive {
            return;
        }
        let line = self.render_line();
        let prefix = colorize_prefix("render", "render", Stream::Stdout);

        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        write!(stdout, "{prefix} {line}").ok();
        stdout.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_ACTIVE.store(false, Ordering::SeqCst);

        {
            let _guard = self.lock.lock();
            let line = self.render_line();
            let prefix = colorize_prefix("render", "render", Stream::Stdout);

            let mut stdout = stdout().lock();
            if self.interactive {
                execute!(
                    stdout,
                    cursor::MoveToColumn(0),
                    Clear(ClearType::CurrentLine)
                )
                .ok();
            }
            writeln!(stdout, "{prefix} {line}").ok();
            stdout.flush().ok();
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_ACTIVE.store(false, Ordering::SeqCst);
        if !self.interactive {
            return;
        }

        // Clear the line on drop (run aborted before finish)
        let mut stdout = stdout().lock();
        execute!(
            stdout,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stdout.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide configuration for goinglogging.
//!
//! Three independent fields control every record: the [`Prefix`] mask, whether
//! output is enabled at all, and whether records are wrapped in ANSI color.
//!
//! # Thread Safety
//!
//! Each field is a single relaxed atomic.  Reads and writes never block and never
//! fail, but there is no ordering between the fields: a thread that changes the
//! configuration while another thread is emitting may see any interleaving.
//! Configure once near program start.
//!
//! # Examples
//!
//! ```
//! use goinglogging::Prefix;
//!
//! goinglogging::set_prefixes(Prefix::FILE | Prefix::LINE | Prefix::THREAD);
//! assert!(goinglogging::get_prefixes().contains(Prefix::THREAD));
//!
//! goinglogging::set_color_enabled(true);
//! assert!(goinglogging::is_color_enabled());
//! # goinglogging::set_color_enabled(false);
//! # goinglogging::set_prefixes(Prefix::DEFAULT);
//! ```

use crate::prefix::Prefix;
use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::{AtomicBool, AtomicU32};

static PREFIXES: AtomicU32 = AtomicU32::new(Prefix::DEFAULT.bits());
static OUTPUT_ENABLED: AtomicBool = AtomicBool::new(true);
static COLOR_ENABLED: AtomicBool = AtomicBool::new(false);

/// Returns the prefix mask used by subsequent records.
#[inline]
pub fn get_prefixes() -> Prefix {
    Prefix::from_bits_truncate(PREFIXES.load(Relaxed))
}

/// Sets the prefix mask used by subsequent records.
///
/// Enabled fields are written in a fixed order, `FILE`, `LINE`, `FUNCTION`, `TIME`,
/// `THREAD`, followed by `": "` if any of them produced output:
///
/// ```text
/// main.rs:68, main(), 10:02:13.057, TID: ThreadId(1): i = 1
/// ```
///
/// `LINE` without `FILE` is written as `Line: 68`.  `TYPE_NAME` adds nothing to the
/// prefix; it marks each name in the body as `type i = 1`.
#[inline]
pub fn set_prefixes(prefixes: Prefix) {
    PREFIXES.store(prefixes.bits(), Relaxed);
}

/// Returns `true` if records are written.
#[inline]
pub fn is_output_enabled() -> bool {
    OUTPUT_ENABLED.load(Relaxed)
}

/// Enables or disables all output.
///
/// While disabled, the macros skip the whole record, including sampling the clock
/// and the thread id.  Argument expressions are not evaluated either.
#[inline]
pub fn set_output_enabled(enabled: bool) {
    OUTPUT_ENABLED.store(enabled, Relaxed);
}

/// Returns `true` if records are wrapped in ANSI color sequences.
#[inline]
pub fn is_color_enabled() -> bool {
    COLOR_ENABLED.load(Relaxed)
}

/// Enables colored output in terminals that understand ANSI control sequences.
///
/// Each record is written in red, `ESC[0;31m … ESC[0m`.
#[inline]
pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Relaxed);
}

/**
A snapshot of the three configuration fields.

Records are rendered against a snapshot so the prefix, the `type ` markers and the
color sequences of one record always agree with each other, even if another thread
reconfigures in the middle.  Builders also accept a hand-made snapshot, which is
how output is rendered into an in-memory sink without touching the process-wide
store.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Which prefix parts are written before the body.
    pub prefixes: Prefix,
    /// When false, no record is written at all.
    pub output_enabled: bool,
    /// Wraps each record in the red ANSI color sequence.
    pub color_enabled: bool,
}

impl Config {
    /// The configuration a process starts with.
    pub const INITIAL: Config = Config {
        prefixes: Prefix::DEFAULT,
        output_enabled: true,
        color_enabled: false,
    };

    /// Reads the process-wide configuration.
    #[inline]
    pub fn current() -> Self {
        Self {
            prefixes: get_prefixes(),
            output_enabled: is_output_enabled(),
            color_enabled: is_color_enabled(),
        }
    }

    /// The initial configuration with a different prefix mask.
    #[inline]
    pub const fn with_prefixes(prefixes: Prefix) -> Self {
        Self {
            prefixes,
            ..Self::INITIAL
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::INITIAL
    }
}

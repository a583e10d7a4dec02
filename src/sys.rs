// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform-specific pieces of the prefix: path separator, local clock, thread id.
//!
//! These are the only places goinglogging asks the platform anything, so the
//! decorator stays a plain function over their results.

use chrono::{Local, TimeZone, Timelike};
use std::fmt;
use std::thread::ThreadId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Separator between directories in `file!()` paths on this platform.
#[cfg(windows)]
pub const PATH_SEPARATOR: char = '\\';
#[cfg(not(windows))]
pub const PATH_SEPARATOR: char = '/';

/// The part of `path` after the last [`PATH_SEPARATOR`], or all of it if there is none.
///
/// ```
/// # use goinglogging::hidden::basename;
/// let path = format!("src{0}bin{0}main.rs", goinglogging::hidden::PATH_SEPARATOR);
/// assert_eq!(basename(&path), "main.rs");
/// assert_eq!(basename("main.rs"), "main.rs");
/// ```
#[inline]
pub fn basename(path: &str) -> &str {
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => &path[idx + PATH_SEPARATOR.len_utf8()..],
        None => path,
    }
}

/// Local wall-clock time within the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Samples the local clock.
///
/// Returns `None` when the system time has no local representation: a clock set
/// before the epoch, a value out of chrono's range, or no single local mapping.
pub fn local_time_of_day() -> Option<TimeOfDay> {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let secs = i64::try_from(since_epoch.as_secs()).ok()?;
    let now = Local
        .timestamp_opt(secs, since_epoch.subsec_nanos())
        .single()?;
    Some(TimeOfDay {
        hour: now.hour() as u8,
        minute: now.minute() as u8,
        second: now.second() as u8,
        // a leap second shows up as nanos past 1e9
        millisecond: (now.nanosecond() / 1_000_000).min(999) as u16,
    })
}

/// Id of the calling thread; stable for the thread's lifetime.
#[inline]
pub fn current_thread_id() -> ThreadId {
    std::thread::current().id()
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! The text stream records are written to.
//!
//! goinglogging writes to exactly one place, the process's standard output.  The
//! [`Sink`] trait is the narrow interface the formatter and the decorator write
//! through, so the same code can also render into a `Vec<u8>` (which is how the
//! tests look at output byte for byte).
//!
//! # Errors
//!
//! Sink failures are not inspected.  A record that can't be written is simply
//! lost, the same way a closed terminal loses it.

use std::fmt;
use std::io;

/// Somewhere to write rendered text.
///
/// Implemented for every [`io::Write`].  The trait is object safe, and
/// [`Stringify`](crate::Stringify) implementations receive a `&mut dyn Sink`.
pub trait Sink {
    /// Writes `s` verbatim.
    fn write_str(&mut self, s: &str);

    /// Writes formatted text; this is what `write!(sink, ...)` calls.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>);

    /// Pushes buffered bytes out.
    fn flush(&mut self);
}

impl<W: io::Write + ?Sized> Sink for W {
    #[inline]
    fn write_str(&mut self, s: &str) {
        let _ = io::Write::write_all(self, s.as_bytes());
    }

    #[inline]
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = io::Write::write_fmt(self, args);
    }

    #[inline]
    fn flush(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/**
The sink the macros write to: standard output, locked for one record.

Holding the stream's own lock for the length of a record keeps the pieces of that
record together and avoids re-locking for every piece.  No other lock is taken.
*/
pub type StdoutSink = io::StdoutLock<'static>;

/// Locks standard output for one record.
#[inline]
pub fn stdout() -> StdoutSink {
    io::stdout().lock()
}

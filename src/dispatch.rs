// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime support for the expansions of `l!`, `l_arr!` and `l_mat!`.
//!
//! # Architecture
//!
//! Every expansion follows the same three phases:
//! 1. The expansion checks [`is_output_enabled`](crate::is_output_enabled) and
//!    evaluates its arguments.  [`record_pre`] then locks stdout and writes the color
//!    sequence and prefix.
//! 2. The expansion writes the body, dispatching each value through [`Stringifier`].
//! 3. [`record_post`] writes the terminator and releases stdout.
//!
//! # Dispatch
//!
//! Values are written in canonical form when their type implements
//! [`Stringify`], and through `Display` otherwise.  Rust has no specialization, so
//! the expansion picks between the two by method resolution on a reference:
//!
//! ```ignore
//! (&Stringifier(&value)).write_into(&mut record);
//! ```
//!
//! [`ViaStringify`] is implemented for `Stringifier<T>` and [`ViaDisplay`] for
//! `&Stringifier<T>`.  Method lookup tries the receiver type `&Stringifier<T>`
//! first, which only matches `ViaStringify`; if `T` doesn't implement `Stringify`
//! it auto-refs once more and finds `ViaDisplay`.  A type with neither is a compile
//! error at the call site.

use crate::config::Config;
use crate::prefixer::CallSite;
use crate::record::Record;
use crate::sink::{self, Sink, StdoutSink};
use crate::stringify::Stringify;
use std::fmt::Display;

/// Wraps a value for dispatch; see the module documentation.
pub struct Stringifier<'a, T: ?Sized>(pub &'a T);

/// Picked when the value implements [`Stringify`].
pub trait ViaStringify {
    fn write_into<S: Sink>(&self, record: &mut Record<S>);
}

/// Picked when the value only implements `Display`.
pub trait ViaDisplay {
    fn write_into<S: Sink>(&self, record: &mut Record<S>);
}

impl<T: Stringify + ?Sized> ViaStringify for Stringifier<'_, T> {
    #[inline]
    fn write_into<S: Sink>(&self, record: &mut Record<S>) {
        record.write_value(self.0);
    }
}

impl<T: Display + ?Sized> ViaDisplay for &Stringifier<'_, T> {
    #[inline]
    fn write_into<S: Sink>(&self, record: &mut Record<S>) {
        record.write_display(self.0);
    }
}

/// Begins a record on stdout.
///
/// ```
/// # use goinglogging::hidden::{record_pre, record_post};
/// # use goinglogging::CallSite;
/// let mut record = record_pre(&CallSite::new(file!(), line!(), "main"));
/// record.write_field_name("answer");
/// record.write_value(&42);
/// record_post(record);
/// ```
#[inline]
pub fn record_pre(site: &CallSite) -> Record<StdoutSink> {
    Record::begin(sink::stdout(), site, Config::current())
}

/// Finishes a record on stdout and releases the stream.
#[inline]
pub fn record_post(record: Record<StdoutSink>) {
    drop(record.finish());
}

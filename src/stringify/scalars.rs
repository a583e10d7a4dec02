// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalars, text, and smart pointers.

use super::{Stringify, write_display};
use crate::sink::Sink;
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
};
use std::rc::Rc;
use std::sync::Arc;

macro_rules! stringify_numbers {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Stringify for $t {
                #[inline]
                fn stringify(&self, sink: &mut dyn Sink) {
                    write_display(sink, self);
                }
            }
        )+
    };
}

stringify_numbers!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);
stringify_numbers!(
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
);

impl Stringify for bool {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        sink.write_str(if *self { "true" } else { "false" });
    }
}

/**
Characters are quoted with `'`.

Rust has one character type; `u8` and `i8` are integers and render as numbers.
*/
impl Stringify for char {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        let mut buf = [0u8; 4];
        sink.write_str("'");
        sink.write_str(self.encode_utf8(&mut buf));
        sink.write_str("'");
    }
}

/**
Text is quoted with `"` and written as is, without escaping.
*/
impl Stringify for str {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        sink.write_str("\"");
        sink.write_str(self);
        sink.write_str("\"");
    }
}

impl Stringify for String {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        self.as_str().stringify(sink);
    }
}

/**
Null-terminated strings render up to the terminator.  Invalid UTF-8 is replaced
with U+FFFD.
*/
impl Stringify for CStr {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        let text = self.to_string_lossy();
        Stringify::stringify(&*text, sink);
    }
}

impl Stringify for CString {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        self.as_c_str().stringify(sink);
    }
}

impl<B: Stringify + ToOwned + ?Sized> Stringify for Cow<'_, B> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

impl<T: Stringify + ?Sized> Stringify for &T {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

impl<T: Stringify + ?Sized> Stringify for &mut T {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

impl<T: Stringify + ?Sized> Stringify for Rc<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

impl<T: Stringify + ?Sized> Stringify for Arc<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        (**self).stringify(sink);
    }
}

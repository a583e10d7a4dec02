// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record builders.
//!
//! A record is one line of output: optional color, the prefix, a body, the color
//! reset, and a newline.  There are three body shapes:
//!
//! * a list of named values, `i = 1, s = "s"` ([`l!`](crate::l));
//! * an array, `a = {0, 1, 2}` ([`l_arr!`](crate::l_arr));
//! * a matrix, `m: [0,0] = 11, [0,1] = 12, [1,0] = 21, [1,1] = 22` ([`l_mat!`](crate::l_mat)).
//!
//! The macros drive a [`Record`] directly so they can dispatch every value on its
//! concrete type.  [`emit_values`], [`emit_array`] and [`emit_matrix`] build the same
//! records for callers that already have the pieces at hand, into any [`Sink`]:
//!
//! ```rust
//! use goinglogging::{CallSite, Config, Prefix};
//! use goinglogging::record::emit_array;
//!
//! let mut out: Vec<u8> = Vec::new();
//! let site = CallSite::new("src/main.rs", 3, "main");
//! emit_array(&mut out, &site, Config::with_prefixes(Prefix::NONE), "a", &[0, 1, 2], 3);
//! assert_eq!(out, b"a = {0, 1, 2}\n");
//! ```

use crate::config::Config;
use crate::prefix::Prefix;
use crate::prefixer::{CallSite, write_prefix};
use crate::sink::Sink;
use crate::stringify::{Stringify, write_display};
use std::fmt::Display;
use std::ops::Index;

/// Starts a colored record.
pub const COLOR_START: &str = "\x1b[0;31m";
/// Ends a colored record.
pub const COLOR_END: &str = "\x1b[0m";

/**
A record under construction.

[`Record::begin`] writes the color sequence and the prefix; the body is written
piece by piece; [`Record::finish`] closes the record with the color reset and the
newline.  Builders check `output_enabled` before beginning a record: a `Record`
always produces output.
*/
#[derive(Debug)]
pub struct Record<S: Sink> {
    sink: S,
    color: bool,
    type_marker: bool,
    fields: usize,
}

impl<S: Sink> Record<S> {
    /// Writes the color start sequence and the prefix for `site`.
    pub fn begin(mut sink: S, site: &CallSite, config: Config) -> Self {
        if config.color_enabled {
            sink.write_str(COLOR_START);
        }
        write_prefix(&mut sink, site, config.prefixes);
        Self {
            sink,
            color: config.color_enabled,
            type_marker: config.prefixes.contains(Prefix::TYPE_NAME),
            fields: 0,
        }
    }

    #[inline]
    fn write_type_marker(&mut self) {
        if self.type_marker {
            self.sink.write_str("type ");
        }
    }

    /// Starts the next `name = value` pair: `, ` unless it's the first, the type
    /// marker, the name, and ` = `.
    #[inline]
    pub fn write_field_name(&mut self, name: &str) {
        if self.fields != 0 {
            self.sink.write_str(", ");
        }
        self.fields += 1;
        self.write_type_marker();
        self.sink.write_str(name);
        self.sink.write_str(" = ");
    }

    /// Writes a value in canonical form.
    #[inline]
    pub fn write_value<T: Stringify + ?Sized>(&mut self, value: &T) {
        value.stringify(&mut self.sink);
    }

    /// Writes a value that has no canonical form through its `Display` implementation.
    #[inline]
    pub fn write_display<T: Display + ?Sized>(&mut self, value: &T) {
        write_display(&mut self.sink, value);
    }

    /// `name = {`
    #[inline]
    pub fn open_array(&mut self, name: &str) {
        self.write_type_marker();
        self.sink.write_str(name);
        self.sink.write_str(" = {");
    }

    /// Separates array elements; writes nothing before element 0.
    #[inline]
    pub fn array_separator(&mut self, index: usize) {
        if index != 0 {
            self.sink.write_str(", ");
        }
    }

    /// `}`
    #[inline]
    pub fn close_array(&mut self) {
        self.sink.write_str("}");
    }

    /// `name: `
    #[inline]
    pub fn open_matrix(&mut self, name: &str) {
        self.write_type_marker();
        self.sink.write_str(name);
        self.sink.write_str(": ");
    }

    /// `[row,col] = `, preceded by `, ` for every cell but the first.
    #[inline]
    pub fn matrix_cell(&mut self, row: usize, col: usize) {
        if row != 0 || col != 0 {
            self.sink.write_str(", ");
        }
        write!(self.sink, "[{},{}] = ", row, col);
    }

    /// The body of a matrix with no rows or no columns.
    #[inline]
    pub fn empty_matrix(&mut self) {
        self.sink.write_str("{}");
    }

    /// Writes the color reset and the newline, flushing if the `flush` feature is on.
    pub fn finish(mut self) -> S {
        if self.color {
            self.sink.write_str(COLOR_END);
        }
        self.sink.write_str("\n");
        #[cfg(feature = "flush")]
        self.sink.flush();
        self.sink
    }
}

/**
Writes a record of named values, `a = 1, b = "b"`.

Nothing is written when `config.output_enabled` is false.

```rust
use goinglogging::{CallSite, Config, Prefix};
use goinglogging::record::emit_values;

let mut out: Vec<u8> = Vec::new();
let site = CallSite::new("src/main.rs", 3, "main");
let (i, s) = (1, String::from("s"));
emit_values(&mut out, &site, Config::with_prefixes(Prefix::NONE), &[("i", &i), ("s", &s)]);
assert_eq!(out, b"i = 1, s = \"s\"\n");
```
*/
pub fn emit_values<S: Sink>(
    sink: S,
    site: &CallSite,
    config: Config,
    values: &[(&str, &dyn Stringify)],
) {
    if !config.output_enabled {
        return;
    }
    let mut record = Record::begin(sink, site, config);
    for (name, value) in values {
        record.write_field_name(name);
        record.write_value(*value);
    }
    record.finish();
}

/**
Writes the first `len` elements of `values`, `name = {v0, v1, v2}`.

`values` is anything indexable by `usize`.  Nothing is written when
`config.output_enabled` is false.

# Panics

If `values` has fewer than `len` elements, indexing panics the way it does for
`values[len - 1]`.
*/
pub fn emit_array<S, V>(
    sink: S,
    site: &CallSite,
    config: Config,
    name: &str,
    values: &V,
    len: usize,
) where
    S: Sink,
    V: Index<usize> + ?Sized,
    V::Output: Stringify,
{
    if !config.output_enabled {
        return;
    }
    let mut record = Record::begin(sink, site, config);
    record.open_array(name);
    for index in 0..len {
        record.array_separator(index);
        record.write_value(&values[index]);
    }
    record.close_array();
    record.finish();
}

/**
Writes `rows` by `cols` elements of `values` in row-major order,
`name: [0,0] = v, [0,1] = v, …`, or `name: {}` if either dimension is 0.

`values` is indexed as `values[row][col]`.  Nothing is written when
`config.output_enabled` is false.

```rust
use goinglogging::{CallSite, Config, Prefix};
use goinglogging::record::emit_matrix;

let mut out: Vec<u8> = Vec::new();
let site = CallSite::new("src/main.rs", 3, "main");
let m = [[11, 12], [21, 22]];
emit_matrix(&mut out, &site, Config::with_prefixes(Prefix::NONE), "m", &m, 2, 2);
assert_eq!(out, b"m: [0,0] = 11, [0,1] = 12, [1,0] = 21, [1,1] = 22\n");
```

# Panics

If `values` is smaller than `rows` by `cols`, indexing panics.
*/
pub fn emit_matrix<S, V>(
    sink: S,
    site: &CallSite,
    config: Config,
    name: &str,
    values: &V,
    cols: usize,
    rows: usize,
) where
    S: Sink,
    V: Index<usize> + ?Sized,
    V::Output: Index<usize>,
    <V::Output as Index<usize>>::Output: Stringify,
{
    if !config.output_enabled {
        return;
    }
    let mut record = Record::begin(sink, site, config);
    record.open_matrix(name);
    if cols == 0 || rows == 0 {
        record.empty_matrix();
    } else {
        for row in 0..rows {
            for col in 0..cols {
                record.matrix_cell(row, col);
                record.write_value(&values[row][col]);
            }
        }
    }
    record.finish();
}

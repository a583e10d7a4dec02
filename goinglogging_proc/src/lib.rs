//SPDX-License-Identifier: MIT OR Apache-2.0

//! # goinglogging procedural macros
//!
//! This crate provides the front-end macros for the goinglogging print-debugging
//! library.  They capture the source text of each argument at compile time and
//! generate calls into `goinglogging::hidden`.
//!
//! ## Architecture
//!
//! Each macro follows the same three-phase pattern:
//! 1. **Pre-phase**: checks `is_output_enabled()`, evaluates the arguments, then
//!    begins a `Record` on stdout with `record_pre()` and the call site
//! 2. **Body phase**: writes each value through the `Stringifier` dispatch
//! 3. **Post-phase**: terminates the record with `record_post()`
//!
//! ## Usage Example
//!
//! ```rust
//! // This macro call:
//! // goinglogging::l!(i, s.len());
//!
//! // Expands to approximately:
//! // {
//! //     if goinglogging::is_output_enabled() {
//! //         let __goinglogging_v0 = &(i);
//! //         let __goinglogging_v1 = &(s.len());
//! //         let mut record = goinglogging::hidden::record_pre(&site);
//! //         record.write_field_name("i");
//! //         (&goinglogging::hidden::Stringifier(__goinglogging_v0)).write_into(&mut record);
//! //         record.write_field_name("s.len()");
//! //         (&goinglogging::hidden::Stringifier(__goinglogging_v1)).write_into(&mut record);
//! //         goinglogging::hidden::record_post(record);
//! //     }
//! // }
//! ```
//!
//! ## Argument parsing
//!
//! Arguments are split on top-level commas.  Commas inside `()`, `[]` and `{}` don't
//! split.  A comma in turbofish generics or closure parameters is reported as an
//! error asking for parentheses around that argument.
//!
//! The argument tokens themselves are spliced into the expansion untouched, so they
//! resolve exactly as they would have at the call site, including inside
//! `macro_rules!`.  Each name is the argument's source text as written.

mod array;
mod expansion;
mod matrix;
mod parser;
mod scalar_list;

use proc_macro::TokenStream;

/// Prints each expression's source text and value on one line.
///
/// # Syntax
/// ```ignore
/// goinglogging::l!(expr1, expr2, ..., exprN);   // 1 <= N <= 16
/// ```
///
/// # Output
/// The configured prefix, then `text = value` for each expression, separated by `, `:
/// ```text
/// main.rs:68: i = 1, s = "s"
/// ```
///
/// Names are the expressions' source text as written, spacing included, so
/// `l!(i + 1)` prints `i + 1 = 2`.  Each expression is evaluated exactly once, in
/// order.  When output is disabled nothing is evaluated.  Values are written in canonical form if their type
/// implements `goinglogging::Stringify` and through `Display` otherwise.
///
/// # Examples
/// ```
/// let i = 1;
/// let s = String::from("s");
/// goinglogging::l!(i, s);
/// goinglogging::l!(i + 1, s.len(), vec![1, 2, 3]);
///
/// if i == 1 { goinglogging::l!(i) } else { goinglogging::l!(s) }
///
/// // parenthesize commas that aren't inside a group
/// goinglogging::l!((std::collections::HashMap::<u8, u8>::new()), (|a: i32, b: i32| a * b)(i, 2));
/// ```
///
/// # Error Cases
///
/// No expressions:
/// ```compile_fail
/// goinglogging::l!();
/// ```
///
/// More than 16 expressions:
/// ```compile_fail
/// let a = 0;
/// goinglogging::l!(a, a, a, a, a, a, a, a, a, a, a, a, a, a, a, a, a);
/// ```
///
/// An empty argument:
/// ```compile_fail
/// let a = 0;
/// goinglogging::l!(a, , a);
/// ```
///
/// A comma inside turbofish generics, without parentheses:
/// ```compile_fail
/// use std::collections::HashMap;
/// goinglogging::l!(HashMap::<u8, u8>::new());
/// ```
///
/// A value with neither `Stringify` nor `Display`:
/// ```compile_fail
/// struct Opaque;
/// goinglogging::l!(Opaque);
/// ```
#[proc_macro]
pub fn l(input: TokenStream) -> TokenStream {
    scalar_list::l_impl(input)
}

/// Prints the first `len` elements of `values`.
///
/// # Syntax
/// ```ignore
/// goinglogging::l_arr!(values, len);
/// ```
///
/// `values` is anything indexable by `usize`.  Prints `values = {v0, v1, ...}`, or
/// `values = {}` when `len` is 0.
///
/// # Examples
/// ```
/// let buffer = [0, 1, 2, 0, 0];
/// let used = 3;
/// goinglogging::l_arr!(buffer, used);
/// ```
///
/// # Panics
/// If `values` has fewer than `len` elements.
///
/// # Error Cases
/// ```compile_fail
/// let a = [1, 2];
/// goinglogging::l_arr!(a);
/// ```
#[proc_macro]
pub fn l_arr(input: TokenStream) -> TokenStream {
    array::l_arr_impl(input)
}

/// Prints `rows` by `cols` elements of `values` in row-major order.
///
/// # Syntax
/// ```ignore
/// goinglogging::l_mat!(values, cols, rows);
/// ```
///
/// `values` is indexed as `values[row][col]`.  Prints
/// `values: [0,0] = v, [0,1] = v, ...`, or `values: {}` when either dimension is 0.
///
/// # Examples
/// ```
/// let m = [[11, 12], [21, 22]];
/// goinglogging::l_mat!(m, 2, 2);
///
/// let grid = vec![vec!['a', 'b', 'c']; 2];
/// goinglogging::l_mat!(grid, 3, 2);
/// ```
///
/// # Panics
/// If `values` is smaller than `rows` by `cols`.
///
/// # Error Cases
/// ```compile_fail
/// let m = [[1]];
/// goinglogging::l_mat!(m, 1);
/// ```
#[proc_macro]
pub fn l_mat(input: TokenStream) -> TokenStream {
    matrix::l_mat_impl(input)
}

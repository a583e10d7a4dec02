// SPDX-License-Identifier: MIT OR Apache-2.0

//! The decoration written before the body of a record.
//!
//! The macros capture a [`CallSite`] for every record; [`write_prefix`] turns it
//! into e.g. `main.rs:68, compute(): ` according to the current [`Prefix`] mask.

use crate::prefix::Prefix;
use crate::sink::Sink;
use crate::sys;

/// Where a record was emitted from.
///
/// The macros fill this in from `file!()`, `line!()` and the enclosing function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    /// Path as given by `file!()`; only the final component is printed.
    pub file: &'static str,
    /// 1-based line from `line!()`.
    pub line: u32,
    /// Name of the enclosing function, without its module path.
    pub function: &'static str,
}

impl CallSite {
    #[inline]
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }
}

/**
Writes the enabled prefix fields for `site`, then `": "` if anything was written.

Fields appear in the order `FILE`, `LINE`, `FUNCTION`, `TIME`, `THREAD`:

* `FILE` is the file's basename.
* `LINE` follows the file as `:68`, or stands alone as `Line: 68`.
* `FUNCTION`, `TIME` and `THREAD` are separated from earlier fields by `, `.
* `TIME` is skipped entirely if the local time can't be determined.
* `TYPE_NAME` is a body marker and writes nothing here.

The clock and the thread id are only queried when their flag is set.
*/
pub fn write_prefix(sink: &mut dyn Sink, site: &CallSite, prefixes: Prefix) {
    let mut written = 0u32;

    if prefixes.contains(Prefix::FILE) {
        sink.write_str(sys::basename(site.file));
        written += 1;
    }

    if prefixes.contains(Prefix::LINE) {
        if written == 0 {
            sink.write_str("Line: ");
        } else {
            sink.write_str(":");
        }
        write!(sink, "{}", site.line);
        written += 1;
    }

    if prefixes.contains(Prefix::FUNCTION) {
        if written != 0 {
            sink.write_str(", ");
        }
        sink.write_str(site.function);
        sink.write_str("()");
        written += 1;
    }

    if prefixes.contains(Prefix::TIME) {
        if let Some(time) = sys::local_time_of_day() {
            if written != 0 {
                sink.write_str(", ");
            }
            write!(sink, "{}", time);
            written += 1;
        }
    }

    if prefixes.contains(Prefix::THREAD) {
        if written != 0 {
            sink.write_str(", ");
        }
        write!(sink, "TID: {:?}", sys::current_thread_id());
        written += 1;
    }

    if written != 0 {
        sink.write_str(": ");
    }
}

/// Marker item name the macros nest inside the calling function.
pub const FUNCTION_MARKER: &str = "__goinglogging_fn";

/**
Extracts the bare name of the enclosing function from the type name of a marker fn.

The macros expand to

```ignore
{ fn __goinglogging_fn() {} std::any::type_name_of_val(&__goinglogging_fn) }
```

whose type name is the marker's full path, e.g. `my_crate::math::compute::__goinglogging_fn`.
This strips the marker, any `{{closure}}` segments that closures and async blocks
add, and the module path, leaving `compute`.

```
# use goinglogging::hidden::function_name;
assert_eq!(function_name("app::math::compute::__goinglogging_fn"), "compute");
assert_eq!(function_name("app::main::{{closure}}::__goinglogging_fn"), "main");
```
*/
pub fn function_name(marker_path: &'static str) -> &'static str {
    let mut path = marker_path;
    if let Some(stripped) = path.strip_suffix(FUNCTION_MARKER) {
        path = stripped.strip_suffix("::").unwrap_or(stripped);
    }
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    match path.rfind("::") {
        Some(idx) => &path[idx + 2..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SITE: CallSite = CallSite::new("src/main.rs", 68, "main");

    fn render(prefixes: Prefix) -> String {
        render_site(&SITE, prefixes)
    }

    fn render_site(site: &CallSite, prefixes: Prefix) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_prefix(&mut out, site, prefixes);
        String::from_utf8(out).expect("prefix is utf-8")
    }

    #[test]
    fn empty_mask_writes_nothing() {
        assert_eq!(render(Prefix::NONE), "");
        assert_eq!(render(Prefix::TYPE_NAME), "");
    }

    #[cfg(not(windows))]
    #[test]
    fn file_and_line() {
        assert_eq!(render(Prefix::FILE | Prefix::LINE), "main.rs:68: ");
        assert_eq!(render(Prefix::FILE), "main.rs: ");
    }

    #[test]
    fn line_alone() {
        assert_eq!(render(Prefix::LINE), "Line: 68: ");
    }

    #[test]
    fn function() {
        assert_eq!(render(Prefix::FUNCTION), "main(): ");
        assert_eq!(render(Prefix::LINE | Prefix::FUNCTION), "Line: 68, main(): ");
    }

    #[test]
    fn file_without_separator_is_verbatim() {
        let site = CallSite::new("lib.rs", 3, "f");
        assert_eq!(render_site(&site, Prefix::FILE | Prefix::LINE), "lib.rs:3: ");
    }

    #[test]
    fn thread() {
        let expected = format!("TID: {:?}: ", std::thread::current().id());
        assert_eq!(render(Prefix::THREAD), expected);
        let expected = format!("main(), TID: {:?}: ", std::thread::current().id());
        assert_eq!(render(Prefix::FUNCTION | Prefix::THREAD), expected);
    }

    fn is_time_of_day(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() == 12
            && b[2] == b':'
            && b[5] == b':'
            && b[8] == b'.'
            && b.iter()
                .enumerate()
                .all(|(i, c)| matches!(i, 2 | 5 | 8) || c.is_ascii_digit())
    }

    #[test]
    fn time() {
        let rendered = render(Prefix::FUNCTION | Prefix::TIME);
        match sys::local_time_of_day() {
            Some(_) => {
                let time = rendered
                    .strip_prefix("main(), ")
                    .and_then(|rest| rest.strip_suffix(": "))
                    .expect("time between function and terminator");
                assert!(is_time_of_day(time), "bad time {time:?}");
            }
            None => assert_eq!(rendered, "main(): "),
        }
    }

    #[cfg(not(windows))]
    #[test]
    fn every_field_in_order() {
        let rendered = render(Prefix::ALL);
        let rest = rendered
            .strip_prefix("main.rs:68, main(), ")
            .expect("file, line and function first");
        let thread = format!("TID: {:?}: ", std::thread::current().id());
        let rest = rest.strip_suffix(&thread).expect("thread last");
        if !rest.is_empty() {
            let time = rest.strip_suffix(", ").expect("time separator");
            assert!(is_time_of_day(time), "bad time {time:?}");
        }
    }

    #[test]
    fn prefix_never_contains_directories() {
        let path = format!("a{0}b{0}file.rs", sys::PATH_SEPARATOR);
        let site = CallSite::new(Box::leak(path.into_boxed_str()), 1, "f");
        for bits in 0..64 {
            let rendered = render_site(&site, Prefix::from_bits_truncate(bits));
            assert!(!rendered.contains(sys::PATH_SEPARATOR), "{rendered:?}");
        }
    }

    #[test]
    fn function_names() {
        assert_eq!(function_name("krate::f::__goinglogging_fn"), "f");
        assert_eq!(
            function_name("krate::m::f::{{closure}}::{{closure}}::__goinglogging_fn"),
            "f"
        );
        assert_eq!(function_name("f::__goinglogging_fn"), "f");
        assert_eq!(function_name("plain"), "plain");
    }

    #[test]
    fn function_name_from_marker() {
        fn __goinglogging_fn() {}
        let name = function_name(std::any::type_name_of_val(&__goinglogging_fn));
        assert_eq!(name, "function_name_from_marker");

        let from_closure = || {
            fn __goinglogging_fn() {}
            function_name(std::any::type_name_of_val(&__goinglogging_fn))
        };
        assert_eq!(from_closure(), "function_name_from_marker");
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Rendering values in goinglogging's canonical form.

Every value a record shows goes through [`Stringify`].  The form depends only on the
value's type:

| Type                                                   | Form                               |
|--------------------------------------------------------|------------------------------------|
| `bool`                                                 | `true`, `false`                    |
| `char`                                                 | `'c'`                              |
| `str`, `String`, `Cow<str>`, `CStr`, `CString`         | `"text"`                           |
| integers, floats, [`Shown`] values                     | their `Display` text               |
| arrays, slices, `Vec`, `VecDeque`, `LinkedList`, sets  | `{a, b, c}`                        |
| `BTreeMap`, `HashMap`                                  | `{k0: v0, k1: v1}`                 |
| [`AsStack`], `BinaryHeap`                              | `{}`, `{top}`, `{top, ...}`        |
| [`AsQueue`]                                            | `{front, ..., back}`               |

Containers render their elements recursively, so a `Vec<HashMap<String, String>>`
renders as `{{"k0": "v0"}, {"k1": "v1"}}`.  Stacks and queues are summarized rather
than listed.

References, `Box`, `Rc` and `Arc` render as the value they point to.

# Your own types

At the top level of [`l!`](crate::l), [`l_arr!`](crate::l_arr) and
[`l_mat!`](crate::l_mat), any type that implements `Display` just works.  Inside
containers, the element type has to implement `Stringify`.  The quickest way is to
reuse `Display`:

```
use std::fmt;

struct Meters(f64);
impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
goinglogging::stringify_with_display!(Meters);

let path = vec![Meters(1.5), Meters(2.0)];
goinglogging::l!(path);
```

or wrap the values in [`Shown`].  Implement the trait by hand for anything else.

The formatter only ever writes the value itself: no prefix, no newline, and it never
reads the process-wide configuration.
*/

mod collections;
mod scalars;
mod summaries;
#[cfg(test)]
mod tests;

pub use summaries::{AsQueue, AsStack, QueueLike, StackLike};

use crate::sink::Sink;
use std::fmt::{self, Display};

/// Writes a value in canonical form.
pub trait Stringify {
    /**
    Writes `self` to `sink`.

    Implementations write only the value: nothing before it, no newline after it.
    Use of `#[inline]` is recommended.
    */
    fn stringify(&self, sink: &mut dyn Sink);
}

/**
Renders the wrapped value through its `Display` implementation.

Useful for putting types that only implement `Display` into containers:

```
use std::net::Ipv4Addr;
use goinglogging::Shown;

let peers = vec![Shown(Ipv4Addr::LOCALHOST), Shown(Ipv4Addr::BROADCAST)];
goinglogging::l!(peers);
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shown<T>(pub T);

impl<T: Display> Stringify for Shown<T> {
    #[inline]
    fn stringify(&self, sink: &mut dyn Sink) {
        write_display(sink, &self.0);
    }
}

/// Implements [`Stringify`] for each listed type by writing its `Display` output.
///
/// ```
/// struct Id(u32);
/// impl std::fmt::Display for Id {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "#{}", self.0)
///     }
/// }
/// goinglogging::stringify_with_display!(Id);
///
/// let ids = [Id(1), Id(2)];
/// goinglogging::l!(ids);
/// ```
#[macro_export]
macro_rules! stringify_with_display {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::Stringify for $t {
                #[inline]
                fn stringify(&self, sink: &mut dyn $crate::Sink) {
                    $crate::hidden::write_display(sink, self);
                }
            }
        )+
    };
}

/// Writes `value` through `Display`.
#[inline]
pub fn write_display<T: Display + ?Sized>(sink: &mut dyn Sink, value: &T) {
    write!(sink, "{}", value);
}

/// `{a, b, c}`
pub(crate) fn write_sequence<'a, T, I>(sink: &mut dyn Sink, items: I)
where
    T: Stringify + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    sink.write_str("{");
    let mut items = items.into_iter();
    if let Some(first) = items.next() {
        first.stringify(sink);
    }
    for item in items {
        sink.write_str(", ");
        item.stringify(sink);
    }
    sink.write_str("}");
}

/// `{k0: v0, k1: v1}`
pub(crate) fn write_map<'a, K, V, I>(sink: &mut dyn Sink, entries: I)
where
    K: Stringify + ?Sized + 'a,
    V: Stringify + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    sink.write_str("{");
    let mut entries = entries.into_iter();
    if let Some((k, v)) = entries.next() {
        write_entry(sink, k, v);
    }
    for (k, v) in entries {
        sink.write_str(", ");
        write_entry(sink, k, v);
    }
    sink.write_str("}");
}

#[inline]
fn write_entry<K: Stringify + ?Sized, V: Stringify + ?Sized>(sink: &mut dyn Sink, k: &K, v: &V) {
    k.stringify(sink);
    sink.write_str(": ");
    v.stringify(sink);
}

/// Renders `value` to a `String`, mostly for tests and for `Display` adapters.
///
/// ```
/// use goinglogging::to_canonical_string;
/// assert_eq!(to_canonical_string(&vec!['a', 'b']), "{'a', 'b'}");
/// ```
pub fn to_canonical_string<T: Stringify + ?Sized>(value: &T) -> String {
    let mut out: Vec<u8> = Vec::new();
    value.stringify(&mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Adapts a [`Stringify`] value to `Display`, e.g. for use with `format!`.
///
/// ```
/// use goinglogging::Canonical;
/// assert_eq!(format!("got {}", Canonical(&"s")), r#"got "s""#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Canonical<'a, T: ?Sized>(pub &'a T);

impl<T: Stringify + ?Sized> Display for Canonical<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical_string(self.0))
    }
}

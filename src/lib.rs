//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# goinglogging

goinglogging is a print-style debugging library for Rust.

# The problem

Print-style debugging usually looks like this:

```rust
# let (i, s) = (1, String::from("s"));
println!("i = {}, s = {:?}", i, s);
```

Every variable gets typed twice, the format string drifts out of sync with the
arguments, and containers need `{:?}` or a loop.  When the bug is fixed, all of it gets
deleted again.

# The API

```rust
# let (i, s) = (1, String::from("s"));
goinglogging::l!(i, s);
```

prints

```text
main.rs:3: i = 1, s = "s"
```

[`l!`] takes 1 to 16 expressions.  Each one is printed as its own source text, ` = `,
and its value.  Two more macros cover raw storage that doesn't carry its own length:

```rust
let a = [0, 1, 2, 3];
goinglogging::l_arr!(a, 3);          // a = {0, 1, 2}

let m = [[11, 12], [21, 22]];
goinglogging::l_mat!(m, 2, 2);       // m: [0,0] = 11, [0,1] = 12, [1,0] = 21, [1,1] = 22
```

# Values

Values are written in a fixed canonical form: characters in `'`, text in `"`,
sequences and sets as `{a, b}`, maps as `{k: v}`.  Containers nest.  See the
[`Stringify`] docs for the full table.  At the top level of a macro, any type that
implements `Display` works too.

# Prefixes

Each line can be decorated with the file name, line, function name, wall-clock time,
thread, and a type marker.  The set of fields is a [`Prefix`] mask:

```rust
use goinglogging::Prefix;
goinglogging::set_prefixes(Prefix::FUNCTION | Prefix::TIME);
# goinglogging::set_prefixes(Prefix::DEFAULT);
```

The default is `FILE | LINE`.

# Configuration

Three process-wide settings are read by every record: the prefix mask, whether output
is enabled, and whether records are colored red.  When output is disabled the
macros don't evaluate their arguments at all.

Configure once at startup.  Settings are relaxed atomics, so changing them while
other threads are printing is safe but the order in which those threads observe the
change is unspecified.

The terminator is a bare newline.  Enable the `flush` cargo feature to flush stdout
after every record.

# Multithreading

Records go straight to standard output.  A record holds stdout's own lock while it
is written, and goinglogging takes no other lock.
*/

mod config;
mod dispatch;
mod prefix;
mod prefixer;
pub mod record;
mod sink;
mod stringify;
mod sys;

pub use config::{
    Config, get_prefixes, is_color_enabled, is_output_enabled, set_color_enabled,
    set_output_enabled, set_prefixes,
};
pub use prefix::Prefix;
pub use prefixer::CallSite;
pub use record::Record;
pub use sink::{Sink, StdoutSink};
pub use stringify::{
    AsQueue, AsStack, Canonical, QueueLike, Shown, StackLike, Stringify, to_canonical_string,
};

pub use goinglogging_proc::{l, l_arr, l_mat};

#[doc(hidden)]
pub mod hidden {
    pub use crate::dispatch::{Stringifier, ViaDisplay, ViaStringify, record_post, record_pre};
    pub use crate::prefixer::{CallSite, FUNCTION_MARKER, function_name};
    pub use crate::sink::stdout;
    pub use crate::stringify::write_display;
    pub use crate::sys::{PATH_SEPARATOR, basename};
}
extern crate self as goinglogging;

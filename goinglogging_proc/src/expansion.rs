//SPDX-License-Identifier: MIT OR Apache-2.0

/*!
Code shared by every expansion.

Locals introduced by an expansion share the call site's hygiene, so they all carry a
`__goinglogging_` prefix to stay out of the way of user variables.
*/

use crate::parser::{Argument, splice};
use proc_macro::TokenStream;

/// The record local.
pub const RECORD: &str = "__goinglogging_record";

/**
Wraps `evaluate` and `body` in the common three-phase frame:

```ignore
# // ignore because: this shows the shape of generated code
{
    if goinglogging::is_output_enabled() {
        // evaluate: user expressions, in order, each exactly once
        let mut __goinglogging_record = goinglogging::hidden::record_pre(&site);
        // body: writes through __goinglogging_record
        goinglogging::hidden::record_post(__goinglogging_record);
    }
}
```

Arguments are evaluated before stdout is locked, and not at all when output is
disabled.  The templates refer to arguments through [`placeholder`](crate::parser::placeholder)
identifiers, which are replaced by the arguments' own tokens after parsing.
*/
pub fn frame(evaluate: &str, body: &str, arguments: &[Argument]) -> TokenStream {
    let src = format!(
        r#"
        {{
            if goinglogging::is_output_enabled() {{
                #[allow(unused_imports)]
                use goinglogging::hidden::{{ViaDisplay as _, ViaStringify as _}};
                {EVALUATE}
                let __goinglogging_site = goinglogging::hidden::CallSite::new(
                    file!(),
                    line!(),
                    goinglogging::hidden::function_name({{
                        fn __goinglogging_fn() {{}}
                        ::std::any::type_name_of_val(&__goinglogging_fn)
                    }}),
                );
                let mut {RECORD} = goinglogging::hidden::record_pre(&__goinglogging_site);
                {BODY}
                goinglogging::hidden::record_post({RECORD});
            }}
        }}
    "#,
        EVALUATE = evaluate,
        BODY = body,
        RECORD = RECORD,
    );
    splice(src.parse().unwrap(), arguments)
}

/// `(&Stringifier(value)).write_into(&mut record);` for a `value` that is already a reference.
pub fn write_value(reference: &str) -> String {
    format!(
        "(&goinglogging::hidden::Stringifier({reference})).write_into(&mut {RECORD});\n",
        reference = reference,
        RECORD = RECORD,
    )
}

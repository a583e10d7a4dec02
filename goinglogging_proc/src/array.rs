//SPDX-License-Identifier: MIT OR Apache-2.0

use crate::expansion::{RECORD, frame, write_value};
use crate::parser::{compile_error, placeholder, split_arguments};
use proc_macro::TokenStream;

pub fn l_arr_impl(input: TokenStream) -> TokenStream {
    let arguments = match split_arguments(input, "l_arr") {
        Ok(arguments) => arguments,
        Err(e) => return e,
    };
    let [values, _] = arguments.as_slice() else {
        return compile_error("l_arr!() takes 2 arguments: values and length");
    };

    let evaluate = format!(
        r#"
        #[allow(unused_parens)]
        let __goinglogging_values = &{VALUES};
        #[allow(unused_parens)]
        let __goinglogging_len: usize = {LEN};
    "#,
        VALUES = placeholder(0),
        LEN = placeholder(1),
    );
    let body = format!(
        r#"
        {RECORD}.open_array({NAME});
        for __goinglogging_index in 0..__goinglogging_len {{
            {RECORD}.array_separator(__goinglogging_index);
            {WRITE}
        }}
        {RECORD}.close_array();
    "#,
        RECORD = RECORD,
        NAME = values.text_literal(),
        WRITE = write_value("&__goinglogging_values[__goinglogging_index]"),
    );
    frame(&evaluate, &body, &arguments)
}

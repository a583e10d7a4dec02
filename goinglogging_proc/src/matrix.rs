//SPDX-License-Identifier: MIT OR Apache-2.0

use crate::expansion::{RECORD, frame, write_value};
use crate::parser::{compile_error, placeholder, split_arguments};
use proc_macro::TokenStream;

pub fn l_mat_impl(input: TokenStream) -> TokenStream {
    let arguments = match split_arguments(input, "l_mat") {
        Ok(arguments) => arguments,
        Err(e) => return e,
    };
    let [values, _, _] = arguments.as_slice() else {
        return compile_error("l_mat!() takes 3 arguments: values, columns and rows");
    };

    let evaluate = format!(
        r#"
        #[allow(unused_parens)]
        let __goinglogging_values = &{VALUES};
        #[allow(unused_parens)]
        let __goinglogging_cols: usize = {COLS};
        #[allow(unused_parens)]
        let __goinglogging_rows: usize = {ROWS};
    "#,
        VALUES = placeholder(0),
        COLS = placeholder(1),
        ROWS = placeholder(2),
    );
    let body = format!(
        r#"
        {RECORD}.open_matrix({NAME});
        if __goinglogging_cols == 0 || __goinglogging_rows == 0 {{
            {RECORD}.empty_matrix();
        }} else {{
            for __goinglogging_row in 0..__goinglogging_rows {{
                for __goinglogging_col in 0..__goinglogging_cols {{
                    {RECORD}.matrix_cell(__goinglogging_row, __goinglogging_col);
                    {WRITE}
                }}
            }}
        }}
    "#,
        RECORD = RECORD,
        NAME = values.text_literal(),
        WRITE = write_value("&__goinglogging_values[__goinglogging_row][__goinglogging_col]"),
    );
    frame(&evaluate, &body, &arguments)
}

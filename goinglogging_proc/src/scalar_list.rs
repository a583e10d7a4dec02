//SPDX-License-Identifier: MIT OR Apache-2.0

use crate::expansion::{RECORD, frame, write_value};
use crate::parser::{compile_error, placeholder, split_arguments};
use proc_macro::TokenStream;

pub const MAX_ARGUMENTS: usize = 16;

pub fn l_impl(input: TokenStream) -> TokenStream {
    let arguments = match split_arguments(input, "l") {
        Ok(arguments) => arguments,
        Err(e) => return e,
    };
    if arguments.is_empty() || arguments.len() > MAX_ARGUMENTS {
        return compile_error(&format!(
            "l!() takes 1 to {} expressions, found {}",
            MAX_ARGUMENTS,
            arguments.len()
        ));
    }

    let mut evaluate = String::new();
    let mut body = String::new();
    for (index, argument) in arguments.iter().enumerate() {
        evaluate.push_str(&format!(
            "#[allow(unused_parens)] let __goinglogging_v{index} = &{argument};\n",
            index = index,
            argument = placeholder(index)
        ));
        body.push_str(&format!(
            "{RECORD}.write_field_name({name});\n",
            RECORD = RECORD,
            name = argument.text_literal()
        ));
        body.push_str(&write_value(&format!("__goinglogging_v{}", index)));
    }
    frame(&evaluate, &body, &arguments)
}

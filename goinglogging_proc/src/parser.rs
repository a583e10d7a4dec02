//SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro::{Delimiter, Group, Span, TokenStream, TokenTree};

/// One comma-separated macro argument.
pub struct Argument {
    /// The argument's own tokens, spliced into the expansion unchanged.
    pub tokens: Vec<TokenTree>,
    /// Source text as written at the call site, e.g. `v.len()`.
    pub text: String,
}

impl Argument {
    /// `text` as a string literal.
    pub fn text_literal(&self) -> String {
        format!("{:?}", self.text)
    }

    /// The argument wrapped in parentheses, keeping every token's span.
    pub fn group(&self) -> TokenTree {
        let stream: TokenStream = self.tokens.iter().cloned().collect();
        TokenTree::Group(Group::new(Delimiter::Parenthesis, stream))
    }
}

pub fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!({:?})", message).parse().unwrap()
}

/// Splits the macro input on top-level commas.
///
/// Groups are single token trees, so commas inside `()`, `[]` and `{}` never split.
/// A trailing comma is accepted; an empty argument is an error.  A comma inside
/// turbofish generics or closure parameters would cut the argument in two, so it is
/// reported with a hint to parenthesize.
///
/// ```ignore
/// # // ignore because: proc_macro types only exist inside a procedural macro
/// // For input: `i, s.len(), f(a, b),`
/// // Returns: ["i", "s.len()", "f(a, b)"]
/// ```
pub fn split_arguments(input: TokenStream, macro_name: &str) -> Result<Vec<Argument>, TokenStream> {
    let mut arguments = Vec::new();
    let mut current: Vec<TokenTree> = Vec::new();
    //depth of `::<...>` in the current argument
    let mut generic_depth = 0usize;
    for token in input {
        let punct = match &token {
            TokenTree::Punct(p) => Some(p.as_char()),
            _ => None,
        };
        match punct {
            Some(',') => {
                if current.is_empty() {
                    return Err(compile_error(&format!(
                        "{}!() found an empty argument",
                        macro_name
                    )));
                }
                if generic_depth > 0 || opens_closure(&current) {
                    return Err(compile_error(&format!(
                        "{}!() argument `{}` is cut off by a comma inside generic arguments or closure parameters; wrap the argument in parentheses",
                        macro_name,
                        argument_text(&current)
                    )));
                }
                arguments.push(argument(std::mem::take(&mut current)));
            }
            Some('<') if generic_depth > 0 || ends_with_path_separator(&current) => {
                generic_depth += 1;
                current.push(token);
            }
            Some('>') if generic_depth > 0 && !ends_with_punct(&current, '-') => {
                generic_depth -= 1;
                current.push(token);
            }
            _ => current.push(token),
        }
    }
    //an empty tail is either no input at all or a trailing comma
    if !current.is_empty() {
        arguments.push(argument(current));
    }
    Ok(arguments)
}

fn argument(tokens: Vec<TokenTree>) -> Argument {
    let text = argument_text(&tokens);
    Argument { tokens, text }
}

fn ends_with_punct(tokens: &[TokenTree], c: char) -> bool {
    matches!(tokens.last(), Some(TokenTree::Punct(p)) if p.as_char() == c)
}

fn ends_with_path_separator(tokens: &[TokenTree]) -> bool {
    tokens.len() >= 2
        && ends_with_punct(tokens, ':')
        && ends_with_punct(&tokens[..tokens.len() - 1], ':')
}

/// `|a` or `move |a`: closure parameters that haven't been closed yet.
fn opens_closure(tokens: &[TokenTree]) -> bool {
    let params = match tokens.first() {
        Some(TokenTree::Ident(i)) if i.to_string() == "move" => &tokens[1..],
        _ => tokens,
    };
    let starts_with_bar = matches!(params.first(), Some(TokenTree::Punct(p)) if p.as_char() == '|');
    let bars = params
        .iter()
        .filter(|t| matches!(t, TokenTree::Punct(p) if p.as_char() == '|'))
        .count();
    starts_with_bar && bars % 2 == 1
}

/// The source text of an argument, as written.
///
/// Each token's text comes from its span, and the whitespace between two tokens on
/// the same line is kept.  A line break becomes a single space.  Tokens with no
/// source text of their own (made by another procedural macro) fall back to the
/// token stream's printed form.
pub fn argument_text(tokens: &[TokenTree]) -> String {
    let mut text = String::new();
    let mut previous: Option<Span> = None;
    for token in tokens {
        let piece = match token_text(token) {
            Some(piece) => piece,
            None => return tokens.iter().cloned().collect::<TokenStream>().to_string(),
        };
        if let Some(previous) = previous {
            push_gap(&mut text, previous, token.span());
        }
        text.push_str(&piece);
        previous = Some(token.span());
    }
    text
}

fn token_text(token: &TokenTree) -> Option<String> {
    match token {
        //invisible groups come from `$e:expr` in macro_rules; their contents carry the caller's spans
        TokenTree::Group(g) if g.delimiter() == Delimiter::None => {
            let inner: Vec<TokenTree> = g.stream().into_iter().collect();
            Some(argument_text(&inner))
        }
        _ => token.span().source_text(),
    }
}

fn push_gap(text: &mut String, before: Span, after: Span) {
    let end = before.end();
    let start = after.start();
    if end.line() == start.line() && start.column() >= end.column() {
        for _ in end.column()..start.column() {
            text.push(' ');
        }
    } else {
        text.push(' ');
    }
}

/// Prefix of the identifiers that stand in for arguments in an expansion template.
pub const PLACEHOLDER: &str = "__goinglogging_argument_";

pub fn placeholder(index: usize) -> String {
    format!("{}{}", PLACEHOLDER, index)
}

/// Replaces every placeholder in `stream` with the matching argument's tokens.
///
/// Only the template is ever parsed from text; user tokens keep their spans, and
/// with them their hygiene.
pub fn splice(stream: TokenStream, arguments: &[Argument]) -> TokenStream {
    stream
        .into_iter()
        .map(|token| match token {
            TokenTree::Ident(ident) => {
                let name = ident.to_string();
                let index = name
                    .strip_prefix(PLACEHOLDER)
                    .and_then(|index| index.parse::<usize>().ok());
                match index.and_then(|index| arguments.get(index)) {
                    Some(argument) => argument.group(),
                    None => TokenTree::Ident(ident),
                }
            }
            TokenTree::Group(group) => {
                let mut spliced = Group::new(group.delimiter(), splice(group.stream(), arguments));
                spliced.set_span(group.span());
                TokenTree::Group(spliced)
            }
            other => other,
        })
        .collect()
}

use proc_macro::{Delimiter, Group, Ident, Literal, Span, TokenStream, TokenTree};

use crate::error::Error;

/// Expand into a `main` function which wraps the original solver.
///
/// The solver is kept as an item inside of the generated function, so it
/// shadows the outer `main` when called.
pub(crate) fn expand_main(
    fn_name: &Ident,
    input: &Literal,
    expect: Option<&TokenStream>,
    item_stream: TokenStream,
) -> TokenStream {
    let call = match expect {
        Some(expect) => {
            format!("lib::cli::run_expect(&opts, path, input, {expect}, {fn_name})")
        }
        None => format!("lib::cli::run(&opts, path, input, {fn_name})"),
    };

    let block = format!(
        "let opts = lib::cli::Opts::parse()?;
        let (input, path) = lib::input!({input});
        {call}"
    );

    let mut body = item_stream;
    body.extend(parse(&block));

    let mut stream = parse("fn main() -> lib::prelude::Result<()>");
    stream.extend([TokenTree::Group(Group::new(Delimiter::Brace, body))]);
    stream
}

fn parse(source: &str) -> TokenStream {
    match source.parse::<TokenStream>() {
        Ok(stream) => stream,
        Err(error) => {
            let mut stream = TokenStream::new();
            Error::new(Span::call_site(), error.to_string()).write_to(&mut stream);
            stream
        }
    }
}

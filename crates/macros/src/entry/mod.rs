mod output;
mod parser;

use proc_macro::{Span, TokenStream};

use crate::error::Error;

/// Configurable macro code to build entry.
pub(crate) fn build(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    let mut errors = Vec::new();

    let config = parser::ConfigParser::new(args, &mut errors).parse();
    config.validate(&mut errors);

    let fn_name = parser::fn_name(item_stream.clone());

    let (Some(fn_name), Some(input)) = (fn_name, &config.input_file) else {
        if errors.is_empty() {
            errors.push(Error::new(Span::call_site(), "expected a function item"));
        }

        return format_errors(errors, item_stream);
    };

    if !errors.is_empty() {
        return format_errors(errors, item_stream);
    }

    output::expand_main(&fn_name, input, config.expect.as_ref(), item_stream)
}

/// Emit errors next to the untouched item, so that the item itself still
/// produces sensible diagnostics.
fn format_errors<I>(errors: I, item_stream: TokenStream) -> TokenStream
where
    I: IntoIterator<Item = Error>,
{
    let mut stream = item_stream;

    for error in errors {
        error.write_to(&mut stream);
    }

    stream
}

use std::iter::Peekable;

use proc_macro::{Ident, Literal, Span, TokenStream, TokenTree};

use crate::error::Error;

/// Parsed arguments of the entry macro.
#[derive(Default)]
pub(crate) struct Config {
    /// Input file, relative to the `inputs` directory of the package.
    pub(crate) input_file: Option<Literal>,
    /// Expected output of the solver.
    pub(crate) expect: Option<TokenStream>,
}

impl Config {
    /// Validate the parsed configuration.
    pub(crate) fn validate(&self, errors: &mut Vec<Error>) {
        if self.input_file.is_none() {
            errors.push(Error::new(Span::call_site(), "missing `input` argument"));
        }
    }
}

/// A parser for the arguments provided to an entry macro.
pub(crate) struct ConfigParser<'a> {
    it: Peekable<proc_macro::token_stream::IntoIter>,
    errors: &'a mut Vec<Error>,
}

impl<'a> ConfigParser<'a> {
    /// Construct a new parser around the given token stream.
    pub(crate) fn new(stream: TokenStream, errors: &'a mut Vec<Error>) -> Self {
        Self {
            it: stream.into_iter().peekable(),
            errors,
        }
    }

    /// Parse `name = value` pairs separated by commas.
    pub(crate) fn parse(mut self) -> Config {
        let mut config = Config::default();

        while let Some(tt) = self.it.next() {
            let ident = match tt {
                TokenTree::Ident(ident) => ident,
                tt => {
                    self.errors.push(Error::new(tt.span(), "expected identifier"));
                    self.recover();
                    continue;
                }
            };

            if !self.parse_eq() {
                self.errors
                    .push(Error::new(ident.span(), "expected assignment `=`"));
                self.recover();
                continue;
            }

            let value = self.parse_value();

            if value.is_empty() {
                self.errors.push(Error::new(ident.span(), "expected value"));
                continue;
            }

            match ident.to_string().as_str() {
                "input" => match &value[..] {
                    [TokenTree::Literal(literal)] => {
                        config.input_file = Some(literal.clone());
                    }
                    _ => {
                        self.errors
                            .push(Error::new(value[0].span(), "expected string literal"));
                    }
                },
                "expect" => {
                    config.expect = Some(value.into_iter().collect());
                }
                name => {
                    self.errors
                        .push(Error::new(ident.span(), format!("unknown option `{name}`")));
                }
            }
        }

        config
    }

    /// Parse an `=` punctuation.
    fn parse_eq(&mut self) -> bool {
        let is_eq = matches!(self.it.peek(), Some(TokenTree::Punct(p)) if p.as_char() == '=');

        if is_eq {
            self.it.next();
        }

        is_eq
    }

    /// Collect tokens up until the next top-level comma `,`.
    fn parse_value(&mut self) -> Vec<TokenTree> {
        let mut value = Vec::new();

        for tt in self.it.by_ref() {
            if matches!(&tt, TokenTree::Punct(p) if p.as_char() == ',') {
                break;
            }

            value.push(tt);
        }

        value
    }

    /// Recover by skipping to the next comma `,`, or end of input.
    fn recover(&mut self) {
        let _ = self.parse_value();
    }
}

/// Find the name of the function being annotated.
pub(crate) fn fn_name(item_stream: TokenStream) -> Option<Ident> {
    let mut next_is_name = false;

    for tt in item_stream {
        let TokenTree::Ident(ident) = tt else {
            next_is_name = false;
            continue;
        };

        if next_is_name {
            return Some(ident);
        }

        next_is_name = ident.to_string() == "fn";
    }

    None
}

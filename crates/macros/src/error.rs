use proc_macro::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// An error raised while expanding a macro, emitted as `compile_error!`.
pub(crate) struct Error {
    span: Span,
    message: String,
}

impl Error {
    pub(crate) fn new<M>(span: Span, message: M) -> Self
    where
        M: Into<String>,
    {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Write the error into the given stream.
    pub(crate) fn write_to(&self, stream: &mut TokenStream) {
        let mut bang = Punct::new('!', Spacing::Alone);
        bang.set_span(self.span);

        let mut message = Literal::string(&self.message);
        message.set_span(self.span);

        let mut args = Group::new(
            Delimiter::Parenthesis,
            TokenStream::from(TokenTree::Literal(message)),
        );
        args.set_span(self.span);

        let mut semi = Punct::new(';', Spacing::Alone);
        semi.set_span(self.span);

        stream.extend([
            TokenTree::Ident(Ident::new("compile_error", self.span)),
            TokenTree::Punct(bang),
            TokenTree::Group(args),
            TokenTree::Punct(semi),
        ]);
    }
}

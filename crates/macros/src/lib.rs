use proc_macro::TokenStream;

mod entry;
mod error;

/// Turn a puzzle solver into the binary's entry point.
///
/// The annotated function receives the loaded input and returns the answers:
///
/// ```ignore
/// #[entry(input = "d03.txt", expect = (4361, 467835))]
/// fn main(input: IStr) -> Result<(u32, u32)> {
///     /* .. */
/// }
/// ```
///
/// The expansion parses command line options, reads `inputs/d03.txt`
/// relative to the package, runs the solver, compares the result against
/// `expect` if present, and prints each part's answer.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}

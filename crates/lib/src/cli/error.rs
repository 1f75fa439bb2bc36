use core::fmt;
use core::ops::Range;

use crate::env::Size;
use crate::input::{IStr, IStrError};

/// Associate an input position with an error raised by a solver.
#[doc(hidden)]
pub fn error_context(path: &'static str, data: IStr, error: anyhow::Error) -> anyhow::Error {
    let span = find_range(&error);
    let pos = crate::env::pos_from(data.as_data(), span);
    error.context(ErrorContext { path, pos })
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Errors can be threaded through multiple layers of context, so look through
/// all of them for an input error.
fn find_range(error: &anyhow::Error) -> Range<Size> {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<IStrError>() {
            return e.span.clone();
        }
    }

    Size::ZERO..Size::ZERO
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use crate::input::IStr;

    use super::error_context;

    #[test]
    fn test_error_position() {
        let input = IStr::new(b"1 2\n3 x\n");

        let error = (|| -> anyhow::Result<()> {
            let mut p = input;
            p.line::<(u32, u32)>()?;
            p.line::<(u32, u32)>().context("second line")?;
            Ok(())
        })()
        .unwrap_err();

        let error = error_context("inputs/test.txt", input, error);
        assert_eq!(error.to_string(), "inputs/test.txt:2:3");
    }
}

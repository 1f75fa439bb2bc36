//! Loading of puzzle input and mapping of offsets back into it.

use core::ops::Range;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::cli::error::LineCol;
use crate::input::{IStr, NL};

/// A byte offset into the input.
#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the start of the given span.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let start = span.start.get().min(data.len());
    let before = data.get(..start).unwrap_or_default();

    let line = memchr::memchr_iter(NL, before).count();
    let line_start = memchr::memrchr(NL, before).map_or(0, |n| n + 1);

    LineCol::new(line, start - line_start)
}

/// Read the input file at `read_path` fully into memory.
///
/// The storage is leaked since the input lives for the duration of the
/// process anyway. Errors carry `path` as context.
pub fn input(path: &'static str, read_path: &str) -> anyhow::Result<IStr> {
    return inner(read_path).with_context(|| anyhow!("{path}: failed to read input"));

    #[inline]
    fn inner(read_path: &str) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        log::debug!("read {} bytes from {read_path}", buf.len());
        Ok(IStr::new(Vec::leak(buf)))
    }
}

/// Load the named input file from the `inputs` directory of the calling
/// package.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::env::input(path, read_path)?, path)
    }};
}

#[cfg(test)]
mod tests {
    use super::{input, pos_from, Size};

    #[test]
    fn test_pos_from() {
        let data = b"first\nsecond\nthird";

        let pos = pos_from(data, Size::new(0)..Size::new(1));
        assert_eq!(pos.to_string(), "1:1");

        let pos = pos_from(data, Size::new(9)..Size::new(10));
        assert_eq!(pos.to_string(), "2:4");

        let pos = pos_from(data, Size::new(13)..Size::new(18));
        assert_eq!(pos.to_string(), "3:1");
    }

    #[test]
    fn test_pos_past_end() {
        let pos = pos_from(b"ab\ncd", Size::new(100)..Size::new(100));
        assert_eq!(pos.to_string(), "2:3");
    }

    #[test]
    fn test_missing_input() {
        let error = input("inputs/missing.txt", "/nonexistent/inputs/missing.txt").unwrap_err();
        assert_eq!(error.to_string(), "inputs/missing.txt: failed to read input");

        let cause = error.root_cause().downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
    }
}

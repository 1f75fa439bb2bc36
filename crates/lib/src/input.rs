//! Input parser.

mod error;

use core::ops;
use std::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;

pub use self::error::{ErrorKind, IStrError};

use crate::env::Size;

type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// A cursor over puzzle input.
///
/// Cheap to copy, so a solver can walk the same input more than once.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The remaining data.
    data: &'static [u8],
    /// Offset of `data` into the original input.
    index: Size,
}

impl IStr {
    /// Construct a new input processor over the given data.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"1 2\n3 4\n");
    /// assert_eq!(input.line::<(u32, u32)>()?, (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>()?, (3, 4));
    /// assert!(input.try_line::<(u32, u32)>()?.is_none());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub fn new(data: &'static [u8]) -> Self {
        Self::at(data, Size::ZERO)
    }

    #[inline]
    pub(crate) fn at(data: &'static [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if there are no
    /// more lines or the line is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there are no more
    /// lines.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Split off everything up until the next `byte`, consuming the byte
    /// itself. If `byte` is not present the rest of the input is returned.
    ///
    /// Returns `None` once the input is exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"3 blue, 4 red");
    /// assert_eq!(input.split_once(b',').map(|s| s.as_data()), Some(&b"3 blue"[..]));
    /// assert_eq!(input.split_once(b',').map(|s| s.as_data()), Some(&b" 4 red"[..]));
    /// assert!(input.split_once(b',').is_none());
    /// ```
    #[inline]
    pub fn split_once(&mut self, byte: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let at = memchr::memchr(byte, self.data).unwrap_or(self.data.len());
        let head = IStr::at(self.data.get(..at)?, self.index);
        self.advance(at.saturating_add(1));
        Some(head)
    }

    /// Like [IStr::split_once], but the `byte` must be present.
    #[inline]
    pub fn until(&mut self, byte: u8) -> Result<IStr> {
        if memchr::memchr(byte, self.data).is_none() {
            return Err(self.error(ErrorKind::ExpectedByte(byte as char)));
        }

        match self.split_once(byte) {
            Some(head) => Ok(head),
            None => Err(self.error(ErrorKind::ExpectedByte(byte as char))),
        }
    }

    /// Consume the given prefix if present, ignoring leading whitespace.
    #[inline]
    pub fn eat(&mut self, prefix: &[u8]) -> bool {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        let Some(rest) = self.data.get(s..) else {
            return false;
        };

        if !rest.starts_with(prefix) {
            return false;
        }

        self.advance(s + prefix.len());
        true
    }

    /// Ensure that nothing but whitespace remains in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::prelude::*;
    ///
    /// let mut input = IStr::new(b"3 red ");
    /// assert_eq!(input.next::<(u32, W<&str>)>()?.0, 3);
    /// assert!(input.finish().is_ok());
    ///
    /// let mut input = IStr::new(b"3 red blue");
    /// assert_eq!(input.next::<(u32, W<&str>)>()?.0, 3);
    /// assert!(input.finish().is_err());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub fn finish(&self) -> Result<()> {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        match self.slice(s..self.data.len()) {
            Some(rest) if !rest.is_empty() => Err(rest.error(ErrorKind::Trailing)),
            _ => Ok(()),
        }
    }

    /// Construct an error covering the remaining input.
    #[inline]
    pub fn error(&self, kind: ErrorKind) -> IStrError {
        IStrError::new(
            self.index..self.index.saturating_add(Size::new(self.data.len())),
            kind,
        )
    }

    /// Try to parse the next whitespace-separated word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Find the first index from `n` matching the predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.saturating_add(Size::new(range.start));
        Some(Self::at(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Error kind to use when no value is available.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if the input holds none.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(
                        index.saturating_add(n)..p.index,
                        ErrorKind::NotInteger(string),
                    ));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

integer!(usize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(i32);
integer!(i64);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let rest = *p;
        p.advance(p.len());
        Ok(Some(rest))
    }
}

impl FromInput for &[u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(p.len());
        Ok(Some(data))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&'static [u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<T, const N: usize> FromInput for ArrayVec<T, N>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}

impl<T> FromInput for Vec<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

/// Parses to nothing, used to skip over words.
#[non_exhaustive]
pub struct Skip;

impl FromInput for Skip {
    #[inline]
    fn try_from_input(_: &mut IStr) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
pub struct W<T = Skip>(pub T);

impl<T> FromInput for W<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}

/// Consume the whole remaining input as `T`, but only if it's not empty.
pub struct NonEmpty<T>(pub T);

impl<T> FromInput for NonEmpty<T>
where
    T: FromInput,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        if p.is_empty() {
            return Ok(None);
        }

        Ok(T::try_from_input(p)?.map(Self))
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, IStr, NonEmpty, W};

    #[test]
    fn test_words_and_integers() {
        let mut input = IStr::new(b"Card   12: 41 48 | 83");
        let mut header = input.until(b':').unwrap();
        let (W(_), id) = header.next::<(W, u32)>().unwrap();
        assert_eq!(id, 12);

        let winning = input.until(b'|').unwrap().next::<Vec<u32>>().unwrap();
        assert_eq!(winning, [41, 48]);

        let rest = input.next::<Vec<u32>>().unwrap();
        assert_eq!(rest, [83]);
        assert!(input.is_empty());
    }

    #[test]
    fn test_not_integer() {
        let mut input = IStr::new(b"12 x4 5");
        assert_eq!(input.next::<u32>().unwrap(), 12);

        let error = input.next::<u32>().unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::NotInteger("x4")));
    }

    #[test]
    fn test_until_missing() {
        let mut input = IStr::new(b"41 48 83");
        let error = input.until(b'|').unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::ExpectedByte('|')));
    }

    #[test]
    fn test_lines() {
        let mut input = IStr::new(b"ab\n\ncd");
        assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"ab"[..]));
        assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b""[..]));
        assert_eq!(input.try_line::<&[u8]>().unwrap(), Some(&b"cd"[..]));
        assert_eq!(input.try_line::<&[u8]>().unwrap(), None);
    }

    #[test]
    fn test_non_empty_lines() {
        let mut input = IStr::new(b"ab\n\n");
        assert!(input.try_line::<NonEmpty<&str>>().unwrap().is_some());
        assert!(input.try_line::<NonEmpty<&str>>().unwrap().is_none());
        assert!(input.try_line::<NonEmpty<&str>>().unwrap().is_none());
    }

    #[test]
    fn test_line_index() {
        let mut input = IStr::new(b"ab\ncd\n");
        let first = input.line::<IStr>().unwrap();
        let second = input.line::<IStr>().unwrap();
        assert_eq!(first.index().get(), 0);
        assert_eq!(second.index().get(), 3);
    }

    #[test]
    fn test_finish_points_at_trailing_word() {
        let mut input = IStr::new(b"12 x");
        assert_eq!(input.next::<u32>().unwrap(), 12);

        let error = input.finish().unwrap_err();
        assert_eq!(error.span.start.get(), 3);
        assert!(matches!(error.kind(), ErrorKind::Trailing));

        let mut input = IStr::new(b"12  \t");
        assert_eq!(input.next::<u32>().unwrap(), 12);
        assert!(input.finish().is_ok());
    }

    #[test]
    fn test_eat() {
        let mut input = IStr::new(b"  Game 1");
        assert!(!input.eat(b"Card"));
        assert!(input.eat(b"Game"));
        assert_eq!(input.next::<u32>().unwrap(), 1);
    }
}

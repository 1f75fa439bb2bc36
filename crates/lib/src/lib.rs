pub mod cli;
pub mod env;
pub mod grid;
pub mod input;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Grid, GridExt, SliceGrid};
    pub use crate::input::{ErrorKind, FromInput, IStr, NonEmpty, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use macros::entry;
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bstr::BStr;
}

/// Implement [FromInput][crate::input::FromInput] for a type by converting
/// from another parsed value.
///
/// Conversion errors are reported at the position of the parsed value.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// lib::from_input! {
///     |value: W<&str>| -> Color {
///         let W(name) = value;
///
///         Ok(match name {
///             "red" => Color::Red,
///             "green" => Color::Green,
///             other => bail!("unknown color `{other}`"),
///         })
///     }
/// }
///
/// let mut input = IStr::new(b"red purple");
/// assert_eq!(input.next::<Color>()?, Color::Red);
/// assert!(input.next::<Color>().is_err());
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let index = p.index();

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => Err($crate::input::IStrError::new(
                        index..p.index(),
                        $crate::input::ErrorKind::Boxed(e),
                    )),
                }
            }
        }
    };
}

use core::fmt;

use arrayvec::ArrayVec;

/// The answers produced by a solver, one per puzzle part.
pub trait Answer {
    /// The answers in part order.
    fn parts(&self) -> ArrayVec<&dyn fmt::Display, 2>;
}

impl<A, B> Answer for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    #[inline]
    fn parts(&self) -> ArrayVec<&dyn fmt::Display, 2> {
        ArrayVec::from([&self.0 as &dyn fmt::Display, &self.1 as &dyn fmt::Display])
    }
}

macro_rules! single {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Answer for $ty {
                #[inline]
                fn parts(&self) -> ArrayVec<&dyn fmt::Display, 2> {
                    let mut parts = ArrayVec::new();
                    parts.push(self as &dyn fmt::Display);
                    parts
                }
            }
        )*
    };
}

single!(usize, u32, u64, i32, i64);

#[cfg(test)]
mod tests {
    use super::Answer;

    #[test]
    fn test_parts() {
        let value = (4361u32, 467835u64);
        let parts = value.parts();
        let parts = parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        assert_eq!(parts, ["4361", "467835"]);

        assert_eq!(13u32.parts().len(), 1);
    }
}

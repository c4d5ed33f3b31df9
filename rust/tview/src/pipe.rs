//! Construction helpers: the [`transform_view`] function and the `|` adaptor.
//!
//! `sequence | transform(f)` is equivalent to `transform_view(sequence, f)`:
//! the sequence is first adapted with [`all`](crate::adapt::all), so containers
//! may be passed by reference (borrowed) or by value (owned).
//!
//! ```
//! use tview::transform;
//!
//! let lowered = "LOWER" | transform(|b: &u8| char::from(b + 0x20));
//! assert_eq!(lowered.iter().collect::<String>(), "lower");
//! ```

use std::collections::VecDeque;
use std::ops::BitOr;

use crate::adapt::{Adapted, Viewable};
use crate::std_impls::{Counter, Empty, StrChars, Terminated};
use crate::view::TransformView;

/// Builds a transform view over `sequence`, adapting it into a view first.
pub fn transform_view<'a, S, F>(sequence: S, fun: F) -> TransformView<S::View, F>
where
    S: Viewable<'a>,
{
    TransformView::new(sequence.into_view(), fun)
}

/// A partially applied transform, waiting for its sequence on the left of `|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformAdaptor<F> {
    fun: F,
}

/// Captures `fun` for later application with `sequence | transform(fun)`.
pub fn transform<F>(fun: F) -> TransformAdaptor<F> {
    TransformAdaptor { fun }
}

impl<F> TransformAdaptor<F> {
    /// Applies the captured function to `sequence`.
    pub fn apply<'a, S>(self, sequence: S) -> TransformView<S::View, F>
    where
        S: Viewable<'a>,
    {
        transform_view(sequence, self.fun)
    }

    pub fn into_inner(self) -> F {
        self.fun
    }
}

macro_rules! impl_pipe {
    ($(impl<$($lt:lifetime),* ; $($g:ident $(: $bound:lifetime)?),*> for $t:ty => $view:ty;)*) => {
        $(
            impl<$($lt,)* $($g $(: $bound)?,)* Fun> BitOr<TransformAdaptor<Fun>> for $t {
                type Output = TransformView<$view, Fun>;

                #[inline]
                fn bitor(self, adaptor: TransformAdaptor<Fun>) -> Self::Output {
                    transform_view(self, adaptor.fun)
                }
            }
        )*
    };
}

impl_pipe! {
    impl<'a; T> for &'a Vec<T> => Adapted<'a, Vec<T>>;
    impl<'a; T> for &'a VecDeque<T> => Adapted<'a, VecDeque<T>>;
    impl<'a;> for &'a String => Adapted<'a, String>;
    impl<'a; T> for &'a [T] => &'a [T];
    impl<'a;> for &'a str => &'a str;
    impl<'b; S> for Adapted<'b, S> => Adapted<'b, S>;
    impl<'a;> for StrChars<'a> => StrChars<'a>;
    impl<'a; T> for Terminated<'a, T> => Terminated<'a, T>;
    impl<; T> for Empty<T> => Empty<T>;
    impl<;> for Counter => Counter;
    impl<; V, F> for TransformView<V, F> => TransformView<V, F>;
}

// Owned containers: the view owns them, so their elements must not borrow.
impl_pipe! {
    impl<; T: 'static> for Vec<T> => Adapted<'static, Vec<T>>;
    impl<; T: 'static> for VecDeque<T> => Adapted<'static, VecDeque<T>>;
    impl<;> for String => Adapted<'static, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_borrowed_vec() {
        let v = vec![1, 2, 3];
        let view = &v | transform(|x: &i32| x * 10);
        assert!(view.base_ref().is_borrowed());
        assert_eq!(view.iter().collect::<Vec<_>>(), [10, 20, 30]);
    }

    #[test]
    fn test_pipe_matches_function_form() {
        let v = vec![5u8, 6];
        let piped = &v[..] | transform(|x: &u8| u32::from(*x) + 1);
        let called = transform_view(&v[..], |x: &u8| u32::from(*x) + 1);
        assert!(piped.iter().eq(called.iter()));
    }

    #[test]
    fn test_pipe_stacks() {
        let text = "abc";
        let view = text
            | transform(|b: &u8| char::from(*b))
            | transform(|c: char| c.to_ascii_uppercase());
        assert_eq!(view.iter().collect::<String>(), "ABC");
    }

    #[test]
    fn test_pipe_owned_vec() {
        let view = vec![1u32, 2, 3] | transform(|x: &u32| x + 1);
        assert!(view.base_ref().is_owned());
        assert_eq!(view.iter().sum::<u32>(), 9);
    }

    #[test]
    fn test_adaptor_apply() {
        let adaptor = transform(|x: i64| x - 1);
        let view = adaptor.apply(Counter::new(10));
        assert_eq!(view.begin().get(), 9);
    }
}

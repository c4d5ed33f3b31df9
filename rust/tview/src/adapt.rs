//! Turning arbitrary sequences into views.
//!
//! A transform view holds its underlying sequence by value, so that sequence must
//! be a [`View`]. [`all`] adapts whatever the caller passes:
//!
//! - a borrowed container is wrapped as [`Adapted::Borrowed`] (the view refers to
//!   the caller's container, which must outlive it);
//! - an owned container is moved into [`Adapted::Owned`] (the view owns it);
//! - something that already is a view passes through unchanged.

use std::collections::VecDeque;

use crate::sequence::{Sequence, SequenceMut, SizedSequence, View};
use crate::std_impls::{Counter, Empty, StrChars, Terminated};
use crate::view::TransformView;

/// A container held either by reference or by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adapted<'a, S> {
    Borrowed(&'a S),
    Owned(S),
}

impl<'a, S> Adapted<'a, S> {
    /// Returns the adapted container, however it is held.
    #[inline]
    pub fn get(&self) -> &S {
        match self {
            Adapted::Borrowed(s) => s,
            Adapted::Owned(s) => s,
        }
    }

    #[inline]
    pub fn is_borrowed(&self) -> bool {
        matches!(self, Adapted::Borrowed(_))
    }

    #[inline]
    pub fn is_owned(&self) -> bool {
        matches!(self, Adapted::Owned(_))
    }

    /// Returns the borrowed container, if this adapter does not own it.
    pub fn as_borrowed(&self) -> Option<&'a S> {
        match self {
            Adapted::Borrowed(s) => Some(s),
            Adapted::Owned(_) => None,
        }
    }

    /// Extracts the owned container, cloning it if it is only borrowed.
    pub fn into_owned(self) -> S
    where
        S: Clone,
    {
        match self {
            Adapted::Borrowed(s) => s.clone(),
            Adapted::Owned(s) => s,
        }
    }
}

impl<'s, S: Sequence<'s>> Sequence<'s> for Adapted<'_, S> {
    type Cursor = S::Cursor;
    type Sentinel = S::Sentinel;

    #[inline]
    fn begin(&'s self) -> S::Cursor {
        self.get().begin()
    }

    #[inline]
    fn end(&'s self) -> S::Sentinel {
        self.get().end()
    }
}

/// Mutable traversal of an adapted container goes through shared access to it.
impl<'s, S: Sequence<'s>> SequenceMut<'s> for Adapted<'_, S> {
    type CursorMut = S::Cursor;
    type SentinelMut = S::Sentinel;

    fn bounds_mut(&'s mut self) -> (S::Cursor, S::Sentinel) {
        let this: &'s Self = self;
        (this.get().begin(), this.get().end())
    }
}

impl<S: SizedSequence> SizedSequence for Adapted<'_, S> {
    fn len(&self) -> usize {
        self.get().len()
    }
}

impl<S> View for Adapted<'_, S> {}

/// Conversion into a [`View`]; see [`all`].
///
/// `'a` is the lifetime of the borrow held by [`Adapted::Borrowed`] results; it is
/// unused by owning and pass-through conversions.
pub trait Viewable<'a> {
    type View: View;

    fn into_view(self) -> Self::View;
}

/// Adapts `sequence` into a view: borrowed containers by reference, owned
/// containers by value, views unchanged.
pub fn all<'a, S: Viewable<'a>>(sequence: S) -> S::View {
    sequence.into_view()
}

/// Containers: borrowed by reference, owned by value.
macro_rules! impl_viewable_container {
    ($(impl<$($g:ident),*> for $t:ty;)*) => {
        $(
            impl<'a, $($g),*> Viewable<'a> for &'a $t {
                type View = Adapted<'a, $t>;

                #[inline]
                fn into_view(self) -> Self::View {
                    Adapted::Borrowed(self)
                }
            }

            impl<'a, $($g: 'a),*> Viewable<'a> for $t {
                type View = Adapted<'a, $t>;

                #[inline]
                fn into_view(self) -> Self::View {
                    Adapted::Owned(self)
                }
            }
        )*
    };
}

impl_viewable_container! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<> for String;
}

impl<'a, 'b, T> Viewable<'a> for &'b [T] {
    type View = &'b [T];

    #[inline]
    fn into_view(self) -> &'b [T] {
        self
    }
}

impl<'a, 'b> Viewable<'a> for &'b str {
    type View = &'b str;

    #[inline]
    fn into_view(self) -> &'b str {
        self
    }
}

impl<'a, 'b, S> Viewable<'a> for Adapted<'b, S> {
    type View = Adapted<'b, S>;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, V, F> Viewable<'a> for TransformView<V, F> {
    type View = TransformView<V, F>;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, 'b> Viewable<'a> for StrChars<'b> {
    type View = StrChars<'b>;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a> Viewable<'a> for Counter {
    type View = Counter;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, 'b, T> Viewable<'a> for Terminated<'b, T> {
    type View = Terminated<'b, T>;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

impl<'a, T> Viewable<'a> for Empty<T> {
    type View = Empty<T>;

    #[inline]
    fn into_view(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed_container_keeps_identity() {
        let v = vec![1, 2, 3];
        let adapted = all(&v);
        assert!(adapted.is_borrowed());
        assert!(std::ptr::eq(adapted.get(), &v));
        assert!(std::ptr::eq(adapted.as_borrowed().unwrap(), &v));
    }

    #[test]
    fn test_owned_container_is_moved() {
        let v = vec![String::from("a")];
        let ptr = v.as_ptr();
        let adapted = all(v);
        assert!(adapted.is_owned());
        assert!(adapted.as_borrowed().is_none());
        let back = adapted.into_owned();
        assert_eq!(back.as_ptr(), ptr);
    }

    #[test]
    fn test_views_pass_through() {
        let data = [1, 2];
        let slice: &[i32] = all(&data[..]);
        assert!(std::ptr::eq(slice, &data[..]));
        let counter: Counter = all(Counter::new(3));
        assert_eq!(counter.start(), 3);
    }

    #[test]
    fn test_adapted_sequence() {
        let deque: VecDeque<u8> = [4, 5, 6].into_iter().collect();
        let adapted = all(&deque);
        assert_eq!(adapted.len(), 3);
        let mut owned = all(deque.clone());
        let (begin, end) = owned.bounds_mut();
        assert_eq!(end.index() - begin.index(), 3);
    }
}

//! `Iterator` adapters over transform views, so they compose with the rest of the
//! standard library (`collect`, `zip`, `for` loops, ...).

use std::iter::FusedIterator;

use crate::boundary::BoundaryMarker;
use crate::cursor::{BidirectionalCursor, Cursor, Sentinel, SizedSentinel};
use crate::invoke::{OutputOf, Transform, TransformMut};
use crate::position::{Position, PositionMut};
use crate::sequence::{
    CursorMutOf, CursorOf, ReferenceMutOf, ReferenceOf, SequenceMut, Sequence, SentinelMutOf,
    SentinelOf,
};
use crate::view::{EndOf, TransformView, ViewEnd};

/// Iterator over a transform view through shared access.
///
/// Yields `F(element)` for each element from the front position up to the end.
/// When the view ends with a position over a bidirectional cursor, it can also be
/// consumed from the back.
pub struct Iter<'v, C, E, F> {
    front: Position<'v, C, F>,
    back: E,
}

impl<'v, C, E, F> Iter<'v, C, E, F> {
    #[inline]
    pub fn new(front: Position<'v, C, F>, back: E) -> Self {
        Iter { front, back }
    }

    /// The position of the next element to be yielded from the front.
    #[inline]
    pub fn position(&self) -> &Position<'v, C, F> {
        &self.front
    }
}

impl<'v, C, E, F> Iterator for Iter<'v, C, E, F>
where
    C: Cursor,
    F: Transform<C::Reference>,
    E: Sentinel<Position<'v, C, F>>,
{
    type Item = OutputOf<F, C::Reference>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.back.is_reached_by(&self.front) {
            return None;
        }
        let item = self.front.get();
        self.front.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.back.remaining(&self.front) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<'v, C, F> DoubleEndedIterator for Iter<'v, C, Position<'v, C, F>, F>
where
    C: BidirectionalCursor,
    F: Transform<C::Reference>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<'v, C, E, F> ExactSizeIterator for Iter<'v, C, E, F>
where
    C: Cursor,
    F: Transform<C::Reference>,
    E: SizedSentinel<Position<'v, C, F>>,
{
    #[inline]
    fn len(&self) -> usize {
        usize::try_from(self.back.distance_from(&self.front)).unwrap_or(0)
    }
}

impl<'v, C, E, F> FusedIterator for Iter<'v, C, E, F>
where
    C: Cursor,
    F: Transform<C::Reference>,
    E: Sentinel<Position<'v, C, F>>,
{
}

impl<C: Clone, E: Clone, F> Clone for Iter<'_, C, E, F> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

/// Iterator over a transform view through exclusive access.
pub struct IterMut<'v, C, S, F> {
    front: PositionMut<'v, C, F>,
    back: BoundaryMarker<S>,
}

impl<'v, C, S, F> IterMut<'v, C, S, F> {
    #[inline]
    pub fn new(front: PositionMut<'v, C, F>, back: BoundaryMarker<S>) -> Self {
        IterMut { front, back }
    }
}

impl<C, S, F> Iterator for IterMut<'_, C, S, F>
where
    C: Cursor,
    F: TransformMut<C::Reference>,
    S: Sentinel<C>,
{
    type Item = OutputOf<F, C::Reference>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.step();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.back.base().remaining(self.front.base()) {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl<'v, V, F> IntoIterator for &'v TransformView<V, F>
where
    V: Sequence<'v>,
    SentinelOf<'v, V>: ViewEnd<'v, CursorOf<'v, V>, F>,
    EndOf<'v, V, F>: Sentinel<Position<'v, CursorOf<'v, V>, F>>,
    F: Transform<ReferenceOf<'v, V>>,
{
    type Item = OutputOf<F, ReferenceOf<'v, V>>;
    type IntoIter = Iter<'v, CursorOf<'v, V>, EndOf<'v, V, F>, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'v, V, F> IntoIterator for &'v mut TransformView<V, F>
where
    V: SequenceMut<'v>,
    F: TransformMut<ReferenceMutOf<'v, V>>,
{
    type Item = OutputOf<F, ReferenceMutOf<'v, V>>;
    type IntoIter = IterMut<'v, CursorMutOf<'v, V>, SentinelMutOf<'v, V>, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::std_impls::{StrChars, Terminated};

    fn square(x: &u32) -> u32 {
        x * x
    }

    #[test]
    fn test_exact_size_and_reverse() {
        let data = [1u32, 2, 3, 4];
        let view = TransformView::new(&data[..], square);
        let mut iter = view.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(16));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), [4, 9]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let data = [2u32, 3];
        let view = TransformView::new(&data[..], square);
        let mut total = 0;
        for x in &view {
            total += x;
        }
        assert_eq!(total, 13);
    }

    #[test]
    fn test_sentinel_ended_iteration() {
        let data = [7u32, 8, 0, 9];
        let view = TransformView::new(Terminated::new(&data[..], 0), square);
        assert_eq!(view.iter().size_hint(), (0, None));
        assert_eq!(view.iter().collect::<Vec<_>>(), [49, 64]);
    }

    #[test]
    fn test_bidirectional_values() {
        let view = TransformView::new(StrChars::new("abc"), |c: char| c.to_ascii_uppercase());
        let reversed: String = view.iter().rev().collect();
        assert_eq!(reversed, "CBA");
    }

    #[test]
    fn test_mutable_for_loop() {
        let data = [1u32, 2, 3];
        let mut seen = Vec::new();
        let mut view = TransformView::new(&data[..], |x: &u32| {
            seen.push(*x);
            x * 10
        });
        let mut out = Vec::new();
        for x in &mut view {
            out.push(x);
        }
        drop(view);
        assert_eq!(out, [10, 20, 30]);
        assert_eq!(seen, [1, 2, 3]);
    }
}

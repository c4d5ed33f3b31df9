//! End marker of transform views whose underlying sequence ends with a sentinel of
//! a type other than its cursor.

use std::ops::Sub;

use crate::cursor::{Sentinel, SizedSentinel};
use crate::position::{Position, PositionMut};
use crate::view::{ViewEnd, ViewHandle};

/// Wraps the underlying sequence's end sentinel.
///
/// A position equals the marker exactly when the position's wrapped cursor has
/// reached the wrapped sentinel. When the sentinel supports constant-time distance,
/// so does the marker, in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoundaryMarker<S> {
    pub(crate) end: S,
}

impl<S> BoundaryMarker<S> {
    #[inline]
    pub fn new(end: S) -> Self {
        BoundaryMarker { end }
    }

    /// Returns the wrapped sentinel.
    #[inline]
    pub fn base(&self) -> &S {
        &self.end
    }

    #[inline]
    pub fn into_base(self) -> S {
        self.end
    }

    /// Converts a marker obtained from mutable traversal into the shared form,
    /// given a conversion between the wrapped sentinels.
    pub fn into_const<S2>(self) -> BoundaryMarker<S2>
    where
        S: Into<S2>,
    {
        BoundaryMarker::new(self.end.into())
    }

    /// Returns true if `position` has reached this marker.
    #[inline]
    pub fn is_reached_by<C, F>(&self, position: &Position<'_, C, F>) -> bool
    where
        S: Sentinel<C>,
    {
        self.end.is_reached_by(&position.current)
    }
}

impl<C, F, S: Sentinel<C>> PartialEq<BoundaryMarker<S>> for Position<'_, C, F> {
    #[inline]
    fn eq(&self, other: &BoundaryMarker<S>) -> bool {
        other.end.is_reached_by(&self.current)
    }
}

impl<C, F, S: Sentinel<C>> PartialEq<Position<'_, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn eq(&self, other: &Position<'_, C, F>) -> bool {
        self.end.is_reached_by(&other.current)
    }
}

impl<C, F, S: Sentinel<C>> PartialEq<BoundaryMarker<S>> for PositionMut<'_, C, F> {
    #[inline]
    fn eq(&self, other: &BoundaryMarker<S>) -> bool {
        other.end.is_reached_by(&self.current)
    }
}

impl<C, F, S: Sentinel<C>> PartialEq<PositionMut<'_, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn eq(&self, other: &PositionMut<'_, C, F>) -> bool {
        self.end.is_reached_by(&other.current)
    }
}

/// `end - position`: the number of increments taking the position to the end.
impl<C, F, S: SizedSentinel<C>> Sub<Position<'_, C, F>> for BoundaryMarker<S> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Position<'_, C, F>) -> isize {
        self.end.distance_from(&rhs.current)
    }
}

/// `position - end`: the negated distance to the end.
impl<C, F, S: SizedSentinel<C>> Sub<BoundaryMarker<S>> for Position<'_, C, F> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: BoundaryMarker<S>) -> isize {
        -rhs.end.distance_from(&self.current)
    }
}

/// `end - position` for a position of mutable traversal, which is not `Copy`.
impl<C, F, S: SizedSentinel<C>> Sub<&PositionMut<'_, C, F>> for BoundaryMarker<S> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: &PositionMut<'_, C, F>) -> isize {
        self.end.distance_from(&rhs.current)
    }
}

impl<C, F, S: SizedSentinel<C>> Sub<BoundaryMarker<S>> for &PositionMut<'_, C, F> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: BoundaryMarker<S>) -> isize {
        -rhs.end.distance_from(&self.current)
    }
}

impl<'v, C, F, S: Sentinel<C>> Sentinel<Position<'v, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn is_reached_by(&self, cursor: &Position<'v, C, F>) -> bool {
        self.end.is_reached_by(&cursor.current)
    }

    #[inline]
    fn remaining(&self, cursor: &Position<'v, C, F>) -> Option<usize> {
        self.end.remaining(&cursor.current)
    }
}

impl<'v, C, F, S: SizedSentinel<C>> SizedSentinel<Position<'v, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn distance_from(&self, cursor: &Position<'v, C, F>) -> isize {
        self.end.distance_from(&cursor.current)
    }
}

impl<'v, C, F, S: Sentinel<C>> Sentinel<PositionMut<'v, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn is_reached_by(&self, cursor: &PositionMut<'v, C, F>) -> bool {
        self.end.is_reached_by(&cursor.current)
    }

    #[inline]
    fn remaining(&self, cursor: &PositionMut<'v, C, F>) -> Option<usize> {
        self.end.remaining(&cursor.current)
    }
}

impl<'v, C, F, S: SizedSentinel<C>> SizedSentinel<PositionMut<'v, C, F>> for BoundaryMarker<S> {
    #[inline]
    fn distance_from(&self, cursor: &PositionMut<'v, C, F>) -> isize {
        self.end.distance_from(&cursor.current)
    }
}

/// A transform view stacked on a non-common transform view ends with a marker
/// wrapping the inner view's marker.
impl<'v, 'w, C, G, F: 'v, S> ViewEnd<'v, Position<'w, C, G>, F> for BoundaryMarker<S> {
    type Output = BoundaryMarker<BoundaryMarker<S>>;

    fn into_view_end(self, _parent: ViewHandle<'v, F>) -> Self::Output {
        BoundaryMarker::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::std_impls::{Counter, Terminated};
    use crate::view::TransformView;

    #[test]
    fn test_marker_equality_is_symmetric() {
        let data = [1u8, 2, 0, 3];
        let view = TransformView::new(Terminated::new(&data[..], 0), |x: &u8| u32::from(*x));
        let end = view.end();
        let mut pos = view.begin();
        assert!(pos != end);
        assert!(end != pos);
        pos.step();
        pos.step();
        assert!(pos == end);
        assert!(end == pos);
        assert_eq!(end.base().value(), &0);
    }

    #[test]
    fn test_unreachable_marker_is_never_reached() {
        let view = TransformView::new(Counter::new(0), |x: i64| x * 2);
        let end = view.end();
        let mut pos = view.begin();
        for _ in 0..100 {
            assert!(!end.is_reached_by(&pos));
            pos.step();
        }
        assert_eq!(pos.get(), 200);
    }
}

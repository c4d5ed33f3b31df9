//! The leading elements of a slice, ended by a counted marker instead of a cursor.

use std::ops::BitOr;

use tview::std_impls::SliceCursor;
use tview::{
    BoundaryMarker, Sentinel, Sequence, SequenceMut, SizedSentinel, SizedSequence,
    TransformAdaptor, TransformView, View, ViewEnd, ViewHandle, Viewable, transform_view,
};

/// The first `len` elements of a slice.
///
/// Its end is a [`PrefixEnd`], which is not a cursor but knows its distance from
/// any cursor into the slice.
#[derive(Debug, Clone, Copy)]
pub struct Prefix<'a, T> {
    data: &'a [T],
    len: usize,
}

impl<'a, T> Prefix<'a, T> {
    /// Takes at most `len` elements from `data`.
    pub fn new(data: &'a [T], len: usize) -> Self {
        Prefix {
            data,
            len: len.min(data.len()),
        }
    }
}

/// End of a [`Prefix`]: the element count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixEnd {
    len: usize,
}

impl PrefixEnd {
    pub fn len(&self) -> usize {
        self.len
    }
}

impl<T> Sentinel<SliceCursor<'_, T>> for PrefixEnd {
    #[inline]
    fn is_reached_by(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.index() >= self.len
    }

    #[inline]
    fn remaining(&self, cursor: &SliceCursor<'_, T>) -> Option<usize> {
        Some(self.len.saturating_sub(cursor.index()))
    }
}

impl<T> SizedSentinel<SliceCursor<'_, T>> for PrefixEnd {
    #[inline]
    fn distance_from(&self, cursor: &SliceCursor<'_, T>) -> isize {
        self.len as isize - cursor.index() as isize
    }
}

impl<'v, 'a, T, F: 'v> ViewEnd<'v, SliceCursor<'a, T>, F> for PrefixEnd {
    type Output = BoundaryMarker<PrefixEnd>;

    fn into_view_end(self, _parent: ViewHandle<'v, F>) -> BoundaryMarker<PrefixEnd> {
        BoundaryMarker::new(self)
    }
}

impl<'s, 'a, T> Sequence<'s> for Prefix<'a, T> {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = PrefixEnd;

    fn begin(&'s self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.data, 0)
    }

    fn end(&'s self) -> PrefixEnd {
        PrefixEnd { len: self.len }
    }
}

impl<'s, 'a, T> SequenceMut<'s> for Prefix<'a, T> {
    type CursorMut = SliceCursor<'a, T>;
    type SentinelMut = PrefixEnd;

    fn bounds_mut(&'s mut self) -> (SliceCursor<'a, T>, PrefixEnd) {
        (SliceCursor::new(self.data, 0), PrefixEnd { len: self.len })
    }
}

impl<T> SizedSequence for Prefix<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> View for Prefix<'_, T> {}

impl<'b, T> Viewable<'_> for Prefix<'b, T> {
    type View = Prefix<'b, T>;

    fn into_view(self) -> Self::View {
        self
    }
}

impl<'a, T, F> BitOr<TransformAdaptor<F>> for Prefix<'a, T> {
    type Output = TransformView<Prefix<'a, T>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        transform_view(self, adaptor.into_inner())
    }
}

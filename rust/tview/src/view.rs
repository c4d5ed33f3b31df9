//! The transform view: an underlying sequence paired with a function, presenting
//! the function's result for each element, computed on every access.
//!
//! Nothing is cached. Producing a position or advancing it never invokes the
//! function; each read invokes it exactly once.

use std::fmt;

use tview_box::MovableBox;
use tview_common::Result;

use crate::boundary::BoundaryMarker;
use crate::cursor::{Cursor, RandomAccessCursor, Sentinel};
use crate::invoke::{OutputOf, Transform, TransformMut};
use crate::iter::{Iter, IterMut};
use crate::position::{Position, PositionMut};
use crate::sequence::{
    CursorMutOf, CursorOf, ReferenceMutOf, ReferenceOf, Sequence, SequenceMut, SentinelMutOf,
    SentinelOf, SizedSequence, View,
};

/// A lazily transformed sequence.
///
/// `V` is the underlying view (see [`all`](crate::adapt::all) for turning
/// containers into views), `F` the function applied to each element. The function
/// is stored in a [`MovableBox`], so the view can be cloned and assigned even when
/// `F` itself cannot be assigned.
///
/// Positions borrow the view: they cannot outlive it, and the view cannot be moved
/// or mutated while any of them exists.
pub struct TransformView<V, F> {
    base: V,
    fun: MovableBox<F>,
}

/// End of a transform view over `V`: a [`Position`] when `V` ends with a cursor,
/// a [`BoundaryMarker`] otherwise.
pub type EndOf<'v, V, F> = <SentinelOf<'v, V> as ViewEnd<'v, CursorOf<'v, V>, F>>::Output;

impl<V: View, F> TransformView<V, F> {
    pub fn new(base: V, fun: F) -> Self {
        log::trace!(
            "TransformView::new: base = {}, function = {}",
            std::any::type_name::<V>(),
            std::any::type_name::<F>()
        );
        TransformView {
            base,
            fun: MovableBox::new(fun),
        }
    }
}

impl<V, F> TransformView<V, F> {
    /// Returns a copy of the underlying view.
    pub fn base(&self) -> V
    where
        V: Clone,
    {
        self.base.clone()
    }

    #[inline]
    pub fn base_ref(&self) -> &V {
        &self.base
    }

    /// Consumes the view and returns the underlying view.
    pub fn into_base(self) -> V {
        self.base
    }

    #[inline]
    pub fn function(&self) -> &F {
        self.fun.get()
    }

    /// Number of elements, equal to the underlying sequence's.
    #[inline]
    pub fn len(&self) -> usize
    where
        V: SizedSequence,
    {
        self.base.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    where
        V: SizedSequence,
    {
        self.base.is_empty()
    }

    /// Returns the first position.
    pub fn begin<'v>(&'v self) -> Position<'v, CursorOf<'v, V>, F>
    where
        V: Sequence<'v>,
        F: Transform<ReferenceOf<'v, V>>,
    {
        Position::new(ViewHandle::new(&self.fun), self.base.begin())
    }

    /// Returns the end: a position when the underlying sequence ends with a cursor,
    /// a [`BoundaryMarker`] wrapping its sentinel otherwise.
    pub fn end<'v>(&'v self) -> EndOf<'v, V, F>
    where
        V: Sequence<'v>,
        SentinelOf<'v, V>: ViewEnd<'v, CursorOf<'v, V>, F>,
        F: Transform<ReferenceOf<'v, V>>,
    {
        self.base.end().into_view_end(ViewHandle::new(&self.fun))
    }

    /// Iterates over the transformed elements through shared access.
    pub fn iter<'v>(&'v self) -> Iter<'v, CursorOf<'v, V>, EndOf<'v, V, F>, F>
    where
        V: Sequence<'v>,
        SentinelOf<'v, V>: ViewEnd<'v, CursorOf<'v, V>, F>,
        EndOf<'v, V, F>: Sentinel<Position<'v, CursorOf<'v, V>, F>>,
        F: Transform<ReferenceOf<'v, V>>,
    {
        Iter::new(self.begin(), self.end())
    }

    /// Returns the first position and the end marker for traversal through
    /// exclusive access.
    ///
    /// Both borrow the view for `'v`, which is why they come as a pair.
    pub fn bounds_mut<'v>(
        &'v mut self,
    ) -> (
        PositionMut<'v, CursorMutOf<'v, V>, F>,
        BoundaryMarker<SentinelMutOf<'v, V>>,
    )
    where
        V: SequenceMut<'v>,
        F: TransformMut<ReferenceMutOf<'v, V>>,
    {
        log::trace!(
            "TransformView::bounds_mut: base = {}",
            std::any::type_name::<V>()
        );
        let (cursor, sentinel) = self.base.bounds_mut();
        (
            PositionMut::new(&mut self.fun, cursor),
            BoundaryMarker::new(sentinel),
        )
    }

    /// Iterates over the transformed elements through exclusive access, which lets
    /// the function mutate its own state.
    pub fn iter_mut<'v>(&'v mut self) -> IterMut<'v, CursorMutOf<'v, V>, SentinelMutOf<'v, V>, F>
    where
        V: SequenceMut<'v>,
        F: TransformMut<ReferenceMutOf<'v, V>>,
    {
        let (front, back) = self.bounds_mut();
        IterMut::new(front, back)
    }

    /// Checked subscript: the function applied to the element at `index`.
    pub fn try_get<'v>(&'v self, index: usize) -> Result<OutputOf<F, ReferenceOf<'v, V>>>
    where
        V: Sequence<'v> + SizedSequence,
        CursorOf<'v, V>: RandomAccessCursor,
        F: Transform<ReferenceOf<'v, V>>,
    {
        let len = self.len();
        if index >= len {
            return tview_common::result::out_of_bounds(index, len);
        }
        Ok(self.begin().at(index as isize))
    }
}

impl<V: Default, F: Default> Default for TransformView<V, F> {
    /// A view over a default underlying view, holding a default function.
    fn default() -> Self {
        TransformView {
            base: V::default(),
            fun: MovableBox::default(),
        }
    }
}

impl<V: Clone, F: Clone> Clone for TransformView<V, F> {
    fn clone(&self) -> Self {
        TransformView {
            base: self.base.clone(),
            fun: self.fun.clone(),
        }
    }

    /// Destroys the held function and constructs a clone of `source`'s in its
    /// place; `F::clone_from` is never used.
    fn clone_from(&mut self, source: &Self) {
        self.base.clone_from(&source.base);
        self.fun.assign(&source.fun);
    }
}

impl<V: fmt::Debug, F> fmt::Debug for TransformView<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformView")
            .field("base", &self.base)
            .field("fun", &self.fun)
            .finish()
    }
}

impl<V, F> View for TransformView<V, F> {}

impl<V: SizedSequence, F> SizedSequence for TransformView<V, F> {
    fn len(&self) -> usize {
        self.base.len()
    }
}

impl<'s, V, F> Sequence<'s> for TransformView<V, F>
where
    V: Sequence<'s>,
    SentinelOf<'s, V>: ViewEnd<'s, CursorOf<'s, V>, F>,
    EndOf<'s, V, F>: Sentinel<Position<'s, CursorOf<'s, V>, F>>,
    F: Transform<ReferenceOf<'s, V>> + 's,
{
    type Cursor = Position<'s, CursorOf<'s, V>, F>;
    type Sentinel = EndOf<'s, V, F>;

    fn begin(&'s self) -> Self::Cursor {
        TransformView::begin(self)
    }

    fn end(&'s self) -> Self::Sentinel {
        TransformView::end(self)
    }
}

impl<'s, V, F> SequenceMut<'s> for TransformView<V, F>
where
    V: SequenceMut<'s>,
    F: Transform<ReferenceMutOf<'s, V>> + 's,
{
    type CursorMut = PositionMut<'s, CursorMutOf<'s, V>, F>;
    type SentinelMut = BoundaryMarker<SentinelMutOf<'s, V>>;

    fn bounds_mut(&'s mut self) -> (Self::CursorMut, Self::SentinelMut) {
        TransformView::bounds_mut(self)
    }
}

/// Shared handle to the function of a transform view, held by its positions.
pub struct ViewHandle<'v, F> {
    fun: &'v MovableBox<F>,
}

impl<'v, F> ViewHandle<'v, F> {
    #[inline]
    pub(crate) fn new(fun: &'v MovableBox<F>) -> Self {
        ViewHandle { fun }
    }

    #[inline]
    pub fn function(self) -> &'v F {
        self.fun.get()
    }

    /// Returns true if both handles refer to the same view.
    #[inline]
    pub fn ptr_eq(self, other: ViewHandle<'_, F>) -> bool {
        std::ptr::eq(self.fun, other.fun)
    }
}

impl<F> Clone for ViewHandle<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ViewHandle<'_, F> {}

impl<F> fmt::Debug for ViewHandle<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewHandle")
            .field(&(self.fun as *const MovableBox<F>))
            .finish()
    }
}

/// Turns the end sentinel of an underlying sequence into the end of a transform
/// view over it.
///
/// Cursors used as their own sentinel become a [`Position`]; every other sentinel
/// type implements this trait to become a [`BoundaryMarker`].
pub trait ViewEnd<'v, C, F> {
    type Output;

    fn into_view_end(self, parent: ViewHandle<'v, F>) -> Self::Output;
}

impl<'v, C: Cursor, F: 'v> ViewEnd<'v, C, F> for C {
    type Output = Position<'v, C, F>;

    #[inline]
    fn into_view_end(self, parent: ViewHandle<'v, F>) -> Position<'v, C, F> {
        Position::new(parent, self)
    }
}

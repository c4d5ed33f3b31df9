//! Positions within a transform view.
//!
//! A [`Position`] pairs a cursor of the underlying sequence with a shared handle
//! to the view's function; reading it applies the function to the element under
//! the cursor, every time. [`PositionMut`] is the exclusive counterpart produced by
//! mutable traversal: it holds the function through a unique borrow and can drive
//! `FnMut` closures.
//!
//! Which operations a position offers follows the wrapped cursor: stepping forward
//! always, copying and post-increment for forward cursors, stepping backwards for
//! bidirectional ones, and jumps, subscript, ordering and distance for random
//! access cursors.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use tview_box::MovableBox;

use crate::capability::{
    InputTag, Referenceable, Traversal, TraversalTag, category_of, concept_of,
};
use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, SizedSentinel,
};
use crate::invoke::{OutputOf, Transform, TransformMut};
use crate::view::ViewHandle;

/// A position within a transform view, obtained through shared access.
///
/// A default-constructed position (available when the cursor type has a default)
/// is detached from any view; it can be assigned over or compared, but reading it
/// panics.
pub struct Position<'v, C, F> {
    pub(crate) current: C,
    parent: Option<ViewHandle<'v, F>>,
}

impl<'v, C, F> Position<'v, C, F> {
    #[inline]
    pub(crate) fn new(parent: ViewHandle<'v, F>, current: C) -> Self {
        Position {
            current,
            parent: Some(parent),
        }
    }

    /// Returns the wrapped cursor of the underlying sequence.
    #[inline]
    pub fn base(&self) -> &C {
        &self.current
    }

    #[inline]
    pub fn into_base(self) -> C {
        self.current
    }

    /// Returns false for default-constructed positions.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.parent.is_some()
    }

    /// Returns the handle of the view this position belongs to.
    #[inline]
    pub fn parent(&self) -> Option<ViewHandle<'v, F>> {
        self.parent
    }

    #[inline]
    fn function(&self) -> &'v F {
        self.parent
            .expect("Position: dereferenced a position that is not attached to a view")
            .function()
    }
}

impl<C: Cursor, F> Position<'_, C, F> {
    /// Declared traversal capability.
    pub const CONCEPT: Traversal = concept_of(<C::Tag as TraversalTag>::TRAVERSAL);

    #[inline]
    pub fn concept(&self) -> Traversal {
        Self::CONCEPT
    }

    /// Applies the view's function to the current element.
    #[inline]
    pub fn get(&self) -> OutputOf<F, C::Reference>
    where
        F: Transform<C::Reference>,
    {
        self.function().invoke(self.current.read())
    }

    /// Pre-increment: advances and returns the position itself.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.current.advance();
        self
    }

    /// Advances without producing a copy; the only post-increment form available
    /// to single-pass positions.
    #[inline]
    pub fn step(&mut self) {
        self.current.advance();
    }
}

impl<C, F> Position<'_, C, F>
where
    C: Cursor,
    F: TransformMut<C::Reference>,
    OutputOf<F, C::Reference>: Referenceable,
{
    /// Element-level traversal guarantee, `None` over single-pass cursors.
    pub const CATEGORY: Option<Traversal> = category_of(
        <C::Tag as TraversalTag>::TRAVERSAL,
        <OutputOf<F, C::Reference> as Referenceable>::IS_REFERENCE,
    );

    #[inline]
    pub fn category(&self) -> Option<Traversal> {
        Self::CATEGORY
    }
}

impl<C: ForwardCursor, F> Position<'_, C, F> {
    /// Post-increment: advances and returns the prior position.
    #[inline]
    pub fn post_advance(&mut self) -> Self {
        let prior = self.clone();
        self.current.advance();
        prior
    }
}

impl<C: BidirectionalCursor, F> Position<'_, C, F> {
    /// Pre-decrement.
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.current.retreat();
        self
    }

    /// Post-decrement: steps back and returns the prior position.
    #[inline]
    pub fn post_retreat(&mut self) -> Self {
        let prior = self.clone();
        self.current.retreat();
        prior
    }
}

impl<C: RandomAccessCursor, F> Position<'_, C, F> {
    /// Subscript: the function applied to the element `n` positions away.
    #[inline]
    pub fn at(&self, n: isize) -> OutputOf<F, C::Reference>
    where
        F: Transform<C::Reference>,
    {
        self.function().invoke(self.current.read_at(n))
    }
}

impl<C: Clone, F> Clone for Position<'_, C, F> {
    #[inline]
    fn clone(&self) -> Self {
        Position {
            current: self.current.clone(),
            parent: self.parent,
        }
    }
}

impl<C: Copy, F> Copy for Position<'_, C, F> {}

impl<C: Default, F> Default for Position<'_, C, F> {
    fn default() -> Self {
        Position {
            current: C::default(),
            parent: None,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Position<'_, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("current", &self.current)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl<'v, C: PartialEq, F> PartialEq for Position<'v, C, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<'v, C: Eq, F> Eq for Position<'v, C, F> {}

impl<'v, C: RandomAccessCursor, F> PartialOrd for Position<'v, C, F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.current.partial_cmp(&other.current)
    }
}

impl<'v, C: RandomAccessCursor + Ord, F> Ord for Position<'v, C, F> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}

impl<C: RandomAccessCursor, F> AddAssign<isize> for Position<'_, C, F> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.current.offset(n);
    }
}

impl<C: RandomAccessCursor, F> SubAssign<isize> for Position<'_, C, F> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.current.offset(-n);
    }
}

impl<C: RandomAccessCursor, F> Add<isize> for Position<'_, C, F> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'v, C: RandomAccessCursor, F> Add<Position<'v, C, F>> for isize {
    type Output = Position<'v, C, F>;

    #[inline]
    fn add(self, position: Position<'v, C, F>) -> Position<'v, C, F> {
        position + self
    }
}

impl<C: RandomAccessCursor, F> Sub<isize> for Position<'_, C, F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Distance between two positions of the same view.
impl<'v, C: SizedSentinel<C>, F> Sub for Position<'v, C, F> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        self.current.distance_from(&rhs.current)
    }
}

impl<C, F> Cursor for Position<'_, C, F>
where
    C: Cursor,
    F: Transform<C::Reference>,
{
    type Tag = <C::Tag as TraversalTag>::Concept;
    type Reference = OutputOf<F, C::Reference>;

    #[inline]
    fn read(&self) -> Self::Reference {
        self.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.current.advance();
    }

    #[inline]
    fn remaining_until(&self, end: &Self) -> Option<usize> {
        self.current.remaining_until(&end.current)
    }
}

impl<C, F> ForwardCursor for Position<'_, C, F>
where
    C: ForwardCursor,
    F: Transform<C::Reference>,
{
}

impl<C, F> BidirectionalCursor for Position<'_, C, F>
where
    C: BidirectionalCursor,
    F: Transform<C::Reference>,
{
    #[inline]
    fn retreat(&mut self) {
        self.current.retreat();
    }
}

impl<C, F> RandomAccessCursor for Position<'_, C, F>
where
    C: RandomAccessCursor,
    F: Transform<C::Reference>,
{
    #[inline]
    fn offset(&mut self, n: isize) {
        self.current.offset(n);
    }

    #[inline]
    fn read_at(&self, n: isize) -> Self::Reference {
        self.at(n)
    }
}

impl<'v, C, F> SizedSentinel<Position<'v, C, F>> for Position<'v, C, F>
where
    C: Cursor + PartialEq + SizedSentinel<C>,
    F: Transform<C::Reference>,
{
    #[inline]
    fn distance_from(&self, cursor: &Position<'v, C, F>) -> isize {
        self.current.distance_from(&cursor.current)
    }
}

/// A position within a transform view, obtained through exclusive access.
///
/// It borrows the view's function uniquely, so only one such position exists at a
/// time and it cannot be copied. Convert it to a [`Position`] with
/// [`into_const`](PositionMut::into_const) once shared access is enough.
pub struct PositionMut<'v, C, F> {
    pub(crate) current: C,
    fun: &'v mut MovableBox<F>,
}

impl<'v, C, F> PositionMut<'v, C, F> {
    #[inline]
    pub(crate) fn new(fun: &'v mut MovableBox<F>, current: C) -> Self {
        PositionMut { current, fun }
    }

    #[inline]
    pub fn base(&self) -> &C {
        &self.current
    }

    #[inline]
    pub fn into_base(self) -> C {
        self.current
    }

    /// Converts into a shared position, converting the wrapped cursor as well.
    pub fn into_const<C2>(self) -> Position<'v, C2, F>
    where
        C: Into<C2>,
    {
        let fun: &'v MovableBox<F> = self.fun;
        Position::new(ViewHandle::new(fun), self.current.into())
    }
}

impl<C: Cursor, F> PositionMut<'_, C, F> {
    pub const CONCEPT: Traversal = concept_of(<C::Tag as TraversalTag>::TRAVERSAL);

    #[inline]
    pub fn concept(&self) -> Traversal {
        Self::CONCEPT
    }

    /// Applies the view's function to the current element.
    #[inline]
    pub fn get(&mut self) -> OutputOf<F, C::Reference>
    where
        F: TransformMut<C::Reference>,
    {
        let input = self.current.read();
        self.fun.get_mut().invoke_mut(input)
    }

    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.current.advance();
        self
    }

    #[inline]
    pub fn step(&mut self) {
        self.current.advance();
    }
}

impl<C, F> PositionMut<'_, C, F>
where
    C: Cursor,
    F: TransformMut<C::Reference>,
    OutputOf<F, C::Reference>: Referenceable,
{
    pub const CATEGORY: Option<Traversal> = category_of(
        <C::Tag as TraversalTag>::TRAVERSAL,
        <OutputOf<F, C::Reference> as Referenceable>::IS_REFERENCE,
    );

    #[inline]
    pub fn category(&self) -> Option<Traversal> {
        Self::CATEGORY
    }
}

impl<C: BidirectionalCursor, F> PositionMut<'_, C, F> {
    #[inline]
    pub fn retreat(&mut self) -> &mut Self {
        self.current.retreat();
        self
    }
}

impl<C: RandomAccessCursor, F> PositionMut<'_, C, F> {
    /// Subscript through exclusive access.
    #[inline]
    pub fn at(&mut self, n: isize) -> OutputOf<F, C::Reference>
    where
        F: TransformMut<C::Reference>,
    {
        let input = self.current.read_at(n);
        self.fun.get_mut().invoke_mut(input)
    }
}

impl<C: RandomAccessCursor, F> AddAssign<isize> for PositionMut<'_, C, F> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.current.offset(n);
    }
}

impl<C: RandomAccessCursor, F> SubAssign<isize> for PositionMut<'_, C, F> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.current.offset(-n);
    }
}

impl<C: PartialEq, F> PartialEq for PositionMut<'_, C, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: fmt::Debug, F> fmt::Debug for PositionMut<'_, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionMut")
            .field("current", &self.current)
            .finish()
    }
}

/// Stacking support: a transform view over a mutably traversed transform view
/// sees its positions as single-pass cursors.
impl<C, F> Cursor for PositionMut<'_, C, F>
where
    C: Cursor,
    F: Transform<C::Reference>,
{
    type Tag = InputTag;
    type Reference = OutputOf<F, C::Reference>;

    #[inline]
    fn read(&self) -> Self::Reference {
        self.fun.get().invoke(self.current.read())
    }

    #[inline]
    fn advance(&mut self) {
        self.current.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::std_impls::SliceCursor;
    use crate::view::TransformView;

    fn double(x: &i32) -> i32 {
        x * 2
    }

    fn ref_identity<T>(x: &T) -> &T {
        x
    }

    #[test]
    fn test_read_and_advance() {
        let data = [1, 2, 3];
        let view = TransformView::new(&data[..], double);
        let mut pos = view.begin();
        assert_eq!(pos.get(), 2);
        assert_eq!(pos.advance().get(), 4);
        let prior = pos.post_advance();
        assert_eq!(prior.get(), 4);
        assert_eq!(pos.get(), 6);
        pos.step();
        assert!(pos == view.end());
    }

    #[test]
    fn test_bidirectional_moves() {
        let data = [5, 6, 7];
        let view = TransformView::new(&data[..], double);
        let mut pos = view.end();
        pos.retreat();
        assert_eq!(pos.get(), 14);
        let prior = pos.post_retreat();
        assert_eq!(prior.get(), 14);
        assert_eq!(pos.get(), 12);
    }

    #[test]
    fn test_random_access_arithmetic() {
        let data = [0, 10, 20, 30, 40];
        let view = TransformView::new(&data[..], double);
        let begin = view.begin();
        let end = view.end();
        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        assert_eq!(begin.at(3), 60);
        assert_eq!((begin + 4).get(), 80);
        assert_eq!((2 + begin).get(), 40);
        assert_eq!((end - 1isize).get(), 80);
        let mut pos = begin;
        pos += 2;
        pos -= 1;
        assert_eq!(pos.get(), 20);
        assert!(begin < pos);
        assert!(pos <= begin + 1);
        assert!(end > pos);
        assert_eq!(pos.cmp(&begin), Ordering::Greater);
    }

    #[test]
    fn test_capabilities() {
        let data = [1, 2];
        let by_value = TransformView::new(&data[..], double);
        assert_eq!(by_value.begin().concept(), Traversal::RandomAccess);
        assert_eq!(by_value.begin().category(), Some(Traversal::Input));

        let by_ref = TransformView::new(&data[..], ref_identity::<i32>);
        assert_eq!(by_ref.begin().concept(), Traversal::RandomAccess);
        assert_eq!(by_ref.begin().category(), Some(Traversal::RandomAccess));
        assert!(std::ptr::eq(by_ref.begin().get(), &data[0]));
    }

    #[test]
    fn test_base_cursor() {
        let data = [1, 2, 3];
        let view = TransformView::new(&data[..], double);
        let pos = view.begin() + 2;
        assert_eq!(pos.base().index(), 2);
        let cursor: SliceCursor<'_, i32> = pos.into_base();
        assert_eq!(*cursor.read(), 3);
    }

    #[test]
    fn test_default_position_is_detached() {
        let pos = Position::<'_, SliceCursor<'_, i32>, fn(&i32) -> i32>::default();
        assert!(!pos.is_attached());
        assert_eq!(pos, Position::default());
    }

    #[test]
    #[should_panic(expected = "not attached to a view")]
    fn test_default_position_read_panics() {
        let pos = Position::<'_, SliceCursor<'_, i32>, fn(&i32) -> i32>::default();
        let _ = pos.get();
    }

    #[test]
    fn test_mutable_position() {
        let data = [1, 2, 3, 4];
        let mut calls = 0;
        let mut view = TransformView::new(&data[..], |x: &i32| {
            calls += 1;
            x + 100
        });
        {
            let (mut pos, end) = view.bounds_mut();
            assert_eq!(pos.get(), 101);
            pos += 2;
            assert_eq!(pos.get(), 103);
            assert_eq!(pos.at(1), 104);
            pos.retreat();
            assert_eq!(pos.get(), 102);
            pos.advance().step();
            pos.step();
            assert!(pos == end);
            assert!(end == pos);
        }
        drop(view);
        assert_eq!(calls, 4);
    }

    #[test]
    fn test_mutable_position_into_const() {
        let data = [7, 8];
        let mut view = TransformView::new(&data[..], double);
        let (pos, _end) = view.bounds_mut();
        let shared: Position<'_, SliceCursor<'_, i32>, _> = pos.into_const();
        let copy = shared;
        assert_eq!(copy.get(), 14);
        assert_eq!(shared.at(1), 16);
    }
}

//! Cursor and sentinel traits: the positional protocol sequences expose.
//!
//! A cursor designates one element of a sequence (or the end of it). The traits
//! form a ladder matching [`Traversal`](crate::capability::Traversal): every rung
//! adds operations, and a cursor's `Tag` names the strongest rung it implements.
//!
//! A sentinel marks the end of a sequence. Sequences whose end is a cursor of the
//! same type ("common" sequences) get a sentinel for free through the blanket impl.

use crate::capability::TraversalTag;

/// Single-pass cursor: read the current element, then advance.
pub trait Cursor {
    type Tag: TraversalTag;

    /// What reading the current element yields: a reference or a value.
    type Reference;

    /// Reads the current element.
    ///
    /// Reading a cursor that equals its sequence's end is a contract violation;
    /// implementations panic or return unspecified data.
    fn read(&self) -> Self::Reference;

    /// Moves to the next element.
    fn advance(&mut self);

    /// Number of elements between `self` and `end`, if known in constant time.
    ///
    /// Cursors implementing `SizedSentinel<Self>` should override this to return
    /// `Some(end.distance_from(self))`; iterator size hints come from here.
    fn remaining_until(&self, end: &Self) -> Option<usize>
    where
        Self: Sized,
    {
        let _ = end;
        None
    }
}

/// Multi-pass cursor: copies traverse independently and compare equal at equal
/// positions.
pub trait ForwardCursor: Cursor + Clone + PartialEq {}

pub trait BidirectionalCursor: ForwardCursor {
    /// Moves to the previous element.
    fn retreat(&mut self);
}

pub trait RandomAccessCursor: BidirectionalCursor + PartialOrd {
    /// Moves by `n` elements (backwards for negative `n`).
    fn offset(&mut self, n: isize);

    /// Reads the element `n` positions away without moving.
    fn read_at(&self, n: isize) -> Self::Reference {
        let mut cursor = self.clone();
        cursor.offset(n);
        cursor.read()
    }
}

/// End-of-sequence marker for cursors of type `C`.
pub trait Sentinel<C> {
    /// Returns true if `cursor` has reached the end.
    fn is_reached_by(&self, cursor: &C) -> bool;

    /// Number of elements left before the end, if known in constant time.
    ///
    /// Implementors of [`SizedSentinel`] must return `Some`.
    fn remaining(&self, cursor: &C) -> Option<usize> {
        let _ = cursor;
        None
    }
}

impl<C: Cursor + PartialEq> Sentinel<C> for C {
    #[inline]
    fn is_reached_by(&self, cursor: &C) -> bool {
        cursor == self
    }

    #[inline]
    fn remaining(&self, cursor: &C) -> Option<usize> {
        cursor.remaining_until(self)
    }
}

/// Sentinel whose distance to a cursor is computable in constant time.
///
/// [`Sentinel::remaining`] must agree with [`distance_from`](Self::distance_from)
/// for non-negative distances. For a cursor used as its own sentinel, that means
/// overriding [`Cursor::remaining_until`].
pub trait SizedSentinel<C>: Sentinel<C> {
    /// Signed distance `self - cursor`: the number of increments taking `cursor`
    /// to `self`.
    fn distance_from(&self, cursor: &C) -> isize;
}

/// A sentinel that no cursor ever reaches. Marks the end of infinite sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unreachable;

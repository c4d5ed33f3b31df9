//! Sequence traits: anything that hands out a (cursor, sentinel) pair.
//!
//! The lifetime parameter ties cursors to the borrow of the sequence they were
//! obtained from, so a cursor can never outlive its sequence.

use crate::cursor::{Cursor, Sentinel};

/// A sequence traversable through a shared borrow.
pub trait Sequence<'s> {
    type Cursor: Cursor;
    type Sentinel: Sentinel<Self::Cursor>;

    fn begin(&'s self) -> Self::Cursor;

    fn end(&'s self) -> Self::Sentinel;
}

/// A sequence traversable through an exclusive borrow.
///
/// Single-pass sources (streams, generators) only implement this trait: starting a
/// traversal consumes input, which a shared borrow cannot express.
pub trait SequenceMut<'s> {
    type CursorMut: Cursor;
    type SentinelMut: Sentinel<Self::CursorMut>;

    /// Returns the start and end of a traversal, as one pair: both borrow the
    /// sequence exclusively for `'s`.
    fn bounds_mut(&'s mut self) -> (Self::CursorMut, Self::SentinelMut);
}

/// A sequence that knows its element count in constant time.
pub trait SizedSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker for types cheap to hold by value inside a transform view: non-owning
/// views, ownership adapters and other views.
///
/// Containers become views through [`all`](crate::adapt::all).
pub trait View {}

pub type CursorOf<'s, S> = <S as Sequence<'s>>::Cursor;

pub type SentinelOf<'s, S> = <S as Sequence<'s>>::Sentinel;

pub type ReferenceOf<'s, S> = <<S as Sequence<'s>>::Cursor as Cursor>::Reference;

pub type CursorMutOf<'s, S> = <S as SequenceMut<'s>>::CursorMut;

pub type SentinelMutOf<'s, S> = <S as SequenceMut<'s>>::SentinelMut;

pub type ReferenceMutOf<'s, S> = <<S as SequenceMut<'s>>::CursorMut as Cursor>::Reference;

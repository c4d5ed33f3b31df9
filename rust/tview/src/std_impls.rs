//! Standard-library implementations for the `Sequence` family of traits, along
//! with a few small views that exercise the non-common and infinite cases:
//!
//! - slices, `Vec<T>`, `str` and `String` (bytes) through [`SliceCursor`], which is
//!   contiguous;
//! - `VecDeque<T>` through [`DequeCursor`] (random access, not contiguous);
//! - [`StrChars`], the characters of a string slice (bidirectional, yields values);
//! - [`Counter`], the unbounded sequence `start, start + 1, ...` ended by
//!   [`Unreachable`];
//! - [`Terminated`], a slice cut at the first occurrence of a terminator value;
//! - [`Empty`], a sequence with no elements.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use crate::boundary::BoundaryMarker;
use crate::capability::{BidirectionalTag, ContiguousTag, RandomAccessTag};
use crate::cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sentinel, SizedSentinel,
    Unreachable,
};
use crate::sequence::{Sequence, SequenceMut, SizedSequence, View};
use crate::view::{ViewEnd, ViewHandle};

/// Index-based cursor over a slice.
///
/// Two cursors compare by index only; comparing cursors into different slices is
/// meaningless.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    #[inline]
    pub fn new(slice: &'a [T], index: usize) -> Self {
        SliceCursor { slice, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The whole underlying slice.
    #[inline]
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// Returns true if the cursor designates an element of the slice.
    #[inline]
    pub fn is_dereferenceable(&self) -> bool {
        self.index < self.slice.len()
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        SliceCursor {
            slice: Default::default(),
            index: 0,
        }
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SliceCursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Tag = ContiguousTag;
    type Reference = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        &self.slice[self.index]
    }

    #[inline]
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    #[inline]
    fn remaining_until(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }

    #[inline]
    fn read_at(&self, n: isize) -> Self::Reference {
        &self.slice[self.index.wrapping_add_signed(n)]
    }
}

impl<'a, T> SizedSentinel<SliceCursor<'a, T>> for SliceCursor<'a, T> {
    #[inline]
    fn distance_from(&self, cursor: &SliceCursor<'a, T>) -> isize {
        self.index.wrapping_sub(cursor.index) as isize
    }
}

impl<'s, 'a, T> Sequence<'s> for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceCursor<'a, T>;

    fn begin(&'s self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, 0)
    }

    fn end(&'s self) -> SliceCursor<'a, T> {
        SliceCursor::new(*self, <[T]>::len(self))
    }
}

impl<'s, 'a, T> SequenceMut<'s> for &'a [T] {
    type CursorMut = SliceCursor<'a, T>;
    type SentinelMut = SliceCursor<'a, T>;

    fn bounds_mut(&'s mut self) -> (SliceCursor<'a, T>, SliceCursor<'a, T>) {
        (self.begin(), self.end())
    }
}

impl<T> SizedSequence for &[T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> View for &[T] {}

impl<'s, T: 's> Sequence<'s> for Vec<T> {
    type Cursor = SliceCursor<'s, T>;
    type Sentinel = SliceCursor<'s, T>;

    fn begin(&'s self) -> SliceCursor<'s, T> {
        SliceCursor::new(self.as_slice(), 0)
    }

    fn end(&'s self) -> SliceCursor<'s, T> {
        SliceCursor::new(self.as_slice(), Vec::len(self))
    }
}

impl<T> SizedSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<'s, 'a> Sequence<'s> for &'a str {
    type Cursor = SliceCursor<'a, u8>;
    type Sentinel = SliceCursor<'a, u8>;

    fn begin(&'s self) -> SliceCursor<'a, u8> {
        let text: &'a str = *self;
        SliceCursor::new(text.as_bytes(), 0)
    }

    fn end(&'s self) -> SliceCursor<'a, u8> {
        let text: &'a str = *self;
        SliceCursor::new(text.as_bytes(), text.len())
    }
}

impl<'s, 'a> SequenceMut<'s> for &'a str {
    type CursorMut = SliceCursor<'a, u8>;
    type SentinelMut = SliceCursor<'a, u8>;

    fn bounds_mut(&'s mut self) -> (SliceCursor<'a, u8>, SliceCursor<'a, u8>) {
        (self.begin(), self.end())
    }
}

impl SizedSequence for &str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl View for &str {}

impl<'s> Sequence<'s> for String {
    type Cursor = SliceCursor<'s, u8>;
    type Sentinel = SliceCursor<'s, u8>;

    fn begin(&'s self) -> SliceCursor<'s, u8> {
        SliceCursor::new(self.as_bytes(), 0)
    }

    fn end(&'s self) -> SliceCursor<'s, u8> {
        SliceCursor::new(self.as_bytes(), String::len(self))
    }
}

impl SizedSequence for String {
    fn len(&self) -> usize {
        String::len(self)
    }
}

/// Index-based cursor over a `VecDeque`.
pub struct DequeCursor<'a, T> {
    deque: &'a VecDeque<T>,
    index: usize,
}

impl<'a, T> DequeCursor<'a, T> {
    #[inline]
    pub fn new(deque: &'a VecDeque<T>, index: usize) -> Self {
        DequeCursor { deque, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for DequeCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DequeCursor<'_, T> {}

impl<T> fmt::Debug for DequeCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DequeCursor")
            .field("index", &self.index)
            .field("len", &self.deque.len())
            .finish()
    }
}

impl<T> PartialEq for DequeCursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for DequeCursor<'_, T> {}

impl<T> PartialOrd for DequeCursor<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for DequeCursor<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, T> Cursor for DequeCursor<'a, T> {
    type Tag = RandomAccessTag;
    type Reference = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        &self.deque[self.index]
    }

    #[inline]
    fn advance(&mut self) {
        self.index = self.index.wrapping_add(1);
    }

    #[inline]
    fn remaining_until(&self, end: &Self) -> Option<usize> {
        Some(end.index.saturating_sub(self.index))
    }
}

impl<T> ForwardCursor for DequeCursor<'_, T> {}

impl<T> BidirectionalCursor for DequeCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        self.index = self.index.wrapping_sub(1);
    }
}

impl<T> RandomAccessCursor for DequeCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.index = self.index.wrapping_add_signed(n);
    }
}

impl<'a, T> SizedSentinel<DequeCursor<'a, T>> for DequeCursor<'a, T> {
    #[inline]
    fn distance_from(&self, cursor: &DequeCursor<'a, T>) -> isize {
        self.index.wrapping_sub(cursor.index) as isize
    }
}

impl<'s, T: 's> Sequence<'s> for VecDeque<T> {
    type Cursor = DequeCursor<'s, T>;
    type Sentinel = DequeCursor<'s, T>;

    fn begin(&'s self) -> DequeCursor<'s, T> {
        DequeCursor::new(self, 0)
    }

    fn end(&'s self) -> DequeCursor<'s, T> {
        DequeCursor::new(self, VecDeque::len(self))
    }
}

impl<T> SizedSequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// The characters of a string slice, decoded on the fly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrChars<'a> {
    text: &'a str,
}

impl<'a> StrChars<'a> {
    pub fn new(text: &'a str) -> Self {
        StrChars { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

/// Byte-offset cursor over the characters of a string slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCursor<'a> {
    text: &'a str,
    offset: usize,
}

impl CharCursor<'_> {
    /// Byte offset of the current character.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Cursor for CharCursor<'_> {
    type Tag = BidirectionalTag;
    type Reference = char;

    fn read(&self) -> char {
        self.text[self.offset..]
            .chars()
            .next()
            .expect("CharCursor::read: cursor is at the end of the text")
    }

    fn advance(&mut self) {
        let width = self.read().len_utf8();
        self.offset += width;
    }
}

impl ForwardCursor for CharCursor<'_> {}

impl BidirectionalCursor for CharCursor<'_> {
    fn retreat(&mut self) {
        let prev = self.text[..self.offset]
            .chars()
            .next_back()
            .expect("CharCursor::retreat: cursor is at the start of the text");
        self.offset -= prev.len_utf8();
    }
}

impl<'s, 'a> Sequence<'s> for StrChars<'a> {
    type Cursor = CharCursor<'a>;
    type Sentinel = CharCursor<'a>;

    fn begin(&'s self) -> CharCursor<'a> {
        CharCursor {
            text: self.text,
            offset: 0,
        }
    }

    fn end(&'s self) -> CharCursor<'a> {
        CharCursor {
            text: self.text,
            offset: self.text.len(),
        }
    }
}

impl<'s, 'a> SequenceMut<'s> for StrChars<'a> {
    type CursorMut = CharCursor<'a>;
    type SentinelMut = CharCursor<'a>;

    fn bounds_mut(&'s mut self) -> (CharCursor<'a>, CharCursor<'a>) {
        (self.begin(), self.end())
    }
}

impl View for StrChars<'_> {}

/// The unbounded sequence `start, start + 1, start + 2, ...`.
///
/// Values wrap around on overflow: the successor of `i64::MAX` is `i64::MIN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    start: i64,
}

impl Counter {
    pub fn new(start: i64) -> Self {
        Counter { start }
    }

    pub fn start(&self) -> i64 {
        self.start
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CounterCursor {
    value: i64,
}

impl Cursor for CounterCursor {
    type Tag = RandomAccessTag;
    type Reference = i64;

    #[inline]
    fn read(&self) -> i64 {
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.value = self.value.wrapping_add(1);
    }

    fn remaining_until(&self, end: &Self) -> Option<usize> {
        Some(usize::try_from(end.value.wrapping_sub(self.value)).unwrap_or(0))
    }
}

impl ForwardCursor for CounterCursor {}

impl BidirectionalCursor for CounterCursor {
    #[inline]
    fn retreat(&mut self) {
        self.value = self.value.wrapping_sub(1);
    }
}

impl RandomAccessCursor for CounterCursor {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.value = self.value.wrapping_add(n as i64);
    }

    #[inline]
    fn read_at(&self, n: isize) -> i64 {
        self.value.wrapping_add(n as i64)
    }
}

impl SizedSentinel<CounterCursor> for CounterCursor {
    fn distance_from(&self, cursor: &CounterCursor) -> isize {
        self.value.wrapping_sub(cursor.value) as isize
    }
}

impl Sentinel<CounterCursor> for Unreachable {
    #[inline]
    fn is_reached_by(&self, _cursor: &CounterCursor) -> bool {
        false
    }
}

impl<'v, F: 'v> ViewEnd<'v, CounterCursor, F> for Unreachable {
    type Output = BoundaryMarker<Unreachable>;

    fn into_view_end(self, _parent: ViewHandle<'v, F>) -> BoundaryMarker<Unreachable> {
        BoundaryMarker::new(self)
    }
}

impl<'s> Sequence<'s> for Counter {
    type Cursor = CounterCursor;
    type Sentinel = Unreachable;

    fn begin(&'s self) -> CounterCursor {
        CounterCursor { value: self.start }
    }

    fn end(&'s self) -> Unreachable {
        Unreachable
    }
}

impl<'s> SequenceMut<'s> for Counter {
    type CursorMut = CounterCursor;
    type SentinelMut = Unreachable;

    fn bounds_mut(&'s mut self) -> (CounterCursor, Unreachable) {
        (self.begin(), Unreachable)
    }
}

impl View for Counter {}

/// A slice viewed up to (excluding) the first element equal to a terminator,
/// or to its end if there is none.
#[derive(Debug, Clone, Copy)]
pub struct Terminated<'a, T> {
    data: &'a [T],
    terminator: T,
}

impl<'a, T> Terminated<'a, T> {
    pub fn new(data: &'a [T], terminator: T) -> Self {
        Terminated { data, terminator }
    }

    pub fn terminator(&self) -> &T {
        &self.terminator
    }
}

/// End of a [`Terminated`] sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Terminator<T> {
    value: T,
}

impl<T> Terminator<T> {
    pub fn new(value: T) -> Self {
        Terminator { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: PartialEq> Sentinel<SliceCursor<'_, T>> for Terminator<T> {
    fn is_reached_by(&self, cursor: &SliceCursor<'_, T>) -> bool {
        !cursor.is_dereferenceable() || cursor.read() == &self.value
    }
}

impl<'v, 'a, T, F: 'v> ViewEnd<'v, SliceCursor<'a, T>, F> for Terminator<T> {
    type Output = BoundaryMarker<Terminator<T>>;

    fn into_view_end(self, _parent: ViewHandle<'v, F>) -> BoundaryMarker<Terminator<T>> {
        BoundaryMarker::new(self)
    }
}

impl<'s, 'a, T: Clone + PartialEq> Sequence<'s> for Terminated<'a, T> {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = Terminator<T>;

    fn begin(&'s self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.data, 0)
    }

    fn end(&'s self) -> Terminator<T> {
        Terminator::new(self.terminator.clone())
    }
}

impl<'s, 'a, T: Clone + PartialEq> SequenceMut<'s> for Terminated<'a, T> {
    type CursorMut = SliceCursor<'a, T>;
    type SentinelMut = Terminator<T>;

    fn bounds_mut(&'s mut self) -> (SliceCursor<'a, T>, Terminator<T>) {
        (self.begin(), self.end())
    }
}

impl<T> View for Terminated<'_, T> {}

/// A sequence without elements.
pub struct Empty<T> {
    _p: PhantomData<T>,
}

impl<T> Empty<T> {
    pub const fn new() -> Self {
        Empty { _p: PhantomData }
    }
}

/// Returns an empty sequence of `T`.
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<'s, T: 's> Sequence<'s> for Empty<T> {
    type Cursor = SliceCursor<'s, T>;
    type Sentinel = SliceCursor<'s, T>;

    fn begin(&'s self) -> SliceCursor<'s, T> {
        SliceCursor::default()
    }

    fn end(&'s self) -> SliceCursor<'s, T> {
        SliceCursor::default()
    }
}

impl<'s, T: 's> SequenceMut<'s> for Empty<T> {
    type CursorMut = SliceCursor<'s, T>;
    type SentinelMut = SliceCursor<'s, T>;

    fn bounds_mut(&'s mut self) -> (SliceCursor<'s, T>, SliceCursor<'s, T>) {
        (SliceCursor::default(), SliceCursor::default())
    }
}

impl<T> SizedSequence for Empty<T> {
    fn len(&self) -> usize {
        0
    }
}

impl<T> View for Empty<T> {}

//! A singly linked list, traversable forward only.

use std::fmt;
use std::ops::BitOr;

use tview::capability::ForwardTag;
use tview::{
    Adapted, Cursor, ForwardCursor, Sequence, SizedSequence, TransformAdaptor, TransformView,
    Viewable, transform_view,
};

pub struct ForwardList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> ForwardList<T> {
    pub fn new() -> Self {
        ForwardList { head: None, len: 0 }
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        let mut node = self.head.as_deref();
        std::iter::from_fn(move || {
            let current = node?;
            node = current.next.as_deref();
            Some(&current.value)
        })
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        ForwardList::new()
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = ForwardList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        let mut node = self.head.take();
        while let Some(mut current) = node {
            node = current.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Cursor over a [`ForwardList`]; the end is the cursor past the last node.
pub struct ForwardListCursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<T> Clone for ForwardListCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ForwardListCursor<'_, T> {}

impl<T> Default for ForwardListCursor<'_, T> {
    fn default() -> Self {
        ForwardListCursor { node: None }
    }
}

impl<T> PartialEq for ForwardListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> fmt::Debug for ForwardListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardListCursor")
            .field("at_end", &self.node.is_none())
            .finish()
    }
}

impl<'a, T> Cursor for ForwardListCursor<'a, T> {
    type Tag = ForwardTag;
    type Reference = &'a T;

    fn read(&self) -> &'a T {
        let node = self
            .node
            .expect("ForwardListCursor::read: cursor is past the end");
        &node.value
    }

    fn advance(&mut self) {
        self.node = self.node.and_then(|node| node.next.as_deref());
    }
}

impl<T> ForwardCursor for ForwardListCursor<'_, T> {}

impl<'s, T: 's> Sequence<'s> for ForwardList<T> {
    type Cursor = ForwardListCursor<'s, T>;
    type Sentinel = ForwardListCursor<'s, T>;

    fn begin(&'s self) -> ForwardListCursor<'s, T> {
        ForwardListCursor {
            node: self.head.as_deref(),
        }
    }

    fn end(&'s self) -> ForwardListCursor<'s, T> {
        ForwardListCursor::default()
    }
}

impl<T> SizedSequence for ForwardList<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> Viewable<'a> for &'a ForwardList<T> {
    type View = Adapted<'a, ForwardList<T>>;

    fn into_view(self) -> Self::View {
        Adapted::Borrowed(self)
    }
}

impl<'a, T: 'a> Viewable<'a> for ForwardList<T> {
    type View = Adapted<'a, ForwardList<T>>;

    fn into_view(self) -> Self::View {
        Adapted::Owned(self)
    }
}

impl<'a, T, F> BitOr<TransformAdaptor<F>> for &'a ForwardList<T> {
    type Output = TransformView<Adapted<'a, ForwardList<T>>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        transform_view(self, adaptor.into_inner())
    }
}

impl<T: 'static, F> BitOr<TransformAdaptor<F>> for ForwardList<T> {
    type Output = TransformView<Adapted<'static, ForwardList<T>>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        transform_view(self, adaptor.into_inner())
    }
}

//! A doubly linked list stored in a vector, traversable in both directions but
//! without random access.

use std::fmt;
use std::ops::BitOr;

use tview::capability::BidirectionalTag;
use tview::{
    Adapted, BidirectionalCursor, Cursor, ForwardCursor, Sequence, SizedSequence,
    TransformAdaptor, TransformView, Viewable, transform_view,
};

#[derive(Clone)]
pub struct ArenaList<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<T> ArenaList<T> {
    pub fn new() -> Self {
        ArenaList {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    pub fn push_front(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.nodes[head].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Values in list order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        let mut node = self.head;
        std::iter::from_fn(move || {
            let index = node?;
            node = self.nodes[index].next;
            Some(&self.nodes[index].value)
        })
    }
}

impl<T> Default for ArenaList<T> {
    fn default() -> Self {
        ArenaList::new()
    }
}

impl<T> FromIterator<T> for ArenaList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArenaList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Cursor over an [`ArenaList`]; `None` designates the end.
pub struct ArenaCursor<'a, T> {
    list: &'a ArenaList<T>,
    node: Option<usize>,
}

impl<T> Clone for ArenaCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaCursor<'_, T> {}

impl<T> PartialEq for ArenaCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> fmt::Debug for ArenaCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaCursor")
            .field("node", &self.node)
            .finish()
    }
}

impl<'a, T> Cursor for ArenaCursor<'a, T> {
    type Tag = BidirectionalTag;
    type Reference = &'a T;

    fn read(&self) -> &'a T {
        let index = self.node.expect("ArenaCursor::read: cursor is past the end");
        &self.list.nodes[index].value
    }

    fn advance(&mut self) {
        let index = self.node.expect("ArenaCursor::advance: cursor is past the end");
        self.node = self.list.nodes[index].next;
    }
}

impl<T> ForwardCursor for ArenaCursor<'_, T> {}

impl<T> BidirectionalCursor for ArenaCursor<'_, T> {
    fn retreat(&mut self) {
        self.node = match self.node {
            Some(index) => Some(
                self.list.nodes[index]
                    .prev
                    .expect("ArenaCursor::retreat: cursor is at the front"),
            ),
            None => self.list.tail,
        };
    }
}

impl<'s, T: 's> Sequence<'s> for ArenaList<T> {
    type Cursor = ArenaCursor<'s, T>;
    type Sentinel = ArenaCursor<'s, T>;

    fn begin(&'s self) -> ArenaCursor<'s, T> {
        ArenaCursor {
            list: self,
            node: self.head,
        }
    }

    fn end(&'s self) -> ArenaCursor<'s, T> {
        ArenaCursor {
            list: self,
            node: None,
        }
    }
}

impl<T> SizedSequence for ArenaList<T> {
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<'a, T> Viewable<'a> for &'a ArenaList<T> {
    type View = Adapted<'a, ArenaList<T>>;

    fn into_view(self) -> Self::View {
        Adapted::Borrowed(self)
    }
}

impl<'a, T: 'a> Viewable<'a> for ArenaList<T> {
    type View = Adapted<'a, ArenaList<T>>;

    fn into_view(self) -> Self::View {
        Adapted::Owned(self)
    }
}

impl<'a, T, F> BitOr<TransformAdaptor<F>> for &'a ArenaList<T> {
    type Output = TransformView<Adapted<'a, ArenaList<T>>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        transform_view(self, adaptor.into_inner())
    }
}

impl<T: 'static, F> BitOr<TransformAdaptor<F>> for ArenaList<T> {
    type Output = TransformView<Adapted<'static, ArenaList<T>>, F>;

    fn bitor(self, adaptor: TransformAdaptor<F>) -> Self::Output {
        transform_view(self, adaptor.into_inner())
    }
}

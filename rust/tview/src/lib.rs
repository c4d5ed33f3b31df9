//! Lazy transform views over borrowed or owned sequences.
//!
//! A [`TransformView`] pairs an underlying sequence with a function and presents
//! the function's result for each element. Results are computed on every access,
//! never cached, and the function is never invoked just to move a position.
//!
//! The view preserves as much of the underlying traversal capability as it can:
//! a position over a random-access cursor supports jumps, subscript, ordering and
//! distance; one over a bidirectional cursor steps backwards; and so on. See
//! [`capability`] for the exact rules, including how a value-producing function
//! weakens the element-level guarantee.
//!
//! # Key Types
//!
//! - [`TransformView`] - The view itself; also an [`Iterator`] source via `iter()`
//! - [`Position`] / [`PositionMut`] - Positions through shared / exclusive access
//! - [`BoundaryMarker`] - End marker for underlying sequences ending in a sentinel
//! - [`Adapted`] - A container held by reference or by value, produced by [`all`]
//! - [`transform`] - The `sequence | transform(f)` adaptor
//!
//! # Example
//!
//! ```
//! use tview::{transform, transform_view};
//!
//! let numbers = vec![1, 2, 3];
//! let doubled = transform_view(&numbers, |x: &i32| x * 2);
//! assert_eq!(doubled.iter().collect::<Vec<_>>(), [2, 4, 6]);
//!
//! let upper = "upper" | transform(|b: &u8| char::from(b - 0x20));
//! assert_eq!(upper.iter().collect::<String>(), "UPPER");
//! ```

pub mod adapt;
pub mod boundary;
pub mod capability;
pub mod cursor;
pub mod invoke;
pub mod iter;
pub mod pipe;
pub mod position;
pub mod sequence;
pub mod std_impls;
pub mod view;

pub use adapt::{Adapted, Viewable, all};
pub use boundary::BoundaryMarker;
pub use capability::{Referenceable, Traversal};
pub use cursor::{
    BidirectionalCursor, Cursor, ForwardCursor, RandomAccessCursor, Sentinel, SizedSentinel,
    Unreachable,
};
pub use invoke::{Identity, Transform, TransformMut};
pub use iter::{Iter, IterMut};
pub use pipe::{TransformAdaptor, transform, transform_view};
pub use position::{Position, PositionMut};
pub use sequence::{Sequence, SequenceMut, SizedSequence, View};
pub use view::{TransformView, ViewEnd, ViewHandle};

/// Re-exported so that callers can name the function holder of a view.
pub use tview_box::MovableBox;

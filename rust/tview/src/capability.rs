//! Traversal capabilities and the rules that derive a transformed position's
//! capabilities from those of the wrapped cursor.
//!
//! Two independent answers are derived:
//!
//! - the **concept** ([`concept_of`]): which operations a position supports. It
//!   equals the wrapped cursor's traversal, except that contiguous storage is
//!   capped at random access (computed values have no addresses).
//! - the **category** ([`category_of`]): which traversal guarantee the produced
//!   *elements* carry. Single-pass sequences have none; a function producing
//!   values (not references) degrades it to single-pass input.

use std::fmt;

/// Traversal strength, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Traversal {
    /// Single pass: read, then advance.
    Input,
    /// Multi-pass: positions can be copied and compared.
    Forward,
    /// Forward plus stepping backwards.
    Bidirectional,
    /// Bidirectional plus constant-time jumps, distance and ordering.
    RandomAccess,
    /// Random access over elements laid out contiguously in memory.
    Contiguous,
}

impl Traversal {
    /// Returns true for every traversal that allows more than one pass.
    #[inline]
    pub const fn is_multi_pass(self) -> bool {
        !matches!(self, Traversal::Input)
    }

    /// Returns true if `self` offers at least the guarantees of `other`.
    #[inline]
    pub const fn satisfies(self, other: Traversal) -> bool {
        self as u8 >= other as u8
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Input => "input",
            Traversal::Forward => "forward",
            Traversal::Bidirectional => "bidirectional",
            Traversal::RandomAccess => "random-access",
            Traversal::Contiguous => "contiguous",
        };
        f.write_str(name)
    }
}

/// Type-level traversal marker carried by every [`Cursor`](crate::cursor::Cursor).
///
/// `Concept` is the tag a transformed position over such a cursor carries.
pub trait TraversalTag: Copy + Default + fmt::Debug + 'static {
    const TRAVERSAL: Traversal;

    type Concept: TraversalTag;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BidirectionalTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomAccessTag;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContiguousTag;

impl TraversalTag for InputTag {
    const TRAVERSAL: Traversal = Traversal::Input;
    type Concept = InputTag;
}

impl TraversalTag for ForwardTag {
    const TRAVERSAL: Traversal = Traversal::Forward;
    type Concept = ForwardTag;
}

impl TraversalTag for BidirectionalTag {
    const TRAVERSAL: Traversal = Traversal::Bidirectional;
    type Concept = BidirectionalTag;
}

impl TraversalTag for RandomAccessTag {
    const TRAVERSAL: Traversal = Traversal::RandomAccess;
    type Concept = RandomAccessTag;
}

impl TraversalTag for ContiguousTag {
    const TRAVERSAL: Traversal = Traversal::Contiguous;
    type Concept = RandomAccessTag;
}

/// Declared traversal capability of a position over a cursor with traversal `base`.
#[inline]
pub const fn concept_of(base: Traversal) -> Traversal {
    match base {
        Traversal::Contiguous => Traversal::RandomAccess,
        other => other,
    }
}

/// Element-level traversal guarantee of a position over a cursor with traversal
/// `base`, given whether the function produces references.
///
/// Returns `None` when the wrapped cursor is single-pass: such positions declare no
/// category at all.
#[inline]
pub const fn category_of(base: Traversal, ref_producing: bool) -> Option<Traversal> {
    match base {
        Traversal::Input => None,
        _ if !ref_producing => Some(Traversal::Input),
        Traversal::Contiguous => Some(Traversal::RandomAccess),
        other => Some(other),
    }
}

/// Classifies the output of a transformation function as a reference or a value.
///
/// Implemented for shared and mutable references (`IS_REFERENCE = true`) and for
/// the common owned types. Only [`Position::category`](crate::Position::category)
/// needs it: traversal itself accepts any output type. Local owned types opt in
/// with an empty impl.
pub trait Referenceable {
    const IS_REFERENCE: bool = false;
}

impl<T: ?Sized> Referenceable for &T {
    const IS_REFERENCE: bool = true;
}

impl<T: ?Sized> Referenceable for &mut T {
    const IS_REFERENCE: bool = true;
}

macro_rules! impl_referenceable_value {
    ($($t:ty),* $(,)?) => {
        $(impl Referenceable for $t {})*
    };
}

impl_referenceable_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String, std::path::PathBuf, std::time::Duration,
);

impl<T> Referenceable for Vec<T> {}
impl<T> Referenceable for Option<T> {}
impl<T, E> Referenceable for Result<T, E> {}
impl<T: ?Sized> Referenceable for Box<T> {}
impl<T: ?Sized> Referenceable for std::rc::Rc<T> {}
impl<T: ?Sized> Referenceable for std::sync::Arc<T> {}
impl<T, const N: usize> Referenceable for [T; N] {}
impl<T> Referenceable for std::ops::Range<T> {}
impl<A, B> Referenceable for (A, B) {}
impl<A, B, C> Referenceable for (A, B, C) {}
impl<A, B, C, D> Referenceable for (A, B, C, D) {}
impl<B: ?Sized + ToOwned> Referenceable for std::borrow::Cow<'_, B> {}
impl<K, V, S> Referenceable for std::collections::HashMap<K, V, S> {}

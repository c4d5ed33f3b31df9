//! A present-or-absent holder for stored function objects.
//!
//! `MovableBox<T>` gives any `T` uniform assignment semantics: assigning one box
//! from another destroys the current value and constructs a fresh one in its place,
//! never invoking an assignment operation on `T` itself. This lets views that store
//! closures (or other function objects whose `clone_from` is unusable) stay
//! cloneable and reassignable.

use std::fmt;

use tview_common::Result;

/// Holds zero or one value of `T`.
///
/// The box is present from construction until [`reset`](MovableBox::reset) or
/// [`take`](MovableBox::take) empties it. Accessing the value of an empty box with
/// [`get`](MovableBox::get) is a contract violation and panics; use
/// [`try_get`](MovableBox::try_get) to observe emptiness as an error.
pub struct MovableBox<T> {
    inner: Option<T>,
}

impl<T> MovableBox<T> {
    /// Creates a box holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        MovableBox { inner: Some(value) }
    }

    /// Creates an empty box.
    #[inline]
    pub const fn empty() -> Self {
        MovableBox { inner: None }
    }

    /// Returns true if the box holds a value.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns a reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the box is empty.
    #[inline]
    pub fn get(&self) -> &T {
        self.inner
            .as_ref()
            .expect("MovableBox::get: the box is empty")
    }

    /// Returns a mutable reference to the held value.
    ///
    /// # Panics
    ///
    /// Panics if the box is empty.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.inner
            .as_mut()
            .expect("MovableBox::get_mut: the box is empty")
    }

    /// Returns the held value, or an `InvalidOperation` error for an empty box.
    pub fn try_get(&self) -> Result<&T> {
        match &self.inner {
            Some(value) => Ok(value),
            None => tview_common::result::invalid_operation("MovableBox::get on an empty box"),
        }
    }

    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Destroys the current value (if any), then stores `value`.
    ///
    /// The old value is dropped before the new one is placed, so at no point does
    /// the box observe an assignment between two live values of `T`.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.inner = None;
        self.inner.insert(value)
    }

    /// Drops the held value, leaving the box empty.
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Moves the held value out, leaving the box empty.
    pub fn take(&mut self) -> Option<T> {
        self.inner.take()
    }

    pub fn into_inner(self) -> Option<T> {
        self.inner
    }

    /// Copy-assignment: mirrors the presence of `source`, cloning its value into a
    /// freshly constructed slot.
    ///
    /// `T::clone_from` is never called, which keeps this usable for function objects
    /// that cannot be assigned. Self-assignment is ruled out by the borrow checker.
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        match &source.inner {
            Some(value) => {
                self.emplace(value.clone());
            }
            None => self.reset(),
        }
    }

    /// Move-assignment: mirrors the presence of `source`, taking its value.
    pub fn assign_from(&mut self, source: MovableBox<T>) {
        match source.inner {
            Some(value) => {
                self.emplace(value);
            }
            None => self.reset(),
        }
    }
}

impl<T: Default> Default for MovableBox<T> {
    /// Holds `T::default()`.
    fn default() -> Self {
        MovableBox::new(T::default())
    }
}

impl<T: Clone> Clone for MovableBox<T> {
    fn clone(&self) -> Self {
        MovableBox {
            inner: self.inner.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> From<T> for MovableBox<T> {
    fn from(value: T) -> Self {
        MovableBox::new(value)
    }
}

impl<T> fmt::Debug for MovableBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovableBox")
            .field("present", &self.is_present())
            .finish()
    }
}

//! Function objects that observe how a transform view uses them.

use std::cell::Cell;
use std::rc::Rc;

use tview::invoke::OutputOf;
use tview::{Transform, TransformMut};

/// Shared invocation counter.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        CallCounter::default()
    }

    pub fn get(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }

    fn bump(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// Wraps a function, counting every invocation on a shared [`CallCounter`].
#[derive(Debug, Clone)]
pub struct Counted<F> {
    fun: F,
    counter: CallCounter,
}

impl<F> Counted<F> {
    pub fn new(fun: F, counter: &CallCounter) -> Self {
        Counted {
            fun,
            counter: counter.clone(),
        }
    }
}

impl<In, F: Transform<In>> TransformMut<In> for Counted<F> {
    type Output = OutputOf<F, In>;

    fn invoke_mut(&mut self, input: In) -> Self::Output {
        self.counter.bump();
        self.fun.invoke(input)
    }
}

impl<In, F: Transform<In>> Transform<In> for Counted<F> {
    fn invoke(&self, input: In) -> Self::Output {
        self.counter.bump();
        self.fun.invoke(input)
    }
}

/// Shifts a byte by a fixed amount and returns it as a character.
///
/// Cloning is allowed, assignment through `clone_from` is not: it panics.
#[derive(Debug)]
pub struct Shift {
    delta: u8,
}

impl Shift {
    /// `Shift::up(0x20)` lowers ASCII capitals.
    pub fn up(delta: u8) -> Self {
        Shift { delta }
    }

    /// `Shift::down(0x20)` raises ASCII lowercase letters.
    pub fn down(delta: u8) -> Self {
        Shift {
            delta: delta.wrapping_neg(),
        }
    }
}

impl Clone for Shift {
    fn clone(&self) -> Self {
        Shift { delta: self.delta }
    }

    fn clone_from(&mut self, _source: &Self) {
        panic!("Shift cannot be assigned");
    }
}

impl<'a> TransformMut<&'a u8> for Shift {
    type Output = char;

    fn invoke_mut(&mut self, input: &'a u8) -> char {
        self.invoke(input)
    }
}

impl<'a> Transform<&'a u8> for Shift {
    fn invoke(&self, input: &'a u8) -> char {
        char::from(input.wrapping_add(self.delta))
    }
}

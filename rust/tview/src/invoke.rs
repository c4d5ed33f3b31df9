//! Function-object traits used by transform views.
//!
//! Closures and function items implement both traits through the blanket
//! implementations below. Named types (such as [`Identity`]) implement them
//! directly, which also makes them usable where a `Default` function object is
//! required.

/// A function object invoked through a mutable reference.
pub trait TransformMut<In> {
    type Output;

    fn invoke_mut(&mut self, input: In) -> Self::Output;
}

/// A function object invoked through a shared reference.
///
/// This is what shared traversal of a transform view requires; mutable traversal
/// only needs [`TransformMut`].
pub trait Transform<In>: TransformMut<In> {
    fn invoke(&self, input: In) -> Self::Output;
}

/// Output type of `F` applied to `In`.
pub type OutputOf<F, In> = <F as TransformMut<In>>::Output;

impl<In, Out, F> TransformMut<In> for F
where
    F: FnMut(In) -> Out,
{
    type Output = Out;

    #[inline]
    fn invoke_mut(&mut self, input: In) -> Self::Output {
        (*self)(input)
    }
}

impl<In, Out, F> Transform<In> for F
where
    F: Fn(In) -> Out,
{
    #[inline]
    fn invoke(&self, input: In) -> Self::Output {
        (*self)(input)
    }
}

/// Returns its argument unchanged, references included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> TransformMut<T> for Identity {
    type Output = T;

    #[inline]
    fn invoke_mut(&mut self, input: T) -> T {
        input
    }
}

impl<T> Transform<T> for Identity {
    #[inline]
    fn invoke(&self, input: T) -> T {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<F: Transform<u32>>(f: &F, x: u32) -> F::Output {
        f.invoke(x)
    }

    #[test]
    fn test_closures() {
        let scale = 3;
        assert_eq!(apply(&|x: u32| x * scale, 4), 12);

        let mut seen = Vec::new();
        let mut record = |x: u32| {
            seen.push(x);
            x + 1
        };
        assert_eq!(record.invoke_mut(1), 2);
        assert_eq!(record.invoke_mut(5), 6);
        assert_eq!(seen, [1, 5]);
    }

    #[test]
    fn test_identity() {
        let value = String::from("abc");
        let r: &String = Identity.invoke(&value);
        assert!(std::ptr::eq(r, &value));
        assert_eq!(apply(&Identity, 9), 9);
    }
}

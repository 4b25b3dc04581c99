//! Bound-call Wrappers
//!
//! A bound call pairs a receiver borrow with a method reference. Remaining
//! arguments are not fixed at bind time: each bound parameter is a
//! [`Placeholder`] that picks one of the call-time arguments when the wrapper
//! is invoked.
//!
//! ```text
//! bind2(&target, Target::add, Arg1, Arg2)(x, y)  ==  target.add(x, y)
//! bind2(&target, Target::add, Arg2, Arg1)(x, y)  ==  target.add(y, x)
//! ```

use crate::wrap::{Combiner, Getter};

/// Selects which call-time argument feeds a bound parameter.
pub trait Placeholder<X, Y> {
    type Output;
    fn resolve(&self, x: X, y: Y) -> Self::Output;
}

/// First call-time argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arg1;

/// Second call-time argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arg2;

impl<X, Y> Placeholder<X, Y> for Arg1 {
    type Output = X;

    #[inline]
    fn resolve(&self, x: X, _: Y) -> X {
        x
    }
}

impl<X, Y> Placeholder<X, Y> for Arg2 {
    type Output = Y;

    #[inline]
    fn resolve(&self, _: X, y: Y) -> Y {
        y
    }
}

/// A method with no explicit arguments, bound to its receiver.
///
/// The receiver is borrowed, so a bound call cannot outlive it:
///
/// ```compile_fail
/// use callbench::{Target, wrap::bound::bind0};
///
/// let get = {
///     let target = Target::new(1);
///     bind0(&target, Target::value)
/// };
/// get.call();
/// ```
pub struct Bind0<'a, T, O> {
    receiver: &'a T,
    method: fn(&T) -> O,
}

/// Binds `method` to `receiver`.
#[inline]
pub fn bind0<'a, T, O>(receiver: &'a T, method: fn(&T) -> O) -> Bind0<'a, T, O> {
    Bind0 { receiver, method }
}

impl<'a, T, O> Bind0<'a, T, O> {
    #[inline]
    pub fn call(&self) -> O {
        (self.method)(self.receiver)
    }
}

impl<'a, T: 'a> Bind0<'a, T, i32> {
    /// Erases the bound call into a [`Getter`].
    ///
    /// ```compile_fail
    /// use callbench::{Target, wrap::bound::bind0};
    ///
    /// let get = {
    ///     let target = Target::new(1);
    ///     bind0(&target, Target::value).into_getter()
    /// };
    /// get();
    /// ```
    pub fn into_getter(self) -> Getter<'a> {
        Box::new(move || self.call())
    }
}

/// A two-argument method bound to its receiver, with one placeholder per
/// parameter.
pub struct Bind2<'a, T, A, B, O, P, Q> {
    receiver: &'a T,
    method: fn(&T, A, B) -> O,
    first: P,
    second: Q,
}

/// Binds `method` to `receiver`; `first` and `second` choose the call-time
/// arguments passed as the method's first and second parameter.
#[inline]
pub fn bind2<'a, T, A, B, O, P, Q>(
    receiver: &'a T,
    method: fn(&T, A, B) -> O,
    first: P,
    second: Q,
) -> Bind2<'a, T, A, B, O, P, Q> {
    Bind2 {
        receiver,
        method,
        first,
        second,
    }
}

impl<'a, T, A, B, O, P, Q> Bind2<'a, T, A, B, O, P, Q> {
    /// Resolves both placeholders against `(x, y)` and invokes the method.
    #[inline]
    pub fn call<X: Clone, Y: Clone>(&self, x: X, y: Y) -> O
    where
        P: Placeholder<X, Y, Output = A>,
        Q: Placeholder<X, Y, Output = B>,
    {
        let a = self.first.resolve(x.clone(), y.clone());
        let b = self.second.resolve(x, y);
        (self.method)(self.receiver, a, b)
    }
}

impl<'a, T: 'a, P, Q> Bind2<'a, T, i32, i32, i32, P, Q>
where
    P: Placeholder<i32, i32, Output = i32> + 'a,
    Q: Placeholder<i32, i32, Output = i32> + 'a,
{
    /// Erases the bound call into a [`Combiner`].
    ///
    /// ```
    /// use callbench::{Target, wrap::bound::{Arg1, Arg2, bind2}};
    ///
    /// let target = Target::new(1);
    /// let add = bind2(&target, Target::add, Arg1, Arg2).into_combiner();
    /// assert_eq!(add(1, 2), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use callbench::{Target, wrap::bound::{Arg1, Arg2, bind2}};
    ///
    /// let add = {
    ///     let target = Target::new(1);
    ///     bind2(&target, Target::add, Arg1, Arg2).into_combiner()
    /// };
    /// add(1, 2);
    /// ```
    pub fn into_combiner(self) -> Combiner<'a> {
        Box::new(move |x, y| self.call(x, y))
    }
}

#[cfg(test)]
mod bound_test {
    use super::*;
    use crate::target::Target;

    fn sub(_: &Target, x: i32, y: i32) -> i32 {
        x - y
    }

    fn scaled(t: &Target, x: i32, y: i32) -> i32 {
        t.value() * x + y
    }

    fn describe(t: &Target) -> String {
        format!("target({})", t.value())
    }

    #[test]
    fn test_bind0() {
        let target = Target::new(-5);
        let get = bind0(&target, Target::value);
        assert_eq!(get.call(), -5);
        assert_eq!(get.into_getter()(), -5);
    }

    /// Bound calls are not limited to `i32` results
    #[test]
    fn test_bind0_generic_output() {
        let target = Target::new(7);
        assert_eq!(bind0(&target, describe).call(), "target(7)");
    }

    #[test]
    fn test_bind2_in_order() {
        let target = Target::new(1);
        let add = bind2(&target, Target::add, Arg1, Arg2);
        assert_eq!(add.call(1, 2), 3);
        assert_eq!(add.into_combiner()(5, 5), 10);
    }

    /// Placeholders are resolved at call time, so they can reorder arguments
    #[test]
    fn test_bind2_swapped() {
        let target = Target::new(0);
        let forward = bind2(&target, sub, Arg1, Arg2);
        let reversed = bind2(&target, sub, Arg2, Arg1);
        assert_eq!(forward.call(10, 3), 7);
        assert_eq!(reversed.call(10, 3), -7);
    }

    /// The same placeholder may feed both parameters
    #[test]
    fn test_bind2_repeated() {
        let target = Target::new(0);
        let double = bind2(&target, Target::add, Arg1, Arg1);
        assert_eq!(double.call(4, 100), 8);
        let double = bind2(&target, Target::add, Arg2, Arg2);
        assert_eq!(double.call(100, 4), 8);
    }

    /// The receiver is forwarded, not just the arguments
    #[test]
    fn test_bind2_reads_receiver() {
        let target = Target::new(3);
        let f = bind2(&target, scaled, Arg1, Arg2);
        assert_eq!(f.call(2, 1), 7);
    }
}

//! Closure Wrappers
//!
//! Each wrapper is a `move` closure holding `&'a Target` and forwarding its
//! parameters by name.

use crate::{
    target::Target,
    wrap::{Combiner, Getter},
};

/// Wraps [`Target::value`].
///
/// ```
/// use callbench::{Target, wrap::closure};
///
/// let target = Target::new(1);
/// assert_eq!(closure::getter(&target)(), 1);
/// ```
///
/// The getter borrows its target, so it cannot be called once the target is
/// dropped:
///
/// ```compile_fail
/// use callbench::{Target, wrap::closure};
///
/// let get = {
///     let target = Target::new(1);
///     closure::getter(&target)
/// };
/// get();
/// ```
pub fn getter<'a>(target: &'a Target) -> Getter<'a> {
    Box::new(move || target.value())
}

/// Wraps [`Target::add`].
///
/// ```compile_fail
/// use callbench::{Target, wrap::closure};
///
/// let add = {
///     let target = Target::new(1);
///     closure::combiner(&target)
/// };
/// add(5, 5);
/// ```
pub fn combiner<'a>(target: &'a Target) -> Combiner<'a> {
    Box::new(move |x, y| target.add(x, y))
}

//! Type-erased Callable Wrappers
//!
//! Both construction strategies end up behind the same contract: a boxed
//! `Fn` borrowing its [`Target`] for `'a`. The borrow is what keeps a wrapper
//! from being invoked after its target is gone; the compiler rejects any
//! wrapper that escapes the target's scope.
//!
//! ## Strategies
//!
//! - [`bound`] — explicit partial application with call-time placeholders
//! - [`closure`] — closures capturing the receiver by reference

pub mod bound;
pub mod closure;

use std::fmt;

use crate::target::Target;
use bound::{Arg1, Arg2, bind0, bind2};

/// Zero-argument wrapper over [`Target::value`].
pub type Getter<'a> = Box<dyn Fn() -> i32 + 'a>;

/// Two-argument wrapper over [`Target::add`].
pub type Combiner<'a> = Box<dyn Fn(i32, i32) -> i32 + 'a>;

/// How a wrapper is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Strategy {
    /// Partial application of a method reference on a receiver
    Bind,
    /// Closure capturing the receiver by reference
    Closure,
}

impl Strategy {
    /// Every strategy, in report order.
    pub const ALL: [Strategy; 2] = [Strategy::Bind, Strategy::Closure];

    /// Label printed above the strategy's timing block.
    pub const fn label(self) -> &'static str {
        match self {
            Strategy::Bind => "bind",
            Strategy::Closure => "closure",
        }
    }

    pub fn getter<'a>(self, target: &'a Target) -> Getter<'a> {
        match self {
            Strategy::Bind => bind0(target, Target::value).into_getter(),
            Strategy::Closure => closure::getter(target),
        }
    }

    pub fn combiner<'a>(self, target: &'a Target) -> Combiner<'a> {
        match self {
            Strategy::Bind => bind2(target, Target::add, Arg1, Arg2).into_combiner(),
            Strategy::Closure => closure::combiner(target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

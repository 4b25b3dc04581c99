//! Harness settings and their compiled-in defaults.

use std::num::NonZeroU64;

use crate::{error::Error, wrap::Strategy};

/// Invocations per strategy in the timing loop.
pub const ITERATIONS: u64 = 1_000_000;
/// Value every demonstration and timing target is built with.
pub const TARGET_VALUE: i32 = 1;
/// Arguments passed to the bound-call combiner in the demonstration.
pub const BIND_ARGS: (i32, i32) = (1, 2);
/// Arguments passed to the closure combiner in the demonstration.
pub const CLOSURE_ARGS: (i32, i32) = (5, 5);

/// Harness settings. [`Config::default`] holds the compiled-in constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub iterations: u64,
    pub value: i32,
    pub bind_args: (i32, i32),
    pub closure_args: (i32, i32),
    /// Strategies to time, in report order
    pub strategies: Vec<Strategy>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            value: TARGET_VALUE,
            bind_args: BIND_ARGS,
            closure_args: CLOSURE_ARGS,
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Checks the settings and returns the iteration count as a non-zero value.
    pub fn validate(&self) -> Result<NonZeroU64, Error> {
        NonZeroU64::new(self.iterations).ok_or(Error::ZeroIterations)
    }
}

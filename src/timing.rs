//! Timing Loop
//!
//! Invokes a strategy's [`Getter`](crate::wrap::Getter) a fixed number of
//! times between two [`Instant`] readings.
//!
//! Every result goes through [`black_box`] and is folded into a checksum, so
//! the optimizer cannot drop the calls being measured.

use std::{
    hint::black_box,
    num::NonZeroU64,
    time::{Duration, Instant},
};

use tracing::{debug, info};

use crate::{target::Target, wrap::Strategy};

/// Outcome of timing one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub strategy: Strategy,
    /// Elapsed wall time across all invocations
    pub total_ns: u128,
    pub iterations: NonZeroU64,
    /// Wrapping sum of every returned value
    pub checksum: i64,
}

impl Sample {
    /// Mean duration of a single invocation.
    pub fn mean_ns(&self) -> f64 {
        self.total_ns as f64 / self.iterations.get() as f64
    }
}

/// Times `iterations` calls of `strategy`'s getter over a target holding `value`.
pub fn measure(strategy: Strategy, value: i32, iterations: NonZeroU64) -> Sample {
    let target = Target::new(value);
    let get = strategy.getter(&target);

    let (elapsed, checksum) = time(&get, iterations);
    let sample = Sample {
        strategy,
        total_ns: elapsed.as_nanos(),
        iterations,
        checksum,
    };

    debug!(%strategy, checksum, "timing loop finished");
    info!(
        %strategy,
        iterations = iterations.get(),
        total_ns = saturating_ns(sample.total_ns),
        mean_ns = sample.mean_ns(),
        "measured"
    );
    sample
}

/// Narrows a nanosecond count for logging, saturating at `u64::MAX`.
fn saturating_ns(ns: u128) -> u64 {
    u64::try_from(ns).unwrap_or(u64::MAX)
}

/// Calls `f` `iterations` times, returning the elapsed time and the wrapping
/// sum of the results.
pub fn time<F: Fn() -> i32>(f: F, iterations: NonZeroU64) -> (Duration, i64) {
    let f = black_box(f);
    let mut checksum = 0i64;

    let start = Instant::now();
    for _ in 0..iterations.get() {
        checksum = checksum.wrapping_add(i64::from(black_box(f())));
    }
    let elapsed = start.elapsed();

    (elapsed, black_box(checksum))
}

//! Wrapper Construction Benchmarks
//!
//! Measures building (and dropping) a boxed wrapper over a target, without
//! invoking it.
//!
//! ## What is measured
//!
//! - Boxing the bound value or the closure
//! - For `bind`, storing the method pointer and placeholders

use crate::black_box;

per_strategy!(construct_getter, |b, strategy, target| {
    b.iter(|| black_box(strategy.getter(black_box(&target))));
});

per_strategy!(construct_combiner, |b, strategy, target| {
    b.iter(|| black_box(strategy.combiner(black_box(&target))));
});

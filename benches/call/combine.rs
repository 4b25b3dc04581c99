//! Combiner Invocation Benchmarks
//!
//! Two-argument calls, where the bound-call path resolves placeholders on
//! every invocation.

use callbench::wrap::bound::{Arg1, Arg2, bind2};

use crate::{Criterion, Target, VALUE, black_box};

per_strategy!(combine_erased, |b, strategy, target| {
    let add = strategy.combiner(&target);
    b.iter(|| black_box(add(black_box(1), black_box(2))));
});

/// In-order vs swapped placeholders on an unerased bound call.
pub fn bench_combine_placeholders(c: &mut Criterion) {
    let target = Target::new(VALUE);
    let mut group = c.benchmark_group("combine_placeholders");

    let forward = bind2(&target, Target::add, Arg1, Arg2);
    group.bench_function("in_order", |b| {
        b.iter(|| black_box(forward.call(black_box(1), black_box(2))))
    });

    let swapped = bind2(&target, Target::add, Arg2, Arg1);
    group.bench_function("swapped", |b| {
        b.iter(|| black_box(swapped.call(black_box(1), black_box(2))))
    });

    group.finish();
}

//! # Getter Invocation — the timing loop's workload
//!
//! **Scenario**: a wrapper is built once and called many times, the pattern
//! the harness's own timing loop measures.
//!
//! ## Variants
//!
//! | Benchmark | What it measures |
//! |-----------|------------------|
//! | `invoke_erased/*` | Call through `Box<dyn Fn() -> i32>` |
//! | `invoke_static/direct` | Plain method call, no wrapper |
//! | `invoke_static/bind` | `Bind0::call` without erasure |
//! | `invoke_static/closure` | Unboxed closure |

use callbench::wrap::bound::bind0;

use crate::{Criterion, Target, VALUE, black_box};

per_strategy!(invoke_erased, |b, strategy, target| {
    let get = strategy.getter(&target);
    b.iter(|| black_box(get()));
});

pub fn bench_invoke_static(c: &mut Criterion) {
    let target = Target::new(VALUE);
    let mut group = c.benchmark_group("invoke_static");

    group.bench_function("direct", |b| {
        b.iter(|| black_box(black_box(&target).value()))
    });

    let bound = bind0(&target, Target::value);
    group.bench_function("bind", |b| b.iter(|| black_box(bound.call())));

    let closure = || target.value();
    group.bench_function("closure", |b| b.iter(|| black_box(closure())));

    group.finish();
}

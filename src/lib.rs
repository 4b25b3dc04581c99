//! Bound-call vs closure micro-benchmark
//!
//! Compares two ways of turning a method on a receiver into a free-standing
//! callable:
//!
//! - [`wrap::bound`] — explicit partial application (`bind0` / `bind2`) with
//!   call-time placeholders
//! - [`wrap::closure`] — closures capturing the receiver by reference
//!
//! Both produce the same type-erased [`Getter`] / [`Combiner`] contract. The
//! [`demo`] module prints what each style returns, [`timing`] measures
//! repeated invocation and [`report`] renders the results.

pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod target;
pub mod timing;
pub mod wrap;

pub use config::Config;
pub use error::Error;
pub use target::Target;
pub use timing::Sample;
pub use wrap::{Combiner, Getter, Strategy};

use std::io::Write;

/// Runs the demonstration sequence followed by the timing loop, writing the
/// report to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Vec<Sample>, Error> {
    let iterations = config.validate()?;

    report::greeting(out)?;

    let outcome = demo::run(config)?;
    report::demo(out, &outcome)?;

    let mut samples = Vec::with_capacity(config.strategies.len());
    for &strategy in &config.strategies {
        let sample = timing::measure(strategy, config.value, iterations);
        report::sample(out, &sample)?;
        samples.push(sample);
    }
    out.flush()?;
    Ok(samples)
}

//! Line-oriented report written to stdout.
//!
//! ```text
//! Hello, bind vs closure!
//! 1                 bind getter
//! 3                 bind combiner
//! 1                 closure getter
//! 10                closure combiner
//! bind
//! total:<n>ns
//! mean:<x>ns
//! closure
//! total:<n>ns
//! mean:<x>ns
//! ```

use std::io::{self, Write};

use crate::{demo::Outcome, timing::Sample};

pub const GREETING: &str = "Hello, bind vs closure!";

pub fn greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{GREETING}")
}

pub fn demo<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{}", outcome.bind_value)?;
    writeln!(out, "{}", outcome.bind_sum)?;
    writeln!(out, "{}", outcome.closure_value)?;
    writeln!(out, "{}", outcome.closure_sum)
}

pub fn sample<W: Write>(out: &mut W, sample: &Sample) -> io::Result<()> {
    writeln!(out, "{}", sample.strategy)?;
    writeln!(out, "total:{}ns", sample.total_ns)?;
    writeln!(out, "mean:{}ns", sample.mean_ns())
}

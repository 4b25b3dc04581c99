//! Demonstration Sequence
//!
//! Invokes each wrapper once and records what it returned:
//!
//! 1. bound-call getter
//! 2. bound-call combiner with [`Config::bind_args`]
//! 3. closure getter and closure combiner with [`Config::closure_args`]
//!
//! Every block builds its own [`Target`], dropped when the block ends. Once the
//! four results are in, [`verify`] evaluates both strategies on identical
//! inputs and fails on any disagreement.

use tracing::debug;

use crate::{config::Config, error::Error, target::Target, wrap::Strategy};

/// Results of the four demonstration calls, in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub bind_value: i32,
    pub bind_sum: i32,
    pub closure_value: i32,
    pub closure_sum: i32,
}

pub fn run(config: &Config) -> Result<Outcome, Error> {
    let bind_value = {
        let target = Target::new(config.value);
        let get = Strategy::Bind.getter(&target);
        get()
    };
    debug!(value = config.value, result = bind_value, "bind getter");

    let bind_sum = {
        let target = Target::new(config.value);
        let add = Strategy::Bind.combiner(&target);
        let (x, y) = config.bind_args;
        add(x, y)
    };
    debug!(args = ?config.bind_args, result = bind_sum, "bind combiner");

    let (closure_value, closure_sum) = {
        let target = Target::new(config.value);
        let get = Strategy::Closure.getter(&target);
        let add = Strategy::Closure.combiner(&target);
        let (x, y) = config.closure_args;
        (get(), add(x, y))
    };
    debug!(
        value = config.value,
        result = closure_value,
        args = ?config.closure_args,
        sum = closure_sum,
        "closure getter and combiner"
    );

    verify(config)?;

    Ok(Outcome {
        bind_value,
        bind_sum,
        closure_value,
        closure_sum,
    })
}

/// Evaluates both strategies on the same target and on both argument pairs.
pub fn verify(config: &Config) -> Result<(), Error> {
    let target = Target::new(config.value);
    let bind_get = Strategy::Bind.getter(&target);
    let closure_get = Strategy::Closure.getter(&target);
    check("value", bind_get(), closure_get())?;

    let bind_add = Strategy::Bind.combiner(&target);
    let closure_add = Strategy::Closure.combiner(&target);
    for (x, y) in [config.bind_args, config.closure_args] {
        check("add", bind_add(x, y), closure_add(x, y))?;
    }
    Ok(())
}

fn check(operation: &'static str, bind: i32, closure: i32) -> Result<(), Error> {
    if bind == closure {
        Ok(())
    } else {
        Err(Error::Mismatch {
            operation,
            bind,
            closure,
        })
    }
}

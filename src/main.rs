//! callbench CLI
//!
//! Prints what a bound call and a closure return for the same target, then
//! times repeated invocation of each.
//!
//! Usage:
//!   callbench
//!   callbench --iterations 10000000
//!   callbench --strategy closure -vv

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use callbench::{Config, Strategy, config};

#[derive(Parser)]
#[command(name = "callbench")]
#[command(about = "Bound-call vs closure micro-benchmark")]
struct Cli {
    /// Invocations per strategy in the timing loop
    #[arg(short = 'n', long, env = "CALLBENCH_ITERATIONS", default_value_t = config::ITERATIONS)]
    iterations: u64,

    /// Value the targets are built with
    #[arg(long, default_value_t = config::TARGET_VALUE, allow_negative_numbers = true)]
    value: i32,

    /// Arguments for the bound-call combiner
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        default_values_t = [config::BIND_ARGS.0, config::BIND_ARGS.1],
        allow_negative_numbers = true
    )]
    bind_args: Vec<i32>,

    /// Arguments for the closure combiner
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        default_values_t = [config::CLOSURE_ARGS.0, config::CLOSURE_ARGS.1],
        allow_negative_numbers = true
    )]
    closure_args: Vec<i32>,

    /// Time only this strategy (default: all)
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace). Default is warn.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            iterations: cli.iterations,
            value: cli.value,
            bind_args: pair(&cli.bind_args, config::BIND_ARGS),
            closure_args: pair(&cli.closure_args, config::CLOSURE_ARGS),
            strategies: match cli.strategy {
                Some(strategy) => vec![strategy],
                None => Strategy::ALL.to_vec(),
            },
        }
    }
}

/// Turns a combiner argument list into a pair.
///
/// `num_args = 2` makes clap reject any other count, so `default` is only
/// reached if that attribute changes.
fn pair(values: &[i32], default: (i32, i32)) -> (i32, i32) {
    <[i32; 2]>::try_from(values)
        .map(|[x, y]| (x, y))
        .unwrap_or(default)
}

/// Initialize tracing with the given verbosity level
///
/// - 0: warn (default)
/// - 1: info (-v)
/// - 2: debug (-vv)
/// - 3+: trace (-vvv)
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // RUST_LOG wins when set
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from(cli);
    tracing::debug!(?config, "starting");

    let stdout = std::io::stdout();
    callbench::run(&config, &mut stdout.lock())?;
    Ok(())
}

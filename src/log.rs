//! Logging backend for the binaries. Everything is written to stderr since stdout is
//! reserved for the solution.

use std::io::Write;

use ::log::LevelFilter;
use env_logger::{Builder, Target};

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Raises `base` by `verbosity` steps (saturating at [`LevelFilter::Trace`])
pub fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let base_idx = LEVELS.iter().position(|&l| l == base).unwrap_or(0);
    LEVELS[(base_idx + verbosity).min(LEVELS.len() - 1)]
}

/// Installs the global logger with the given maximum level. Subsequent calls are ignored.
pub fn build_logger_for_level(level: LevelFilter) {
    elapsed_seconds();

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{:<5} [{:>8.3}s] {}",
                record.level(),
                elapsed_seconds(),
                record.args()
            )
        });

    // a logger may already be installed, e.g. by a test harness
    let _ = builder.try_init();
}

/// Installs the global logger at `base` raised by `verbosity` steps, e.g. the number of `-v`
/// flags given on the command line.
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

/// Seconds since the logger was installed
fn elapsed_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

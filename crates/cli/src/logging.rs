//! Stderr backend for the `log` facade used by the library crates.
//!
//! Level comes from `-v`/`-q`, or from `NBRCHECK_LOG` (`error`, `warn`,
//! `info`, `debug`, `trace`, `off`) when set.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level().as_str().to_ascii_lowercase(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level for a `-v` count, `-q` flag and optional env override.
pub fn level_for(verbose: u8, quiet: bool, env: Option<&str>) -> LevelFilter {
    if let Some(level) = env.and_then(|s| s.parse::<LevelFilter>().ok()) {
        return level;
    }
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbose: u8, quiet: bool) {
    let env = std::env::var("NBRCHECK_LOG").ok();
    let level = level_for(verbose, quiet, env.as_deref());
    // A second init (tests) keeps the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0, false, None), LevelFilter::Warn);
        assert_eq!(level_for(1, false, None), LevelFilter::Info);
        assert_eq!(level_for(2, false, None), LevelFilter::Debug);
        assert_eq!(level_for(5, false, None), LevelFilter::Trace);
        assert_eq!(level_for(2, true, None), LevelFilter::Error);
    }

    #[test]
    fn env_overrides_flags() {
        assert_eq!(level_for(0, true, Some("debug")), LevelFilter::Debug);
        assert_eq!(level_for(0, false, Some("off")), LevelFilter::Off);
        assert_eq!(level_for(1, false, Some("nonsense")), LevelFilter::Info);
    }
}

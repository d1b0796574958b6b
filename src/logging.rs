#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stderr logger. An explicit `level` wins; otherwise the
/// `SALVO_LOG` environment variable is consulted, falling back to `info`.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = resolve_level(level, env::var("SALVO_LOG").ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn resolve_level(flag: Option<LevelFilter>, env_value: Option<&str>) -> LevelFilter {
    flag.or_else(|| env_value.and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_is_used_when_no_flag_is_given() {
        assert_eq!(resolve_level(None, Some("debug")), LevelFilter::Debug);
        assert_eq!(resolve_level(None, Some("warn")), LevelFilter::Warn);
    }

    #[test]
    fn flag_beats_environment_and_info_is_the_fallback() {
        assert_eq!(resolve_level(Some(LevelFilter::Info), Some("debug")), LevelFilter::Info);
        assert_eq!(resolve_level(None, None), LevelFilter::Info);
        assert_eq!(resolve_level(None, Some("chatty")), LevelFilter::Info);
    }
}

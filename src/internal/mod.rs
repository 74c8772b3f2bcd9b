//! flog's own diagnostic channel: sink failures, downgrades, and sweep or
//! rotation problems are reported here instead of being raised to the host.
//!
//! Uses `OnceLock` so the threshold is fixed exactly once, even if several
//! entry points (CLI, library callers, tests) race to call `init`.

use crate::config::Config;
use crate::level::Level;
use std::io::Write;
use std::sync::OnceLock;

/// Overrides `general.internal_level` without touching the config file.
pub const LEVEL_ENV: &str = "FLOG_INTERNAL_LEVEL";

static THRESHOLD: OnceLock<Level> = OnceLock::new();

/// Fallback initializer: reads the threshold from the environment only.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are no-ops.
pub fn init() {
    THRESHOLD.get_or_init(|| env_threshold().unwrap_or(Level::Warning));
}

/// Preferred initializer: the environment still wins over the config value.
pub fn init_with_config(config: &Config) {
    let was_init = THRESHOLD.get().is_some();
    THRESHOLD.get_or_init(|| {
        env_threshold().unwrap_or_else(|| {
            config
                .general
                .internal_level
                .parse()
                .unwrap_or(Level::Warning)
        })
    });
    if !was_init {
        debug(
            "INTERNAL",
            &format!("Diagnostic level: {}", threshold().as_str()),
        );
    }
}

fn env_threshold() -> Option<Level> {
    std::env::var(LEVEL_ENV).ok()?.parse().ok()
}

fn threshold() -> Level {
    THRESHOLD.get().copied().unwrap_or(Level::Warning)
}

/// Never panics: a closed or broken stderr simply drops the diagnostic.
fn log(level: Level, scope: &str, msg: &str) {
    if level < threshold() {
        return;
    }
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "flog: {:<9} {scope:<8} {msg}", level.tag());
}

/// Startup milestones, resolved paths, flush counts.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones: directory created, file rotated.
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: sink downgraded, one file of a sweep failed.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warning, scope, msg);
}

/// A sink could not deliver an entry.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}

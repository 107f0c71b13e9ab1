//! Process-wide debug flag.
//!
//! The one piece of state whose lifetime outlives any single
//! [`Config`](crate::Config): seeded at process start, may be flipped at any
//! point during a run, and read by the logging layer tool-wide. Relaxed
//! ordering is sufficient: the flag only gates log output, and a stale read
//! for one line is acceptable.

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable consulted by [`init_from_env`].
pub const DEBUG_ENV_VAR: &str = "MODERNIZER_DEBUG";

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Turns debug logging on or off for the whole process.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether debug logging is currently enabled.
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Seeds the flag from `MODERNIZER_DEBUG` at process start.
///
/// Accepts `true` or `false` in any case; any other value leaves the flag
/// untouched.
pub fn init_from_env() {
    match std::env::var(DEBUG_ENV_VAR) {
        Ok(value) if value.eq_ignore_ascii_case("true") => set_debug(true),
        Ok(value) if value.eq_ignore_ascii_case("false") => set_debug(false),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Plugin};

    // Single test: the flag is process-global, so every assertion that
    // touches it lives here to keep the suite order-independent.
    #[test]
    fn test_debug_flag_toggles_and_reaches_config() {
        assert!(!debug_enabled());

        set_debug(true);
        assert!(debug_enabled());

        let config = Config::builder()
            .version("2.0")
            .unwrap()
            .plugins(vec![Plugin::new("git-client")])
            .unwrap()
            .build()
            .unwrap();
        assert!(config.is_debug());

        set_debug(false);
        assert!(!debug_enabled());
        assert!(!config.is_debug());

        std::env::set_var(DEBUG_ENV_VAR, "TRUE");
        init_from_env();
        assert!(debug_enabled());

        std::env::set_var(DEBUG_ENV_VAR, "not-a-bool");
        init_from_env();
        assert!(debug_enabled());

        std::env::set_var(DEBUG_ENV_VAR, "false");
        init_from_env();
        assert!(!debug_enabled());

        std::env::remove_var(DEBUG_ENV_VAR);
    }
}

//! Diagnostic macros gated by a verbosity level.
//!
//! Everything goes to stderr so stdout only ever carries the report.
//! - 0: SILENT (only errors)
//! - 1: CHANGES (one line per job placed)
//! - 2: CHECKS (where each slice landed and why)
//! - 3: DEBUG (timeline growth, re-anchoring of pending slices)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at CHANGES level (verbosity >= 1).
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHANGES {
            eprintln!($($arg)*);
        }
    };
}

/// Log at CHECKS level (verbosity >= 2).
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_CHECKS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

/// Clamps a `-v` occurrence count to the highest known level.
pub fn verbosity_from_count(count: u8) -> u8 {
    count.min(VERBOSITY_DEBUG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_count() {
        assert_eq!(verbosity_from_count(0), VERBOSITY_SILENT);
        assert_eq!(verbosity_from_count(2), VERBOSITY_CHECKS);
        assert_eq!(verbosity_from_count(9), VERBOSITY_DEBUG);
    }

    #[test]
    fn test_log_macros_compile() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "job {}", 1);
        log_checks!(verbosity, "slice {}", 2);
        log_debug!(verbosity, "grow {}", 3);
    }
}

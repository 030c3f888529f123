//! Structured debug events emitted while synthesizing row comparators.

/// Single logging target for the crate.
pub(crate) const LOG_TARGET: &str = "tonbo_order";

/// Logs a synthesis event as `event=<name> component=row_comparator k=v ...`.
///
/// Only synthesis logs; the comparison hot path never does.
macro_rules! synth_log {
    ($event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, log::Level::Debug) {
            log::debug!(
                target: crate::logging::LOG_TARGET,
                "event={} component=row_comparator {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use synth_log;
